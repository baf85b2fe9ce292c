//! Gateway Module
//!
//! The interception point between callers and the operations they invoke.
//!
//! # Call flow
//! 1. Resolve the operation's descriptor in the registry
//! 2. Derive the cache key, skipping excluded argument types
//! 3. Consult the memory store, then the file store for file-tier operations
//! 4. On a miss run the real operation and store its result

mod cache_gateway;

pub use cache_gateway::CacheGateway;
