//! Memo Gateway - A transparent memoizing layer for deterministic operations
//!
//! Serves repeated calls from an in-memory map or from durable file records.

pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod service;

pub use config::Config;
pub use error::CacheError;
pub use gateway::CacheGateway;
pub use models::{CachePolicy, CacheTier, OperationDescriptor, OperationRegistry};
