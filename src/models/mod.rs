//! Operation declarations and cache policies
//!
//! This module defines how a wrapped operation set is described to the
//! gateway: one descriptor per operation, each with an optional policy.

pub mod operation;
pub mod policy;

// Re-export commonly used types
pub use operation::{OperationDescriptor, OperationRegistry};
pub use policy::{CachePolicy, CacheTier};
