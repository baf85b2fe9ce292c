//! Demo operation set
//!
//! Two deterministic arithmetic operations used to exercise the gateway,
//! along with the declarations that tell the gateway how to cache them.

use thiserror::Error;

use crate::error::CacheError;
use crate::models::{CachePolicy, OperationDescriptor, OperationRegistry};

pub const CALCULATE_SUM: &str = "calculate_sum";
pub const FACTORIAL: &str = "factorial";

/// Errors surfaced by `DataService` calls.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Argument outside the operation's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result does not fit the return type
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Failure inside the cache layer
    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// The operation set wrapped by the gateway.
pub trait DataService {
    fn calculate_sum(&mut self, a: i32, b: i32) -> Result<i32>;

    fn factorial(&mut self, number: i32) -> Result<i32>;
}

/// Plain, uncached implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataServiceImpl;

impl DataService for DataServiceImpl {
    fn calculate_sum(&mut self, a: i32, b: i32) -> Result<i32> {
        a.checked_add(b).ok_or(ServiceError::Overflow(CALCULATE_SUM))
    }

    fn factorial(&mut self, number: i32) -> Result<i32> {
        if number < 0 {
            return Err(ServiceError::InvalidArgument(format!(
                "factorial of a negative number ({number}) is undefined"
            )));
        }
        (2..=number).try_fold(1i32, |acc, i| {
            acc.checked_mul(i).ok_or(ServiceError::Overflow(FACTORIAL))
        })
    }
}

/// Declarations for the `DataService` operations.
///
/// `calculate_sum` is memoized in memory; `factorial` is persisted to file
/// records with a ZIP copy of each.
pub fn data_service_registry() -> std::result::Result<OperationRegistry, CacheError> {
    OperationRegistry::from_descriptors([
        OperationDescriptor::new(CALCULATE_SUM)
            .param::<i32>()
            .param::<i32>()
            .cached(CachePolicy::in_memory()),
        OperationDescriptor::new(FACTORIAL)
            .param::<i32>()
            .cached(CachePolicy::file().archived()),
    ])
}
