//! Caching decorator for `DataService`
//!
//! Forwards every call to the wrapped implementation through a `CacheGateway`.

use crate::config::Config;
use crate::error::CacheError;
use crate::gateway::CacheGateway;
use crate::service::{data_service_registry, DataService, Result, CALCULATE_SUM, FACTORIAL};

/// `DataService` whose results are memoized per the declared policies.
#[derive(Debug)]
pub struct CachedDataService<S> {
    inner: S,
    gateway: CacheGateway,
}

impl<S: DataService> CachedDataService<S> {
    /// Wraps `inner` with a caller-supplied gateway.
    pub fn new(inner: S, gateway: CacheGateway) -> Self {
        Self { inner, gateway }
    }

    /// Wraps `inner` with a gateway built from the `DataService` declarations.
    pub fn from_config(inner: S, config: &Config) -> std::result::Result<Self, CacheError> {
        let gateway = CacheGateway::from_config(data_service_registry()?, config);
        Ok(Self::new(inner, gateway))
    }

    pub fn gateway(&self) -> &CacheGateway {
        &self.gateway
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DataService> DataService for CachedDataService<S> {
    fn calculate_sum(&mut self, a: i32, b: i32) -> Result<i32> {
        let inner = &mut self.inner;
        self.gateway
            .call(CALCULATE_SUM, &[&a, &b], || inner.calculate_sum(a, b))
    }

    fn factorial(&mut self, number: i32) -> Result<i32> {
        let inner = &mut self.inner;
        self.gateway
            .call(FACTORIAL, &[&number], || inner.factorial(number))
    }
}
