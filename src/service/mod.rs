//! Service Module
//!
//! The demo operation set and its caching decorator.

mod cached;
mod data_service;

pub use cached::CachedDataService;
pub use data_service::{
    data_service_registry, DataService, DataServiceImpl, Result, ServiceError, CALCULATE_SUM,
    FACTORIAL,
};
