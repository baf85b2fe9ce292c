//! Operation descriptors and the registry that maps names to them
//!
//! The registry is built once, when the operation set is declared, and the
//! gateway consults it on every call.

use std::collections::HashMap;

use crate::cache::ParamType;
use crate::error::{CacheError, Result};
use crate::models::CachePolicy;

/// Declaration of one cacheable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    name: String,
    params: Vec<ParamType>,
    policy: Option<CachePolicy>,
}

impl OperationDescriptor {
    /// Declares an operation without parameters or policy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            policy: None,
        }
    }

    /// Appends a parameter declared as `T`.
    pub fn param<T: ?Sized>(self) -> Self {
        self.param_type(ParamType::of::<T>())
    }

    pub fn param_type(mut self, param: ParamType) -> Self {
        self.params.push(param);
        self
    }

    /// Attaches a cache policy; operations without one pass through uncached.
    pub fn cached(mut self, policy: CachePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn policy(&self) -> Option<&CachePolicy> {
        self.policy.as_ref()
    }

    /// Checks that a call supplies one argument per declared parameter.
    pub fn check_arity(&self, actual: usize) -> Result<()> {
        if actual == self.params.len() {
            Ok(())
        } else {
            Err(CacheError::ArityMismatch {
                operation: self.name.clone(),
                expected: self.params.len(),
                actual,
            })
        }
    }
}

/// Maps operation names to their descriptors.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, OperationDescriptor>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of declarations.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = OperationDescriptor>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Adds a declaration. Names must be unique within a registry.
    pub fn register(&mut self, descriptor: OperationDescriptor) -> Result<()> {
        if self.operations.contains_key(descriptor.name()) {
            return Err(CacheError::DuplicateOperation(descriptor.name().to_string()));
        }
        self.operations
            .insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Like `get`, but an undeclared name is an error.
    pub fn resolve(&self, name: &str) -> Result<&OperationDescriptor> {
        self.get(name)
            .ok_or_else(|| CacheError::UnknownOperation(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_descriptor() -> OperationDescriptor {
        OperationDescriptor::new("calculate_sum")
            .param::<i32>()
            .param::<i32>()
            .cached(CachePolicy::in_memory())
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = sum_descriptor();
        assert_eq!(descriptor.name(), "calculate_sum");
        assert_eq!(descriptor.params().len(), 2);
        assert!(descriptor.policy().is_some());
    }

    #[test]
    fn test_descriptor_without_policy() {
        let descriptor = OperationDescriptor::new("describe").param::<str>();
        assert!(descriptor.policy().is_none());
    }

    #[test]
    fn test_check_arity() {
        let descriptor = sum_descriptor();
        assert!(descriptor.check_arity(2).is_ok());
        assert!(matches!(
            descriptor.check_arity(1),
            Err(CacheError::ArityMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_registry_resolve() {
        let registry = OperationRegistry::from_descriptors([sum_descriptor()]).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.resolve("calculate_sum").is_ok());
        assert!(matches!(
            registry.resolve("factorial"),
            Err(CacheError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let result = OperationRegistry::from_descriptors([sum_descriptor(), sum_descriptor()]);
        assert!(matches!(result, Err(CacheError::DuplicateOperation(_))));
    }
}
