//! Cache Key Module
//!
//! Derives deterministic cache keys from an operation's identity and arguments.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Write as _};

/// Separator placed between the operation name and each keyed argument.
pub const KEY_SEPARATOR: char = '_';

// == Param Type ==
/// Declared type of one operation parameter.
///
/// Policies exclude arguments from key derivation by this identity, so an
/// argument of an excluded type never influences the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamType(Cow<'static, str>);

impl ParamType {
    /// Identity of a Rust type, as reported by `std::any::type_name`.
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(type_name::<T>()))
    }

    /// Explicitly named parameter type.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Cache Key ==
/// Identifies one (operation, relevant arguments) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key rendered as a file stem.
    ///
    /// Characters outside `[A-Za-z0-9._-]` become `_`, so two keys may share
    /// a stem; file records carry their full key to tell them apart.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

// == Generate Key ==
/// Builds the cache key for a call.
///
/// Starts from `operation` and appends `_<arg>` for every parameter position
/// whose declared type is not in `excluded`, in declaration order.
///
/// # Arguments
/// * `operation` - Operation name
/// * `params` - Declared parameter types, one per argument
/// * `excluded` - Parameter types left out of the key
/// * `args` - Concrete argument values
pub fn generate_key(
    operation: &str,
    params: &[ParamType],
    excluded: &BTreeSet<ParamType>,
    args: &[&dyn Display],
) -> CacheKey {
    let mut key = String::from(operation);

    for (param, arg) in params.iter().zip(args) {
        if excluded.contains(param) {
            continue;
        }
        key.push(KEY_SEPARATOR);
        // Writing into a String cannot fail
        let _ = write!(key, "{arg}");
    }

    CacheKey(key)
}
