//! The structured domain value carried by a Resource, independent of
//! wire framing.

use crate::error::{TlvError, TlvResult};
use crate::kind::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scalar value of a declared [`ResourceKind`].
///
/// Mirrors the one-variant-per-wire-kind shape rather than a single
/// generic container, so decode dispatch is exhaustive and a caller
/// can never hold a value whose Rust type disagrees with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    None,
    Bool(bool),
    Int(i32),
    Float(f64),
    Str(String),
    Opaque(Vec<u8>),
}

impl Value {
    /// The [`ResourceKind`] this value declares itself as.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Value::None => ResourceKind::None,
            Value::Bool(_) => ResourceKind::Boolean,
            Value::Int(_) => ResourceKind::Integer,
            Value::Float(_) => ResourceKind::Float,
            Value::Str(_) => ResourceKind::String,
            Value::Opaque(_) => ResourceKind::Opaque,
        }
    }

    pub fn as_bool(&self) -> TlvResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(TlvError::TypeMismatch(format!(
                "expected Boolean, got {:?}",
                self.kind()
            ))),
        }
    }

    pub fn as_int(&self) -> TlvResult<i32> {
        match self {
            Value::Int(i) => Ok(*i),
            _ => Err(TlvError::TypeMismatch(format!(
                "expected Integer, got {:?}",
                self.kind()
            ))),
        }
    }

    pub fn as_float(&self) -> TlvResult<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            _ => Err(TlvError::TypeMismatch(format!(
                "expected Float, got {:?}",
                self.kind()
            ))),
        }
    }

    pub fn as_str(&self) -> TlvResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            _ => Err(TlvError::TypeMismatch(format!(
                "expected String, got {:?}",
                self.kind()
            ))),
        }
    }

    pub fn as_opaque(&self) -> TlvResult<&[u8]> {
        match self {
            Value::Opaque(b) => Ok(b),
            _ => Err(TlvError::TypeMismatch(format!(
                "expected Opaque, got {:?}",
                self.kind()
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "NONE"),
            Value::Bool(b) => write!(f, "BOOLEAN: {b}"),
            Value::Int(i) => write!(f, "INTEGER: {i}"),
            Value::Float(v) => write!(f, "FLOAT: {v}"),
            Value::Str(s) => write!(f, "STRING: {s}"),
            Value::Opaque(bytes) => {
                write!(f, "OPAQUE: ")?;
                for byte in bytes {
                    write!(f, "{byte:02X} ")?;
                }
                Ok(())
            }
        }
    }
}

/// A Resource's value shape: a single scalar, or an ordered sequence of
/// same-kind resource-instance values.
///
/// A list is always multi-instance regardless of element count; a
/// scalar is always single-instance. Modelled as a sum type rather than
/// overloading a generic container, per the design note that this
/// removes the run-time-inspection ambiguity the original source had.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceValue {
    Single(Value),
    Instances(Vec<Value>),
}

impl ResourceValue {
    /// The kind every element of this resource value shares.
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceValue::Single(v) => v.kind(),
            ResourceValue::Instances(values) => values
                .first()
                .map(Value::kind)
                .unwrap_or(ResourceKind::None),
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceValue::Single(v) => write!(f, "{v}"),
            ResourceValue::Instances(values) => {
                write!(f, "INSTANCES: {} element(s)", values.len())?;
                for (i, v) in values.iter().enumerate() {
                    write!(f, "\n  [{i}]: {v}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kind_matches_its_variant() {
        assert_eq!(Value::None.kind(), ResourceKind::None);
        assert_eq!(Value::Bool(true).kind(), ResourceKind::Boolean);
        assert_eq!(Value::Int(5).kind(), ResourceKind::Integer);
        assert_eq!(Value::Float(1.0).kind(), ResourceKind::Float);
        assert_eq!(Value::Str("x".into()).kind(), ResourceKind::String);
        assert_eq!(Value::Opaque(vec![1]).kind(), ResourceKind::Opaque);
    }

    #[test]
    fn as_accessor_rejects_mismatched_kind() {
        assert!(Value::Int(1).as_bool().is_err());
        assert_eq!(Value::Bool(true).as_bool().unwrap(), true);
    }

    #[test]
    fn resource_value_kind_of_instances_is_first_elements_kind() {
        let rv = ResourceValue::Instances(vec![Value::Bool(true), Value::Bool(false)]);
        assert_eq!(rv.kind(), ResourceKind::Boolean);
    }
}
