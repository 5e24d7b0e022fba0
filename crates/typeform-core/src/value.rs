//! Runtime value representation for candidates and bounds.
//!
//! [`Value`] is the dynamic representation of everything the toolkit
//! touches: the candidate under test, the bounds inside a [`Limit`],
//! and the fields of a formed composite. [`TypeTag`] is its cheap
//! nominal identity, used to key the comparator registry.
//!
//! [`Limit`]: crate::limit::Limit

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nominal identity of a [`Value`], providing O(1) type comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Text,
}

impl TypeTag {
    /// Returns a human-readable name for the tag.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Bool => "boolean",
            TypeTag::Int => "integer",
            TypeTag::Float => "float",
            TypeTag::Text => "text",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic runtime value.
///
/// Candidates and bounds are untyped from the checker's perspective
/// beyond what [`Value::type_tag`] exposes; all comparator resolution
/// goes through the registry keyed by that tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns the [`TypeTag`] of this value based on its variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Text(_) => TypeTag::Text,
        }
    }

    /// Returns a human-readable description of the value's type.
    pub fn type_name(&self) -> &'static str {
        self.type_tag().name()
    }

    /// Returns `true` if `other` has the same runtime type as `self`.
    pub fn same_type(&self, other: &Value) -> bool {
        self.type_tag() == other.type_tag()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_match_variants() {
        assert_eq!(Value::Bool(true).type_tag(), TypeTag::Bool);
        assert_eq!(Value::Int(1).type_tag(), TypeTag::Int);
        assert_eq!(Value::Float(1.5).type_tag(), TypeTag::Float);
        assert_eq!(Value::from("hi").type_tag(), TypeTag::Text);
    }

    #[test]
    fn same_type_compares_tags_not_values() {
        assert!(Value::Int(1).same_type(&Value::Int(99)));
        assert!(!Value::Int(1).same_type(&Value::Float(1.0)));
        assert!(!Value::Bool(true).same_type(&Value::from("true")));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::Int(0).type_name(), "integer");
        assert_eq!(Value::Float(0.0).type_name(), "float");
        assert_eq!(Value::from("").type_name(), "text");
    }

    #[test]
    fn display_is_bare() {
        assert_eq!(format!("{}", Value::Int(42)), "42");
        assert_eq!(format!("{}", Value::from("abc")), "abc");
        assert_eq!(format!("{}", Value::Bool(true)), "true");
    }

    #[test]
    fn serde_roundtrip_untagged() {
        let vals = vec![
            Value::Bool(true),
            Value::Int(-7),
            Value::Float(2.25),
            Value::from("text"),
        ];
        let json = serde_json::to_string(&vals).unwrap();
        assert_eq!(json, r#"[true,-7,2.25,"text"]"#);
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vals);
    }
}
