//! Type-name registry: from a name to a text-coercion function.
//!
//! The registry maps user-facing type names to callables that coerce a
//! line of text into a [`Value`]. The built-in names cover the core
//! runtime types (with common aliases) and callers can register their
//! own, mirroring how comparators are registered per type.

use std::sync::Arc;

use indexmap::IndexMap;

use typeform_core::Value;

use crate::error::{AskError, CoerceError};

/// A coercion from one line of input text to a [`Value`].
pub type CoerceFn = Arc<dyn Fn(&str) -> Result<Value, CoerceError> + Send + Sync>;

/// Registry of named coercions, pre-populated with the built-in types.
///
/// Built-in names: `boolean`/`bool`, `integer`/`int`, `float`,
/// `text`/`string`.
#[derive(Clone)]
pub struct TypeNameRegistry {
    table: IndexMap<String, CoerceFn>,
}

impl TypeNameRegistry {
    /// Creates a registry with the built-in coercions pre-registered.
    pub fn new() -> Self {
        let mut registry = TypeNameRegistry {
            table: IndexMap::new(),
        };

        let boolean: CoerceFn = Arc::new(|text| match text.trim() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            other => Err(CoerceError::Value {
                message: format!(
                    "'{}' is not a boolean (expected 'true', 'false', '1', or '0')",
                    other
                ),
            }),
        });

        let integer: CoerceFn = Arc::new(|text| {
            text.trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| CoerceError::Value {
                    message: format!("'{}' is not an integer: {}", text.trim(), e),
                })
        });

        let float: CoerceFn = Arc::new(|text| {
            text.trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| CoerceError::Value {
                    message: format!("'{}' is not a float: {}", text.trim(), e),
                })
        });

        let text_fn: CoerceFn = Arc::new(|text| Ok(Value::Text(text.to_string())));

        for name in ["boolean", "bool"] {
            registry.table.insert(name.to_string(), boolean.clone());
        }
        for name in ["integer", "int"] {
            registry.table.insert(name.to_string(), integer.clone());
        }
        registry.table.insert("float".to_string(), float);
        for name in ["text", "string"] {
            registry.table.insert(name.to_string(), text_fn.clone());
        }

        registry
    }

    /// Registers a caller-supplied coercion under `name`.
    ///
    /// Returns [`AskError::DuplicateTypeName`] if the name is taken.
    pub fn register(&mut self, name: &str, coerce: CoerceFn) -> Result<(), AskError> {
        if self.table.contains_key(name) {
            return Err(AskError::DuplicateTypeName {
                name: name.to_string(),
            });
        }
        self.table.insert(name.to_string(), coerce);
        Ok(())
    }

    /// Looks up a coercion by name.
    pub fn resolve(&self, name: &str) -> Option<&CoerceFn> {
        self.table.get(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }
}

impl Default for TypeNameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
