//! Comparator registry keyed by runtime type.
//!
//! Comparator lookup is an explicit mapping from `(TypeTag, name)` to a
//! binary relation, never reflection into language internals. The
//! registry pre-registers the built-in relations for every [`TypeTag`]
//! on construction and is caller-extensible via [`ComparatorRegistry::register`].
//!
//! Built-ins per type:
//! - Int, Float, Text (lexicographic): `less-than`, `less-or-equal`,
//!   `greater-than`, `greater-or-equal`, `equal`, `not-equal`
//! - Bool: `equal`, `not-equal`

use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::value::{TypeTag, Value};

/// A named binary relation over same-typed values.
///
/// Comparators are only ever invoked on operands whose tags match the
/// type they were registered under; the checker's compatibility phase
/// guarantees this before evaluation.
pub type Comparator = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Orders two values of the same runtime type, `None` across types.
///
/// Float comparison follows IEEE `PartialOrd` (NaN is unordered, so a
/// NaN operand fails every ordering relation).
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Registry of named comparators per runtime type.
///
/// Identity of a comparator is its name within a type; registering a
/// duplicate name for the same type is an error, mirroring named-type
/// registration.
#[derive(Clone)]
pub struct ComparatorRegistry {
    table: IndexMap<(TypeTag, String), Comparator>,
}

impl ComparatorRegistry {
    /// Creates a registry with the built-in relations pre-registered.
    pub fn new() -> Self {
        let mut registry = ComparatorRegistry {
            table: IndexMap::new(),
        };

        let ordered = [TypeTag::Int, TypeTag::Float, TypeTag::Text];
        for tag in ordered {
            registry.install(tag, "less-than", |a, b| {
                compare_values(a, b) == Some(Ordering::Less)
            });
            registry.install(tag, "less-or-equal", |a, b| {
                matches!(
                    compare_values(a, b),
                    Some(Ordering::Less) | Some(Ordering::Equal)
                )
            });
            registry.install(tag, "greater-than", |a, b| {
                compare_values(a, b) == Some(Ordering::Greater)
            });
            registry.install(tag, "greater-or-equal", |a, b| {
                matches!(
                    compare_values(a, b),
                    Some(Ordering::Greater) | Some(Ordering::Equal)
                )
            });
        }

        // Equality is defined for every type, including Bool.
        for tag in [TypeTag::Bool, TypeTag::Int, TypeTag::Float, TypeTag::Text] {
            registry.install(tag, "equal", |a, b| {
                compare_values(a, b) == Some(Ordering::Equal)
            });
            registry.install(tag, "not-equal", |a, b| {
                matches!(
                    compare_values(a, b),
                    Some(Ordering::Less) | Some(Ordering::Greater)
                )
            });
        }

        registry
    }

    /// Built-in registration path, bypasses the duplicate check.
    fn install(&mut self, tag: TypeTag, name: &str, f: fn(&Value, &Value) -> bool) {
        self.table.insert((tag, name.to_string()), Arc::new(f));
    }

    /// Registers a caller-supplied comparator under `(tag, name)`.
    ///
    /// Returns [`CoreError::DuplicateComparator`] if the name is already
    /// taken for this type.
    pub fn register(
        &mut self,
        tag: TypeTag,
        name: &str,
        comparator: Comparator,
    ) -> Result<(), CoreError> {
        let key = (tag, name.to_string());
        if self.table.contains_key(&key) {
            return Err(CoreError::DuplicateComparator {
                name: name.to_string(),
                type_name: tag.name(),
            });
        }
        self.table.insert(key, comparator);
        Ok(())
    }

    /// Looks up the comparator registered for `(tag, name)`.
    pub fn resolve(&self, tag: TypeTag, name: &str) -> Option<&Comparator> {
        self.table.get(&(tag, name.to_string()))
    }

    /// Returns `true` if `name` is defined for values tagged `tag`.
    pub fn contains(&self, tag: TypeTag, name: &str) -> bool {
        self.table.contains_key(&(tag, name.to_string()))
    }

    /// Names registered for a type, in registration order.
    pub fn names_for(&self, tag: TypeTag) -> Vec<&str> {
        self.table
            .keys()
            .filter(|(t, _)| *t == tag)
            .map(|(_, name)| name.as_str())
            .collect()
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
