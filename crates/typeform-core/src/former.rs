//! Composite-type formation: blueprints, constructors, destructors.
//!
//! A [`Blueprint`] is an explicit type-map describing a named composite
//! as an ordered list of tagged fields. A [`Structor`] is the tagged
//! builder over a blueprint: the `Constructor` variant assembles a
//! [`Composite`] from positional field values, the `Destructor` variant
//! takes a composite back apart. No pooling, no execution pipeline --
//! forming a type is a pure function of the blueprint and its inputs.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::value::{TypeTag, Value};

/// Declarative description of a composite type: name plus ordered,
/// tagged fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    pub fields: Vec<(String, TypeTag)>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, fields: Vec<(String, TypeTag)>) -> Self {
        Blueprint {
            name: name.into(),
            fields,
        }
    }

    /// Number of fields the composite carries.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// A value formed from a [`Blueprint`].
///
/// Field values are stored in blueprint declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    pub blueprint: String,
    pub fields: Vec<Value>,
}

/// The two directions of type formation over one blueprint.
#[derive(Debug, Clone)]
pub enum Structor {
    /// Builds a [`Composite`] from positional field values.
    Constructor(Blueprint),
    /// Splits a [`Composite`] back into its field values.
    Destructor(Blueprint),
}

impl Structor {
    /// The blueprint this structor operates over.
    pub fn blueprint(&self) -> &Blueprint {
        match self {
            Structor::Constructor(b) | Structor::Destructor(b) => b,
        }
    }

    /// Forms a composite from positional args.
    ///
    /// Arity and per-field tags are validated against the blueprint;
    /// the first offending field is reported.
    pub fn construct(&self, args: Vec<Value>) -> Result<Composite, FormError> {
        let blueprint = self.blueprint();

        if args.len() != blueprint.arity() {
            return Err(FormError::WrongArity {
                blueprint: blueprint.name.clone(),
                expected: blueprint.arity(),
                actual: args.len(),
            });
        }

        for (arg, (field_name, tag)) in args.iter().zip(&blueprint.fields) {
            if arg.type_tag() != *tag {
                return Err(FormError::FieldTypeMismatch {
                    blueprint: blueprint.name.clone(),
                    field: field_name.clone(),
                    expected: tag.name(),
                    actual: arg.type_name(),
                });
            }
        }

        Ok(Composite {
            blueprint: blueprint.name.clone(),
            fields: args,
        })
    }

    /// Takes a composite apart into its field values, in declaration order.
    ///
    /// The composite must have been formed from this structor's blueprint
    /// (matching name and arity).
    pub fn destruct(&self, composite: Composite) -> Result<Vec<Value>, FormError> {
        let blueprint = self.blueprint();

        if composite.blueprint != blueprint.name {
            return Err(FormError::BlueprintMismatch {
                expected: blueprint.name.clone(),
                actual: composite.blueprint,
            });
        }
        if composite.fields.len() != blueprint.arity() {
            return Err(FormError::WrongArity {
                blueprint: blueprint.name.clone(),
                expected: blueprint.arity(),
                actual: composite.fields.len(),
            });
        }

        Ok(composite.fields)
    }
}
