//! The dynamic value universe held by typed cells.
//!
//! The module tree is intentionally small:
//! - [`tag`] defines the runtime type descriptor compared on every operation.
//! - [`convert`] provides the ergonomic `From` surface and JSON interop.
//!
//! `Value` is the closed set of host types a cell can bind; its
//! [`TypeTag`] discriminant is what cells actually enforce.

mod convert;
pub mod tag;

pub use tag::TypeTag;

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dynamically typed value.
///
/// Equality is structural (`PartialEq` only; floats keep IEEE semantics, so
/// no `Eq`). Serialization is untagged: `Value::Int(5)` round-trips through
/// JSON as plain `5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The empty value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A 64-bit float. Never coerced to or from `Int`.
    Float(f64),
    /// An owned UTF-8 string.
    Str(String),
    /// A list of values. Element types are not part of the tag.
    List(Vec<Value>),
    /// A string-keyed map of values, ordered by key.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the runtime type descriptor of this value.
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Unit => TypeTag::Unit,
            Self::Bool(_) => TypeTag::Bool,
            Self::Int(_) => TypeTag::Int,
            Self::Float(_) => TypeTag::Float,
            Self::Str(_) => TypeTag::Str,
            Self::List(_) => TypeTag::List,
            Self::Map(_) => TypeTag::Map,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Unit
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
