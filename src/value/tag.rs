//! `TypeTag` — the first-class runtime type descriptor.
//!
//! Cells never compare values structurally to decide admissibility; they
//! capture a `TypeTag` at construction and compare tags on every operation.
//! Tags are deliberately coarse for composites: all lists share one tag and
//! all maps share one tag, so `[1, 2, 3]` and `[4, 5]` are interchangeable.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The type identity of a [`Value`](crate::Value), captured as a cheap
/// `Copy + Eq` discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// The empty value `()`.
    Unit,
    /// A boolean.
    Bool,
    /// A signed 64-bit integer.
    Int,
    /// A 64-bit floating point number.
    Float,
    /// An owned UTF-8 string.
    Str,
    /// An ordered sequence of values, untyped per-element.
    List,
    /// A string-keyed mapping of values, untyped per-entry.
    Map,
}

impl TypeTag {
    /// Human-readable name, used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(TypeTag::Int.to_string(), "integer");
        assert_eq!(TypeTag::Str.to_string(), "string");
        assert_eq!(TypeTag::List.to_string(), "list");
    }

    #[test]
    fn tags_are_one_byte() {
        assert_eq!(core::mem::size_of::<TypeTag>(), 1);
    }
}
