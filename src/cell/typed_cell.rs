//! `TypedCell` — a value pinned to the type it was first bound to.
//!
//! The cell is intentionally "thin": one tag plus one value, no interior
//! mutability and no hidden state. Every mutation goes through the validated
//! assign path (see `ops_assign`), every read through the validated read
//! path (see `ops_read`), so the bound-type invariant cannot be broken from
//! safe code.

use core::fmt;

use crate::value::{TypeTag, Value};

/// A container that enforces, at runtime, that it only ever holds values of
/// the type it was constructed with.
///
/// The bound type is derived from the seed value and is immutable for the
/// lifetime of the cell. A rejected operation is a complete no-op: the cell
/// keeps its previous value and stays fully usable.
///
/// The cell defines no concurrency model. It is a plain owned value; callers
/// sharing one across threads must wrap it in their own synchronization so
/// the check-then-replace step in [`assign`](TypedCell::assign) stays atomic.
///
/// # Examples
///
/// ```
/// use tycell::{TypedCell, TypeTag};
///
/// let mut cell = TypedCell::new(5);
/// assert_eq!(cell.bound_type(), TypeTag::Int);
///
/// cell.assign(10).unwrap();
/// assert!(cell.assign("hello").is_err());
/// assert_eq!(cell.read().unwrap().to_string(), "10");
/// ```
#[derive(Debug, Clone)]
pub struct TypedCell {
    pub(super) bound: TypeTag,
    pub(super) value: Value,
}

impl TypedCell {
    /// Creates a new cell seeded with `value`, binding it to that value's
    /// type.
    ///
    /// Construction never fails: any value is accepted as the seed, and the
    /// bound type is simply the seed's tag.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            bound: value.type_tag(),
            value,
        }
    }

    /// The type this cell was bound to at construction.
    pub const fn bound_type(&self) -> TypeTag {
        self.bound
    }

    /// Consumes the cell, returning the held value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for TypedCell {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for TypedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_captures_seed_type() {
        let cell = TypedCell::new(5);
        assert_eq!(cell.bound_type(), TypeTag::Int);
        assert_eq!(cell.into_value(), Value::Int(5));
    }

    #[test]
    fn any_seed_type_is_accepted() {
        assert_eq!(TypedCell::new(()).bound_type(), TypeTag::Unit);
        assert_eq!(TypedCell::new(true).bound_type(), TypeTag::Bool);
        assert_eq!(TypedCell::new(3.14).bound_type(), TypeTag::Float);
        assert_eq!(TypedCell::new("x").bound_type(), TypeTag::Str);
    }

    #[test]
    fn display_renders_the_value() {
        let cell = TypedCell::new("hello, world");
        assert_eq!(cell.to_string(), "hello, world");
    }
}
