//! Validated inbound operations — the "transfer IN" side of the cell.
//!
//! Both entry points compare type tags before touching stored state, so a
//! rejected assignment leaves the cell exactly as it was.

use super::TypedCell;
use crate::error::{OpKind, TypeMismatch};
use crate::value::Value;

impl TypedCell {
    /// Replaces the held value with `value` if its type matches the bound
    /// type.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the candidate's tag differs from the
    /// bound type. The stored value is untouched in that case.
    pub fn assign(&mut self, value: impl Into<Value>) -> Result<(), TypeMismatch> {
        let value = value.into();
        let actual = value.type_tag();
        if actual != self.bound {
            return Err(TypeMismatch {
                expected: self.bound,
                actual,
                op: OpKind::Assign,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Copies the value held by `source` into this cell.
    ///
    /// This is the cell-operand form of the inbound operation (`y << x`).
    /// The source's *bound type* is what is compared, and the source's own
    /// outbound validation still runs before its value is taken.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the two cells are bound to different
    /// types, or when the source fails its defensive read check.
    pub fn assign_from(&mut self, source: &TypedCell) -> Result<(), TypeMismatch> {
        if source.bound != self.bound {
            return Err(TypeMismatch {
                expected: self.bound,
                actual: source.bound,
                op: OpKind::Assign,
            });
        }
        let value = source.read()?.clone();
        self.value = value;
        Ok(())
    }
}
