//! Validated outbound operations — the "transfer OUT" side of the cell.
//!
//! `read` re-checks the stored value's tag against the bound type on every
//! call. With only the safe API in play the check cannot fail (assignment
//! already enforces it), but the outbound path does not assume that.

use super::TypedCell;
use crate::error::{OpKind, TypeMismatch};
use crate::value::Value;

impl TypedCell {
    /// Returns the held value after re-validating it against the bound type.
    ///
    /// Reading does not consume or alter the value; two consecutive reads
    /// return equal results.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] if the stored value's tag has drifted from
    /// the bound type. Unreachable through this crate's safe API.
    pub fn read(&self) -> Result<&Value, TypeMismatch> {
        let actual = self.value.type_tag();
        if actual != self.bound {
            return Err(TypeMismatch {
                expected: self.bound,
                actual,
                op: OpKind::Read,
            });
        }
        Ok(&self.value)
    }

    /// Sends this cell's value into `dest`, validating on both ends.
    ///
    /// This is the two-operand form of the outbound operation (`x >> y`).
    /// The bound types of the two cells must match; the mismatch is reported
    /// from the reader's side (`op == Read`, `expected` being what `dest`
    /// enforces).
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] when the cells are bound to different types
    /// or when this cell fails its own defensive read check.
    pub fn transfer_to(&self, dest: &mut TypedCell) -> Result<(), TypeMismatch> {
        if dest.bound != self.bound {
            return Err(TypeMismatch {
                expected: dest.bound,
                actual: self.bound,
                op: OpKind::Read,
            });
        }
        dest.value = self.read()?.clone();
        Ok(())
    }
}
