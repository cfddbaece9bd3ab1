//! Shift-operator sugar over the named assign/read methods.
//!
//! `cell << value` and `source >> dest` mirror the symbolic forms of the
//! inbound and outbound operations. The operators are pure sugar: each
//! forwards to the named method and returns the same `Result`, so rejected
//! operations stay no-ops and nothing panics.
//!
//! ```
//! use tycell::{TypedCell, Value};
//!
//! let mut x = TypedCell::new(3);
//! let mut y = TypedCell::new(0);
//!
//! (&mut x << Value::Int(4)).unwrap(); // assign
//! (&x >> &mut y).unwrap(); // transfer
//! assert_eq!(y.read().unwrap(), &Value::Int(4));
//! ```

use core::ops::{Shl, Shr};

use super::TypedCell;
use crate::error::TypeMismatch;
use crate::value::Value;

impl Shl<Value> for &mut TypedCell {
    type Output = Result<(), TypeMismatch>;

    /// `cell << value` — validated assignment.
    fn shl(self, rhs: Value) -> Self::Output {
        self.assign(rhs)
    }
}

impl Shl<&TypedCell> for &mut TypedCell {
    type Output = Result<(), TypeMismatch>;

    /// `dest << &source` — validated cell-to-cell assignment.
    fn shl(self, rhs: &TypedCell) -> Self::Output {
        self.assign_from(rhs)
    }
}

impl Shr<&mut TypedCell> for &TypedCell {
    type Output = Result<(), TypeMismatch>;

    /// `&source >> dest` — validated cell-to-cell transfer.
    fn shr(self, rhs: &mut TypedCell) -> Self::Output {
        self.transfer_to(rhs)
    }
}
