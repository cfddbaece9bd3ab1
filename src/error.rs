//! The error surface of the crate.
//!
//! There is exactly one failure condition: a [`TypeMismatch`] raised by the
//! validated assign/read operations of [`TypedCell`](crate::TypedCell).
//! Mismatches are never retried or swallowed internally; the failed operation
//! is a no-op and the cell stays valid, so callers decide whether to recover
//! or propagate.

use core::fmt;

use crate::value::TypeTag;

/// Which validated operation detected a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// The inbound, value-replacing operation (`assign` / `<<`).
    Assign,
    /// The outbound, value-producing operation (`read` / `>>`).
    Read,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Assign => "assign",
            Self::Read => "read",
        })
    }
}

/// A candidate value's type did not match the cell's bound type.
///
/// Carries both sides of the failed comparison plus the operation that
/// performed it. `expected` is always the bound type of the cell that
/// rejected the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeMismatch {
    /// The bound type the receiving cell enforces.
    pub expected: TypeTag,
    /// The type of the rejected value.
    pub actual: TypeTag,
    /// The operation that detected the mismatch.
    pub op: OpKind,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type mismatch on {}: expected {}, got {}",
            self.op, self.expected, self.actual
        )
    }
}

impl std::error::Error for TypeMismatch {}
