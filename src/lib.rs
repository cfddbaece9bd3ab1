//! # `tycell` - Runtime Type-Safety Toolkit
//!
//! A lightweight, opt-in runtime type enforcement layer: typed cells that
//! pin a value to the type it was first bound to and reject, at the moment
//! of assignment or transfer, any value whose type does not match.
//!
//! ## Guarantees
//!
//! - **Type capture**: constructing a cell from a seed value binds the cell
//!   to that value's type for the cell's whole lifetime.
//! - **Validated writes**: every assignment re-checks the candidate's type
//!   tag against the bound type before storing anything.
//! - **Validated reads**: every read re-checks the stored value's tag before
//!   handing it out, defending against out-of-band mutation paths.
//! - **Strong exception safety**: a rejected operation is a complete no-op.
//!   The cell keeps its previous value and bound type and stays fully
//!   usable; only the attempted operation fails.
//!
//! ## Architecture
//!
//! Three small layers:
//!
//! 1. **Values** ([`Value`], [`TypeTag`]): a closed dynamic value universe
//!    with a first-class, `Copy + Eq` type descriptor. Cells compare tags,
//!    never structure, so the check is O(1) for any value.
//! 2. **Cells** ([`TypedCell`]): the container plus its validated inbound
//!    (`assign`, `assign_from`) and outbound (`read`, `transfer_to`)
//!    operations, with `<<` / `>>` operator sugar layered on top.
//! 3. **Errors** ([`TypeMismatch`], [`OpKind`]): the single failure
//!    condition, carrying both sides of the failed comparison and the
//!    operation that performed it.
//!
//! There is no interior mutability, no global state, and no concurrency
//! model: a `TypedCell` is a plain owned value, synchronized externally if
//! shared.
//!
//! ## Example
//!
//! ```rust
//! use tycell::{TypedCell, TypeTag};
//!
//! let mut cell = TypedCell::new(5);
//! assert_eq!(cell.bound_type(), TypeTag::Int);
//!
//! // Same type: the write goes through.
//! cell.assign(10).unwrap();
//!
//! // Different type: rejected, prior value intact.
//! let err = cell.assign("hello").unwrap_err();
//! assert_eq!(err.expected, TypeTag::Int);
//! assert_eq!(err.actual, TypeTag::Str);
//! assert_eq!(cell.read().unwrap().to_string(), "10");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod error;
pub mod value;

pub use cell::TypedCell;
pub use error::{OpKind, TypeMismatch};
pub use value::{TypeTag, Value};

// Compile-time layout claims: tags and errors stay register-sized.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<TypeTag>() == 1);
    assert!(mem::size_of::<OpKind>() == 1);
    assert!(mem::size_of::<TypeMismatch>() <= 4);
};
