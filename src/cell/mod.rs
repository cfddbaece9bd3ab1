//! Typed cell — the runtime type-enforcing value holder.
//!
//! The module tree is intentionally stratified:
//! - `typed_cell` defines the container and its construction/accessors.
//! - `ops_assign` is the validated inbound path (value and cell sources).
//! - `ops_read` is the validated outbound path (read and cell-to-cell
//!   transfer).
//! - `ops_sugar` layers the `<<` / `>>` operator forms over the named
//!   methods.

mod ops_assign;
mod ops_read;
mod ops_sugar;
mod typed_cell;

pub use typed_cell::TypedCell;
