//! The encoding tables, one module per instruction word class.
//!
//! Every table is an ordered list scanned front to back. Entry order is
//! part of the data: wherever two patterns overlap, the more specific
//! encoding is listed before the more general one, so the first match is
//! the right one.

pub mod arm;
pub mod thumb;
pub mod thumb2;
pub mod thumbee;
