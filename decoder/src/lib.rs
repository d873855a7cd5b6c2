#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
mod bitwise;

pub mod decoder;
pub mod instruction;
pub mod mode;
pub mod pattern;
pub mod table;

#[allow(clippy::unreadable_literal)]
pub mod tables;

pub use decoder::{Lookup, decode, is_wide_halfword};
pub use instruction::InstructionId;
pub use mode::Mode;
pub use pattern::BitPattern;
pub use table::TableEntry;
