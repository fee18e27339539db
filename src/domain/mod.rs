//! Core domain types
//!
//! Pure types with no I/O dependencies: the configuration record, the
//! catalog describing its on-disk field order, the raw text type, and the
//! value sets of its enum-typed fields.

pub mod catalog;
pub mod error;
pub mod record;
pub mod text;
pub mod types;

pub use catalog::*;
pub use error::*;
pub use record::*;
pub use text::*;
pub use types::*;
