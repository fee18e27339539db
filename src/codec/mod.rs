//! Binary codec for configuration files.
//!
//! The file is the record's fields concatenated in `FIELD_ORDER`: no header,
//! no version tag, no checksum. The serial number is a big-endian `u32`,
//! both text fields are zero-terminated, everything else is one byte.
//!
//! This module separates three concerns:
//! - `decode`: bytes → `ConfigRecord`, through a bounds-checked `ByteCursor`
//! - `encode`: `ConfigRecord` → bytes
//! - `size`: exact encoded length of a record
//!
//! All of it is pure: no I/O, no logging. Callers decide what a failure
//! means to the user.

pub mod cursor;
pub mod decode;
pub mod encode;
pub mod size;

pub use cursor::ByteCursor;
pub use decode::{decode, decode_prefix};
pub use encode::encode;
pub use size::{size_of, FIXED_WIDTH, MIN_ENCODED_LEN};
