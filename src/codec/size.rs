//! Exact encoded length of a record.
//!
//! The length depends on the two text fields, so it is computed from the
//! record's current values by walking the same `FIELD_ORDER` the encoder
//! walks.

use crate::domain::{ConfigRecord, FIELD_ORDER};

/// Bytes taken by every field except the text contents and their terminators.
pub const FIXED_WIDTH: usize = 23;

/// Length of a file whose two text fields are empty.
pub const MIN_ENCODED_LEN: usize = FIXED_WIDTH + 2;

/// Number of bytes `encode(record)` produces.
pub fn size_of(record: &ConfigRecord) -> usize {
    FIELD_ORDER
        .iter()
        .map(|&field| record.value(field).encoded_len())
        .sum()
}

impl ConfigRecord {
    /// Same as `codec::size_of(self)`.
    pub fn encoded_len(&self) -> usize {
        size_of(self)
    }
}
