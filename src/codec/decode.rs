//! Pure decoding: raw file bytes → `ConfigRecord`.
//!
//! Walks `FIELD_ORDER` with a `ByteCursor`. The record under construction is
//! local to this function, so an early return on error can never leak a
//! partially filled record to the caller.

use crate::domain::{ConfigRecord, DecodeError, FieldSlot, RawText, FIELD_ORDER};

use super::ByteCursor;

/// Decode a configuration file.
///
/// Bytes past the last field are ignored; use `decode_prefix` to find out
/// how many were consumed. Enum bytes are stored as found, without range
/// checks, and any nonzero boolean byte reads as `true`.
pub fn decode(buffer: &[u8]) -> Result<ConfigRecord, DecodeError> {
    decode_prefix(buffer).map(|(record, _)| record)
}

/// Decode a configuration file, also returning the number of bytes consumed.
pub fn decode_prefix(buffer: &[u8]) -> Result<(ConfigRecord, usize), DecodeError> {
    let mut cursor = ByteCursor::new(buffer);
    let mut record = ConfigRecord::default();

    for field in FIELD_ORDER {
        match record.slot_mut(field) {
            FieldSlot::U32(slot) => *slot = cursor.read_u32_be(field)?,
            FieldSlot::Text(slot) => *slot = RawText::from(cursor.read_text(field)?),
            FieldSlot::Byte(slot) => *slot = cursor.read_u8(field)?,
            FieldSlot::Flag(slot) => *slot = cursor.read_flag(field)?,
        }
    }

    Ok((record, cursor.position()))
}
