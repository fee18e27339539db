//! Pure encoding: `ConfigRecord` → raw file bytes.

use crate::domain::{ConfigRecord, FieldValue, FIELD_ORDER};

use super::size_of;

/// Encode a record into the exact bytes of a configuration file.
///
/// Values are written verbatim: enum bytes and counts are not range
/// checked here, and text is not scanned for embedded zero bytes. Booleans
/// are always written as `0x00` or `0x01`.
pub fn encode(record: &ConfigRecord) -> Vec<u8> {
    let len = size_of(record);
    let mut out = Vec::with_capacity(len);

    for field in FIELD_ORDER {
        match record.value(field) {
            FieldValue::U32(v) => out.extend_from_slice(&v.to_be_bytes()),
            FieldValue::Text(s) => {
                out.extend_from_slice(s);
                out.push(0);
            }
            FieldValue::Byte(b) => out.push(b),
            FieldValue::Flag(f) => out.push(u8::from(f)),
        }
    }

    debug_assert_eq!(out.len(), len, "encoded length disagrees with size_of");
    out
}
