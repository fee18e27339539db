//! Field catalog
//!
//! The ordered list of fields making up a configuration file. `FIELD_ORDER`
//! is the only place the on-disk order is written down: the decoder, the
//! encoder and the size calculator all walk it.

use super::text::RawText;
use super::types::{Line, SensorSlot};

/// One field of the configuration record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SerialNumber,
    DeviceName,
    TruckType,
    LastCalibrationDate,
    LoraEnabled,
    LogToFileEnabled,
    DisplayEnabled,
    IsaacEnabled,
    RelayOutputEnabled,
    DutyBoxEnabled,
    DutyBoxSpeedLimit,
    SensorType(SensorSlot),
    Line(Line),
    SamplesToTake,
    TempSensorPresent,
    UnitSystem,
    Language,
}

/// Serialization order of every field. Nothing is optional or reordered.
pub const FIELD_ORDER: [Field; 22] = [
    Field::SerialNumber,
    Field::DeviceName,
    Field::TruckType,
    Field::LastCalibrationDate,
    Field::LoraEnabled,
    Field::LogToFileEnabled,
    Field::DisplayEnabled,
    Field::IsaacEnabled,
    Field::RelayOutputEnabled,
    Field::DutyBoxEnabled,
    Field::DutyBoxSpeedLimit,
    Field::SensorType(SensorSlot::S1),
    Field::SensorType(SensorSlot::S2),
    Field::SensorType(SensorSlot::S3),
    Field::SensorType(SensorSlot::S4),
    Field::Line(Line::A),
    Field::Line(Line::B),
    Field::Line(Line::C),
    Field::SamplesToTake,
    Field::TempSensorPresent,
    Field::UnitSystem,
    Field::Language,
];

impl Field {
    /// Descriptive name, used in decode errors.
    pub fn name(self) -> &'static str {
        match self {
            Field::SerialNumber => "serial number",
            Field::DeviceName => "device name",
            Field::TruckType => "truck type",
            Field::LastCalibrationDate => "last calibration date",
            Field::LoraEnabled => "LoRa enabled",
            Field::LogToFileEnabled => "log-to-file enabled",
            Field::DisplayEnabled => "display enabled",
            Field::IsaacEnabled => "Isaac enabled",
            Field::RelayOutputEnabled => "relay output enabled",
            Field::DutyBoxEnabled => "duty-box enabled",
            Field::DutyBoxSpeedLimit => "duty-box speed limit",
            Field::SensorType(SensorSlot::S1) => "sensor 1 type",
            Field::SensorType(SensorSlot::S2) => "sensor 2 type",
            Field::SensorType(SensorSlot::S3) => "sensor 3 type",
            Field::SensorType(SensorSlot::S4) => "sensor 4 type",
            Field::Line(Line::A) => "line A",
            Field::Line(Line::B) => "line B",
            Field::Line(Line::C) => "line C",
            Field::SamplesToTake => "samples to take",
            Field::TempSensorPresent => "temperature sensor present",
            Field::UnitSystem => "unit system",
            Field::Language => "language",
        }
    }

    /// Short key used on the command line (`set <file> key=value`).
    pub fn key(self) -> &'static str {
        match self {
            Field::SerialNumber => "serial",
            Field::DeviceName => "name",
            Field::TruckType => "truck",
            Field::LastCalibrationDate => "calibration-date",
            Field::LoraEnabled => "lora",
            Field::LogToFileEnabled => "log-to-file",
            Field::DisplayEnabled => "display",
            Field::IsaacEnabled => "isaac",
            Field::RelayOutputEnabled => "relay",
            Field::DutyBoxEnabled => "duty-box",
            Field::DutyBoxSpeedLimit => "speed-limit",
            Field::SensorType(SensorSlot::S1) => "sensor1",
            Field::SensorType(SensorSlot::S2) => "sensor2",
            Field::SensorType(SensorSlot::S3) => "sensor3",
            Field::SensorType(SensorSlot::S4) => "sensor4",
            Field::Line(Line::A) => "line-a",
            Field::Line(Line::B) => "line-b",
            Field::Line(Line::C) => "line-c",
            Field::SamplesToTake => "samples",
            Field::TempSensorPresent => "temp-sensor",
            Field::UnitSystem => "units",
            Field::Language => "language",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim();
        FIELD_ORDER
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }
}

/// Read-only view of one field's current value, tagged with its wire kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// 32-bit unsigned, big-endian on the wire
    U32(u32),
    /// Zero-terminated text, raw bytes without the terminator
    Text(&'a [u8]),
    /// Raw byte (enums, counts, packed lines)
    Byte(u8),
    /// Boolean byte
    Flag(bool),
}

impl FieldValue<'_> {
    /// Exact number of bytes this value occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        match self {
            FieldValue::U32(_) => 4,
            // Content plus the zero terminator
            FieldValue::Text(s) => s.len() + 1,
            FieldValue::Byte(_) | FieldValue::Flag(_) => 1,
        }
    }

    /// Width of the value when it does not depend on the record's contents.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            FieldValue::Text(_) => None,
            other => Some(other.encoded_len()),
        }
    }
}

/// Writable handle on one field's storage inside a record.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    U32(&'a mut u32),
    Text(&'a mut RawText),
    Byte(&'a mut u8),
    Flag(&'a mut bool),
}
