//! The configuration record
//!
//! A `ConfigRecord` is everything the hardware reads from its configuration
//! file. Enum-typed fields are kept as raw bytes so that a file written by
//! any firmware revision loads unchanged; the typed accessors give the
//! checked view.

use serde::{Deserialize, Serialize};

use super::catalog::{Field, FieldSlot, FieldValue};
use super::text::RawText;
use super::types::{
    Language, Line, LineAssignment, SensorSlot, SensorType, TruckType, UnitSystem, SENSOR_SLOTS,
};

/// Calibration date written into a configuration that was never calibrated.
pub const UNCALIBRATED_DATE: &str = "00-00-00";

/// Default duty-box speed limit, in km/h.
pub const DEFAULT_SPEED_LIMIT: u8 = 12;

/// Default number of raw readings averaged per measurement.
pub const DEFAULT_SAMPLES: u8 = 8;

/// A hardware configuration, field for field as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub serial_number: u32,
    pub device_name: RawText,
    /// Raw `TruckType` byte
    pub truck_type: u8,
    pub last_calibration_date: RawText,
    pub lora_enabled: bool,
    pub log_to_file_enabled: bool,
    pub display_enabled: bool,
    pub isaac_enabled: bool,
    pub relay_output_enabled: bool,
    pub duty_box_enabled: bool,
    /// km/h
    pub duty_box_speed_limit: u8,
    /// Raw `SensorType` byte per slot
    pub sensor_types: [u8; SENSOR_SLOTS],
    /// Packed `LineAssignment` byte per line (A, B, C)
    pub lines: [u8; 3],
    pub samples_to_take: u8,
    pub temp_sensor_present: bool,
    /// Raw `UnitSystem` byte
    pub unit_system: u8,
    /// Raw `Language` byte
    pub language: u8,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            serial_number: 0,
            device_name: RawText::new(),
            truck_type: TruckType::SemiTrailer.into(),
            last_calibration_date: UNCALIBRATED_DATE.into(),
            lora_enabled: false,
            log_to_file_enabled: true,
            display_enabled: false,
            isaac_enabled: false,
            relay_output_enabled: false,
            duty_box_enabled: false,
            duty_box_speed_limit: DEFAULT_SPEED_LIMIT,
            sensor_types: [SensorType::NotConnected.into(); SENSOR_SLOTS],
            lines: [0; 3],
            samples_to_take: DEFAULT_SAMPLES,
            temp_sensor_present: false,
            unit_system: UnitSystem::Metric.into(),
            language: Language::French.into(),
        }
    }
}

impl ConfigRecord {
    /// Current value of `field`.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::SerialNumber => FieldValue::U32(self.serial_number),
            Field::DeviceName => FieldValue::Text(self.device_name.as_bytes()),
            Field::TruckType => FieldValue::Byte(self.truck_type),
            Field::LastCalibrationDate => FieldValue::Text(self.last_calibration_date.as_bytes()),
            Field::LoraEnabled => FieldValue::Flag(self.lora_enabled),
            Field::LogToFileEnabled => FieldValue::Flag(self.log_to_file_enabled),
            Field::DisplayEnabled => FieldValue::Flag(self.display_enabled),
            Field::IsaacEnabled => FieldValue::Flag(self.isaac_enabled),
            Field::RelayOutputEnabled => FieldValue::Flag(self.relay_output_enabled),
            Field::DutyBoxEnabled => FieldValue::Flag(self.duty_box_enabled),
            Field::DutyBoxSpeedLimit => FieldValue::Byte(self.duty_box_speed_limit),
            Field::SensorType(slot) => FieldValue::Byte(self.sensor_types[slot.index()]),
            Field::Line(line) => FieldValue::Byte(self.lines[line.index()]),
            Field::SamplesToTake => FieldValue::Byte(self.samples_to_take),
            Field::TempSensorPresent => FieldValue::Flag(self.temp_sensor_present),
            Field::UnitSystem => FieldValue::Byte(self.unit_system),
            Field::Language => FieldValue::Byte(self.language),
        }
    }

    /// Mutable storage behind `field`. Always the same kind as `value(field)`.
    pub fn slot_mut(&mut self, field: Field) -> FieldSlot<'_> {
        match field {
            Field::SerialNumber => FieldSlot::U32(&mut self.serial_number),
            Field::DeviceName => FieldSlot::Text(&mut self.device_name),
            Field::TruckType => FieldSlot::Byte(&mut self.truck_type),
            Field::LastCalibrationDate => FieldSlot::Text(&mut self.last_calibration_date),
            Field::LoraEnabled => FieldSlot::Flag(&mut self.lora_enabled),
            Field::LogToFileEnabled => FieldSlot::Flag(&mut self.log_to_file_enabled),
            Field::DisplayEnabled => FieldSlot::Flag(&mut self.display_enabled),
            Field::IsaacEnabled => FieldSlot::Flag(&mut self.isaac_enabled),
            Field::RelayOutputEnabled => FieldSlot::Flag(&mut self.relay_output_enabled),
            Field::DutyBoxEnabled => FieldSlot::Flag(&mut self.duty_box_enabled),
            Field::DutyBoxSpeedLimit => FieldSlot::Byte(&mut self.duty_box_speed_limit),
            Field::SensorType(slot) => FieldSlot::Byte(&mut self.sensor_types[slot.index()]),
            Field::Line(line) => FieldSlot::Byte(&mut self.lines[line.index()]),
            Field::SamplesToTake => FieldSlot::Byte(&mut self.samples_to_take),
            Field::TempSensorPresent => FieldSlot::Flag(&mut self.temp_sensor_present),
            Field::UnitSystem => FieldSlot::Byte(&mut self.unit_system),
            Field::Language => FieldSlot::Byte(&mut self.language),
        }
    }

    /// `None` when the stored byte is not a known truck type.
    pub fn truck_type(&self) -> Option<TruckType> {
        TruckType::try_from(self.truck_type).ok()
    }

    pub fn set_truck_type(&mut self, truck_type: TruckType) {
        self.truck_type = truck_type.into();
    }

    pub fn sensor_type(&self, slot: SensorSlot) -> Option<SensorType> {
        SensorType::try_from(self.sensor_types[slot.index()]).ok()
    }

    pub fn set_sensor_type(&mut self, slot: SensorSlot, sensor_type: SensorType) {
        self.sensor_types[slot.index()] = sensor_type.into();
    }

    pub fn unit_system(&self) -> Option<UnitSystem> {
        UnitSystem::try_from(self.unit_system).ok()
    }

    pub fn set_unit_system(&mut self, units: UnitSystem) {
        self.unit_system = units.into();
    }

    pub fn language(&self) -> Option<Language> {
        Language::try_from(self.language).ok()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language.into();
    }

    /// Sensors feeding `line`, unpacked from its stored byte.
    pub fn line_assignment(&self, line: Line) -> LineAssignment {
        LineAssignment::unpack(self.lines[line.index()])
    }

    pub fn set_line_assignment(&mut self, line: Line, assignment: LineAssignment) {
        self.lines[line.index()] = assignment.pack();
    }
}
