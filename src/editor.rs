//! Editing rules of the configuration form
//!
//! The codec writes whatever the record holds. Keeping values inside their
//! domains is the job of whoever edits the record, and these are the rules
//! the operator form applies: clamped numbers, a bounded name buffer,
//! closed choice lists. `apply` exposes the same rules for textual input.

use std::ops::RangeInclusive;

use crate::domain::{
    ConfigRecord, ConfiguratorError, ConfiguratorResult, Field, FieldSlot, FieldValue, Language,
    Line, LineAssignment, SensorSlot, SensorType, TruckType, UnitSystem, FIELD_ORDER,
    MAX_LINE_SENSOR,
};

/// Size of the form's name edit buffer, terminator included.
pub const DEVICE_NAME_CAPACITY: usize = 32;

/// Accepted duty-box speed limits, in km/h.
pub const SPEED_LIMIT_RANGE: RangeInclusive<u8> = 1..=50;

/// Sample counts offered by the form.
pub const SAMPLE_CHOICES: [u8; 6] = [1, 2, 4, 8, 16, 32];

/// One row of the form: a label and the current value rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
}

/// Label the operator form shows for `field`.
pub fn label(field: Field) -> &'static str {
    match field {
        Field::SerialNumber => "Numero de serie",
        Field::DeviceName => "Nom",
        Field::TruckType => "Type de camion",
        Field::LastCalibrationDate => "Date de derniere calibration",
        Field::LoraEnabled => "Option LoRa",
        Field::LogToFileEnabled => "Loggeur",
        Field::DisplayEnabled => "Option Afficheur",
        Field::IsaacEnabled => "Option Isaac",
        Field::RelayOutputEnabled => "Option Relais",
        Field::DutyBoxEnabled => "Option Benne",
        Field::DutyBoxSpeedLimit => "Limite de Vitesse",
        Field::SensorType(SensorSlot::S1) => "Capteur 1",
        Field::SensorType(SensorSlot::S2) => "Capteur 2",
        Field::SensorType(SensorSlot::S3) => "Capteur 3",
        Field::SensorType(SensorSlot::S4) => "Capteur 4",
        Field::Line(Line::A) => "Ligne A",
        Field::Line(Line::B) => "Ligne B",
        Field::Line(Line::C) => "Ligne C",
        Field::SamplesToTake => "Nombre d'echantillons",
        Field::TempSensorPresent => "Capteur de temperature",
        Field::UnitSystem => "Unites",
        Field::Language => "Langue",
    }
}

/// Negative serial numbers become 0; values past `u32::MAX` saturate.
pub fn set_serial_number(record: &mut ConfigRecord, value: i64) {
    record.serial_number = value.clamp(0, i64::from(u32::MAX)) as u32;
}

/// Keep the name up to its first NUL, within the form's buffer size.
pub fn set_device_name(record: &mut ConfigRecord, name: &str) {
    let name = name.split('\0').next().unwrap_or_default();
    let mut end = name.len().min(DEVICE_NAME_CAPACITY - 1);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    record.device_name = name[..end].into();
}

pub fn set_speed_limit(record: &mut ConfigRecord, value: i64) {
    let (min, max) = (*SPEED_LIMIT_RANGE.start(), *SPEED_LIMIT_RANGE.end());
    record.duty_box_speed_limit = value.clamp(i64::from(min), i64::from(max)) as u8;
}

pub fn set_samples(record: &mut ConfigRecord, samples: u8) -> ConfiguratorResult<()> {
    if !SAMPLE_CHOICES.contains(&samples) {
        return Err(ConfiguratorError::InvalidValue(format!(
            "{samples} samples is not one of {SAMPLE_CHOICES:?}"
        )));
    }
    record.samples_to_take = samples;
    Ok(())
}

/// Assign sensors to a line. Sensor numbers are clamped to 0..=4.
pub fn set_line(record: &mut ConfigRecord, line: Line, first: u8, second: u8) {
    record.set_line_assignment(
        line,
        LineAssignment::new(first.min(MAX_LINE_SENSOR), second.min(MAX_LINE_SENSOR)),
    );
}

/// Accepts `1/0`, `true/false`, `on/off`, `yes/no`, `oui/non`.
pub fn parse_flag(text: &str) -> ConfiguratorResult<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" | "oui" => Ok(true),
        "0" | "false" | "off" | "no" | "non" => Ok(false),
        other => Err(ConfiguratorError::InvalidValue(format!(
            "'{other}' is not a yes/no value"
        ))),
    }
}

/// Accepts `""`, `"0"`, `"2"`, `"1+3"` (an optional `c` prefix is allowed: `"c1+c3"`).
pub fn parse_line(text: &str) -> ConfiguratorResult<LineAssignment> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(LineAssignment::default());
    }
    let mut sensors = text.split('+').map(|part| {
        let part = part.trim();
        let digits = part
            .strip_prefix('c')
            .or_else(|| part.strip_prefix('C'))
            .unwrap_or(part);
        digits
            .parse::<u8>()
            .ok()
            .filter(|n| *n <= MAX_LINE_SENSOR)
            .ok_or_else(|| {
                ConfiguratorError::InvalidValue(format!(
                    "'{part}' is not a sensor number between 0 and {MAX_LINE_SENSOR}"
                ))
            })
    });
    let first = sensors.next().transpose()?.unwrap_or(0);
    let second = sensors.next().transpose()?.unwrap_or(0);
    if sensors.next().is_some() {
        return Err(ConfiguratorError::InvalidValue(format!(
            "'{text}': a line combines at most two sensors"
        )));
    }
    Ok(LineAssignment::new(first, second))
}

fn parse_number(field: Field, text: &str) -> ConfiguratorResult<i64> {
    text.trim().parse::<i64>().map_err(|e| {
        ConfiguratorError::InvalidValue(format!("{}: '{text}' is not a number ({e})", field.name()))
    })
}

/// Parse `text` for `field` and store it under the form's rules.
pub fn apply(record: &mut ConfigRecord, field: Field, text: &str) -> ConfiguratorResult<()> {
    match field {
        Field::SerialNumber => set_serial_number(record, parse_number(field, text)?),
        Field::DeviceName => set_device_name(record, text),
        Field::TruckType => record.set_truck_type(TruckType::parse(text)?),
        Field::LastCalibrationDate => {
            return Err(ConfiguratorError::InvalidValue(format!(
                "{} is read-only",
                field.name()
            )))
        }
        Field::LoraEnabled
        | Field::LogToFileEnabled
        | Field::DisplayEnabled
        | Field::IsaacEnabled
        | Field::RelayOutputEnabled
        | Field::DutyBoxEnabled
        | Field::TempSensorPresent => {
            let value = parse_flag(text)?;
            if let FieldSlot::Flag(slot) = record.slot_mut(field) {
                *slot = value;
            }
        }
        Field::DutyBoxSpeedLimit => set_speed_limit(record, parse_number(field, text)?),
        Field::SensorType(slot) => record.set_sensor_type(slot, SensorType::parse(text)?),
        Field::Line(line) => {
            let assignment = parse_line(text)?;
            set_line(record, line, assignment.first, assignment.second);
        }
        Field::SamplesToTake => {
            let samples = u8::try_from(parse_number(field, text)?).map_err(|_| {
                ConfiguratorError::InvalidValue(format!("'{text}' samples is out of range"))
            })?;
            set_samples(record, samples)?;
        }
        Field::UnitSystem => record.set_unit_system(UnitSystem::parse(text)?),
        Field::Language => record.set_language(Language::parse(text)?),
    }
    Ok(())
}

fn enum_label<T>(raw: u8, typed: Option<T>, label: fn(T) -> &'static str) -> String {
    typed.map_or_else(|| format!("? ({raw})"), |v| label(v).to_string())
}

/// Render `field` the way the form shows it.
pub fn display_value(record: &ConfigRecord, field: Field) -> String {
    match field {
        Field::TruckType => enum_label(record.truck_type, record.truck_type(), TruckType::label),
        Field::SensorType(slot) => enum_label(
            record.sensor_types[slot.index()],
            record.sensor_type(slot),
            SensorType::label,
        ),
        Field::Line(line) => {
            let raw = record.lines[line.index()];
            let assignment = LineAssignment::unpack(raw);
            if assignment.pack() != raw {
                format!("? ({raw:#04x})")
            } else if assignment.is_unassigned() {
                "-".to_string()
            } else {
                assignment.describe()
            }
        }
        Field::UnitSystem => enum_label(record.unit_system, record.unit_system(), UnitSystem::label),
        Field::Language => enum_label(record.language, record.language(), Language::label),
        _ => match record.value(field) {
            FieldValue::U32(v) => v.to_string(),
            FieldValue::Text(s) => String::from_utf8_lossy(s).into_owned(),
            FieldValue::Byte(b) => b.to_string(),
            FieldValue::Flag(true) => "oui".to_string(),
            FieldValue::Flag(false) => "non".to_string(),
        },
    }
}

/// Every field of the form, in file order.
pub fn describe(record: &ConfigRecord) -> Vec<FormRow> {
    FIELD_ORDER
        .iter()
        .map(|&field| FormRow {
            field,
            label: label(field),
            value: display_value(record, field),
        })
        .collect()
}

/// Reject values the form could never have produced.
///
/// Used on records that come from outside the form (JSON import); the codec
/// itself never calls this.
pub fn check(record: &ConfigRecord) -> ConfiguratorResult<()> {
    let mut problems = Vec::new();

    for field in [Field::DeviceName, Field::LastCalibrationDate] {
        if let FieldValue::Text(s) = record.value(field) {
            if s.contains(&0) {
                problems.push(format!("{} contains a NUL byte", field.name()));
            }
        }
    }
    if record.truck_type().is_none() {
        problems.push(format!("truck type {} is unknown", record.truck_type));
    }
    for slot in SensorSlot::ALL {
        if record.sensor_type(slot).is_none() {
            problems.push(format!(
                "sensor {} type {} is unknown",
                slot.number(),
                record.sensor_types[slot.index()]
            ));
        }
    }
    for line in Line::ALL {
        let raw = record.lines[line.index()];
        if LineAssignment::unpack(raw).pack() != raw {
            problems.push(format!("line {} byte {raw:#04x} is invalid", line.letter()));
        }
    }
    if record.unit_system().is_none() {
        problems.push(format!("unit system {} is unknown", record.unit_system));
    }
    if record.language().is_none() {
        problems.push(format!("language {} is unknown", record.language));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfiguratorError::InvalidValue(problems.join("; ")))
    }
}
