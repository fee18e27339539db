//! Core domain types
//!
//! The closed value sets of the enum-typed fields, and the packed sensor
//! pair used by the three measurement lines. On the wire and in
//! `ConfigRecord` these are plain bytes; the types here are the checked view.

use serde::{Deserialize, Serialize};

use super::{ConfiguratorError, ConfiguratorResult};

/// Declares a `u8`-backed enum with its wire values, English names and the
/// French labels shown to operators.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident = $value:literal => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $( $variant = $value ),+
        }

        impl $name {
            /// Every variant, in wire-value order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Operator-facing label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// English variant name, as accepted on the command line.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }

            /// Look a variant up by wire value, English name or label (case-insensitive).
            pub fn parse(text: &str) -> ConfiguratorResult<Self> {
                let text = text.trim();
                if let Ok(value) = text.parse::<u8>() {
                    return Self::try_from(value);
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(text) || v.label().eq_ignore_ascii_case(text))
                    .ok_or_else(|| {
                        ConfiguratorError::InvalidValue(format!(
                            "'{text}' is not a valid {}",
                            stringify!($name)
                        ))
                    })
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ConfiguratorError;

            fn try_from(value: u8) -> ConfiguratorResult<Self> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    other => Err(ConfiguratorError::InvalidValue(format!(
                        "{other} is out of range for {}",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }
    };
}

byte_enum! {
    /// Kind of truck the weighing kit is mounted on
    TruckType {
        SemiTrailer = 0 => "Semi-Remorque",
        Train = 1 => "Train",
        Wheels10 = 2 => "10 Roues",
        Wheels12 = 3 => "12 Roues",
        Cube = 4 => "Cube",
    }
}

byte_enum! {
    /// What is plugged into a sensor slot
    SensorType {
        NotConnected = 0 => "N/A",
        Pneumatic = 1 => "Pneumatique",
        Mechanical = 2 => "Mecanique",
        Inclinometer = 3 => "Inclinometre",
    }
}

byte_enum! {
    /// Unit system used by the device display and logs
    UnitSystem {
        Metric = 0 => "Metrique",
        Imperial = 1 => "Imperial",
    }
}

byte_enum! {
    /// Device UI language
    Language {
        French = 0 => "Francais",
        English = 1 => "Anglais",
    }
}

/// Number of physical sensor inputs.
pub const SENSOR_SLOTS: usize = 4;

/// Highest sensor number a line may reference (sensors are numbered from 1).
pub const MAX_LINE_SENSOR: u8 = SENSOR_SLOTS as u8;

/// One of the four physical sensor inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorSlot {
    S1,
    S2,
    S3,
    S4,
}

impl SensorSlot {
    pub const ALL: [SensorSlot; SENSOR_SLOTS] =
        [SensorSlot::S1, SensorSlot::S2, SensorSlot::S3, SensorSlot::S4];

    /// Zero-based index into `ConfigRecord::sensor_types`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based sensor number, as printed on the hardware.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// A logical weight-sensing channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    A,
    B,
    C,
}

impl Line {
    pub const ALL: [Line; 3] = [Line::A, Line::B, Line::C];

    /// Zero-based index into `ConfigRecord::lines`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Line::A => 'A',
            Line::B => 'B',
            Line::C => 'C',
        }
    }
}

/// The (up to) two sensors feeding a line, packed into one byte as
/// `(first << 4) | second`. Sensor number 0 means "unassigned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineAssignment {
    pub first: u8,
    pub second: u8,
}

impl LineAssignment {
    pub fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Pack into the wire byte. Each sensor number keeps only its low nibble.
    pub fn pack(self) -> u8 {
        ((self.first & 0x0F) << 4) | (self.second & 0x0F)
    }

    /// Split a wire byte, clamping each nibble to a valid sensor number.
    pub fn unpack(byte: u8) -> Self {
        Self {
            first: (byte >> 4).min(MAX_LINE_SENSOR),
            second: (byte & 0x0F).min(MAX_LINE_SENSOR),
        }
    }

    pub fn is_unassigned(self) -> bool {
        self.first == 0 && self.second == 0
    }

    /// Human-readable form: `""`, `"c1"`, `"c1+c3"`.
    pub fn describe(self) -> String {
        match (self.first, self.second) {
            (0, 0) => String::new(),
            (a, 0) | (0, a) => format!("c{a}"),
            (a, b) => format!("c{a}+c{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_values_match_catalog() {
        assert_eq!(u8::from(TruckType::SemiTrailer), 0);
        assert_eq!(u8::from(TruckType::Cube), 4);
        assert_eq!(u8::from(SensorType::Inclinometer), 3);
        assert_eq!(u8::from(UnitSystem::Imperial), 1);
        assert_eq!(u8::from(Language::English), 1);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(TruckType::try_from(5).is_err());
        assert!(SensorType::try_from(4).is_err());
        assert!(UnitSystem::try_from(2).is_err());
        assert!(Language::try_from(0xFF).is_err());
    }

    #[test]
    fn all_lists_every_variant_in_wire_order() {
        for (i, t) in TruckType::ALL.iter().enumerate() {
            assert_eq!(u8::from(*t) as usize, i);
        }
        assert_eq!(SensorType::ALL.len(), 4);
    }

    #[test]
    fn parse_accepts_index_name_and_label() {
        assert_eq!(TruckType::parse("2").unwrap(), TruckType::Wheels10);
        assert_eq!(TruckType::parse("cube").unwrap(), TruckType::Cube);
        assert_eq!(TruckType::parse("Semi-Remorque").unwrap(), TruckType::SemiTrailer);
        assert_eq!(SensorType::parse("pneumatique").unwrap(), SensorType::Pneumatic);
        assert_eq!(Language::parse("English").unwrap(), Language::English);
        assert!(UnitSystem::parse("furlongs").is_err());
        assert!(UnitSystem::parse("7").is_err());
    }

    #[test]
    fn line_pack_unpack_all_valid_pairs() {
        for c1 in 0..=MAX_LINE_SENSOR {
            for c2 in 0..=MAX_LINE_SENSOR {
                let packed = LineAssignment::new(c1, c2).pack();
                assert_eq!(packed, (c1 << 4) | c2);
                assert_eq!(LineAssignment::unpack(packed), LineAssignment::new(c1, c2));
            }
        }
    }

    #[test]
    fn line_unpack_clamps_out_of_range_nibbles() {
        assert_eq!(LineAssignment::unpack(0xF7), LineAssignment::new(4, 4));
        assert_eq!(LineAssignment::unpack(0x05), LineAssignment::new(0, 4));
    }

    #[test]
    fn line_describe() {
        assert_eq!(LineAssignment::new(0, 0).describe(), "");
        assert_eq!(LineAssignment::new(2, 0).describe(), "c2");
        assert_eq!(LineAssignment::new(1, 3).describe(), "c1+c3");
        assert!(LineAssignment::unpack(0).is_unassigned());
    }

    #[test]
    fn slot_and_line_indices() {
        assert_eq!(SensorSlot::S3.index(), 2);
        assert_eq!(SensorSlot::S3.number(), 3);
        assert_eq!(Line::C.index(), 2);
        assert_eq!(Line::B.letter(), 'B');
    }
}
