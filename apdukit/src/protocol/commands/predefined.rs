use crate::protocol::ApduCommand;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Fixed PIN bytes carried by the VERIFY_PIN template. Illustrative
/// only; a real verification would take the PIN from the caller.
const VERIFY_PIN_DATA: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x90, 0x12, 0x34, 0x56];

/// Named APDU templates from the command catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedApdu {
    Select,
    ReadRecord,
    WriteBinary,
    GetResponse,
    VerifyPin,
}

impl PredefinedApdu {
    /// All catalog entries, in a fixed order.
    pub const ALL: [Self; 5] = [
        Self::Select,
        Self::ReadRecord,
        Self::WriteBinary,
        Self::GetResponse,
        Self::VerifyPin,
    ];

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::ReadRecord => "READ_RECORD",
            Self::WriteBinary => "WRITE_BINARY",
            Self::GetResponse => "GET_RESPONSE",
            Self::VerifyPin => "VERIFY_PIN",
        }
    }

    /// Build this entry's command template.
    pub fn command(&self) -> ApduCommand {
        match self {
            // 00 A4 04 00 0E
            Self::Select => ApduCommand::new(0x00, 0xA4, 0x04, 0x00).with_le(0x0E),
            // 00 B2 01 0C 00
            Self::ReadRecord => ApduCommand::new(0x00, 0xB2, 0x01, 0x0C).with_le(0x00),
            // 00 D6 00 00 02 01 02
            Self::WriteBinary => {
                ApduCommand::new(0x00, 0xD6, 0x00, 0x00).with_fixed_data(&[0x01, 0x02])
            }
            // 00 C0 00 00 0A
            Self::GetResponse => ApduCommand::new(0x00, 0xC0, 0x00, 0x00).with_le(0x0A),
            // 00 20 00 80 08 + PIN
            Self::VerifyPin => {
                ApduCommand::new(0x00, 0x20, 0x00, 0x80).with_fixed_data(&VERIFY_PIN_DATA)
            }
        }
    }
}

impl fmt::Display for PredefinedApdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedApdu {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|entry| entry.name() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown predefined command '{s}'")))
    }
}
