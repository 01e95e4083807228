// apdukit/src/types.rs

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Card family. Determines which command-building rules apply to the
/// read/write operations; selected once per session and immutable for
/// the duration of a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Mifare,
    Ndef,
    PaymentCard,
    JavaCard,
}

impl CardType {
    /// Human-readable name, also used by the session descriptor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mifare => "MIFARE",
            Self::Ndef => "NDEF",
            Self::PaymentCard => "Payment Card",
            Self::JavaCard => "Java Card",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIFARE" => Ok(Self::Mifare),
            "NDEF" => Ok(Self::Ndef),
            "Payment Card" => Ok(Self::PaymentCard),
            "Java Card" => Ok(Self::JavaCard),
            other => Err(Error::InvalidInput(format!(
                "unknown card type '{other}'"
            ))),
        }
    }
}

/// POS transaction kind for the emulation operation. Each kind selects a
/// different applet parameter byte; the amount is never encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Credit,
    Debit,
    Loyalty,
    Gift,
    TapToPay,
}

impl TransactionType {
    /// Trailing parameter byte of the SELECT-style command sent for this
    /// transaction kind.
    pub fn select_parameter(&self) -> u8 {
        match self {
            Self::Credit => 0x0E,
            Self::Debit => 0x0F,
            Self::Loyalty => 0x10,
            Self::Gift => 0x11,
            Self::TapToPay => 0x12,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Loyalty => "loyalty",
            Self::Gift => "gift",
            Self::TapToPay => "tap-to-pay",
        };
        f.write_str(s)
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "loyalty" => Ok(Self::Loyalty),
            "gift" => Ok(Self::Gift),
            "tap-to-pay" => Ok(Self::TapToPay),
            other => Err(Error::InvalidInput(format!(
                "unknown transaction type '{other}'"
            ))),
        }
    }
}

/// Sub-operation of the Java Card interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaCardOperation {
    /// SELECT the payment applet, then drive one emulated read.
    EmulatePaymentCard,
    /// INSTALL a fixed applet image.
    InstallApplet,
}

/// Two-byte status word terminating every APDU response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusWord {
    sw1: u8,
    sw2: u8,
}

impl StatusWord {
    /// `90 00` - normal completion.
    pub const SUCCESS: Self = Self {
        sw1: 0x90,
        sw2: 0x00,
    };

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn sw1(&self) -> u8 {
        self.sw1
    }

    pub fn sw2(&self) -> u8 {
        self.sw2
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X} {:02X}", self.sw1, self.sw2)
    }
}

/// Verbosity policy applied when rendering device faults. `#[repr(u8)]`
/// so the value can live in an atomic cell (see [`crate::policy`]).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    Detailed = 0,
    Simple = 1,
}

impl ErrorPolicy {
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Simple,
            _ => Self::Detailed,
        }
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        // Operations start verbose; the caller may switch to Simple later.
        ErrorPolicy::Detailed
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Detailed => "detailed",
            Self::Simple => "simple",
        };
        f.write_str(s)
    }
}
