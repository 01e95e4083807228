// apdukit/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("no device selected")]
    NoDeviceSelected,

    #[error("no card type selected")]
    NoCardTypeSelected,

    #[error("unsupported operation '{operation}' for card type {card_type}")]
    UnsupportedOperation {
        card_type: crate::types::CardType,
        operation: &'static str,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed response: {actual} bytes, status word missing")]
    MalformedResponse { actual: usize },

    #[error("transport fault: {0}")]
    Transport(String),

    // PC/SC 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("transport fault: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("APDU command failed with status words {sw1:02X} {sw2:02X}")]
    Apdu { sw1: u8, sw2: u8 },

    #[error("operation timed out")]
    Timeout,

    #[error("operation cancelled")]
    Cancelled,

    #[cfg(feature = "serde")]
    #[error("descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the device interaction itself
    /// (transport, timeout, status word, truncated response) rather than
    /// from caller input. Only device faults are subject to the
    /// Detailed/Simple rendering policy; usage errors always keep their
    /// full detail.
    pub fn is_device_fault(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Apdu { .. } | Self::Timeout => true,
            Self::MalformedResponse { .. } => true,
            #[cfg(feature = "pcsc")]
            Self::Pcsc(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
