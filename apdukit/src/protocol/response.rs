// apdukit/src/protocol/response.rs

use crate::constants::MIN_RESPONSE_LEN;
use crate::types::StatusWord;
use crate::{Error, Result};

/// ISO/IEC 7816-4 response APDU: payload data followed by the two-byte
/// status word. Produced only from a completed transmit; a transport
/// failure never yields an `ApduResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    data: Vec<u8>,
    status: StatusWord,
}

impl ApduResponse {
    /// Decode raw response bytes. The final two bytes are always SW1/SW2;
    /// everything before them is payload data. A response shorter than a
    /// status word is a protocol violation.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        if raw.len() < MIN_RESPONSE_LEN {
            return Err(Error::MalformedResponse { actual: raw.len() });
        }

        let (data, sw) = raw.split_at(raw.len() - MIN_RESPONSE_LEN);
        Ok(Self {
            data: data.to_vec(),
            status: StatusWord::new(sw[0], sw[1]),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn status(&self) -> StatusWord {
        self.status
    }

    /// Whether the status word denotes normal completion (`90 00`).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
