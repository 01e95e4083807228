// apdukit/src/protocol/command.rs

use crate::constants::MAX_SHORT_APDU_DATA_LEN;
use crate::{Error, Result};

/// ISO/IEC 7816-4 command APDU.
///
/// Wire layout: `[CLA] [INS] [P1] [P2] [Lc DATA..] [Le]`, where the
/// `Lc`/data group is present only when the command carries data and `Le`
/// only when response data is expected. `Lc` is computed from the stored
/// data at encode time, so a length byte that disagrees with the data
/// cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduCommand {
    cla: u8,
    ins: u8,
    p1: u8,
    p2: u8,
    data: Vec<u8>,
    le: Option<u8>,
}

impl ApduCommand {
    /// Create a header-only command.
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    /// Attach a command data field. Fails when the data cannot be
    /// described by a single short-form Lc byte.
    pub fn with_data(mut self, data: Vec<u8>) -> Result<Self> {
        if data.len() > MAX_SHORT_APDU_DATA_LEN {
            return Err(Error::InvalidInput(format!(
                "command data of {} bytes exceeds short APDU limit of {}",
                data.len(),
                MAX_SHORT_APDU_DATA_LEN
            )));
        }
        self.data = data;
        Ok(self)
    }

    /// Attach a fixed-size data field known at compile time to fit in a
    /// short APDU. Used by the catalog templates.
    pub(crate) fn with_fixed_data(mut self, data: &[u8]) -> Self {
        debug_assert!(data.len() <= MAX_SHORT_APDU_DATA_LEN);
        self.data = data.to_vec();
        self
    }

    /// Set the expected response length byte.
    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    pub fn cla(&self) -> u8 {
        self.cla
    }

    pub fn ins(&self) -> u8 {
        self.ins
    }

    pub fn p1(&self) -> u8 {
        self.p1
    }

    pub fn p2(&self) -> u8 {
        self.p2
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn le(&self) -> Option<u8> {
        self.le
    }

    /// Encode the command into its wire form. `Lc` is emitted only for a
    /// non-empty data field and always equals the exact data byte count.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        out.push(self.cla);
        out.push(self.ins);
        out.push(self.p1);
        out.push(self.p2);

        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }

        if let Some(le) = self.le {
            out.push(le);
        }

        out
    }
}
