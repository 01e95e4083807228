// apdukit/src/transport/pcsc.rs

//! PC/SC backend, compiled only with the `pcsc` feature.

use std::ffi::CString;

use pcsc::{Card, Context, Protocols, Scope, ShareMode, MAX_BUFFER_SIZE};

use crate::transport::traits::{Connector, Transport};
use crate::{Error, Result};

/// Connector over a PC/SC context.
pub struct PcscConnector {
    context: Context,
}

impl PcscConnector {
    /// Establish a user-scope PC/SC context.
    pub fn new() -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        Ok(Self { context })
    }
}

impl Connector for PcscConnector {
    fn readers(&self) -> Result<Vec<String>> {
        let mut buf = [0; 2048];
        let readers = self.context.list_readers(&mut buf)?;
        Ok(readers
            .filter_map(|r| r.to_str().ok().map(|s| s.to_string()))
            .collect())
    }

    fn connect(&mut self, reader: &str) -> Result<Box<dyn Transport>> {
        let name = CString::new(reader)
            .map_err(|_| Error::Transport(format!("reader name '{reader}' contains NUL")))?;
        let card = self
            .context
            .connect(&name, ShareMode::Shared, Protocols::ANY)?;
        Ok(Box::new(PcscTransport {
            card,
            reader: reader.to_string(),
        }))
    }
}

/// One connected PC/SC card.
pub struct PcscTransport {
    card: Card,
    reader: String,
}

impl Transport for PcscTransport {
    // PC/SC has no per-transmit deadline; the timeout parameter is
    // accepted for interface parity and a hung exchange surfaces as the
    // service-level timeout fault.
    fn exchange(&mut self, apdu: &[u8], _timeout_ms: u64) -> Result<Vec<u8>> {
        log::trace!("pcsc transmit {} bytes to {}", apdu.len(), self.reader);
        let mut buf = [0; MAX_BUFFER_SIZE];
        let raw = self.card.transmit(apdu, &mut buf)?;
        Ok(raw.to_vec())
    }

    fn reader_name(&self) -> &str {
        &self.reader
    }
}
