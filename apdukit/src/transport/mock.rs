// apdukit/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::traits::{Connector, Transport};
use crate::{Error, Result};

/// One scripted reply for a [`MockTransport`] exchange.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return these raw bytes as the response.
    Raw(Vec<u8>),
    /// Fail the exchange with a transport fault carrying this description.
    Fault(String),
    /// Fail the exchange with a timeout.
    Timeout,
}

impl MockReply {
    /// Payload followed by the success status word `90 00`.
    pub fn success(mut data: Vec<u8>) -> Self {
        data.extend_from_slice(&[0x90, 0x00]);
        Self::Raw(data)
    }

    /// Empty payload with an explicit status word.
    pub fn status(sw1: u8, sw2: u8) -> Self {
        Self::Raw(vec![sw1, sw2])
    }
}

/// Mock transport for unit tests. It records sent APDUs and returns
/// queued replies; an exhausted script behaves like a hung card.
#[derive(Debug)]
pub struct MockTransport {
    reader: String,
    script: VecDeque<MockReply>,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new(reader: &str) -> Self {
        Self {
            reader: reader.to_string(),
            script: VecDeque::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_shared_log(
        reader: &str,
        script: VecDeque<MockReply>,
        sent: Arc<Mutex<Vec<Vec<u8>>>>,
    ) -> Self {
        Self {
            reader: reader.to_string(),
            script,
            sent,
        }
    }

    /// Queue one reply for a subsequent exchange.
    pub fn push_reply(&mut self, reply: MockReply) {
        self.script.push_back(reply);
    }

    /// APDUs sent so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl Transport for MockTransport {
    fn exchange(&mut self, apdu: &[u8], _timeout_ms: u64) -> Result<Vec<u8>> {
        if let Ok(mut log) = self.sent.lock() {
            log.push(apdu.to_vec());
        }

        match self.script.pop_front() {
            Some(MockReply::Raw(raw)) => Ok(raw),
            Some(MockReply::Fault(desc)) => Err(Error::Transport(desc)),
            Some(MockReply::Timeout) | None => Err(Error::Timeout),
        }
    }

    fn reader_name(&self) -> &str {
        &self.reader
    }
}

/// Mock connector for dispatcher tests. Hands out one scripted
/// [`MockTransport`] per `connect` call and shares a single sent-APDU
/// log across all of them so tests can assert on the full exchange
/// sequence after the operation returns.
#[derive(Debug, Default)]
pub struct MockConnector {
    readers: Vec<String>,
    scripts: VecDeque<VecDeque<MockReply>>,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    /// Number of connections opened so far.
    pub connections: usize,
}

impl MockConnector {
    pub fn new(readers: &[&str]) -> Self {
        Self {
            readers: readers.iter().map(|r| r.to_string()).collect(),
            scripts: VecDeque::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
            connections: 0,
        }
    }

    /// Queue the reply script for the next opened connection.
    pub fn push_script(&mut self, replies: Vec<MockReply>) {
        self.scripts.push_back(replies.into());
    }

    /// All APDUs sent over every connection, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

impl Connector for MockConnector {
    fn readers(&self) -> Result<Vec<String>> {
        Ok(self.readers.clone())
    }

    fn connect(&mut self, reader: &str) -> Result<Box<dyn Transport>> {
        self.connections += 1;
        let script = self.scripts.pop_front().unwrap_or_default();
        Ok(Box::new(MockTransport::with_shared_log(
            reader,
            script,
            Arc::clone(&self.sent),
        )))
    }
}
