// apdukit/src/session/mod.rs

//! Operation dispatcher. A [`Session`] holds the caller's device and
//! card-type selections plus the error policy, and drives each card
//! operation as one open/exchange/release cycle over the connector.

use log::debug;

use crate::classify::{OperationResult, classify};
use crate::constants::{BRUTE_FORCE_COMPLETE, BRUTE_FORCE_FIRST_BLOCK, BRUTE_FORCE_LAST_BLOCK};
use crate::policy::PolicyCell;
use crate::protocol::commands::{
    build_emulation_read, build_install_applet, build_read, build_read_block,
    build_select_applet, build_transaction, build_write,
};
use crate::protocol::PredefinedApdu;
use crate::transport::{Connector, Transport};
use crate::types::{CardType, ErrorPolicy, JavaCardOperation, TransactionType};
use crate::utils::bytes_to_hex_upper_spaced;
use crate::utils::timeout::DEFAULT_EXCHANGE_TIMEOUT_MS;
use crate::{Error, Result};

mod cancel;
pub use cancel::CancelToken;

/// What one operation produced: intermediate per-exchange log lines
/// (empty for single-exchange operations) and exactly one terminal
/// result. Nothing an operation does is dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    /// One line per intermediate exchange, in exchange order.
    pub log: Vec<String>,
    /// The terminal outcome.
    pub result: OperationResult,
}

impl OperationReport {
    fn terminal(result: OperationResult) -> Self {
        Self {
            log: Vec::new(),
            result,
        }
    }

    /// The terminal message.
    pub fn message(&self) -> &str {
        self.result.message()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }
}

/// Per-session dispatcher state: the connector, the two caller
/// selections, and the error policy. No other state survives between
/// operations; every operation opens its own connection and releases it
/// on completion.
pub struct Session<C: Connector> {
    connector: C,
    device: Option<String>,
    card_type: Option<CardType>,
    policy: PolicyCell,
}

impl<C: Connector> Session<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            device: None,
            card_type: None,
            policy: PolicyCell::default(),
        }
    }

    /// Access the underlying connector.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// The currently selected reader name, if any.
    pub fn selected_device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// The currently selected card type, if any.
    pub fn selected_card_type(&self) -> Option<CardType> {
        self.card_type
    }

    /// The active error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.policy.get()
    }

    /// Switch the error policy. Affects only classifications performed
    /// after the switch.
    pub fn set_error_policy(&self, policy: ErrorPolicy) -> OperationReport {
        self.policy.set(policy);
        OperationReport::terminal(OperationResult::Success(format!(
            "Error handling set to: {policy}"
        )))
    }

    /// Select the reader whose name contains `identifier` (case-sensitive
    /// substring match against the enumerated readers).
    pub fn select_device(&mut self, identifier: &str) -> OperationReport {
        match self.resolve_device(identifier) {
            Ok(name) => {
                debug!("selected reader '{name}'");
                self.device = Some(name);
                OperationReport::terminal(OperationResult::Success(format!(
                    "Selected device: {identifier}"
                )))
            }
            Err(err) => OperationReport::terminal(OperationResult::from_error(
                &err,
                self.policy.get(),
            )),
        }
    }

    /// Select the card family subsequent read/write operations build
    /// commands for.
    pub fn select_card_type(&mut self, card_type: CardType) -> OperationReport {
        self.card_type = Some(card_type);
        OperationReport::terminal(OperationResult::Success(format!(
            "Selected card type: {card_type}"
        )))
    }

    /// Read from the card using the selected card type's read command.
    pub fn read(&mut self) -> OperationReport {
        let apdu = self
            .require_card_type()
            .and_then(build_read)
            .map(|cmd| cmd.encode());
        self.single_exchange(apdu)
    }

    /// Write the supplied bytes using the selected card type's write
    /// command. The encoded length field equals `data.len()` exactly.
    pub fn write(&mut self, data: &[u8]) -> OperationReport {
        let apdu = self
            .require_card_type()
            .and_then(|card_type| build_write(card_type, data.to_vec()))
            .map(|cmd| cmd.encode());
        self.single_exchange(apdu)
    }

    /// Transmit one catalog template.
    pub fn send_predefined(&mut self, entry: PredefinedApdu) -> OperationReport {
        self.single_exchange(Ok(entry.command().encode()))
    }

    /// Transmit caller-supplied hex byte tokens verbatim. The parsed
    /// bytes go on the wire with no header fields injected; a malformed
    /// token fails before anything is transmitted.
    pub fn send_custom_apdu(&mut self, input: &str) -> OperationReport {
        self.single_exchange(crate::utils::parse_hex_tokens(input))
    }

    /// Emulate one POS transaction. The amount appears only in the
    /// success message; it is never encoded into the APDU.
    pub fn emulate_transaction(&mut self, kind: TransactionType, amount: u32) -> OperationReport {
        let report = self.single_exchange(Ok(build_transaction(kind).encode()));
        if report.is_success() {
            OperationReport::terminal(OperationResult::Success(format!(
                "{kind} transaction complete (amount: {amount})"
            )))
        } else {
            report
        }
    }

    /// Run one Java Card sub-operation.
    pub fn java_card(&mut self, op: JavaCardOperation, cancel: &CancelToken) -> OperationReport {
        match op {
            JavaCardOperation::InstallApplet => {
                self.single_exchange(Ok(build_install_applet().encode()))
            }
            JavaCardOperation::EmulatePaymentCard => self.emulate_payment_card(cancel),
        }
    }

    fn emulate_payment_card(&mut self, cancel: &CancelToken) -> OperationReport {
        let policy = self.policy.get();
        let mut transport = match self.open() {
            Ok(transport) => transport,
            Err(err) => {
                return OperationReport::terminal(OperationResult::from_error(&err, policy));
            }
        };

        let select = Self::exchange(&mut *transport, &build_select_applet().encode());
        let first = classify(select, policy);
        let log = vec![first.message().to_string()];

        if cancel.is_cancelled() {
            return OperationReport {
                log,
                result: OperationResult::from_error(&Error::Cancelled, policy),
            };
        }

        // The emulation read runs even when the SELECT failed; each
        // exchange is classified independently and the last message is
        // what the caller sees.
        let read = Self::exchange(&mut *transport, &build_emulation_read().encode());
        OperationReport {
            log,
            result: classify(read, policy),
        }
    }

    /// Scan blocks `0x00..=0x0F` in ascending order over one connection,
    /// one read-block exchange each. A per-block failure does not stop
    /// the scan; the terminal result after the last block is the
    /// completion marker.
    pub fn brute_force_blocks(&mut self, cancel: &CancelToken) -> OperationReport {
        let policy = self.policy.get();
        let mut transport = match self.open() {
            Ok(transport) => transport,
            Err(err) => {
                return OperationReport::terminal(OperationResult::from_error(&err, policy));
            }
        };

        let mut log = Vec::with_capacity(
            (BRUTE_FORCE_LAST_BLOCK - BRUTE_FORCE_FIRST_BLOCK) as usize + 1,
        );
        for block in BRUTE_FORCE_FIRST_BLOCK..=BRUTE_FORCE_LAST_BLOCK {
            if cancel.is_cancelled() {
                return OperationReport {
                    log,
                    result: OperationResult::from_error(&Error::Cancelled, policy),
                };
            }

            let outcome = Self::exchange(&mut *transport, &build_read_block(block).encode());
            let classified = classify(outcome, policy);
            log.push(format!("Block {block:02X}: {}", classified.message()));
        }

        OperationReport {
            log,
            result: OperationResult::Success(BRUTE_FORCE_COMPLETE.to_string()),
        }
    }

    fn resolve_device(&self, identifier: &str) -> Result<String> {
        self.connector
            .readers()?
            .into_iter()
            .find(|reader| reader.contains(identifier))
            .ok_or(Error::DeviceNotFound)
    }

    fn require_card_type(&self) -> Result<CardType> {
        self.card_type.ok_or(Error::NoCardTypeSelected)
    }

    fn open(&mut self) -> Result<Box<dyn Transport>> {
        let reader = self.device.clone().ok_or(Error::NoDeviceSelected)?;
        self.connector.connect(&reader)
    }

    fn exchange(transport: &mut dyn Transport, apdu: &[u8]) -> Result<Vec<u8>> {
        debug!("-> {}", bytes_to_hex_upper_spaced(apdu));
        let raw = transport.exchange(apdu, DEFAULT_EXCHANGE_TIMEOUT_MS)?;
        debug!("<- {}", bytes_to_hex_upper_spaced(&raw));
        Ok(raw)
    }

    fn single_exchange(&mut self, apdu: Result<Vec<u8>>) -> OperationReport {
        let policy = self.policy.get();
        let outcome = apdu.and_then(|apdu| {
            let mut transport = self.open()?;
            Self::exchange(&mut *transport, &apdu)
            // transport dropped here: the connection lives for exactly
            // one operation invocation
        });
        OperationReport::terminal(classify(outcome, policy))
    }
}

#[cfg(feature = "serde")]
impl<C: Connector> Session<C> {
    /// Snapshot the current selections as a descriptor, or `None` until
    /// both a device and a card type have been selected.
    pub fn descriptor(&self) -> Option<crate::descriptor::SessionDescriptor> {
        Some(crate::descriptor::SessionDescriptor {
            device: self.device.clone()?,
            card_type: self.card_type?.name().to_string(),
        })
    }

    /// Apply a previously saved descriptor: the device is re-resolved
    /// against the currently enumerated readers and the card type parsed
    /// by name. Neither selection changes when either part fails.
    pub fn restore(&mut self, descriptor: &crate::descriptor::SessionDescriptor) -> Result<()> {
        let device = self.resolve_device(&descriptor.device)?;
        let card_type: CardType = descriptor.card_type.parse()?;
        self.device = Some(device);
        self.card_type = Some(card_type);
        Ok(())
    }
}
