// apdukit/src/prelude.rs

pub use crate::classify::{FailureKind, OperationResult, classify};
pub use crate::policy::PolicyCell;
pub use crate::protocol::{ApduCommand, ApduResponse, PredefinedApdu};
pub use crate::session::{CancelToken, OperationReport, Session};
pub use crate::transport::{Connector, Transport};
pub use crate::{
    CardType, Error, ErrorPolicy, JavaCardOperation, Result, StatusWord, TransactionType,
};

#[cfg(feature = "serde")]
pub use crate::descriptor::SessionDescriptor;

// Re-export small utilities for convenience
pub use crate::utils::{
    bytes_to_hex, bytes_to_hex_upper_spaced, default_exchange_timeout, ms, parse_hex_tokens,
};
