// apdukit/src/classify.rs

//! Response classification: raw exchange outcomes become
//! [`OperationResult`]s, with failure detail rendered according to the
//! active [`ErrorPolicy`].

use crate::constants::SIMPLE_ERROR_MESSAGE;
use crate::protocol::ApduResponse;
use crate::types::ErrorPolicy;
use crate::utils::bytes_to_hex_upper_spaced;
use crate::{Error, Result};

/// Category of a classified failure. Derived from the underlying error,
/// never from its rendered text, so toggling the policy changes only the
/// message a caller sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    DeviceNotFound,
    NoDeviceSelected,
    NoCardTypeSelected,
    UnsupportedOperation,
    InvalidInput,
    MalformedResponse,
    Transport,
    Apdu,
    Cancelled,
}

impl FailureKind {
    /// Map an error to its failure category.
    pub fn of(err: &Error) -> Self {
        match err {
            Error::DeviceNotFound => Self::DeviceNotFound,
            Error::NoDeviceSelected => Self::NoDeviceSelected,
            Error::NoCardTypeSelected => Self::NoCardTypeSelected,
            Error::UnsupportedOperation { .. } => Self::UnsupportedOperation,
            Error::InvalidInput(_) => Self::InvalidInput,
            Error::MalformedResponse { .. } => Self::MalformedResponse,
            Error::Transport(_) | Error::Timeout => Self::Transport,
            #[cfg(feature = "pcsc")]
            Error::Pcsc(_) => Self::Transport,
            Error::Apdu { .. } => Self::Apdu,
            Error::Cancelled => Self::Cancelled,
            #[cfg(feature = "serde")]
            Error::Descriptor(_) => Self::InvalidInput,
        }
    }
}

/// Outcome of one operation as surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Successful completion with a human-readable payload (uppercase
    /// spaced hex of the response data; empty when the card returned no
    /// data).
    Success(String),
    /// Classified failure with a policy-rendered detail message.
    Failure {
        kind: FailureKind,
        detail: String,
    },
}

impl OperationResult {
    /// Build a failure from an error, applying the verbosity policy.
    /// Device faults are rendered generically under the Simple policy;
    /// usage errors always keep their full detail.
    pub fn from_error(err: &Error, policy: ErrorPolicy) -> Self {
        let detail = if err.is_device_fault() && policy == ErrorPolicy::Simple {
            SIMPLE_ERROR_MESSAGE.to_string()
        } else {
            err.to_string()
        };
        Self::Failure {
            kind: FailureKind::of(err),
            detail,
        }
    }

    /// The human-readable message for this result.
    pub fn message(&self) -> &str {
        match self {
            Self::Success(payload) => payload,
            Self::Failure { detail, .. } => detail,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Classify one exchange outcome. Transport faults, codec faults and
/// non-success status words all go through the same policy filter.
pub fn classify(outcome: Result<Vec<u8>>, policy: ErrorPolicy) -> OperationResult {
    let raw = match outcome {
        Ok(raw) => raw,
        Err(err) => return OperationResult::from_error(&err, policy),
    };

    match ApduResponse::decode(&raw) {
        Ok(resp) if resp.is_success() => {
            OperationResult::Success(bytes_to_hex_upper_spaced(resp.data()))
        }
        Ok(resp) => {
            let status = resp.status();
            OperationResult::from_error(
                &Error::Apdu {
                    sw1: status.sw1(),
                    sw2: status.sw2(),
                },
                policy,
            )
        }
        Err(err) => OperationResult::from_error(&err, policy),
    }
}
