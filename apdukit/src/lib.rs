// apdukit/src/lib.rs

//! apdukit
//!
//! ISO/IEC 7816-4 APDU protocol engine for contact and contactless
//! smart cards: command construction per card family, status-word
//! classification under a two-tier error-reporting policy, and a
//! session dispatcher driving single- and multi-exchange operations.
#![warn(missing_docs)]

pub mod classify;
pub mod constants;
#[cfg(feature = "serde")]
pub mod descriptor;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the enums in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
