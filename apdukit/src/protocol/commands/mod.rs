// apdukit/src/protocol/commands/mod.rs

//! Per-operation command builders. Every builder is a pure function of
//! its inputs; unsupported (card type, operation) pairs fail with
//! [`crate::Error::UnsupportedOperation`] naming both rather than
//! defaulting to another type's template.

pub mod applet;
pub mod predefined;
pub mod read;
pub mod transaction;
pub mod write;

pub use applet::{build_emulation_read, build_install_applet, build_select_applet};
pub use predefined::PredefinedApdu;
pub use read::{build_read, build_read_block};
pub use transaction::build_transaction;
pub use write::build_write;
