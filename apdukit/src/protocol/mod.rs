// apdukit/src/protocol/mod.rs

//! APDU wire protocol: command encoding, response decoding, and the
//! per-card-type command builders.

pub mod command;
pub mod commands;
pub mod response;

pub use command::ApduCommand;
pub use commands::PredefinedApdu;
pub use response::ApduResponse;
