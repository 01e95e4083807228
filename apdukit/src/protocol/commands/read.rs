use crate::protocol::ApduCommand;
use crate::types::CardType;
use crate::{Error, Result};

/// Build the type-specific read command.
///
/// MIFARE reads 16 bytes from block 4; NDEF reads the first 32 bytes of
/// the tag; payment cards read record 1 of SFI 1. Java Cards have no
/// plain read operation.
pub fn build_read(card_type: CardType) -> Result<ApduCommand> {
    match card_type {
        CardType::Mifare => Ok(ApduCommand::new(0xFF, 0xB0, 0x00, 0x04).with_le(0x10)),
        CardType::Ndef => Ok(ApduCommand::new(0x00, 0xB0, 0x00, 0x00).with_le(0x20)),
        CardType::PaymentCard => Ok(ApduCommand::new(0x00, 0xB2, 0x01, 0x0C).with_le(0x00)),
        CardType::JavaCard => Err(Error::UnsupportedOperation {
            card_type,
            operation: "read",
        }),
    }
}

/// Build a MIFARE read for one specific block index. Used by the
/// brute-force block scan.
pub fn build_read_block(block: u8) -> ApduCommand {
    ApduCommand::new(0xFF, 0xB0, 0x00, block).with_le(0x10)
}
