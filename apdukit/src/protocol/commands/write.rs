use crate::protocol::ApduCommand;
use crate::types::CardType;
use crate::{Error, Result};

/// Build the type-specific write command carrying exactly the supplied
/// data bytes. The Lc byte always equals the data count; zero data
/// bytes yield a header-only command body.
pub fn build_write(card_type: CardType, data: Vec<u8>) -> Result<ApduCommand> {
    match card_type {
        CardType::Mifare => ApduCommand::new(0xFF, 0xD6, 0x00, 0x04).with_data(data),
        CardType::Ndef => ApduCommand::new(0x00, 0xD6, 0x00, 0x00).with_data(data),
        CardType::PaymentCard => ApduCommand::new(0x00, 0xD6, 0x00, 0x00).with_data(data),
        CardType::JavaCard => Err(Error::UnsupportedOperation {
            card_type,
            operation: "write",
        }),
    }
}
