use crate::protocol::ApduCommand;
use crate::types::TransactionType;

/// Build the SELECT-style command for one emulated POS transaction.
/// Only the transaction kind is encoded; the amount is carried in the
/// result message, never in the APDU bytes.
pub fn build_transaction(kind: TransactionType) -> ApduCommand {
    ApduCommand::new(0x00, 0xA4, 0x04, 0x00).with_le(kind.select_parameter())
}
