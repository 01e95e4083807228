use apdukit::protocol::ApduCommand;
use apdukit::protocol::commands::{build_read, build_read_block, build_transaction, build_write};
use apdukit::{CardType, Error, TransactionType};
use proptest::prelude::*;

#[test]
fn wire_field_order() {
    // [CLA][INS][P1][P2] [Lc DATA..] [Le], optional groups only when present
    assert_eq!(
        ApduCommand::new(0x00, 0xC0, 0x00, 0x00).encode(),
        vec![0x00, 0xC0, 0x00, 0x00]
    );
    assert_eq!(
        ApduCommand::new(0x00, 0xC0, 0x00, 0x00).with_le(0x0A).encode(),
        vec![0x00, 0xC0, 0x00, 0x00, 0x0A]
    );
    assert_eq!(
        ApduCommand::new(0x00, 0xD6, 0x00, 0x00)
            .with_data(vec![0x01, 0x02])
            .unwrap()
            .with_le(0x00)
            .encode(),
        vec![0x00, 0xD6, 0x00, 0x00, 0x02, 0x01, 0x02, 0x00]
    );
}

#[test]
fn mifare_write_reference_bytes() {
    let cmd = build_write(CardType::Mifare, vec![0x01, 0x02, 0x03]).unwrap();
    assert_eq!(cmd.encode(), hex::decode("ffd6000403010203").unwrap());
}

#[test]
fn read_builders_per_card_type() {
    assert_eq!(
        build_read(CardType::Mifare).unwrap().encode(),
        vec![0xFF, 0xB0, 0x00, 0x04, 0x10]
    );
    assert_eq!(
        build_read(CardType::Ndef).unwrap().encode(),
        vec![0x00, 0xB0, 0x00, 0x00, 0x20]
    );
    assert_eq!(
        build_read(CardType::PaymentCard).unwrap().encode(),
        vec![0x00, 0xB2, 0x01, 0x0C, 0x00]
    );
    assert!(matches!(
        build_read(CardType::JavaCard),
        Err(Error::UnsupportedOperation { .. })
    ));
}

#[test]
fn transaction_builder_never_encodes_an_amount() {
    // Every transaction command is exactly five bytes regardless of what
    // amount the caller later reports.
    for kind in [
        TransactionType::Credit,
        TransactionType::Debit,
        TransactionType::Loyalty,
        TransactionType::Gift,
        TransactionType::TapToPay,
    ] {
        assert_eq!(build_transaction(kind).encode().len(), 5);
    }
}

#[test]
fn read_block_covers_scan_range() {
    for block in 0x00..=0x0Fu8 {
        let encoded = build_read_block(block).encode();
        assert_eq!(encoded, vec![0xFF, 0xB0, 0x00, block, 0x10]);
    }
}

proptest! {
    // The encoded length field always equals the exact data byte count,
    // for any data that fits a short APDU.
    #[test]
    fn lc_matches_data_len(data in prop::collection::vec(any::<u8>(), 1..=255),
                           card_type in prop::sample::select(vec![
                               CardType::Mifare, CardType::Ndef, CardType::PaymentCard])) {
        let encoded = build_write(card_type, data.clone()).unwrap().encode();
        prop_assert_eq!(encoded[4] as usize, data.len());
        prop_assert_eq!(&encoded[5..], &data[..]);
    }
}
