#[path = "../common/mod.rs"]
mod common;

use apdukit::prelude::*;
use apdukit::transport::mock::MockReply;
use common::fixtures;

fn full_scan_script(reply: fn(u8) -> MockReply) -> Vec<MockReply> {
    (0x00..=0x0Fu8).map(reply).collect()
}

#[test]
fn scan_visits_every_block_once_in_ascending_order() {
    let mut session = fixtures::session_with(vec![full_scan_script(|block| {
        MockReply::success(vec![block, 0xAA])
    })]);

    let report = session.brute_force_blocks(&CancelToken::new());

    assert_eq!(report.log.len(), 16);
    for (i, line) in report.log.iter().enumerate() {
        assert!(
            line.starts_with(&format!("Block {i:02X}: ")),
            "unexpected line {line:?}"
        );
    }
    assert_eq!(report.message(), "Brute-force complete.");

    let sent = session.connector().sent();
    assert_eq!(sent.len(), 16);
    for (i, apdu) in sent.iter().enumerate() {
        assert_eq!(apdu, &vec![0xFF, 0xB0, 0x00, i as u8, 0x10]);
    }
    // One connection serves the whole scan.
    assert_eq!(session.connector().connections, 1);
}

#[test]
fn block_labels_are_two_digit_uppercase_hex() {
    let mut session = fixtures::session_with(vec![full_scan_script(|_| {
        MockReply::success(vec![])
    })]);

    let report = session.brute_force_blocks(&CancelToken::new());
    assert!(report.log[10].starts_with("Block 0A: "));
    assert!(report.log[15].starts_with("Block 0F: "));
}

#[test]
fn scan_continues_past_failing_blocks() {
    let mut session = fixtures::session_with(vec![full_scan_script(|block| {
        if block % 2 == 0 {
            MockReply::status(0x6A, 0x82)
        } else {
            MockReply::success(vec![block])
        }
    })]);

    let report = session.brute_force_blocks(&CancelToken::new());

    assert_eq!(report.log.len(), 16);
    assert!(report.log[0].contains("6A"));
    assert!(report.log[1].contains("01"));
    assert_eq!(report.message(), "Brute-force complete.");
    assert_eq!(session.connector().sent().len(), 16);
}

#[test]
fn scan_survives_an_entirely_unresponsive_card() {
    // Empty script: every exchange times out, the scan still terminates.
    let mut session = fixtures::session_with(vec![vec![]]);

    let report = session.brute_force_blocks(&CancelToken::new());
    assert_eq!(report.log.len(), 16);
    for line in &report.log {
        assert!(line.contains("timed out"), "unexpected line {line:?}");
    }
    assert!(report.is_success());
}

#[test]
fn simple_policy_applies_to_per_block_lines() {
    let mut session = fixtures::session_with(vec![full_scan_script(|_| {
        MockReply::status(0x69, 0x85)
    })]);
    session.set_error_policy(ErrorPolicy::Simple);

    let report = session.brute_force_blocks(&CancelToken::new());
    for line in &report.log {
        assert!(line.ends_with("An error occurred. Please try again."));
        assert!(!line.contains("69"));
    }
}

#[test]
fn cancellation_stops_the_scan_between_blocks() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut session = fixtures::session_with(vec![full_scan_script(|_| {
        MockReply::success(vec![])
    })]);

    let report = session.brute_force_blocks(&cancel);
    assert!(report.log.is_empty());
    assert!(matches!(
        report.result,
        OperationResult::Failure {
            kind: FailureKind::Cancelled,
            ..
        }
    ));
    assert!(session.connector().sent().is_empty());
}

#[test]
fn scan_requires_a_selected_device() {
    let mut session = Session::new(fixtures::connector());
    let report = session.brute_force_blocks(&CancelToken::new());
    assert!(matches!(
        report.result,
        OperationResult::Failure {
            kind: FailureKind::NoDeviceSelected,
            ..
        }
    ));
    assert!(report.log.is_empty());
}
