#[path = "../common/mod.rs"]
mod common;

use apdukit::prelude::*;
use apdukit::transport::mock::MockReply;
use common::fixtures;

#[test]
fn policy_starts_detailed() {
    let session = Session::new(fixtures::connector());
    assert_eq!(session.error_policy(), ErrorPolicy::Detailed);
}

#[test]
fn set_policy_reports_the_new_level() {
    let session = Session::new(fixtures::connector());

    let report = session.set_error_policy(ErrorPolicy::Simple);
    assert_eq!(report.message(), "Error handling set to: simple");
    assert_eq!(session.error_policy(), ErrorPolicy::Simple);

    let report = session.set_error_policy(ErrorPolicy::Detailed);
    assert_eq!(report.message(), "Error handling set to: detailed");
}

#[test]
fn same_failure_renders_differently_under_each_policy() {
    let script = || vec![MockReply::status(0x6A, 0x82)];
    let mut session = fixtures::session_for(CardType::Mifare, vec![script(), script()]);

    let detailed = session.read();
    assert_eq!(
        detailed.message(),
        "APDU command failed with status words 6A 82"
    );

    session.set_error_policy(ErrorPolicy::Simple);
    let simple = session.read();
    assert_eq!(simple.message(), "An error occurred. Please try again.");
    assert!(!simple.message().contains("6A"));

    // Only the rendered message differs; the failure kind is stable.
    let kind_of = |report: &OperationReport| match &report.result {
        OperationResult::Failure { kind, .. } => *kind,
        other => panic!("expected failure, got {:?}", other),
    };
    assert_eq!(kind_of(&detailed), kind_of(&simple));
    assert_eq!(kind_of(&detailed), FailureKind::Apdu);
}

#[test]
fn toggling_back_restores_detail_for_later_operations() {
    let script = || vec![MockReply::Fault("reader unplugged".into())];
    let mut session = fixtures::session_for(CardType::Ndef, vec![script(), script()]);

    session.set_error_policy(ErrorPolicy::Simple);
    assert_eq!(
        session.read().message(),
        "An error occurred. Please try again."
    );

    session.set_error_policy(ErrorPolicy::Detailed);
    assert!(session.read().message().contains("reader unplugged"));
}

#[test]
fn usage_errors_ignore_the_simple_policy() {
    let mut session = fixtures::session_with(vec![]);
    session.set_error_policy(ErrorPolicy::Simple);

    // Pre-flight validation failures keep their full detail: they are
    // usage errors, not device faults.
    let report = session.send_custom_apdu("not-hex");
    assert!(report.message().contains("not-hex"));

    let report = session.read();
    assert_eq!(report.message(), "no card type selected");
}

#[test]
fn success_payload_is_policy_independent() {
    let script = || vec![MockReply::success(vec![0xBE, 0xEF])];
    let mut session = fixtures::session_for(CardType::Mifare, vec![script(), script()]);

    let detailed = session.read();
    session.set_error_policy(ErrorPolicy::Simple);
    let simple = session.read();
    assert_eq!(detailed.result, simple.result);
    assert_eq!(detailed.message(), "BE EF");
}
