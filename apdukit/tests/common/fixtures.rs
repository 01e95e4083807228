// fixtures.rs — commonly used readers, scripts and session setups

#![allow(dead_code)]

use apdukit::prelude::*;
use apdukit::transport::mock::{MockConnector, MockReply};

/// Full reader name the tests select by substring.
pub const READER: &str = "ACR122U PICC 00";

/// Second enumerated reader, never selected by the default fixtures.
pub const OTHER_READER: &str = "Omnikey 3021 00";

pub fn connector() -> MockConnector {
    MockConnector::new(&[READER, OTHER_READER])
}

/// Session with a selected device and the given per-connection reply
/// scripts queued, ready to run operations.
pub fn session_with(scripts: Vec<Vec<MockReply>>) -> Session<MockConnector> {
    let mut connector = connector();
    for script in scripts {
        connector.push_script(script);
    }
    let mut session = Session::new(connector);
    let report = session.select_device("ACR122U");
    assert!(report.is_success(), "fixture device selection failed");
    session
}

/// Session additionally primed with a card type.
pub fn session_for(card_type: CardType, scripts: Vec<Vec<MockReply>>) -> Session<MockConnector> {
    let mut session = session_with(scripts);
    assert!(session.select_card_type(card_type).is_success());
    session
}
