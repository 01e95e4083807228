use apdukit::Error;
use apdukit::transport::mock::{MockConnector, MockReply, MockTransport};
use apdukit::transport::{Connector, Transport};

#[test]
fn replies_are_consumed_in_order() {
    let mut transport = MockTransport::new("Reader A");
    transport.push_reply(MockReply::success(vec![0x01]));
    transport.push_reply(MockReply::status(0x6A, 0x82));

    assert_eq!(
        transport.exchange(&[0xA0], 1000).unwrap(),
        vec![0x01, 0x90, 0x00]
    );
    assert_eq!(transport.exchange(&[0xA1], 1000).unwrap(), vec![0x6A, 0x82]);
    assert_eq!(transport.sent(), vec![vec![0xA0], vec![0xA1]]);
}

#[test]
fn exhausted_script_behaves_like_a_hang() {
    let mut transport = MockTransport::new("Reader A");
    assert!(matches!(
        transport.exchange(&[0x00], 1000),
        Err(Error::Timeout)
    ));
    // Timeouts are device faults and are policy-filtered downstream.
    assert!(Error::Timeout.is_device_fault());
}

#[test]
fn connector_reader_enumeration() {
    let connector = MockConnector::new(&["Reader A", "Reader B"]);
    assert_eq!(
        connector.readers().unwrap(),
        vec!["Reader A".to_string(), "Reader B".to_string()]
    );
}

#[test]
fn connection_carries_the_reader_name() {
    let mut connector = MockConnector::new(&["Reader A"]);
    connector.push_script(vec![]);
    let transport = connector.connect("Reader A").unwrap();
    assert_eq!(transport.reader_name(), "Reader A");
}

#[test]
fn unscripted_connection_times_out_on_exchange() {
    let mut connector = MockConnector::new(&["Reader A"]);
    let mut transport = connector.connect("Reader A").unwrap();
    assert!(matches!(
        transport.exchange(&[0x00, 0xA4, 0x04, 0x00], 1000),
        Err(Error::Timeout)
    ));
}
