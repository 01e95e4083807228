// apdukit/src/transport/traits.rs

use crate::Result;

/// One open connection to a reader+card pair.
///
/// Taking `&mut self` for [`exchange`](Transport::exchange) guarantees at
/// most one exchange in flight per connection; the underlying channel is
/// half-duplex and the card's internal state depends on exchange order.
pub trait Transport {
    /// Transmit one command APDU and return the raw response bytes.
    /// `timeout_ms` bounds the exchange where the backend supports it; a
    /// hang surfaces as a transport fault.
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;

    /// Name of the reader this connection belongs to.
    fn reader_name(&self) -> &str;
}

/// Factory for [`Transport`] connections over an enumerable set of
/// readers. The dispatcher opens one connection per operation
/// invocation and drops it when the operation completes.
pub trait Connector {
    /// Names of the currently enumerated readers.
    fn readers(&self) -> Result<Vec<String>>;

    /// Open a connection to the named reader.
    fn connect(&mut self, reader: &str) -> Result<Box<dyn Transport>>;
}
