// apdukit/src/transport/mod.rs

//! Reader I/O. The [`Transport`] and [`Connector`] traits abstract the
//! PC/SC stack away from the dispatcher so operations can be exercised
//! against [`mock::MockConnector`] in tests.

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use traits::{Connector, Transport};
