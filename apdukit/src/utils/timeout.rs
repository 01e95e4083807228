//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the commonly used default
//! timeout value and provide a small conversion helper so tests and code
//! can express timeouts in milliseconds clearly.

use std::time::Duration;

/// Default per-exchange timeout in milliseconds used by the dispatcher
/// when a caller doesn't provide an explicit timeout.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default exchange timeout as Duration.
pub fn default_exchange_timeout() -> Duration {
    ms(DEFAULT_EXCHANGE_TIMEOUT_MS)
}
