// Shared helpers for integration tests.

pub mod fixtures;

/// Initialise test logging once; repeated calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
