// apdukit/src/policy.rs

//! Error-policy storage.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::types::ErrorPolicy;

/// Atomic holder for the active [`ErrorPolicy`].
///
/// The policy is shared mutable state read by every failure-rendering
/// path; `set` is a single atomic store, so a concurrently classifying
/// operation observes either the old or the new value, never a torn
/// one. Toggling has no effect on classifications already performed.
#[derive(Debug)]
pub struct PolicyCell(AtomicU8);

impl PolicyCell {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self(AtomicU8::new(policy as u8))
    }

    pub fn get(&self) -> ErrorPolicy {
        ErrorPolicy::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, policy: ErrorPolicy) {
        self.0.store(policy as u8, Ordering::Relaxed);
    }
}

impl Default for PolicyCell {
    fn default() -> Self {
        Self::new(ErrorPolicy::Detailed)
    }
}
