//! Serialization policy for hosts that cannot process concurrent
//! remote-endpoint mutations

use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

/// Host build that cannot safely process concurrent add/delete of remote
/// endpoints; external calls must be serialized on it.
const AFFECTED_BUILD: u32 = 14393;

/// Whether external create/delete calls go through the mutual-exclusion gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerializationMode {
    /// At most one external call at any instant, across all networks.
    Serialized,
    /// The gate is transparent; no ordering imposed.
    Unrestricted,
}

/// Policy resolved once at construction from the probed host build number
/// and never re-evaluated.
///
/// The gate guards only the external service call, not table mutation, so
/// unrelated local bookkeeping is never serialized behind it.
pub struct PlatformPolicy {
    mode: SerializationMode,
    gate: Mutex<()>,
}

impl PlatformPolicy {
    pub fn new(mode: SerializationMode) -> Self {
        Self {
            mode,
            gate: Mutex::new(()),
        }
    }

    /// Resolve the mode from the host build number probed at process start.
    pub fn from_build(build: u32) -> Self {
        let mode = if build == AFFECTED_BUILD {
            info!(
                "Host build {} cannot process concurrent remote endpoint \
                 mutations; serializing external calls",
                build
            );
            SerializationMode::Serialized
        } else {
            SerializationMode::Unrestricted
        };
        Self::new(mode)
    }

    pub fn mode(&self) -> SerializationMode {
        self.mode
    }

    /// Acquire the gate for the duration of one external call.
    ///
    /// Returns a guard to hold across the call when serialized, `None` when
    /// unrestricted. Dropping the guard releases the gate.
    pub async fn acquire(&self) -> Option<MutexGuard<'_, ()>> {
        match self.mode {
            SerializationMode::Serialized => Some(self.gate.lock().await),
            SerializationMode::Unrestricted => None,
        }
    }
}
