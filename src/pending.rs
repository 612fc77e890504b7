//! Background key initialization.

use tokio::task::JoinHandle;
use tracing::{debug_span, error};

use crate::{
    error::{Error, Result},
    Credential, Key,
};

/// A key whose initialization is still running
///
/// Resolves exactly once, to the ready [`Key`] or to the error that stopped
/// initialization. Dropping it detaches the task; initialization has no
/// cancellation and runs to completion in the background.
#[derive(Debug)]
pub struct PendingKey {
    handle: JoinHandle<Result<Key>>,
}

impl PendingKey {
    /// Whether the outcome is available, so [`PendingKey::ready`] will not wait
    pub fn is_ready(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for initialization to finish
    ///
    /// # Errors
    ///
    /// The initialization error, or [`Error::IllegalState`] if the task ended
    /// without an outcome.
    pub async fn ready(self) -> Result<Key> {
        self.handle.await.map_err(|e| {
            error!(error = %e, "key initialization task failed");
            Error::IllegalState
        })?
    }
}

impl Key {
    /// Start building a key on tokio's blocking pool
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn(credential: Credential) -> PendingKey {
        let span = debug_span!("key_init");
        let handle = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            Key::from_credential(&credential)
        });

        PendingKey { handle }
    }

    /// Build a key without blocking the async runtime
    pub async fn new(credential: Credential) -> Result<Self> {
        Self::spawn(credential).ready().await
    }
}
