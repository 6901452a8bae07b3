//! Shared token slot.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Atomically swappable slot for the current auth token.
#[derive(Default)]
pub struct CredentialStore {
    token: ArcSwapOption<String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new token, replacing any previous one.
    pub fn store(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
    }

    /// Drop the stored token (logout).
    pub fn clear(&self) {
        self.token.store(None);
    }

    /// The current token, if any. Read freshly by every dispatch.
    pub fn current(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }
}
