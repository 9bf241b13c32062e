// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Token stores.
//!
//! The guard never reads persisted state directly; it goes through the
//! [`SessionProvider`] capability so its decision logic stays a pure function
//! of (token, required roles) in tests. Login and logout flows own writing
//! and deleting the token; this module only reads.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::config::{DEFAULT_TOKEN_FILE, TOKEN_FILE_ENV};

/// Read access to the persisted session token.
///
/// Storage unavailable and token absent are the same observable outcome:
/// `None`. Implementations must never panic or surface an error.
pub trait SessionProvider: Send + Sync {
    /// Return the current bearer token, if one is persisted.
    fn read(&self) -> Option<String>;
}

impl<S: SessionProvider + ?Sized> SessionProvider for std::sync::Arc<S> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }
}

/// Token store backed by a file at a fixed path.
///
/// The path is the storage contract with the login flow (the dashboard's
/// equivalent of a fixed local-storage key). A missing, unreadable, or empty
/// file all read as "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store from `KOIVET_TOKEN_FILE`, falling back to the default path.
    pub fn from_env() -> Self {
        let path = std::env::var(TOKEN_FILE_ENV).unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string());
        Self::new(path)
    }

    /// Path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for FileTokenStore {
    fn read(&self) -> Option<String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "session token unreadable");
                return None;
            }
        };

        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// In-memory token store for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    /// Create an empty store (no session).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token. `None` clears the session.
    pub fn set(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }
}

impl SessionProvider for InMemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }
}
