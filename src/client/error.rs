// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Data client errors.

use thiserror::Error;

/// Failure of an authenticated data fetch.
///
/// A value for the widgets to handle, never fatal: the worst case is an
/// empty table or chart. Fetch failures never feed back into the guard.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success status from the backend
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Endpoint path did not resolve against the base URL
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}
