// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the crate. Configuration is loaded from the environment by the
//! host application at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `KOIVET_API_URL` | Base URL of the KoiVet backend | `http://localhost:8080` |
//! | `KOIVET_TOKEN_FILE` | Path of the persisted session token | `.koivet/session-token` |

/// Environment variable name for the backend base URL.
///
/// All profile and listing requests are resolved against this URL.
pub const API_URL_ENV: &str = "KOIVET_API_URL";

/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable name for the session token file path.
///
/// The token file is the storage contract with the login flow: login writes
/// the bearer token there, logout deletes it. This crate only ever reads it.
pub const TOKEN_FILE_ENV: &str = "KOIVET_TOKEN_FILE";

/// Default session token path, relative to the working directory.
pub const DEFAULT_TOKEN_FILE: &str = ".koivet/session-token";
