// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! KoiVet Session - Dashboard Session Guard & Data Client
//!
//! This crate provides the session/authorization subsystem of the KoiVet
//! front-office dashboard: it decides, per navigation, whether the current
//! visitor may see a protected view, and it hydrates display widgets with
//! bearer-authenticated data.
//!
//! ## Modules
//!
//! - `session` - Token store, payload decoder, role policy, route guard
//! - `client` - Authenticated HTTP client (profile, services, bookings, feedback)
//! - `models` - Display-only payload types
//! - `config` - Environment variable names and defaults
//!
//! ## Security
//!
//! The guard is navigation UX, not an enforcement point: the token payload is
//! parsed structurally without signature verification, so any client can
//! forge one. Real authorization is re-verified server-side on every call.

pub mod client;
pub mod config;
pub mod models;
pub mod session;
