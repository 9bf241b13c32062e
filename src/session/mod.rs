// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! # Session Module
//!
//! Route-level session and authorization handling for the dashboard.
//!
//! ## Guard Flow
//!
//! 1. On each navigation the host constructs (or re-drives) a [`RouteGuard`]
//!    for the target view's required roles
//! 2. The guard reads the persisted token through its [`SessionProvider`]
//! 3. The token payload is parsed structurally (no signature verification)
//!    into an [`Identity`]; parse failure reads as "no identity"
//! 4. [`evaluate`] maps (identity, required roles) to a [`Verdict`]
//! 5. The verdict drives a redirect, a transient forbidden notice, or
//!    pass-through rendering of the protected view
//!
//! ## Security
//!
//! Nothing here verifies the token cryptographically. A structurally valid
//! payload can be forged by any client, so this module only shapes the
//! navigation experience; the backend re-checks authorization on every call.

pub mod claims;
pub mod error;
pub mod guard;
pub mod policy;
pub mod roles;
pub mod store;

pub use claims::{decode_identity, Identity};
pub use error::DecodeError;
pub use guard::{GuardOutcome, GuardState, Redirect, RouteGuard};
pub use policy::{evaluate, Verdict};
pub use roles::Role;
pub use store::{FileTokenStore, InMemoryTokenStore, SessionProvider};
