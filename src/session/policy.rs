// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Access policy evaluation.

use serde::Serialize;

use super::claims::Identity;
use super::roles::Role;

/// Three-valued access decision for a protected view.
///
/// Recomputed on every evaluation, never persisted. `Forbidden` is a
/// first-class value driving the UI, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No usable identity (absent or malformed token)
    Unauthenticated,
    /// Identity present and acceptable for the view
    Authorized,
    /// Identity present but its role is not in the required set
    Forbidden,
}

/// Compute the verdict for an identity against a view's required roles.
///
/// Total and deterministic:
/// - no identity yields `Unauthenticated`
/// - an empty required set authorizes any identity
/// - otherwise membership of the identity's role decides
pub fn evaluate(identity: Option<&Identity>, required_roles: &[Role]) -> Verdict {
    let Some(identity) = identity else {
        return Verdict::Unauthenticated;
    };

    if required_roles.is_empty() || required_roles.contains(&identity.role) {
        Verdict::Authorized
    } else {
        Verdict::Forbidden
    }
}
