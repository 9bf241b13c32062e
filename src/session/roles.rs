// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! User roles for route authorization.

use serde::{Deserialize, Serialize};

/// User roles for route authorization.
///
/// ## Roles
///
/// - `Admin` - Full dashboard access (catalog, bookings, analytics)
/// - `Vet` - Veterinarian, works assigned bookings
/// - `Staff` - Front-desk staff, manages bookings and feedback
/// - `Customer` - Customer-facing views only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Veterinarian
    Vet,
    /// Front-desk staff
    Staff,
    /// Customer
    Customer,
}

impl Role {
    /// Parse a role from its wire string (case-insensitive).
    ///
    /// Returns `None` for anything outside the clinic's role vocabulary;
    /// the decoder treats that as a malformed token rather than guessing.
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "vet" => Some(Role::Vet),
            "staff" => Some(Role::Staff),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Vet => write!(f, "vet"),
            Role::Staff => write!(f, "staff"),
            Role::Customer => write!(f, "customer"),
        }
    }
}
