// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! # Display Payload Models
//!
//! Response data structures consumed by the dashboard's display widgets.
//! The backend speaks camelCase JSON, so every type carries a serde rename.
//! These are presentation payloads only: nothing in this module feeds back
//! into the guard's access decisions.
//!
//! ## Model Categories
//!
//! - **Profile**: the signed-in user's display fields (header/sidebar)
//! - **Services**: the treatment catalog
//! - **Bookings**: appointment rows for the booking tables
//! - **Feedback**: customer feedback entries behind the analytics charts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Profile
// =============================================================================

/// The signed-in user's display profile.
///
/// Hydrated by [`crate::client::ApiClient::fetch_profile`]; when the fetch
/// fails the widgets render this type's empty default shape instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Login name, also the display fallback when names are absent.
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// Service Catalog
// =============================================================================

/// A treatment or consultation offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

// =============================================================================
// Bookings
// =============================================================================

/// An appointment row as listed in the booking tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    /// Name of the customer who booked.
    pub customer_name: String,
    /// Name of the booked service.
    pub service_name: String,
    /// Server-owned status string, rendered verbatim.
    pub status: String,
    pub booking_date: DateTime<Utc>,
}

// =============================================================================
// Feedback
// =============================================================================

/// A customer feedback entry feeding the analytics charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub user_name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
