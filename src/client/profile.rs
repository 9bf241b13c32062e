// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Profile hydration for the header and sidebar widgets.

use tracing::warn;

use super::{ApiClient, PROFILE_PATH};
use crate::models::Profile;

impl ApiClient {
    /// Fetch the signed-in user's display profile.
    ///
    /// Invoked once on widget mount. Any failure is logged and swallowed:
    /// the widgets render the empty default shape instead. No retries, no
    /// error into the render path, and no effect on the guard's verdict.
    pub async fn fetch_profile(&self) -> Profile {
        match self.get_json::<Profile>(PROFILE_PATH).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "profile fetch failed, rendering empty profile");
                Profile::default()
            }
        }
    }
}
