// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! # Authenticated Data Client
//!
//! HTTP client for the display widgets: profile hydration and the
//! service/booking/feedback listings. Every request carries the persisted
//! session token as a bearer credential when one is present.
//!
//! This is a data path only. Nothing fetched here influences the guard's
//! access decisions, and no fetch failure blocks navigation.

pub mod error;
pub mod profile;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::models::{Booking, Feedback, Service};
use crate::session::SessionProvider;

pub use error::FetchError;

/// Endpoint paths, relative to the backend base URL.
const PROFILE_PATH: &str = "/api/users/profile";
const SERVICES_PATH: &str = "/api/services";
const BOOKINGS_PATH: &str = "/api/bookings";
const FEEDBACK_PATH: &str = "/api/feedback";

/// Bearer-authenticated client for the dashboard backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionProvider>,
}

impl ApiClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: Url, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    /// Create a client from `KOIVET_API_URL`, falling back to the default URL.
    pub fn from_env(session: Arc<dyn SessionProvider>) -> Result<Self, FetchError> {
        let base = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Ok(Self::new(Url::parse(&base)?, session))
    }

    /// List the treatment catalog.
    pub async fn list_services(&self) -> Result<Vec<Service>, FetchError> {
        self.get_json(SERVICES_PATH).await
    }

    /// List booking rows for the booking tables.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, FetchError> {
        self.get_json(BOOKINGS_PATH).await
    }

    /// List feedback entries for the analytics charts.
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, FetchError> {
        self.get_json(FEEDBACK_PATH).await
    }

    /// Authenticated GET returning a typed JSON body.
    ///
    /// Attaches the bearer header only when a token is persisted; with no
    /// session the backend answers 401 and that surfaces as an error here.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.base_url.join(path)?;

        let mut request = self.http.get(url);
        if let Some(token) = self.session.read() {
            request = request.bearer_auth(token);
        }

        let body = request.send().await?.error_for_status()?.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::InMemoryTokenStore;
    use axum::{
        extract::State,
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};

    /// Spawn a stub backend and return its base URL.
    pub(crate) async fn spawn_stub(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });
        Url::parse(&format!("http://{addr}")).expect("stub url")
    }

    fn bearer_of(headers: &HeaderMap) -> Option<String> {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string)
    }

    async fn services_requiring_token(
        State(expected): State<String>,
        headers: HeaderMap,
    ) -> Result<Json<Value>, StatusCode> {
        if bearer_of(&headers).as_deref() != Some(expected.as_str()) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Json(json!([
            {"id": "svc_1", "name": "Pond consultation", "price": 49.0},
            {"id": "svc_2", "name": "Koi ulcer treatment", "description": "Topical", "price": 120.5}
        ])))
    }

    #[tokio::test]
    async fn list_services_sends_bearer_and_parses_body() {
        let router = Router::new()
            .route("/api/services", get(services_requiring_token))
            .with_state("tok_staff".to_string());
        let base = spawn_stub(router).await;

        let session = Arc::new(InMemoryTokenStore::with_token("tok_staff"));
        let client = ApiClient::new(base, session);

        let services = client.list_services().await.expect("listing succeeds");
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].name, "Pond consultation");
        assert_eq!(services[1].description.as_deref(), Some("Topical"));
    }

    #[tokio::test]
    async fn missing_token_surfaces_unauthorized() {
        let router = Router::new()
            .route("/api/services", get(services_requiring_token))
            .with_state("tok_staff".to_string());
        let base = spawn_stub(router).await;

        let client = ApiClient::new(base, Arc::new(InMemoryTokenStore::new()));

        let err = client.list_services().await.expect_err("401 surfaces");
        match err {
            FetchError::Http(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn list_bookings_and_feedback_parse_timestamps() {
        async fn bookings() -> Json<Value> {
            Json(json!([{
                "id": "bk_1",
                "customerName": "Linh",
                "serviceName": "Pond consultation",
                "status": "confirmed",
                "bookingDate": "2026-08-20T09:30:00Z"
            }]))
        }
        async fn feedback() -> Json<Value> {
            Json(json!([{
                "id": "fb_1",
                "userName": "linh88",
                "rating": 5,
                "comment": "Koi fully recovered",
                "createdAt": "2026-08-21T12:00:00Z"
            }]))
        }

        let router = Router::new()
            .route("/api/bookings", get(bookings))
            .route("/api/feedback", get(feedback));
        let base = spawn_stub(router).await;

        let session = Arc::new(InMemoryTokenStore::with_token("tok"));
        let client = ApiClient::new(base, session);

        let bookings = client.list_bookings().await.expect("bookings parse");
        assert_eq!(bookings[0].customer_name, "Linh");

        let feedback = client.list_feedback().await.expect("feedback parses");
        assert_eq!(feedback[0].rating, 5);
    }
}
