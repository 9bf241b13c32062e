// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Token payload decoding.
//!
//! The persisted token is three base64url segments separated by `.`. Only
//! segment 2 (the payload) is read; header and signature are ignored, which
//! is the point: this is a structural parse, not verification. Expiry is
//! handled externally by the login flow and is not checked here.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;

use super::error::DecodeError;
use super::roles::Role;

/// Raw payload claims as minted by the backend (camelCase JSON).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// User identity extracted from a token payload.
///
/// Derivable only from a structurally valid token carrying both `userName`
/// and `role`; anything less yields no identity at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_name: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

/// Decode a token's payload segment into an [`Identity`].
///
/// Pure and local: no network, no signature check, no expiry check. Every
/// failure mode is a [`DecodeError`] the caller must treat identically to
/// "no token" (fail-closed).
pub fn decode_identity(token: &str) -> Result<Identity, DecodeError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::WrongSegmentCount);
    };

    let payload_bytes =
        Base64UrlUnpadded::decode_vec(payload).map_err(|_| DecodeError::PayloadNotBase64)?;

    let payload: TokenPayload =
        serde_json::from_slice(&payload_bytes).map_err(|_| DecodeError::PayloadNotJson)?;

    let user_name = payload
        .user_name
        .filter(|name| !name.is_empty())
        .ok_or(DecodeError::MissingClaim("userName"))?;

    let role_str = payload.role.ok_or(DecodeError::MissingClaim("role"))?;
    let role = Role::from_str(&role_str).ok_or(DecodeError::UnknownRole(role_str))?;

    Ok(Identity {
        user_name,
        role,
        first_name: payload.first_name,
        last_name: payload.last_name,
        gender: payload.gender,
        email: payload.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token (signature never checked by the decoder).
    fn make_token(payload_json: &str) -> String {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        format!(
            "{}.{}.fake_signature",
            URL_SAFE_NO_PAD.encode(header.as_bytes()),
            URL_SAFE_NO_PAD.encode(payload_json.as_bytes()),
        )
    }

    #[test]
    fn decodes_full_identity() {
        let token = make_token(
            r#"{
                "userName": "mai.tran",
                "role": "staff",
                "firstName": "Mai",
                "lastName": "Tran",
                "gender": "female",
                "email": "mai@koivet.example"
            }"#,
        );

        let identity = decode_identity(&token).expect("decode succeeds");
        assert_eq!(identity.user_name, "mai.tran");
        assert_eq!(identity.role, Role::Staff);
        assert_eq!(identity.first_name.as_deref(), Some("Mai"));
        assert_eq!(identity.email.as_deref(), Some("mai@koivet.example"));
    }

    #[test]
    fn decodes_with_only_required_claims() {
        let token = make_token(r#"{"userName":"anon","role":"customer"}"#);
        let identity = decode_identity(&token).expect("decode succeeds");
        assert_eq!(identity.role, Role::Customer);
        assert!(identity.first_name.is_none());
    }

    #[test]
    fn header_and_signature_are_ignored() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        // Header is not even base64; signature is garbage. Only the payload counts.
        let payload = URL_SAFE_NO_PAD.encode(br#"{"userName":"u","role":"admin"}"#);
        let token = format!("!!not-base64!!.{payload}.%%%");

        let identity = decode_identity(&token).expect("decode succeeds");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(
            decode_identity("just-one-segment"),
            Err(DecodeError::WrongSegmentCount)
        );
        assert_eq!(decode_identity("two.segments"), Err(DecodeError::WrongSegmentCount));
        assert_eq!(decode_identity("a.b.c.d"), Err(DecodeError::WrongSegmentCount));
    }

    #[test]
    fn rejects_non_base64_payload() {
        assert_eq!(
            decode_identity("header.!!!.signature"),
            Err(DecodeError::PayloadNotBase64)
        );
    }

    #[test]
    fn rejects_non_json_payload() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        let payload = URL_SAFE_NO_PAD.encode(b"this is not json");
        let token = format!("h.{payload}.s");
        assert_eq!(decode_identity(&token), Err(DecodeError::PayloadNotJson));
    }

    #[test]
    fn rejects_missing_required_claims() {
        let no_role = make_token(r#"{"userName":"mai"}"#);
        assert_eq!(decode_identity(&no_role), Err(DecodeError::MissingClaim("role")));

        let no_name = make_token(r#"{"role":"admin"}"#);
        assert_eq!(
            decode_identity(&no_name),
            Err(DecodeError::MissingClaim("userName"))
        );

        let empty_name = make_token(r#"{"userName":"","role":"admin"}"#);
        assert_eq!(
            decode_identity(&empty_name),
            Err(DecodeError::MissingClaim("userName"))
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let token = make_token(r#"{"userName":"mai","role":"wizard"}"#);
        assert_eq!(
            decode_identity(&token),
            Err(DecodeError::UnknownRole("wizard".to_string()))
        );
    }
}
