// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 KoiVet Care

//! Token decode errors.

use thiserror::Error;

/// Reasons a persisted token failed the structural parse.
///
/// Callers must treat every variant identically to "no token": the guard
/// maps a failed decode to the `Unauthenticated` verdict (fail-closed) and
/// nothing here ever reaches the render path as an exception.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Token is not three dot-separated segments
    #[error("token does not have three segments")]
    WrongSegmentCount,
    /// Payload segment is not valid unpadded base64url
    #[error("token payload is not valid base64url")]
    PayloadNotBase64,
    /// Payload bytes are not a JSON object
    #[error("token payload is not valid JSON")]
    PayloadNotJson,
    /// A required claim is absent from the payload
    #[error("token payload is missing the `{0}` claim")]
    MissingClaim(&'static str),
    /// Role claim is outside the clinic's role vocabulary
    #[error("token payload carries unknown role `{0}`")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            DecodeError::MissingClaim("role").to_string(),
            "token payload is missing the `role` claim"
        );
        assert_eq!(
            DecodeError::UnknownRole("wizard".into()).to_string(),
            "token payload carries unknown role `wizard`"
        );
    }
}
