// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

//! Gateway-identity extractor for Axum handlers.
//!
//! Authentication happens upstream; the gateway forwards the resolved user
//! id in a trusted header. Handlers that require an identity take this
//! extractor as a parameter and get a 401 rejection when the header is
//! missing or unreadable.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

/// Header carrying the authenticated user id, set by the gateway.
pub const AUTH_USER_HEADER: &str = "x-auth-user";

/// Authenticated identity for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(AUTH_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthUser {
            user_id: user_id.to_string(),
        })
    }
}
