//! The uniform response envelope used by every REST-facing handler.
//!
//! Two outcome shapes exist: success (`status: true` with a `data` payload,
//! always HTTP 200) and failure (`status: false`, no `data` key — see
//! [`crate::error::ApiError`]). A null payload is still a success: the
//! single-member endpoint serializes `"data": null` for an absent username
//! rather than producing a failure envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// The success envelope: `{status: true, message, data}`.
///
/// `data` is always serialized, including when the payload is `None` — the
/// null-data-on-success policy is part of the wire contract.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    /// Always `true` for this shape.
    pub status: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The payload; may serialize as `null`.
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wraps a payload in a success envelope.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
