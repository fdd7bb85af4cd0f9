//! Identity classification API route.
//!
//! ## Routes
//!
//! - `GET /whoami?profile_pic_url=...` - Classify the caller by avatar URL
//!
//! Unlike the member routes, absence here is a failure: a missing query
//! parameter or an unknown avatar URL produces the failure envelope (with
//! HTTP 200, per the service-wide policy).

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::envelope::Envelope;
use crate::error::{ApiError, ApiResult};
use crate::server::AppState;

/// Query parameters for the identity lookup.
#[derive(Debug, Deserialize)]
pub(crate) struct WhoamiParams {
    /// Avatar URL to match, full string including any query suffix.
    profile_pic_url: Option<String>,
}

/// Identity classification result.
#[derive(Debug, Serialize, ToSchema)]
pub struct WhoamiResponse {
    /// The matched member's role, verbatim.
    pub role: String,
    /// True iff the role is the case-insensitive literal `"owner"`.
    pub admin: bool,
}

/// Creates the whoami route.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/whoami", get(whoami))
}

/// Classify the caller as owner or member by avatar URL.
///
/// GET /whoami?profile_pic_url=...
#[utoipa::path(
    get,
    path = "/whoami",
    tag = "whoami",
    params(
        ("profile_pic_url" = Option<String>, Query, description = "Exact avatar URL of the caller")
    ),
    responses(
        (status = 200, description = "Success envelope on match; failure envelope (still HTTP 200) when the parameter is missing or no member matches", body = Envelope<WhoamiResponse>),
    )
)]
pub(crate) async fn whoami(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WhoamiParams>,
) -> ApiResult<Envelope<WhoamiResponse>> {
    let Some(url) = params.profile_pic_url.as_deref() else {
        return Err(ApiError::missing_query_parameters());
    };

    tracing::debug!(profile_pic_url = %url, "Classifying caller");

    let member = state
        .directory
        .find_by_avatar_url(url)
        .ok_or_else(ApiError::member_not_found)?;

    Ok(Envelope::success(
        "Member found",
        WhoamiResponse {
            role: member.role.clone(),
            admin: member.is_owner(),
        },
    ))
}
