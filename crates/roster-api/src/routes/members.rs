//! Member listing and single-member API routes.
//!
//! ## Routes
//!
//! - `GET /members` - Full member roster, source order
//! - `GET /member/{username}` - Single member by exact username
//!
//! Neither route can fail: an unknown username yields a success envelope
//! with `data: null`, not a failure. Contrast with the `/whoami` route,
//! which raises on an unknown avatar URL — the asymmetry is part of the
//! contract.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use serde::Serialize;
use utoipa::ToSchema;

use roster_core::Member;

use crate::envelope::Envelope;
use crate::server::AppState;

/// One member record as served over the wire.
#[derive(Debug, Serialize, ToSchema)]
pub struct MemberResponse {
    /// Display name.
    pub name: String,
    /// Stable handle, the lookup key.
    pub username: String,
    /// Avatar URL.
    pub profile_pic_url: String,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Public repository count.
    pub repositories: u64,
    /// Free-text bio, may be empty.
    pub bio: String,
    /// Link to the member's GitHub profile.
    pub github_link: String,
    /// Free-text role classification.
    pub role: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            username: member.username.clone(),
            profile_pic_url: member.profile_pic_url.clone(),
            followers: member.followers,
            following: member.following,
            repositories: member.repositories,
            bio: member.bio.clone(),
            github_link: member.github_link.clone(),
            role: member.role.clone(),
        }
    }
}

/// Creates member routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/members", get(list_members))
        .route("/member/{username}", get(get_member))
}

/// List all members.
///
/// GET /members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "Full member roster", body = Envelope<Vec<MemberResponse>>),
    )
)]
pub(crate) async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Envelope<Vec<MemberResponse>> {
    tracing::debug!(count = state.directory.len(), "Listing members");

    let members = state
        .directory
        .all()
        .iter()
        .map(MemberResponse::from)
        .collect();

    Envelope::success("Members list", members)
}

/// Get a member by username.
///
/// GET /member/{username}
///
/// An unknown username is not an error: the envelope reports success with
/// `data: null`.
#[utoipa::path(
    get,
    path = "/member/{username}",
    tag = "members",
    params(
        ("username" = String, Path, description = "Exact, case-sensitive username")
    ),
    responses(
        (status = 200, description = "Member, or null when absent", body = Envelope<Option<MemberResponse>>),
    )
)]
pub(crate) async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Envelope<Option<MemberResponse>> {
    tracing::debug!(username = %username, "Getting member");

    let member = state
        .directory
        .find_by_username(&username)
        .map(MemberResponse::from);

    Envelope::success("Success", member)
}
