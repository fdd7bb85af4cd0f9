//! GraphQL query surface over the member directory.
//!
//! Re-exposes the same lookup semantics as the REST routes through a typed
//! query language:
//!
//! - `members` - full roster, source order
//! - `member(username)` - single member, `null` when absent
//!
//! An absent member is a `null` field value with an empty `errors` array,
//! matching the REST single-member route's null-data policy. A resolver
//! failure surfaces through the engine's `errors` array with the field set
//! to `null`; it is never translated into the REST envelope.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::post;

use roster_core::{Member, MemberDirectory};

use crate::server::AppState;

/// The executable roster schema (queries only; there is no write path).
pub type RosterSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// One member record as exposed through GraphQL.
#[derive(Debug, SimpleObject)]
pub struct MemberObject {
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

impl From<&Member> for MemberObject {
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

/// Root query type.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Full member roster in source order.
    async fn members(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<MemberObject>> {
        let directory = ctx.data::<Arc<MemberDirectory>>()?;
        Ok(directory.all().iter().map(MemberObject::from).collect())
    }

    /// Single member by exact, case-sensitive username; `null` when absent.
    async fn member(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> async_graphql::Result<Option<MemberObject>> {
        let directory = ctx.data::<Arc<MemberDirectory>>()?;
        Ok(directory.find_by_username(&username).map(MemberObject::from))
    }
}

/// Builds the executable schema over the given directory.
#[must_use]
pub fn build_schema(directory: Arc<MemberDirectory>) -> RosterSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(directory)
        .finish()
}

/// Creates the GraphQL routes.
///
/// Queries are served on `POST /graphql`; in debug mode, `GET /graphql`
/// additionally serves the GraphiQL IDE.
pub fn routes(debug: bool) -> Router<Arc<AppState>> {
    let method_router = if debug {
        post(graphql_handler).get(graphiql)
    } else {
        post(graphql_handler)
    };
    Router::new().route("/graphql", method_router)
}

pub(crate) async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

pub(crate) async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
