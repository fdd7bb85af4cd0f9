//! `OpenAPI` (3.1) specification generation for `roster-api`.
//!
//! The generated spec is served at `/openapi.json` and can be dumped with
//! the `gen_openapi` binary for client generation.

use utoipa::OpenApi;

use crate::envelope::Envelope;
use crate::error::ApiErrorBody;
use crate::routes::members::MemberResponse;
use crate::routes::whoami::WhoamiResponse;

/// `OpenAPI` documentation for the roster REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Community member roster directory API"
    ),
    paths(
        crate::routes::members::list_members,
        crate::routes::members::get_member,
        crate::routes::whoami::whoami,
    ),
    components(
        schemas(
            ApiErrorBody,
            MemberResponse,
            WhoamiResponse,
            Envelope<Vec<MemberResponse>>,
            Envelope<Option<MemberResponse>>,
            Envelope<WhoamiResponse>,
        )
    ),
    tags(
        (name = "members", description = "Member roster lookups"),
        (name = "whoami", description = "Identity classification"),
    )
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_documents_every_rest_path() {
        let spec = openapi();
        let paths = spec.paths.paths;
        assert!(paths.contains_key("/members"));
        assert!(paths.contains_key("/member/{username}"));
        assert!(paths.contains_key("/whoami"));
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = openapi_json().expect("serialize OpenAPI spec");
        assert!(json.contains("Roster API"));
    }
}
