//! API integration tests.
//!
//! Tests the complete request flow: HTTP → routes → directory lookups.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use serde_json::Value;

use roster_api::server::ServerBuilder;
use roster_core::{Member, MemberDirectory};

const OWNER_AVATAR: &str = "https://avatars.githubusercontent.com/u/9134021?v=4";
const MEMBER_AVATAR: &str = "https://avatars.githubusercontent.com/u/18273645?v=4";

const REQUIRED_FIELDS: [&str; 8] = [
    "name",
    "username",
    "profile_pic_url",
    "followers",
    "following",
    "repositories",
    "bio",
    "github_link",
];

fn member(name: &str, username: &str, avatar: &str, role: &str) -> Member {
    Member {
        name: name.to_string(),
        username: username.to_string(),
        profile_pic_url: avatar.to_string(),
        followers: 42,
        following: 7,
        repositories: 13,
        bio: format!("{name} hangs out here."),
        github_link: format!("https://github.com/{username}"),
        role: role.to_string(),
    }
}

fn sample_directory() -> Arc<MemberDirectory> {
    Arc::new(MemberDirectory::from_records(vec![
        member("Asha Verma", "ashaverma", OWNER_AVATAR, "Owner"),
        member("Rohan Mehta", "rohan-mehta", MEMBER_AVATAR, "Member"),
        member(
            "Lena Okafor",
            "lenaokafor",
            "https://avatars.githubusercontent.com/u/44781209?v=4",
            "Maintainer",
        ),
    ]))
}

fn test_router() -> axum::Router {
    ServerBuilder::new()
        .debug(true)
        .directory(sample_directory())
        .build()
        .test_router()
}

#[tokio::test]
async fn root_returns_hello_world_envelope() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "Success");
    assert_eq!(body["data"], "Hello World");
    Ok(())
}

#[tokio::test]
async fn members_returns_the_full_roster() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/members").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);

    let members = body["data"].as_array().context("data should be an array")?;
    assert_eq!(members.len(), 3);

    for record in members {
        let fields = record.as_object().context("member should be an object")?;
        for field in REQUIRED_FIELDS {
            assert!(fields.contains_key(field), "missing field {field}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn members_preserves_source_order() -> Result<()> {
    let (_, body) = helpers::get_json(test_router(), "/members").await?;

    let usernames: Vec<&str> = body["data"]
        .as_array()
        .context("data should be an array")?
        .iter()
        .map(|m| m["username"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(usernames, vec!["ashaverma", "rohan-mehta", "lenaokafor"]);
    Ok(())
}

#[tokio::test]
async fn member_by_username_returns_the_match() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/member/ashaverma").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["data"]["username"], "ashaverma");

    let fields = body["data"]
        .as_object()
        .context("data should be an object")?;
    for field in REQUIRED_FIELDS {
        assert!(fields.contains_key(field), "missing field {field}");
    }
    Ok(())
}

#[tokio::test]
async fn member_absent_returns_null_data_in_a_success_envelope() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/member/ghost").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    let object = body.as_object().context("body should be an object")?;
    assert!(object.contains_key("data"));
    assert!(body["data"].is_null());
    Ok(())
}

#[tokio::test]
async fn member_lookup_is_case_sensitive() -> Result<()> {
    let (_, body) = helpers::get_json(test_router(), "/member/ASHAVERMA").await?;

    assert_eq!(body["status"], true);
    assert!(body["data"].is_null());
    Ok(())
}

#[tokio::test]
async fn whoami_without_parameter_is_a_failure_envelope() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/whoami").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Missing query parameters");
    let object = body.as_object().context("body should be an object")?;
    assert!(!object.contains_key("data"));
    Ok(())
}

#[tokio::test]
async fn whoami_with_unknown_avatar_is_member_not_found() -> Result<()> {
    let (status, body) =
        helpers::get_json(test_router(), "/whoami?profile_pic_url=frhbghbr").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Member not found");
    Ok(())
}

#[tokio::test]
async fn whoami_owner_avatar_elevates_admin() -> Result<()> {
    let uri = format!("/whoami?profile_pic_url={OWNER_AVATAR}");
    let (status, body) = helpers::get_json(test_router(), &uri).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], true);
    assert_eq!(body["message"], "Member found");
    assert_eq!(body["data"]["role"], "Owner");
    assert_eq!(body["data"]["admin"], true);
    Ok(())
}

#[tokio::test]
async fn whoami_non_owner_avatar_is_not_admin() -> Result<()> {
    let uri = format!("/whoami?profile_pic_url={MEMBER_AVATAR}");
    let (status, body) = helpers::get_json(test_router(), &uri).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "Member");
    assert_eq!(body["data"]["admin"], false);
    assert_eq!(body["message"], "Member found");
    Ok(())
}

#[tokio::test]
async fn whoami_requires_the_full_avatar_url_including_suffix() -> Result<()> {
    // Same URL minus the `?v=4` suffix must not match.
    let uri = "/whoami?profile_pic_url=https://avatars.githubusercontent.com/u/9134021";
    let (_, body) = helpers::get_json(test_router(), uri).await?;

    assert_eq!(body["status"], false);
    assert_eq!(body["message"], "Member not found");
    Ok(())
}

#[tokio::test]
async fn graphql_members_lists_the_roster() -> Result<()> {
    let query = "query { members { name username } }";
    let (status, body) = helpers::post_json(
        test_router(),
        "/graphql",
        serde_json::json!({ "query": query }),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "errors: {:?}", body["errors"]);

    let members = body["data"]["members"]
        .as_array()
        .context("members should be an array")?;
    assert_eq!(members.len(), 3);
    for record in members {
        let fields = record.as_object().context("member should be an object")?;
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("username"));
    }
    Ok(())
}

#[tokio::test]
async fn graphql_member_returns_the_match() -> Result<()> {
    let query = r#"query { member(username: "ashaverma") { name username } }"#;
    let (status, body) = helpers::post_json(
        test_router(),
        "/graphql",
        serde_json::json!({ "query": query }),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "errors: {:?}", body["errors"]);
    assert_eq!(body["data"]["member"]["username"], "ashaverma");
    assert_eq!(body["data"]["member"]["name"], "Asha Verma");
    Ok(())
}

#[tokio::test]
async fn graphql_member_absent_is_null_without_errors() -> Result<()> {
    let query = r#"query { member(username: "NonExistentUser") { name username } }"#;
    let (status, body) = helpers::post_json(
        test_router(),
        "/graphql",
        serde_json::json!({ "query": query }),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none(), "errors: {:?}", body["errors"]);
    let data = body["data"]
        .as_object()
        .context("data should be an object")?;
    assert!(data.contains_key("member"));
    assert!(body["data"]["member"].is_null());
    Ok(())
}

#[tokio::test]
async fn repeated_requests_return_identical_data() -> Result<()> {
    let (_, first) = helpers::get_json(test_router(), "/members").await?;
    let (_, second) = helpers::get_json(test_router(), "/members").await?;

    let first_bytes = serde_json::to_vec(&first["data"]).context("serialize first")?;
    let second_bytes = serde_json::to_vec(&second["data"]).context("serialize second")?;
    assert_eq!(first_bytes, second_bytes);

    let uri = format!("/whoami?profile_pic_url={OWNER_AVATAR}");
    let (_, first) = helpers::get_json(test_router(), &uri).await?;
    let (_, second) = helpers::get_json(test_router(), &uri).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn openapi_document_names_the_rest_paths() -> Result<()> {
    let (status, body) = helpers::get_json(test_router(), "/openapi.json").await?;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"]
        .as_object()
        .context("paths should be an object")?;
    assert!(paths.contains_key("/members"));
    assert!(paths.contains_key("/member/{username}"));
    assert!(paths.contains_key("/whoami"));
    Ok(())
}

mod helpers {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, header};
    use tower::ServiceExt;

    pub fn make_request(
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<Request<Body>> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        let body = match body {
            Some(v) => Body::from(serde_json::to_vec(&v).context("serialize request body")?),
            None => Body::empty(),
        };

        builder.body(body).context("build request")
    }

    async fn send(router: axum::Router, request: Request<Body>) -> Result<axum::response::Response> {
        let response = router.oneshot(request).await.map_err(|err: std::convert::Infallible| -> anyhow::Error { match err {} })?;
        Ok(response)
    }

    async fn response_body(
        response: axum::response::Response,
    ) -> Result<(StatusCode, axum::body::Bytes)> {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .context("read response body")?;
        Ok((status, body))
    }

    pub async fn get_json(router: axum::Router, uri: &str) -> Result<(StatusCode, Value)> {
        let request = make_request(Method::GET, uri, None)?;
        let response = send(router, request).await?;
        let (status, body) = response_body(response).await?;
        let json = serde_json::from_slice(&body).with_context(|| {
            format!(
                "parse JSON response (status={status}): {}",
                String::from_utf8_lossy(&body)
            )
        })?;
        Ok((status, json))
    }

    pub async fn post_json(
        router: axum::Router,
        uri: &str,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        let request = make_request(Method::POST, uri, Some(body))?;
        let response = send(router, request).await?;
        let (status, body) = response_body(response).await?;
        let json = serde_json::from_slice(&body).with_context(|| {
            format!(
                "parse JSON response (status={status}): {}",
                String::from_utf8_lossy(&body)
            )
        })?;
        Ok((status, json))
    }
}
