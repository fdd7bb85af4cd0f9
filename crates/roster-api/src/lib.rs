//! # roster-api
//!
//! HTTP composition layer for the roster directory service.
//!
//! This crate provides the query surface over a community's member roster:
//!
//! - **REST**: member listing, single-member lookup, identity classification
//! - **GraphQL**: the same lookup semantics through a typed query language
//! - **Observability**: request tracing and health checks
//!
//! ## Design Principles
//!
//! This crate is a **thin composition layer** with no domain policy.
//! Lookup semantics live in `roster-core`; every handler here is a pure
//! read over the directory loaded at startup.
//!
//! ## Endpoints
//!
//! ```text
//! GET  /                   - Hello world (envelope smoke test)
//! GET  /health             - Health check
//! GET  /ready              - Readiness check
//! GET  /members            - Full member roster
//! GET  /member/{username}  - Single member (null data when absent)
//! GET  /whoami             - Role classification by avatar URL
//! POST /graphql            - GraphQL queries (members, member)
//! GET  /openapi.json       - OpenAPI document for the REST surface
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use roster_api::server::Server;
//!
//! let server = Server::builder()
//!     .http_port(8080)
//!     .build();
//!
//! server.serve().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod envelope;
pub mod error;
pub mod graphql;
pub mod openapi;
pub mod routes;
pub mod server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::envelope::Envelope;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
