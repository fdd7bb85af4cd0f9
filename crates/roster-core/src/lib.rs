//! # roster-core
//!
//! Core domain types for the roster directory service.
//!
//! This crate provides the foundational types used by the API layer:
//!
//! - **Member Records**: The directory entry type and its wire format
//! - **Member Directory**: The immutable, indexed in-memory roster
//! - **Error Types**: Shared error definitions and result types
//! - **Observability**: Logging initialization helpers
//!
//! ## Crate Boundary
//!
//! `roster-core` knows nothing about HTTP. The directory is loaded once at
//! process start and exposed only through read accessors; nothing in this
//! crate (or its consumers) can mutate a record after load.
//!
//! ## Example
//!
//! ```rust
//! use roster_core::prelude::*;
//!
//! let directory = MemberDirectory::from_records(Vec::new());
//! assert!(directory.find_by_username("octocat").is_none());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod directory;
pub mod error;
pub mod member;
pub mod observability;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use roster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::directory::MemberDirectory;
    pub use crate::error::{Error, Result};
    pub use crate::member::Member;
}

// Re-export key types at crate root for ergonomics
pub use directory::MemberDirectory;
pub use error::{Error, Result};
pub use member::Member;
pub use observability::{LogFormat, init_logging};
