//! The member record type.

use serde::{Deserialize, Serialize};

/// One directory entry.
///
/// Field names match the roster's JSON wire format. `username` is treated as
/// the unique lookup key by convention (uniqueness is assumed, not enforced),
/// and `profile_pic_url` is the lookup key for identity classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Display name, free text, not unique.
    pub name: String,
    /// Stable handle; compared with exact, case-sensitive equality.
    pub username: String,
    /// Avatar URL; compared on the full string, query suffix included.
    pub profile_pic_url: String,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Public repository count.
    pub repositories: u64,
    /// Free-text bio, may be empty.
    #[serde(default)]
    pub bio: String,
    /// Link to the member's GitHub profile.
    pub github_link: String,
    /// Free-text role classification. Only the case-insensitive literal
    /// `"owner"` carries meaning; any other value (including empty) is an
    /// ordinary member.
    #[serde(default)]
    pub role: String,
}

impl Member {
    /// Returns true when this member's role grants owner privileges.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.role.eq_ignore_ascii_case("owner")
    }
}
