//! The in-memory member directory.
//!
//! The directory is populated once at startup and read-only afterwards.
//! Both lookup keys are indexed at construction time so the "first match in
//! source order" tie-break is a property of the index, not of scan order.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::member::Member;

/// An immutable, ordered collection of member records with exact-match
/// indexes by `username` and by `profile_pic_url`.
///
/// Lookups never fail: an absent key is a deterministic `None`, not a fault.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
    by_username: HashMap<String, usize>,
    by_avatar_url: HashMap<String, usize>,
}

impl MemberDirectory {
    /// Builds a directory from an ordered list of records.
    ///
    /// Source order is preserved. When a key occurs more than once, the
    /// index keeps the first occurrence.
    #[must_use]
    pub fn from_records(members: Vec<Member>) -> Self {
        let mut by_username = HashMap::with_capacity(members.len());
        let mut by_avatar_url = HashMap::with_capacity(members.len());

        for (position, member) in members.iter().enumerate() {
            by_username
                .entry(member.username.clone())
                .or_insert(position);
            by_avatar_url
                .entry(member.profile_pic_url.clone())
                .or_insert(position);
        }

        Self {
            members,
            by_username,
            by_avatar_url,
        }
    }

    /// Parses a JSON array of member records into a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a valid member array. A
    /// malformed roster is a startup failure, never a runtime one.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let members: Vec<Member> = serde_json::from_str(raw)
            .map_err(|e| Error::serialization(format!("invalid member roster: {e}")))?;
        Ok(Self::from_records(members))
    }

    /// Returns the full collection in source order.
    #[must_use]
    pub fn all(&self) -> &[Member] {
        &self.members
    }

    /// Returns the number of records in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds a member by exact, case-sensitive username match.
    ///
    /// Returns the first record in source order; no case or whitespace
    /// normalization is applied.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&Member> {
        self.by_username
            .get(username)
            .map(|&position| &self.members[position])
    }

    /// Finds a member by exact avatar URL match.
    ///
    /// The comparison covers the full URL string, query suffix included.
    /// Returns the first record in source order.
    #[must_use]
    pub fn find_by_avatar_url(&self, url: &str) -> Option<&Member> {
        self.by_avatar_url
            .get(url)
            .map(|&position| &self.members[position])
    }
}
