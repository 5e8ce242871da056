//! Person Wire Model
//!
//! The directory service wraps every scalar in a `{"value": ...}` envelope
//! and every map in a `{"values": {...}}` envelope. The structs here mirror
//! that shape verbatim; accessors unwrap the envelopes so callers never see
//! them. A missing branch deserializes to its empty default rather than
//! failing the whole record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Scalar field envelope: `{"value": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEnvelope {
    #[serde(default)]
    pub value: String,
}

/// Username alias map envelope: `{"values": {"github_username": "...", ...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usernames {
    #[serde(default)]
    pub values: HashMap<String, String>,
}

/// Group membership map: `{"values": {"<group>": <opaque metadata>, ...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mozilliansorg {
    #[serde(default)]
    pub values: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessInformation {
    #[serde(default)]
    pub mozilliansorg: Mozilliansorg,
}

/// A normalized person record, constructed fresh on every successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub user_id: ValueEnvelope,
    #[serde(default)]
    pub primary_username: ValueEnvelope,
    #[serde(default)]
    pub usernames: Usernames,
    #[serde(default)]
    pub access_information: AccessInformation,
}

impl Person {
    /// Deserialize a raw response body. Structurally invalid JSON is a
    /// decode error; absent fields are not.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn user_id(&self) -> &str {
        &self.user_id.value
    }

    pub fn primary_username(&self) -> &str {
        &self.primary_username.value
    }

    /// Username alias for a given platform, e.g. `github_username`.
    pub fn username(&self, platform: &str) -> Option<&str> {
        self.usernames.values.get(platform).map(String::as_str)
    }

    pub fn github_username(&self) -> Option<&str> {
        self.username("github_username")
    }

    /// Group memberships as an enumerable list.
    ///
    /// Computed from the group map on each call so it cannot diverge from
    /// the map. Iteration order is not meaningful; callers must not depend
    /// on a specific ordering.
    pub fn groups(&self) -> Vec<&str> {
        self.access_information
            .mozilliansorg
            .values
            .keys()
            .map(String::as_str)
            .collect()
    }

    pub fn is_member_of(&self, group: &str) -> bool {
        self.access_information
            .mozilliansorg
            .values
            .contains_key(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SAMPLE_BODY: &[u8] = br#"{
        "user_id": {"value": "u1"},
        "primary_username": {"value": "p1"},
        "usernames": {"values": {"github_username": "gh1"}},
        "access_information": {"mozilliansorg": {"values": {"nda": {}, "staff": {}}}}
    }"#;

    #[test]
    fn test_parse_sample_body() {
        let person = Person::from_json(SAMPLE_BODY).unwrap();
        assert_eq!(person.user_id(), "u1");
        assert_eq!(person.primary_username(), "p1");
        assert_eq!(person.github_username(), Some("gh1"));

        let groups: HashSet<&str> = person.groups().into_iter().collect();
        assert_eq!(groups, HashSet::from(["nda", "staff"]));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = Person::from_json(SAMPLE_BODY).unwrap();
        let second = Person::from_json(SAMPLE_BODY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_branches_default_to_empty() {
        let person = Person::from_json(b"{}").unwrap();
        assert_eq!(person.user_id(), "");
        assert_eq!(person.primary_username(), "");
        assert_eq!(person.github_username(), None);
        assert!(person.groups().is_empty());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = Person::from_json(b"not json").unwrap_err();
        assert!(matches!(err, crate::error::DirectoryError::Decode(_)));
    }

    #[test]
    fn test_group_membership() {
        let person = Person::from_json(SAMPLE_BODY).unwrap();
        assert!(person.is_member_of("nda"));
        assert!(!person.is_member_of("board"));
    }

    #[test]
    fn test_opaque_group_metadata_tolerated() {
        let body = br#"{"access_information": {"mozilliansorg": {"values": {"nda": {"expires": "2027-01-01"}, "staff": null}}}}"#;
        let person = Person::from_json(body).unwrap();
        let groups: HashSet<&str> = person.groups().into_iter().collect();
        assert_eq!(groups, HashSet::from(["nda", "staff"]));
    }
}
