//! Version records
//!
//! `VersionRecord` is the loose shape accepted at the ingestion boundary
//! (JSON files, the seed endpoint). `Version` is the validated, immutable
//! record every tree component works with.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::errors::{TreeError, TreeResult};

/// Author recorded when a record omits `created_by`
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Version type tag controlling badge rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VersionType {
    #[default]
    Trunk,
    Branch,
    Release,
    /// Well-formed tag outside the known set, kept upper-cased
    Other(String),
}

impl VersionType {
    /// Parse a raw tag.
    ///
    /// Known tags match case-insensitively. Any other tag made of ASCII
    /// alphanumerics, `_` or `-` becomes [`VersionType::Other`]; everything
    /// else is rejected with a reason string.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let tag = raw.trim();
        if tag.is_empty() {
            return Err("type tag must not be empty".to_string());
        }
        if !tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(format!("malformed type tag '{}'", tag));
        }

        let upper = tag.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "TRUNK" => VersionType::Trunk,
            "BRANCH" => VersionType::Branch,
            "RELEASE" => VersionType::Release,
            _ => VersionType::Other(upper),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            VersionType::Trunk => "TRUNK",
            VersionType::Branch => "BRANCH",
            VersionType::Release => "RELEASE",
            VersionType::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VersionType::Other(_))
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for VersionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A validated version record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub version_type: VersionType,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl Version {
    /// Sibling ordering key: creation time, then id
    pub fn sort_key(&self) -> (NaiveDateTime, &str) {
        (self.created_at, self.id.as_str())
    }
}

/// Raw record as received at the ingestion boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct VersionRecord {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub version_type: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    /// Keys whose JSON value had a type the field cannot hold
    #[serde(skip)]
    pub malformed: Vec<&'static str>,
}

/// Wire shape: every value is taken as-is so a wrong JSON type surfaces
/// from `validate` with the record's id instead of failing the whole batch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    id: Option<Value>,
    parent_id: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    #[serde(rename = "type")]
    version_type: Option<Value>,
    created_by: Option<Value>,
    created_at: Option<Value>,
}

impl From<RawRecord> for VersionRecord {
    fn from(raw: RawRecord) -> Self {
        let mut malformed = Vec::new();
        let mut text = |key: &'static str, value: Option<Value>, numeric: bool| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) if numeric => Some(n.to_string()),
            Some(_) => {
                malformed.push(key);
                None
            }
        };

        let id = text("id", raw.id, true);
        let parent_id = text("parent_id", raw.parent_id, true);
        let name = text("name", raw.name, false);
        let description = text("description", raw.description, false);
        let version_type = text("type", raw.version_type, false);
        let created_by = text("created_by", raw.created_by, false);
        let created_at = text("created_at", raw.created_at, false);

        Self {
            id,
            parent_id,
            name,
            description,
            version_type,
            created_by,
            created_at,
            malformed,
        }
    }
}

impl VersionRecord {
    /// Validate into a [`Version`].
    ///
    /// `position` only labels the error when the record has no usable id.
    pub fn validate(self, position: usize) -> TreeResult<Version> {
        let label = || format!("<record #{}>", position);
        if self.malformed.contains(&"id") {
            return Err(TreeError::validation(label(), "malformed id"));
        }
        let id = match non_blank(self.id) {
            Some(id) => id,
            None => return Err(TreeError::validation(label(), "id is required")),
        };
        if let Some(key) = self.malformed.first() {
            return Err(TreeError::validation(&id, malformed_reason(key)));
        }

        let name = non_blank(self.name)
            .ok_or_else(|| TreeError::validation(&id, "name is required"))?;

        let version_type = match self.version_type {
            Some(raw) => VersionType::parse(&raw).map_err(|reason| TreeError::validation(&id, reason))?,
            None => VersionType::default(),
        };

        let raw_created_at = non_blank(self.created_at)
            .ok_or_else(|| TreeError::validation(&id, "created_at is required"))?;
        let created_at = parse_timestamp(&raw_created_at).ok_or_else(|| {
            TreeError::validation(&id, format!("malformed created_at '{}'", raw_created_at))
        })?;

        Ok(Version {
            parent_id: non_blank(self.parent_id),
            description: self.description,
            created_by: non_blank(self.created_by).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            id,
            name,
            version_type,
            created_at,
        })
    }
}

/// Validate a batch of records, rejecting duplicate ids.
pub fn validate_all(records: Vec<VersionRecord>) -> TreeResult<Vec<Version>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut versions = Vec::with_capacity(records.len());

    for (position, record) in records.into_iter().enumerate() {
        let version = record.validate(position)?;
        if !seen.insert(version.id.clone()) {
            return Err(TreeError::validation(&version.id, "duplicate id"));
        }
        versions.push(version);
    }

    Ok(versions)
}

/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn malformed_reason(key: &str) -> String {
    match key {
        "type" => "malformed type tag".to_string(),
        "parent_id" => "parent_id must be a string or integer".to_string(),
        key => format!("{} must be a string", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str) -> VersionRecord {
        VersionRecord {
            id: Some(id.to_string()),
            name: Some(format!("Version {}", id)),
            created_at: Some("2024-01-01T10:00:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_parse_case_insensitive() {
        assert_eq!(VersionType::parse("trunk").unwrap(), VersionType::Trunk);
        assert_eq!(VersionType::parse("Branch").unwrap(), VersionType::Branch);
        assert_eq!(VersionType::parse(" RELEASE ").unwrap(), VersionType::Release);
    }

    #[test]
    fn test_type_parse_unknown_falls_back() {
        let parsed = VersionType::parse("hotfix").unwrap();
        assert_eq!(parsed, VersionType::Other("HOTFIX".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(parsed.as_str(), "HOTFIX");
    }

    #[test]
    fn test_type_parse_rejects_malformed() {
        assert!(VersionType::parse("").is_err());
        assert!(VersionType::parse("   ").is_err());
        assert!(VersionType::parse("re lease").is_err());
        assert!(VersionType::parse("trunk!").is_err());
    }

    #[test]
    fn test_validate_defaults() {
        let version = record("v1").validate(0).unwrap();
        assert_eq!(version.id, "v1");
        assert_eq!(version.parent_id, None);
        assert_eq!(version.version_type, VersionType::Trunk);
        assert_eq!(version.created_by, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_validate_trims_and_drops_blank_parent() {
        let mut raw = record("  v1  ");
        raw.parent_id = Some("   ".to_string());
        let version = raw.validate(0).unwrap();
        assert_eq!(version.id, "v1");
        assert_eq!(version.parent_id, None);
    }

    #[test]
    fn test_validate_missing_id_names_position() {
        let mut raw = record("x");
        raw.id = None;
        let err = raw.validate(3).unwrap_err();
        assert_eq!(err.version_id(), "<record #3>");
    }

    #[test]
    fn test_validate_missing_name() {
        let mut raw = record("v2");
        raw.name = Some("  ".to_string());
        let err = raw.validate(0).unwrap_err();
        assert_eq!(err, TreeError::validation("v2", "name is required"));
    }

    #[test]
    fn test_validate_bad_type_tag() {
        let mut raw = record("v3");
        raw.version_type = Some("rel ease".to_string());
        let err = raw.validate(0).unwrap_err();
        assert_eq!(err.code(), "VERSTREE_VALIDATION");
        assert_eq!(err.version_id(), "v3");
    }

    #[test]
    fn test_validate_timestamp_formats() {
        assert!(parse_timestamp("2024-01-05T09:00:00").is_some());
        assert!(parse_timestamp("2024-01-05T09:00:00.250").is_some());
        assert!(parse_timestamp("2024-01-05T09:00:00Z").is_some());
        assert!(parse_timestamp("2024-01-05 09:00:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());

        let mut raw = record("v4");
        raw.created_at = Some("yesterday".to_string());
        assert!(raw.validate(0).is_err());
    }

    #[test]
    fn test_validate_all_rejects_duplicates() {
        let err = validate_all(vec![record("a"), record("b"), record("a")]).unwrap_err();
        assert_eq!(err, TreeError::validation("a", "duplicate id"));
    }

    #[test]
    fn test_record_accepts_numeric_ids() {
        let raw: VersionRecord = serde_json::from_value(json!({
            "id": 7,
            "parent_id": 3,
            "name": "Seven",
            "type": "BRANCH",
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        let version = raw.validate(0).unwrap();
        assert_eq!(version.id, "7");
        assert_eq!(version.parent_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_wrong_json_type_is_validation_error() {
        let raw: VersionRecord = serde_json::from_value(json!({
            "id": "v1",
            "name": "A",
            "type": 5,
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(raw.malformed, vec!["type"]);

        let err = raw.validate(0).unwrap_err();
        assert_eq!(err, TreeError::validation("v1", "malformed type tag"));
    }

    #[test]
    fn test_wrong_json_type_other_fields() {
        let raw: VersionRecord = serde_json::from_value(json!({
            "id": "v2",
            "name": ["A"],
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();
        assert_eq!(raw.validate(0).unwrap_err(), TreeError::validation("v2", "name must be a string"));

        let raw: VersionRecord = serde_json::from_value(json!({"id": {"x": 1}, "name": "A"})).unwrap();
        let err = raw.validate(4).unwrap_err();
        assert_eq!(err.version_id(), "<record #4>");
    }

    #[test]
    fn test_batch_with_bad_record_still_parses() {
        let records: Vec<VersionRecord> = serde_json::from_value(json!([
            {"id": "a", "name": "A", "created_at": "2024-01-01T00:00:00"},
            {"id": "b", "name": "B", "created_by": false, "created_at": "2024-01-01T00:00:00"}
        ]))
        .unwrap();
        assert_eq!(
            validate_all(records).unwrap_err(),
            TreeError::validation("b", "created_by must be a string")
        );
    }

    #[test]
    fn test_version_serializes_type_key() {
        let version = record("v1").validate(0).unwrap();
        let value = serde_json::to_value(&version).unwrap();
        assert_eq!(value["type"], "TRUNK");
        assert_eq!(value["created_at"], "2024-01-01T10:00:00");
    }
}
