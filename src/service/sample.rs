//! Built-in demo data set, served when no data file is configured

use crate::model::VersionRecord;

const SAMPLE: &[(&str, Option<&str>, &str, &str, &str, &str, &str)] = &[
    ("v1", None, "Initial Release", "First stable trunk", "TRUNK", "alice", "2024-01-01T10:00:00"),
    ("v2", Some("v1"), "Feature Branch A", "Auth system work", "BRANCH", "bob", "2024-01-05T09:00:00"),
    ("v3", Some("v1"), "Feature Branch B", "UI redesign track", "BRANCH", "carol", "2024-01-06T11:00:00"),
    ("v4", Some("v2"), "Auth Module", "Core auth scaffolding", "TRUNK", "bob", "2024-01-10T08:00:00"),
    ("v5", Some("v2"), "Auth Hotfix", "Token expiry patch", "RELEASE", "alice", "2024-01-11T14:00:00"),
    ("v6", Some("v3"), "UI Overhaul", "Design system migration", "TRUNK", "carol", "2024-01-12T10:00:00"),
    ("v7", Some("v4"), "OAuth Integration", "Google & GitHub OAuth", "TRUNK", "dave", "2024-01-15T09:30:00"),
    ("v8", Some("v4"), "2FA Support", "Two-factor auth flows", "BRANCH", "dave", "2024-01-16T11:00:00"),
    ("v9", Some("v5"), "Session Fix", "Resolve session race condition", "RELEASE", "alice", "2024-01-17T15:00:00"),
    ("v10", Some("v6"), "Dark Mode", "System-wide dark theme", "BRANCH", "carol", "2024-01-18T10:00:00"),
    ("v11", Some("v6"), "Mobile Layout", "Responsive breakpoints", "BRANCH", "eve", "2024-01-19T08:00:00"),
    ("v12", Some("v7"), "SSO Provider", "Enterprise SSO support", "RELEASE", "dave", "2024-01-20T12:00:00"),
    ("v13", Some("v8"), "TOTP Support", "Time-based OTP via RFC 6238", "TRUNK", "frank", "2024-01-21T09:00:00"),
    ("v14", Some("v11"), "Tablet Breakpoints", "768px-1024px layout fixes", "TRUNK", "eve", "2024-01-22T14:00:00"),
    ("v15", Some("v12"), "v2.0 Release", "GA release with SSO + 2FA", "RELEASE", "alice", "2024-01-25T10:00:00"),
];

pub fn sample_records() -> Vec<VersionRecord> {
    SAMPLE
        .iter()
        .map(|&(id, parent, name, description, tag, author, created_at)| VersionRecord {
            id: Some(id.to_string()),
            parent_id: parent.map(str::to_string),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            version_type: Some(tag.to_string()),
            created_by: Some(author.to_string()),
            created_at: Some(created_at.to_string()),
            malformed: Vec::new(),
        })
        .collect()
}
