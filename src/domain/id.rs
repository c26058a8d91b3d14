//! Hash-based identifiers for tasks and categories
//!
//! ID Format:
//! - Task IDs: `t-{7-char-hash}` (e.g., `t-9d3e5f2`)
//! - Category IDs: `c-{7-char-hash}` (e.g., `c-41f0a9e`)
//!
//! Task hashes are derived from title + creation timestamp, so the same title
//! added twice gets two IDs. Category hashes are derived from the name alone:
//! two categories with the same name always share an ID, which is what lets
//! `list --category <name>` find tasks without consulting the category store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HASH_LEN: usize = 7;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 't-{{7-char-hash}}', got '{0}'")]
    InvalidTaskId(String),

    #[error("Invalid category ID format: expected 'c-{{7-char-hash}}', got '{0}'")]
    InvalidCategoryId(String),
}

/// Hashes arbitrary input down to the short hex form used in IDs
fn short_hash(input: &str) -> String {
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..HASH_LEN].to_string()
}

fn is_valid_hash(hash: &str) -> bool {
    hash.len() == HASH_LEN && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Task ID in the format `t-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    hash: String,
}

impl TaskId {
    /// Creates a new task ID from title and timestamp
    pub fn new(title: &str, timestamp: DateTime<Utc>) -> Self {
        let input = format!("{}{}", title, timestamp.timestamp_nanos_opt().unwrap_or(0));
        Self {
            hash: short_hash(&input),
        }
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-{}", self.hash)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix("t-") {
            Some(hash) if is_valid_hash(hash) => Ok(Self {
                hash: hash.to_string(),
            }),
            _ => Err(IdError::InvalidTaskId(s.to_string())),
        }
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

/// Category ID in the format `c-{7-char-hash}`
///
/// Derived deterministically from the category name (surrounding whitespace
/// ignored), so ID equality is name equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId {
    hash: String,
}

impl CategoryId {
    /// Derives the ID for a category name
    pub fn from_name(name: &str) -> Self {
        Self {
            hash: short_hash(name.trim()),
        }
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c-{}", self.hash)
    }
}

impl FromStr for CategoryId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix("c-") {
            Some(hash) if is_valid_hash(hash) => Ok(Self {
                hash: hash.to_string(),
            }),
            _ => Err(IdError::InvalidCategoryId(s.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_generation_is_unique_for_different_timestamps() {
        let title = "Same Title";
        let ts1 = Utc::now();
        let ts2 = ts1 + chrono::Duration::nanoseconds(1);

        assert_ne!(TaskId::new(title, ts1), TaskId::new(title, ts2));
    }

    #[test]
    fn task_id_format_is_correct() {
        let s = TaskId::new("Buy milk", Utc::now()).to_string();

        assert!(s.starts_with("t-"));
        assert_eq!(s.len(), 9); // "t-" + 7 chars
    }

    #[test]
    fn task_id_parses_correctly() {
        let original = TaskId::new("Buy milk", Utc::now());
        let parsed: TaskId = original.to_string().parse().unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn task_id_rejects_invalid_format() {
        assert!("invalid".parse::<TaskId>().is_err());
        assert!("t-short".parse::<TaskId>().is_err());
        assert!("t-toolonggg".parse::<TaskId>().is_err());
        assert!("t-gggggg1".parse::<TaskId>().is_err()); // 'g' is not hex
        assert!("c-1234567".parse::<TaskId>().is_err());
    }

    #[test]
    fn category_id_depends_only_on_name() {
        assert_eq!(
            CategoryId::from_name("Groceries"),
            CategoryId::from_name("Groceries")
        );
        assert_eq!(
            CategoryId::from_name("  Groceries "),
            CategoryId::from_name("Groceries")
        );
        assert_ne!(
            CategoryId::from_name("Groceries"),
            CategoryId::from_name("Bills")
        );
    }

    #[test]
    fn category_id_is_case_sensitive() {
        assert_ne!(
            CategoryId::from_name("work"),
            CategoryId::from_name("Work")
        );
    }

    #[test]
    fn category_id_parses_correctly() {
        let original = CategoryId::from_name("Bills");
        let s = original.to_string();
        assert!(s.starts_with("c-"));

        let parsed: CategoryId = s.parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn category_id_rejects_invalid_format() {
        assert_eq!(
            "t-1234567".parse::<CategoryId>(),
            Err(IdError::InvalidCategoryId("t-1234567".to_string()))
        );
        assert!("c-123".parse::<CategoryId>().is_err());
    }

    #[test]
    fn serde_roundtrip_category_id() {
        let original = CategoryId::from_name("Work");
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, format!("\"{}\"", original));

        let parsed: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn serde_rejects_malformed_task_id() {
        assert!(serde_json::from_str::<TaskId>("\"not-an-id\"").is_err());
    }
}
