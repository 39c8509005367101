//! Result envelope shared by every grammar.
//!
//! A grammar that does not recognise its input returns an *unset* status so
//! the dispatcher can move on to the next grammar. Recognised input is either
//! `Ok`, `Warning` (entity kept, flagged for review) or `Error` (entity
//! dropped, message explains why).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a parse attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    /// The input was not recognised.
    #[default]
    Unset,
    /// Parsed with a determined consequence.
    Ok,
    /// Parsed, but the result needs review.
    Warning,
    /// Recognised syntax with an invalid token.
    Error,
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityStatus::Unset => "unset",
            EntityStatus::Ok => "ok",
            EntityStatus::Warning => "warning",
            EntityStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Status, optional message and optional entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingStatus<T> {
    /// Outcome.
    pub status: EntityStatus,
    /// Explanation for warnings and errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Parsed entity; present for `Ok` and `Warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<T>,
}

impl<T> Default for ParsingStatus<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> ParsingStatus<T> {
    /// Input not recognised.
    pub fn unset() -> Self {
        Self {
            status: EntityStatus::Unset,
            message: None,
            entity: None,
        }
    }

    /// Successfully parsed.
    pub fn ok(entity: T) -> Self {
        Self {
            status: EntityStatus::Ok,
            message: None,
            entity: Some(entity),
        }
    }

    /// Parsed, with a message for the reviewer.
    pub fn warning(entity: T, message: impl Into<String>) -> Self {
        Self {
            status: EntityStatus::Warning,
            message: Some(message.into()),
            entity: Some(entity),
        }
    }

    /// Rejected; no entity.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EntityStatus::Error,
            message: Some(message.into()),
            entity: None,
        }
    }

    /// Whether the grammar recognised its input (any status but `Unset`).
    pub fn is_parsed(&self) -> bool {
        self.status != EntityStatus::Unset
    }

    pub fn is_ok(&self) -> bool {
        self.status == EntityStatus::Ok
    }

    pub fn is_error(&self) -> bool {
        self.status == EntityStatus::Error
    }

    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }

    /// Map the entity, keeping status and message.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParsingStatus<U> {
        ParsingStatus {
            status: self.status,
            message: self.message,
            entity: self.entity.map(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        let status: ParsingStatus<u32> = ParsingStatus::default();
        assert_eq!(status.status, EntityStatus::Unset);
        assert!(!status.is_parsed());
        assert!(status.entity().is_none());
    }

    #[test]
    fn test_constructors() {
        let ok = ParsingStatus::ok(1);
        assert!(ok.is_ok() && ok.is_parsed());
        assert_eq!(ok.entity(), Some(&1));

        let warn = ParsingStatus::warning(2, "check me");
        assert_eq!(warn.status, EntityStatus::Warning);
        assert_eq!(warn.message.as_deref(), Some("check me"));
        assert_eq!(warn.into_entity(), Some(2));

        let err: ParsingStatus<u32> = ParsingStatus::error("bad");
        assert!(err.is_error() && err.is_parsed());
        assert!(err.entity().is_none());
    }

    #[test]
    fn test_map() {
        let mapped = ParsingStatus::warning(2, "w").map(|n| n * 10);
        assert_eq!(mapped.entity, Some(20));
        assert_eq!(mapped.status, EntityStatus::Warning);
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(EntityStatus::Warning.to_string(), "warning");
        assert_eq!(
            serde_json::to_string(&EntityStatus::Ok).unwrap(),
            "\"OK\""
        );
    }
}
