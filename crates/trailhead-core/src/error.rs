//! Error types for trailhead-core
//!
//! Every lookup failure has a defined fallback; these variants exist so the
//! lookup boundary can log what went wrong before substituting defaults.

use thiserror::Error;

/// Failure kinds for remote style/header lookups.
///
/// None of these propagate to a user-visible error state: the lookup layer
/// swallows them and falls back to the last-known-good cached record, or to
/// the hardcoded defaults. A themed header must always render something.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The backend has no persisted record for this category.
    #[error("No persisted {resource} for category '{category}'")]
    NotFound { resource: &'static str, category: String },

    /// The fetch itself failed (rejected, timed out, offline).
    #[error("Network failure: {message}")]
    Network { message: String },

    /// The response decoded to an unexpected shape. Treated as NotFound
    /// by callers since the record is unusable either way.
    #[error("Malformed response: {message}")]
    Malformed { message: String },
}

impl LookupError {
    pub fn not_found(resource: &'static str, category: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            category: category.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// True when the cached last-known-good value is still worth using.
    ///
    /// A `NotFound` is authoritative (the record was deleted or never
    /// existed), so the hardcoded default is the right substitute; a network
    /// or decode failure says nothing about the record itself, so a stale
    /// cached copy beats the default.
    pub fn prefer_stale_cache(&self) -> bool {
        !matches!(self, LookupError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_authoritative() {
        assert!(!LookupError::not_found("style", "hiking").prefer_stale_cache());
        assert!(LookupError::network("timeout").prefer_stale_cache());
        assert!(LookupError::malformed("missing field").prefer_stale_cache());
    }

    #[test]
    fn test_display_includes_category() {
        let err = LookupError::not_found("header config", "kayaking");
        assert_eq!(
            err.to_string(),
            "No persisted header config for category 'kayaking'"
        );
    }
}
