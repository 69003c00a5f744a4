//! Error types for path reads and writes.

use thiserror::Error;

/// Errors that can occur while reading or writing through a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessorError {
    /// A strict read where one or more branches failed to resolve.
    #[error("cannot get value by key '{path}'")]
    CannotGetValue { path: String, count: usize },

    /// A strict write that would overwrite a non-object intermediate value.
    #[error("cannot set value by key '{path}'")]
    CannotSetValue { path: String },

    /// A read nested deeper than the configured limit.
    #[error("cannot get value by key '{path}': depth limit {limit} exceeded")]
    DepthLimitExceeded { path: String, limit: usize },

    /// Accessor settings that no path could be resolved with.
    #[error("invalid accessor config: {reason}")]
    InvalidConfig { reason: String },
}

/// Stable classification of an [`AccessorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CannotGetValue,
    CannotSetValue,
    DepthLimitExceeded,
    InvalidConfig,
}

impl ErrorKind {
    /// Numeric code of this kind.
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::CannotGetValue => 1,
            ErrorKind::CannotSetValue => 2,
            ErrorKind::DepthLimitExceeded => 3,
            ErrorKind::InvalidConfig => 4,
        }
    }
}

impl AccessorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessorError::CannotGetValue { .. } => ErrorKind::CannotGetValue,
            AccessorError::CannotSetValue { .. } => ErrorKind::CannotSetValue,
            AccessorError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            AccessorError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// The joined path the failed operation was given. Empty for config
    /// errors.
    pub fn path(&self) -> &str {
        match self {
            AccessorError::CannotGetValue { path, .. }
            | AccessorError::CannotSetValue { path }
            | AccessorError::DepthLimitExceeded { path, .. } => path,
            AccessorError::InvalidConfig { .. } => "",
        }
    }

    /// Number of failed branches, for read failures.
    pub fn count(&self) -> Option<usize> {
        match self {
            AccessorError::CannotGetValue { count, .. } => Some(*count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AccessorError::CannotGetValue {
            path: "a.b".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "cannot get value by key 'a.b'");

        let err = AccessorError::CannotSetValue {
            path: "test.b.c".to_string(),
        };
        assert_eq!(err.to_string(), "cannot set value by key 'test.b.c'");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::CannotGetValue.code(), 1);
        assert_eq!(ErrorKind::CannotSetValue.code(), 2);
        assert_eq!(ErrorKind::DepthLimitExceeded.code(), 3);
        assert_eq!(ErrorKind::InvalidConfig.code(), 4);
    }

    #[test]
    fn test_accessors() {
        let err = AccessorError::CannotGetValue {
            path: "name1".to_string(),
            count: 1,
        };
        assert_eq!(err.kind(), ErrorKind::CannotGetValue);
        assert_eq!(err.path(), "name1");
        assert_eq!(err.count(), Some(1));

        let err = AccessorError::CannotSetValue {
            path: "x".to_string(),
        };
        assert_eq!(err.count(), None);

        let err = AccessorError::InvalidConfig {
            reason: "delimiter must not be empty".to_string(),
        };
        assert_eq!(err.path(), "");
        assert_eq!(
            err.to_string(),
            "invalid accessor config: delimiter must not be empty"
        );
    }
}
