use std::fmt;

use thiserror::Error;

/// One of the two indices of a [`BiMap`](crate::BiMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The forward index, keyed by left values.
    Left,
    /// The reverse index, keyed by right values.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiMapError {
    #[error("key not found in the {0} index")]
    NotFound(Side),
}

pub type Result<T> = std::result::Result<T, BiMapError>;

#[cfg(test)]
mod bimap_errors_test {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            BiMapError::NotFound(Side::Left).to_string(),
            "key not found in the left index"
        );
        assert_eq!(
            BiMapError::NotFound(Side::Right).to_string(),
            "key not found in the right index"
        );
    }

    #[test]
    fn test_not_found_equality() {
        assert_eq!(
            BiMapError::NotFound(Side::Left),
            BiMapError::NotFound(Side::Left)
        );
        assert_ne!(
            BiMapError::NotFound(Side::Left),
            BiMapError::NotFound(Side::Right)
        );
    }
}
