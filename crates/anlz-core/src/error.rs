//! Error types for orientation codec operations.
//!
//! Codec errors are programmer/data errors: an unknown orientation byte or
//! an unclassifiable direction matrix is always surfaced to the caller and
//! never replaced by a default orientation.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting between orientation codes and
/// direction-cosine matrices.
#[derive(Debug, Error)]
pub enum Error {
    /// An orientation byte outside the legal 48-value set.
    ///
    /// The legacy format reserves a single byte for the orientation code,
    /// but only values `0..=47` name a valid axis assignment.
    #[error("invalid orientation code {code}: legal codes are 0..=47")]
    InvalidCode {
        /// The rejected byte value.
        code: u8,
    },

    /// A direction matrix has no clear anatomical axis assignment.
    ///
    /// Raised when the two largest components of a column are within
    /// tolerance of each other (no dominant direction), or when the three
    /// per-axis assignments do not form a bijection over the three
    /// complementary anatomical pairs.
    #[error("ambiguous orientation on axis {axis}: {reason}")]
    AmbiguousOrientation {
        /// Index of the image axis that could not be classified.
        axis: usize,
        /// Human-readable detail on why classification failed.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidCode`] error.
    #[inline]
    pub fn invalid_code(code: u8) -> Self {
        Self::InvalidCode { code }
    }

    /// Creates an [`Error::AmbiguousOrientation`] error.
    #[inline]
    pub fn ambiguous(axis: usize, reason: impl Into<String>) -> Self {
        Self::AmbiguousOrientation {
            axis,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is an invalid-code error.
    #[inline]
    pub fn is_invalid_code(&self) -> bool {
        matches!(self, Self::InvalidCode { .. })
    }

    /// Returns `true` if this is an ambiguous-orientation error.
    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousOrientation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_message() {
        let err = Error::invalid_code(77);
        assert!(err.to_string().contains("77"));
        assert!(err.is_invalid_code());
        assert!(!err.is_ambiguous());
    }

    #[test]
    fn test_ambiguous_message() {
        let err = Error::ambiguous(1, "no dominant component");
        let msg = err.to_string();
        assert!(msg.contains("axis 1"));
        assert!(msg.contains("no dominant component"));
        assert!(err.is_ambiguous());
    }
}
