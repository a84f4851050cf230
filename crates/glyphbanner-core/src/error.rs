//! Error types for GlyphBanner Core

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for GlyphBanner Core operations
pub type Result<T> = std::result::Result<T, BannerError>;

/// Core error types
#[derive(Error, Debug)]
pub enum BannerError {
    /// Input text is empty, or nothing is left after escape expansion
    #[error("empty input")]
    EmptyInput,

    /// More hard-separated segments than a request may carry
    #[error("too many lines: {segments} segments, at most {max} allowed")]
    TooManyLines { segments: usize, max: usize },

    /// A character outside printable ASCII (or newline) was supplied
    #[error("invalid character(s) in input")]
    InvalidCharacter { ch: char, position: usize },

    /// Font resource does not describe a complete glyph table
    #[error("malformed font: {0}")]
    MalformedFont(String),

    /// Font resource could not be read at all
    #[error("cannot read font resource {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font identifier names none of the known variants
    #[error("unknown font: {0}")]
    UnknownFont(String),
}

impl BannerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::TooManyLines { .. } => ErrorKind::TooManyLines,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::MalformedFont(_) => ErrorKind::MalformedFont,
            Self::ResourceUnavailable { .. } => ErrorKind::ResourceUnavailable,
            Self::UnknownFont(_) => ErrorKind::UnknownFont,
        }
    }
}

/// Error classification handed to calling layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    EmptyInput,
    TooManyLines,
    InvalidCharacter,
    MalformedFont,
    ResourceUnavailable,
    UnknownFont,
}

impl ErrorKind {
    /// Bad input from the caller. Expected and frequent.
    pub fn is_caller_facing(&self) -> bool {
        !self.is_operator_facing()
    }

    /// Deployment or configuration failure that needs an operator.
    pub fn is_operator_facing(&self) -> bool {
        matches!(self, Self::MalformedFont | Self::ResourceUnavailable)
    }

    /// HTTP-style status a transport layer should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_operator_facing() {
            500
        } else {
            400
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::TooManyLines => "TooManyLines",
            Self::InvalidCharacter => "InvalidCharacter",
            Self::MalformedFont => "MalformedFont",
            Self::ResourceUnavailable => "ResourceUnavailable",
            Self::UnknownFont => "UnknownFont",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::EmptyInput.status_code(), 400);
        assert_eq!(ErrorKind::TooManyLines.status_code(), 400);
        assert_eq!(ErrorKind::InvalidCharacter.status_code(), 400);
        assert_eq!(ErrorKind::UnknownFont.status_code(), 400);
        assert_eq!(ErrorKind::MalformedFont.status_code(), 500);
        assert_eq!(ErrorKind::ResourceUnavailable.status_code(), 500);
    }

    #[test]
    fn test_invalid_character_message_is_generic() {
        let err = BannerError::InvalidCharacter {
            ch: '\u{1}',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid character(s) in input");
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
        assert!(err.kind().is_caller_facing());
    }

    #[test]
    fn test_resource_unavailable_keeps_source() {
        use std::error::Error as _;

        let err = BannerError::ResourceUnavailable {
            path: PathBuf::from("banners/standard.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("banners/standard.txt"));
        assert!(err.kind().is_operator_facing());
    }
}
