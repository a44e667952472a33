//! Error types for location URL parsing.

use std::fmt;

/// Errors that can occur when setting a location from a URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The URL does not start with the scheme the location is bound to.
    ///
    /// Recoverable: the caller may hand the URL to a parser for a different
    /// scheme.
    WrongScheme {
        /// Name of the scheme the location expects.
        expected: &'static str,
    },
    /// The URL contains a character outside the accepted URL alphabet.
    InvalidCharacters {
        /// Diagnostic prefix of the location variant that rejected the URL.
        error_prefix: &'static str,
    },
    /// A component failed structural validation or URL-decoding.
    Parsing(ParsingError),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongScheme { expected } => {
                write!(f, "URL does not follow the '{expected}' scheme")
            }
            Self::InvalidCharacters { error_prefix } => {
                write!(f, "{error_prefix}Invalid characters in URL [URL]")
            }
            Self::Parsing(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for LocationError {}

impl From<ParsingError> for LocationError {
    fn from(e: ParsingError) -> Self {
        Self::Parsing(e)
    }
}

/// Diagnostic triple carried by every component-level parse failure.
///
/// Consists of a variant-specific error prefix (which location type
/// produced the error), an optional component name ("Device",
/// "Item position", ...), and a message describing what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    error_prefix: &'static str,
    component: Option<&'static str>,
    message: String,
}

impl ParsingError {
    /// Creates a parsing error for the given component.
    #[must_use]
    pub fn new(
        error_prefix: &'static str,
        component: Option<&'static str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error_prefix,
            component,
            message: message.into(),
        }
    }

    /// Prefix identifying the location variant that produced the error.
    #[must_use]
    pub fn error_prefix(&self) -> &'static str {
        self.error_prefix
    }

    /// Name of the offending component; `"URL"` when the error concerns the
    /// URL as a whole.
    #[must_use]
    pub fn component(&self) -> &'static str {
        self.component.unwrap_or("URL")
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} [{}]", self.error_prefix, self.message, self.component())
    }
}

impl std::error::Error for ParsingError {}

/// Errors raised by delimiter-based field extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The required separator does not occur in the remaining input.
    SeparatorNotFound {
        /// The separator that was looked for.
        separator: char,
    },
    /// The field is present but empty where content is required.
    ComponentEmpty,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparatorNotFound { separator } => write!(f, "No '{separator}' found"),
            Self::ComponentEmpty => write!(f, "Component empty"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Errors raised when parsing a 1-based object index numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The numeral region is empty.
    ComponentEmpty,
    /// Non-digit characters follow the numeral where the end of the input
    /// was required.
    TrailingJunk,
    /// The value does not fit into 32 bits.
    OutOfRange,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComponentEmpty => write!(f, "Component empty"),
            Self::TrailingJunk => write!(f, "Component with trailing junk"),
            Self::OutOfRange => write!(f, "Component out of range"),
        }
    }
}

impl std::error::Error for PositionError {}
