//! Error types for sqltpl

use thiserror::Error;

use crate::template::PlaceholderKind;

/// Result type alias for template compilation
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors raised while compiling a query template.
///
/// Every error aborts the whole compile; no partially substituted SQL is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    /// Unbalanced or nested `{}` fragment delimiters.
    #[error("Invalid fragment syntax at byte {offset}")]
    InvalidFragmentSyntax { offset: usize },

    /// A placeholder tag other than `?`, `?d`, `?f`, `?a`, `?#`.
    #[error("Invalid placeholder '{token}' at byte {offset}")]
    InvalidPlaceholderSyntax { token: String, offset: usize },

    /// Number of placeholders differs from the number of arguments.
    #[error("Argument count mismatch: template has {expected} placeholders, got {actual} arguments")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    /// An identifier-position value stringified to an empty name.
    #[error("Column name can't be empty")]
    EmptyColumnName,

    /// `?a` or `?#` received an empty collection.
    #[error("Argument for '{kind}' can't be an empty collection")]
    EmptyArgumentCollection { kind: PlaceholderKind },

    /// The argument shape is not accepted at this position.
    #[error("Denied argument type {found} for '{kind}'")]
    DeniedArgumentType {
        kind: PlaceholderKind,
        found: &'static str,
    },
}

impl TemplateError {
    /// Create a denied-type error for a placeholder kind
    pub fn denied(kind: PlaceholderKind, found: &'static str) -> Self {
        Self::DeniedArgumentType { kind, found }
    }

    /// Check if this error comes from malformed template text
    /// (fragments or placeholder tags) rather than from the arguments.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFragmentSyntax { .. } | Self::InvalidPlaceholderSyntax { .. }
        )
    }

    /// Check if this is an argument count mismatch
    pub fn is_count_mismatch(&self) -> bool {
        matches!(self, Self::ArgumentCountMismatch { .. })
    }

    /// Check if this error was raised while rendering an argument
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyColumnName
                | Self::EmptyArgumentCollection { .. }
                | Self::DeniedArgumentType { .. }
        )
    }
}
