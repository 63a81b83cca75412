//! Error types for table reflection and field value conversion.

use std::fmt;
use thiserror::Error;

/// Result type alias for table and field operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a query executor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for table and field operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Value outside of what a field can represent, or a disallowed NULL,
    /// while the field is in strict mode. Also raised for structurally
    /// invalid composite input regardless of strict mode.
    #[error("Range error on field {field}: {message}")]
    Range { field: String, message: String },

    /// Malformed JSON payload.
    #[error("JSON field error on {field}: {kind} ({detail})")]
    Format {
        field: String,
        kind: JsonErrorKind,
        detail: String,
    },

    /// Failure reported by the query executor.
    #[error("Data access error: {message}")]
    DataAccess {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Column not found in a catalog row.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Catalog row value has an unexpected type.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },
}

impl Error {
    /// Create a range error for the named field.
    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Range {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a data access error without an underlying source.
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data access error wrapping the executor's own error.
    pub fn data_access_from(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self::DataAccess {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }

    /// True for any failure that came out of talking to the catalog, as
    /// opposed to a value conversion failure.
    pub fn is_data_access(&self) -> bool {
        matches!(
            self,
            Error::DataAccess { .. } | Error::ColumnNotFound { .. } | Error::TypeConversion { .. }
        )
    }
}

#[cfg(feature = "postgres")]
impl From<postgres::Error> for Error {
    fn from(err: postgres::Error) -> Self {
        Self::data_access_from(err)
    }
}

/// Cause category for a JSON payload that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    /// Nesting went past the parser's recursion limit.
    Depth,
    /// Unescaped control character inside a string.
    ControlCharacter,
    /// Syntax error, malformed JSON.
    Syntax,
    /// Input ended before the document was complete.
    UnexpectedEnd,
    /// Invalid escape or code point in a string.
    Encoding,
    /// The value handed to the field cannot be represented as JSON.
    UnsupportedType,
}

impl JsonErrorKind {
    /// Classify a `serde_json` parse failure.
    pub fn classify(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        let msg = err.to_string();
        match err.classify() {
            Category::Eof => JsonErrorKind::UnexpectedEnd,
            Category::Data => JsonErrorKind::UnsupportedType,
            Category::Io => JsonErrorKind::Encoding,
            Category::Syntax => {
                if msg.contains("recursion limit") {
                    JsonErrorKind::Depth
                } else if msg.contains("control character") {
                    JsonErrorKind::ControlCharacter
                } else if ["unicode", "surrogate", "escape"]
                    .iter()
                    .any(|needle| msg.contains(needle))
                {
                    JsonErrorKind::Encoding
                } else {
                    JsonErrorKind::Syntax
                }
            }
        }
    }
}

impl fmt::Display for JsonErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            JsonErrorKind::Depth => "The maximum stack depth has been exceeded",
            JsonErrorKind::ControlCharacter => {
                "Control character error, possibly incorrectly encoded"
            }
            JsonErrorKind::Syntax => "Syntax error, malformed JSON",
            JsonErrorKind::UnexpectedEnd => "Unexpected end of input, malformed JSON",
            JsonErrorKind::Encoding => "Malformed characters, possibly incorrectly encoded",
            JsonErrorKind::UnsupportedType => "A value of a type that cannot be encoded was given",
        };
        f.write_str(text)
    }
}
