use std::fmt;
use thiserror::Error;

/// The error type for storsign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request url can't be parsed.
    MalformedUrl,

    /// The query string of the request url can't be parsed.
    MalformedQuery,

    /// The auth variant tag is not one of the known variants.
    UnsupportedAuthVariant,

    /// Request cannot be signed (missing credential, invalid header values, etc.)
    RequestInvalid,

    /// Credentials exist but can't be used for signing.
    CredentialInvalid,

    /// Configuration error (missing fields, undecodable account key)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error is caused by the caller's input rather than configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MalformedUrl | ErrorKind::MalformedQuery | ErrorKind::RequestInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a malformed url error
    pub fn malformed_url(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedUrl, message)
    }

    /// Create a malformed query error
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedQuery, message)
    }

    /// Create an unsupported auth variant error
    pub fn unsupported_auth_variant(variant: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnsupportedAuthVariant,
            format!("{variant} authentication is not supported"),
        )
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedUrl => write!(f, "malformed url"),
            ErrorKind::MalformedQuery => write!(f, "malformed query"),
            ErrorKind::UnsupportedAuthVariant => write!(f, "unsupported auth variant"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::malformed_url(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
