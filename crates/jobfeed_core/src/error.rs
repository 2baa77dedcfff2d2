use std::fmt;

/// Failure of a single remote lookup, opaque to consumers beyond display.
///
/// Cancellation is deliberately not representable here: a canceled lookup
/// produces no value at all and never reaches [`FetchState`](crate::FetchState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

/// Transport-level classification of a lookup failure. All kinds surface
/// identically in state; they exist for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection-level failure (DNS, refused, reset, TLS, ...).
    Network,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The server answered with a non-2xx status.
    HttpStatus(u16),
    /// The body was not a JSON array of listings.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response body"),
        }
    }
}
