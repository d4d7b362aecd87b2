//! Unified error type definition

use thiserror::Error;

/// Failure to load the user collection
///
/// The variants only differ for diagnostics. Every variant means the same
/// thing to the viewer: the data is unavailable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Transport failure (DNS, connection refused, TLS, reading the body)
    #[error("Network error: {detail}")]
    Network { detail: String },

    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The body is not a JSON array of users
    #[error("Parse error: {detail}")]
    Parse { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_code() {
        let e = LoadError::Status { status: 500 };
        assert_eq!(e.to_string(), "HTTP error! status: 500");
    }
}
