use thiserror::Error;

/// Terminal outcomes of the one-shot users fetch.
///
/// Both variants end the current dashboard load; recovery is a manual retry
/// that reloads the whole view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The request completed with a non-2xx status.
    #[error("Failed to fetch users: {status}")]
    Http { status: u16 },

    /// The request never completed; carries the transport error's own
    /// message, surfaced verbatim.
    #[error("{0}")]
    Network(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_includes_status() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.to_string(), "Failed to fetch users: 500");
    }

    #[test]
    fn test_network_error_message_verbatim() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
