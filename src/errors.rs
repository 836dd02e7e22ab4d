use thiserror::Error;

/// Defines errors that can occur when talking to a BarcodeAPI server.
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match client.get_session().await {
///     Err(BarcodeError::Api { status_code: 429, .. }) => {
///         log::warn!("rate limited by the server");
///     }
///     Err(BarcodeError::Api { status_code, message }) => {
///         log::error!("API error {}: {}", status_code, message);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BarcodeError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error reading byte source: {0}")]
    Io(#[from] std::io::Error),
    /// Non-2xx response with structured context for debugging and
    /// automated handling.
    ///
    /// Contains the HTTP status code and a preview of the error body as
    /// returned by the server.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// HTTP status code (e.g., 403, 429, 500)
        status_code: u16,
        /// Error message from the API response body
        message: String,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl BarcodeError {
    /// Returns `true` if this error is likely transient and the request may
    /// succeed on retry.
    ///
    /// The library itself never retries; this helper only classifies errors
    /// so callers can implement their own policy:
    /// - **HTTP errors**: Network issues, connection resets, TLS errors
    /// - **Rate limits (429)**: Temporary throttling, retry after backoff
    /// - **Server errors (5xx)**: Temporary server issues
    ///
    /// Errors that return `false` are typically permanent:
    /// - **Client errors (4xx except 429)**: Bad request, unauthorized, not found
    /// - **JSON errors**: Response format issues
    /// - **I/O and input validation errors**: Local failures
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            // Network-level errors are typically transient
            BarcodeError::Http(_) => true,

            // API errors: 429 (rate limit) and 5xx (server errors) are retryable
            BarcodeError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,

            // These are permanent errors - retrying won't help
            BarcodeError::Json(_)
            | BarcodeError::Io(_)
            | BarcodeError::InvalidInput(_)
            | BarcodeError::ClientBuild(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = BarcodeError::Api {
            status_code: 429,
            message: "Rate limited".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("429"));
        assert!(display.contains("Rate limited"));
    }

    #[test]
    fn test_api_error_with_empty_message() {
        let error = BarcodeError::Api {
            status_code: 500,
            message: String::new(),
        };
        let display = format!("{}", error);
        assert!(display.contains("500"));
        assert!(display.contains("API error"));
    }

    #[test]
    fn test_invalid_input_display() {
        let error = BarcodeError::InvalidInput("empty CSV upload".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("empty CSV upload"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("not valid json").unwrap_err();
        let error: BarcodeError = json_err.into();
        let display = format!("{}", error);
        assert!(display.contains("JSON deserialization error"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: BarcodeError = io_err.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_client_build_display() {
        let error = BarcodeError::ClientBuild("TLS initialization failed".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Failed to build HTTP client"));
        assert!(display.contains("TLS initialization failed"));
    }

    #[test]
    fn test_is_retryable_rate_limit_429() {
        let error = BarcodeError::Api {
            status_code: 429,
            message: "Too many requests".to_string(),
        };
        assert!(error.is_retryable(), "429 errors should be retryable");
    }

    #[test]
    fn test_is_retryable_server_errors_5xx() {
        for status_code in [500, 502, 503, 504] {
            let error = BarcodeError::Api {
                status_code,
                message: "Server error".to_string(),
            };
            assert!(
                error.is_retryable(),
                "{} errors should be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_client_errors_4xx_not_retryable() {
        for status_code in [400, 401, 403, 404, 422] {
            let error = BarcodeError::Api {
                status_code,
                message: "Client error".to_string(),
            };
            assert!(
                !error.is_retryable(),
                "{} errors should NOT be retryable",
                status_code
            );
        }
    }

    #[test]
    fn test_is_retryable_json_error_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let error: BarcodeError = json_err.into();
        assert!(!error.is_retryable(), "JSON errors should NOT be retryable");
    }

    #[test]
    fn test_is_retryable_io_error_not_retryable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: BarcodeError = io_err.into();
        assert!(!error.is_retryable(), "I/O errors should NOT be retryable");
    }

    #[test]
    fn test_is_retryable_invalid_input_not_retryable() {
        let error = BarcodeError::InvalidInput("empty upload".to_string());
        assert!(!error.is_retryable());
    }
}
