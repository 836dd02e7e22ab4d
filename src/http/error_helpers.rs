//! Error handling utilities for HTTP responses and error context formatting.

use crate::errors::BarcodeError;
use reqwest::Response;

/// Maximum characters to include from error body in context messages
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Checks if an HTTP response is successful, returning it if so or an error
/// otherwise.
///
/// This helper consolidates the common pattern of checking response status
/// and extracting error details on failure.
///
/// # Errors
///
/// Returns an error with status code and body preview on non-success status.
pub async fn check_response(response: Response) -> Result<Response, BarcodeError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(read_error_with_context(response).await)
    }
}

/// Reads the error response body and creates a `BarcodeError::Api` with
/// context.
///
/// Extracts the HTTP status code for programmatic error handling and a
/// truncated response body (first 200 chars). If the body cannot be read,
/// the message describes the read failure.
pub async fn read_error_with_context(response: Response) -> BarcodeError {
    let status_code = response.status().as_u16();

    let error_body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("Failed to read error body: {}", e));

    let message = truncate_for_context(&error_body, ERROR_BODY_PREVIEW_LENGTH);

    BarcodeError::Api {
        status_code,
        message,
    }
}

/// Deserializes JSON with a context label, producing a readable error that
/// includes a preview of the offending payload.
///
/// # Errors
///
/// Returns `BarcodeError::Json` when parsing fails; the failure is also
/// logged with the context label and payload preview.
pub fn deserialize_with_context<T: serde::de::DeserializeOwned>(
    json_str: &str,
    context: &str,
) -> Result<T, BarcodeError> {
    serde_json::from_str(json_str).map_err(|e| {
        let preview = truncate_for_context(json_str, ERROR_BODY_PREVIEW_LENGTH);
        log::warn!("Failed to parse {context}: {e} | Payload: {preview}");
        BarcodeError::Json(e)
    })
}

/// Truncates a string to a maximum length, adding "..." if truncated.
///
/// Uses character-boundary-aware slicing to prevent panics on multi-byte
/// UTF-8 characters.
fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}
