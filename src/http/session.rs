//! Rate-limiter and session endpoints.

use super::common::{Endpoint, construct_endpoint_url, with_auth};
use super::error_helpers::check_response;
use super::{get_json, wire};
use crate::errors::BarcodeError;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Fetches rate-limit information for the current caller.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_limiter(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Limiter, &[]);
    get_json(http_client, token, url, "limiter info").await
}

/// Fetches session details for the current caller.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_session(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Session, &[]);
    get_json(http_client, token, url, "session info").await
}

/// Deletes the current session.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response status is not
/// successful.
pub async fn delete_session(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
) -> Result<(), BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Session, &[]);

    let request_id = wire::next_request_id();
    wire::log_request(request_id, "DELETE", &url, None);

    let response = with_auth(http_client.delete(&url), token).send().await?;

    wire::log_response_status(request_id, response.status().as_u16());

    check_response(response).await?;
    Ok(())
}
