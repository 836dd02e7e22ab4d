//! Share endpoints.
//!
//! A share is a server-stored bundle of barcode request paths, retrievable
//! later by the key the server hands back on creation.

use super::common::{Endpoint, construct_endpoint_url, with_auth};
use super::error_helpers::check_response;
use super::{get_json, wire};
use crate::errors::BarcodeError;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Creates a share from a list of request paths (e.g. `"/api/qr/hello"`).
///
/// Returns the share key, with surrounding whitespace trimmed from the
/// plain-text response body.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response status is not
/// successful.
pub async fn create_share(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    requests: &[String],
) -> Result<String, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::CreateShare, &[]);

    let request_id = wire::next_request_id();
    let body = serde_json::to_string(requests)?;
    wire::log_request(request_id, "POST", &url, Some(&body));

    let response = with_auth(http_client.post(&url), token)
        .json(requests)
        .send()
        .await?;

    wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let response_text = response.text().await.map_err(BarcodeError::Http)?;

    wire::log_response_body(request_id, &response_text);

    Ok(response_text.trim().to_string())
}

/// Retrieves a previously created share by its key.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_share(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    key: &str,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::GetShare { key }, &[]);
    get_json(http_client, token, url, "share").await
}
