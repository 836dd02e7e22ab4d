//! Internal HTTP layer for BarcodeAPI communication.
//!
//! This module is `pub(crate)` - it contains implementation details
//! not exposed to library users.

pub(crate) mod barcodes;
pub(crate) mod common;
pub(crate) mod error_helpers;
pub(crate) mod meta;
pub(crate) mod session;
pub(crate) mod share;
pub(crate) mod wire;

use crate::errors::BarcodeError;
use self::common::with_auth;
use self::error_helpers::{check_response, deserialize_with_context};
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Issues a GET request and parses the body as JSON.
///
/// Shared by the metadata, limiter, session and share endpoints, which all
/// follow the same request shape.
pub(crate) async fn get_json(
    http_client: &ReqwestClient,
    token: Option<&str>,
    url: String,
    context: &str,
) -> Result<Value, BarcodeError> {
    let request_id = wire::next_request_id();
    wire::log_request(request_id, "GET", &url, None);

    let response = with_auth(http_client.get(&url), token).send().await?;

    wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let response_text = response.text().await.map_err(BarcodeError::Http)?;

    wire::log_response_body(request_id, &response_text);

    deserialize_with_context(&response_text, context)
}
