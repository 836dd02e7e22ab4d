//! Server and barcode-type metadata endpoints.
//!
//! These endpoints serve descriptive JSON whose schema is owned by the
//! server; the payloads are returned as `serde_json::Value` rather than
//! pinned to structs that would go stale.

use super::common::{Endpoint, construct_endpoint_url};
use super::get_json;
use crate::errors::BarcodeError;
use reqwest::Client as ReqwestClient;
use serde_json::Value;

/// Fetches server information.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_info(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Info, &[]);
    get_json(http_client, token, url, "server info").await
}

/// Fetches the list of all supported barcode types.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_types(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Types, &[]);
    get_json(http_client, token, url, "type list").await
}

/// Fetches details for a single barcode type.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// successful, or the response cannot be parsed as JSON.
pub async fn get_type(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    type_name: &str,
) -> Result<Value, BarcodeError> {
    let url = construct_endpoint_url(base_url, &Endpoint::Type { name: type_name }, &[]);
    get_json(http_client, token, url, "type details").await
}
