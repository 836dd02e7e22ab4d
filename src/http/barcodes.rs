//! Barcode generation and decoding endpoints.
//!
//! Covers `GET /api/{type}/{data}`, `POST /decode/` and `POST /bulk`. The
//! generate endpoint returns the raw image together with the response headers
//! because the server reports barcode metadata (detected type, encoded
//! content) in headers rather than the body.

use super::common::{Endpoint, construct_endpoint_url, with_auth};
use super::error_helpers::{check_response, deserialize_with_context};
use super::wire;
use crate::errors::BarcodeError;
use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use reqwest::header::HeaderMap;
use reqwest::multipart;
use serde::{Deserialize, Serialize};

/// A generated barcode image plus the response headers that carry its
/// metadata.
#[derive(Debug, Clone)]
pub struct Barcode {
    data: Bytes,
    headers: HeaderMap,
}

impl Barcode {
    pub(crate) fn new(data: Bytes, headers: HeaderMap) -> Self {
        Self { data, headers }
    }

    /// The raw image bytes.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Consumes the barcode, returning the image bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// The `Content-Type` of the image, if the server reported one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Looks up a response header as a string.
    ///
    /// Barcode metadata such as the resolved type travels in headers; use
    /// this to read it without caring about exact casing.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The full response header map.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Result of decoding a barcode image.
///
/// The attested fields are `code`, `text` and `format`; anything else the
/// server includes is preserved in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Status code reported inside the payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// The decoded barcode content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The detected barcode format (e.g. "QR")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Fields not covered by the attested schema
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Generates a barcode image.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response status is not
/// successful.
pub async fn generate(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    code_type: &str,
    data: &str,
    params: &[(String, String)],
    extra_headers: &[(String, String)],
) -> Result<Barcode, BarcodeError> {
    let endpoint = Endpoint::Generate { code_type, data };
    let url = construct_endpoint_url(base_url, &endpoint, params);

    let request_id = wire::next_request_id();
    wire::log_request(request_id, "GET", &url, None);

    let mut request = with_auth(http_client.get(&url), token);
    for (name, value) in extra_headers {
        request = request.header(name, value);
    }
    let response = request.send().await?;

    wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let headers = response.headers().clone();
    let data = response.bytes().await.map_err(BarcodeError::Http)?;

    log::debug!("Generated barcode: {} bytes", data.len());

    Ok(Barcode::new(data, headers))
}

/// Decodes a barcode from image bytes.
///
/// The image is sent as multipart form field `image` named `image.png`.
///
/// # Errors
///
/// Returns an error if:
/// - The image buffer is empty
/// - The HTTP request fails
/// - The response status is not successful
/// - The response cannot be parsed as JSON
pub async fn decode(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    image: Vec<u8>,
) -> Result<DecodeResult, BarcodeError> {
    if image.is_empty() {
        return Err(BarcodeError::InvalidInput(
            "Cannot decode an empty image".to_string(),
        ));
    }

    let url = construct_endpoint_url(base_url, &Endpoint::Decode, &[]);

    let request_id = wire::next_request_id();
    wire::log_upload(request_id, "POST", &url, "image", image.len());

    let part = multipart::Part::bytes(image).file_name("image.png");
    let form = multipart::Form::new().part("image", part);

    let response = with_auth(http_client.post(&url), token)
        .multipart(form)
        .send()
        .await?;

    wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let response_text = response.text().await.map_err(BarcodeError::Http)?;

    wire::log_response_body(request_id, &response_text);

    deserialize_with_context(&response_text, "DecodeResult")
}

/// Generates many barcodes from a CSV description using the bulk API.
///
/// The CSV is sent as multipart form field `csvFile` named `bulk.csv`; the
/// response is a zip archive of the generated images, returned as-is.
///
/// # Errors
///
/// Returns an error if:
/// - The CSV buffer is empty
/// - The HTTP request fails
/// - The response status is not successful
pub async fn bulk_generate(
    http_client: &ReqwestClient,
    base_url: &str,
    token: Option<&str>,
    csv: Vec<u8>,
) -> Result<Bytes, BarcodeError> {
    if csv.is_empty() {
        return Err(BarcodeError::InvalidInput(
            "Cannot bulk-generate from an empty CSV".to_string(),
        ));
    }

    let url = construct_endpoint_url(base_url, &Endpoint::Bulk, &[]);

    let request_id = wire::next_request_id();
    wire::log_upload(request_id, "POST", &url, "csvFile", csv.len());

    let part = multipart::Part::bytes(csv).file_name("bulk.csv");
    let form = multipart::Form::new().part("csvFile", part);

    let response = with_auth(http_client.post(&url), token)
        .multipart(form)
        .send()
        .await?;

    wire::log_response_status(request_id, response.status().as_u16());

    let response = check_response(response).await?;
    let archive = response.bytes().await.map_err(BarcodeError::Http)?;

    log::debug!("Bulk generation returned {} bytes", archive.len());

    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn test_decode_result_deserialization() {
        let json = r#"{"code":200,"text":"123","format":"QR"}"#;
        let result: DecodeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.code, Some(200));
        assert_eq!(result.text.as_deref(), Some("123"));
        assert_eq!(result.format.as_deref(), Some("QR"));
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_decode_result_preserves_unknown_fields() {
        let json = r#"{"text":"abc","confidence":0.97}"#;
        let result: DecodeResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.text.as_deref(), Some("abc"));
        assert_eq!(result.extra["confidence"], 0.97);
    }

    #[test]
    fn test_decode_result_all_fields_optional() {
        let result: DecodeResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.code, None);
        assert_eq!(result.text, None);
        assert_eq!(result.format, None);
    }

    #[test]
    fn test_barcode_header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-barcode-type"),
            HeaderValue::from_static("QR_CODE"),
        );
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("image/png"),
        );

        let barcode = Barcode::new(Bytes::from_static(b"img"), headers);
        assert_eq!(barcode.header("x-barcode-type"), Some("QR_CODE"));
        assert_eq!(barcode.content_type(), Some("image/png"));
        assert_eq!(barcode.header("x-missing"), None);
        assert_eq!(barcode.bytes().as_ref(), b"img");
    }

    #[test]
    fn test_barcode_into_bytes() {
        let barcode = Barcode::new(Bytes::from_static(b"png"), HeaderMap::new());
        assert_eq!(barcode.into_bytes(), Bytes::from_static(b"png"));
    }
}
