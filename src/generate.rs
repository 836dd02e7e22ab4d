//! Fluent builder for barcode generation requests.

use crate::client::Client;
use crate::errors::BarcodeError;
use crate::http::barcodes::{self, Barcode};

/// Builder for a barcode generation request.
///
/// Created via [`Client::generate`]. The code type defaults to `auto`,
/// letting the server pick a format for the data; query parameters customize
/// rendering (size, colors, ...) and extra headers are forwarded verbatim.
///
/// # Example
///
/// ```no_run
/// # use barcodeapi::Client;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new();
///
/// let barcode = client
///     .generate("012345678905")
///     .with_type("upc_a")
///     .with_param("height", "30")
///     .send()
///     .await?;
///
/// std::fs::write("upc.png", barcode.bytes())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GenerateBuilder<'a> {
    client: &'a Client,
    data: String,
    code_type: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl<'a> GenerateBuilder<'a> {
    pub(crate) fn new(client: &'a Client, data: String) -> Self {
        Self {
            client,
            data,
            code_type: "auto".to_string(),
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Sets the barcode format to generate (e.g. `qr`, `code128`, `upc_a`).
    ///
    /// Defaults to `auto`.
    #[must_use]
    pub fn with_type(mut self, code_type: impl Into<String>) -> Self {
        self.code_type = code_type.into();
        self
    }

    /// Adds a query parameter for barcode customization.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds an extra header to send with the request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Issues the request and returns the generated barcode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response status is
    /// not successful.
    pub async fn send(self) -> Result<Barcode, BarcodeError> {
        log::debug!(
            "Generating barcode: type={}, data_len={}",
            self.code_type,
            self.data.len()
        );

        barcodes::generate(
            self.client.http_client(),
            self.client.base_url(),
            self.client.token(),
            &self.code_type,
            &self.data,
            &self.params,
            &self.headers,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_auto() {
        let client = Client::new();
        let builder = GenerateBuilder::new(&client, "12345".to_string());
        assert_eq!(builder.code_type, "auto");
        assert!(builder.params.is_empty());
        assert!(builder.headers.is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let client = Client::new();
        let builder = GenerateBuilder::new(&client, "12345".to_string())
            .with_type("qr")
            .with_param("size", "300")
            .with_header("X-Custom", "1");
        assert_eq!(builder.code_type, "qr");
        assert_eq!(builder.params, vec![("size".to_string(), "300".to_string())]);
        assert_eq!(
            builder.headers,
            vec![("X-Custom".to_string(), "1".to_string())]
        );
    }
}
