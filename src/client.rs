use crate::errors::BarcodeError;
use crate::generate::GenerateBuilder;
use crate::http;
use crate::http::barcodes::DecodeResult;
use crate::http::common::DEFAULT_BASE_URL;
use crate::upload::ByteSource;
use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

/// The main client for interacting with a BarcodeAPI server.
///
/// Holds the base URL, the optional access token and a shared
/// `reqwest::Client` so connections are reused across calls. Each method
/// issues exactly one HTTP request; non-2xx statuses surface as
/// [`BarcodeError::Api`] and nothing is retried.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    token: Option<String>,
    http_client: ReqwestClient,
}

/// Builder for `Client` instances.
///
/// # Example
///
/// ```
/// use barcodeapi::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .base_url("https://barcodeapi.org")
///     .token("my-token")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<ReqwestClient>,
}

impl ClientBuilder {
    /// Sets the server origin to talk to.
    ///
    /// Trailing slashes are stripped so endpoint paths join cleanly;
    /// defaults to the public service at `https://barcodeapi.org`.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the access token sent as `Authorization: Token=<token>`.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the total request timeout.
    ///
    /// If not set, uses reqwest's default (no timeout). Ignored when a
    /// pre-configured HTTP client is supplied via [`Self::http_client`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// If not set, uses reqwest's default. Ignored when a pre-configured
    /// HTTP client is supplied via [`Self::http_client`].
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Supplies a pre-configured `reqwest::Client` to use instead of
    /// building one.
    ///
    /// Useful for sharing a connection pool or applying proxy/TLS settings
    /// the builder does not expose.
    #[must_use]
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the `Client`.
    ///
    /// # Errors
    ///
    /// Returns `BarcodeError::ClientBuild` if the underlying HTTP client
    /// cannot be constructed (e.g. TLS backend initialization failure).
    pub fn build(self) -> Result<Client, BarcodeError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = ReqwestClient::builder();

                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }

                builder
                    .build()
                    .map_err(|e| BarcodeError::ClientBuild(e.to_string()))?
            }
        };

        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Ok(Client {
            base_url,
            token: self.token,
            http_client,
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new builder for `Client` instances.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client for the public service at `https://barcodeapi.org`
    /// with no token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            http_client: ReqwestClient::new(),
        }
    }

    /// The configured server origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The currently configured token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Sets or clears the access token.
    ///
    /// Passing `None` removes the authorization header from all subsequent
    /// calls on this instance; passing a token sets it. The header is
    /// present iff a non-null token was last set.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub(crate) fn http_client(&self) -> &ReqwestClient {
        &self.http_client
    }

    // --- Barcode operations ---

    /// Starts a barcode generation request for `data`.
    ///
    /// Accepts anything stringly (numeric barcode data included); the data
    /// is percent-encoded into the URL path with no characters left
    /// unescaped beyond the unreserved set. See [`GenerateBuilder`] for
    /// type, parameter and header customization.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use barcodeapi::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new();
    /// let barcode = client.generate("abc 123").send().await?;
    /// println!("content type: {:?}", barcode.content_type());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn generate(&self, data: impl ToString) -> GenerateBuilder<'_> {
        GenerateBuilder::new(self, data.to_string())
    }

    /// Decodes a barcode image.
    ///
    /// The image may come from a file path, raw bytes, or an async reader;
    /// it is normalized to bytes and uploaded as multipart field `image`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, the HTTP request
    /// fails, the response status is not successful, or the response is not
    /// valid JSON.
    pub async fn decode(&self, image: impl Into<ByteSource>) -> Result<DecodeResult, BarcodeError> {
        let image = image.into().into_bytes().await?;

        log::debug!("Decoding barcode image: {} bytes", image.len());

        http::barcodes::decode(&self.http_client, &self.base_url, self.token(), image).await
    }

    /// Generates many barcodes using the bulk API.
    ///
    /// The server expects a CSV whose rows describe the barcodes to
    /// generate; the returned bytes are a zip archive of the images.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, the HTTP request
    /// fails, or the response status is not successful.
    pub async fn bulk_generate(&self, csv: impl Into<ByteSource>) -> Result<Bytes, BarcodeError> {
        let csv = csv.into().into_bytes().await?;

        log::debug!("Bulk generating from CSV: {} bytes", csv.len());

        http::barcodes::bulk_generate(&self.http_client, &self.base_url, self.token(), csv).await
    }

    // --- Metadata operations ---

    /// Fetches server information.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_info(&self) -> Result<Value, BarcodeError> {
        http::meta::get_info(&self.http_client, &self.base_url, self.token()).await
    }

    /// Returns the list of all supported barcode types.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_types(&self) -> Result<Value, BarcodeError> {
        http::meta::get_types(&self.http_client, &self.base_url, self.token()).await
    }

    /// Returns details for a single barcode type.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_type(&self, type_name: &str) -> Result<Value, BarcodeError> {
        http::meta::get_type(&self.http_client, &self.base_url, self.token(), type_name).await
    }

    // --- Limiter and session operations ---

    /// Returns rate-limit information for the current caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_limiter(&self) -> Result<Value, BarcodeError> {
        http::session::get_limiter(&self.http_client, &self.base_url, self.token()).await
    }

    /// Returns session details if the request carries a valid session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_session(&self) -> Result<Value, BarcodeError> {
        http::session::get_session(&self.http_client, &self.base_url, self.token()).await
    }

    /// Deletes the current session.
    ///
    /// Succeeds on any 2xx response.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response status is
    /// not successful.
    pub async fn delete_session(&self) -> Result<(), BarcodeError> {
        log::debug!("Deleting session");

        http::session::delete_session(&self.http_client, &self.base_url, self.token()).await
    }

    // --- Share operations ---

    /// Creates a share containing multiple barcode request paths
    /// (e.g. `"/api/qr/hello"`). Returns the share key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response status is
    /// not successful.
    pub async fn create_share<I, S>(&self, requests: I) -> Result<String, BarcodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requests: Vec<String> = requests.into_iter().map(Into::into).collect();

        log::debug!("Creating share with {} requests", requests.len());

        http::share::create_share(&self.http_client, &self.base_url, self.token(), &requests).await
    }

    /// Retrieves a previously created share by its key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the response status is
    /// not successful, or the response is not valid JSON.
    pub async fn get_share(&self, key: &str) -> Result<Value, BarcodeError> {
        http::share::get_share(&self.http_client, &self.base_url, self.token(), key).await
    }
}
