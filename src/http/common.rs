/// Default origin of the public BarcodeAPI service.
pub const DEFAULT_BASE_URL: &str = "https://barcodeapi.org";

/// Header used for token authentication.
///
/// BarcodeAPI uses a custom `Token=<token>` scheme rather than a standard
/// bearer token.
pub const AUTH_HEADER: &str = "Authorization";

/// Formats a raw token into the value expected by the `Authorization` header.
#[must_use]
pub fn format_token(token: &str) -> String {
    format!("Token={token}")
}

/// Percent-encodes a path or query component.
///
/// Escapes every character outside the unreserved set (`A-Z a-z 0-9 - _ . ~`);
/// in particular a space becomes `%20`, never `+`.
#[must_use]
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Attaches the authorization header to a request when a token is set.
///
/// The header is present iff a token is currently configured on the client.
pub fn with_auth(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.header(AUTH_HEADER, format_token(token)),
        None => request,
    }
}

/// Represents the BarcodeAPI REST endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Render a barcode image for `data` using the given code type
    Generate { code_type: &'a str, data: &'a str },
    /// Decode a barcode from an uploaded image
    Decode,
    /// Generate many barcodes from a CSV upload, returns a zip
    Bulk,
    /// Server information
    Info,
    /// All supported barcode types
    Types,
    /// Details for a single barcode type
    Type { name: &'a str },
    /// Rate-limit state for the current caller
    Limiter,
    /// Current session details
    Session,
    /// Create a share from a list of request paths
    CreateShare,
    /// Fetch a previously created share by key
    GetShare { key: &'a str },
}

impl Endpoint<'_> {
    /// Constructs the URL path for this endpoint.
    ///
    /// The decode path carries a trailing slash while bulk/share do not; this
    /// asymmetry matches the real server's routing and must be preserved.
    fn to_path(&self) -> String {
        match self {
            Self::Generate { code_type, data } => {
                format!("/api/{}/{}", code_type, encode_component(data))
            }
            Self::Decode => "/decode/".to_string(),
            Self::Bulk => "/bulk".to_string(),
            Self::Info => "/info".to_string(),
            Self::Types => "/types".to_string(),
            Self::Type { .. } => "/type".to_string(),
            Self::Limiter => "/limiter".to_string(),
            Self::Session => "/session".to_string(),
            Self::CreateShare | Self::GetShare { .. } => "/share".to_string(),
        }
    }

    /// Returns the fixed query parameters for this endpoint (if any).
    fn query_params(&self) -> Option<String> {
        match self {
            Self::Type { name } => Some(format!("type={}", encode_component(name))),
            Self::GetShare { key } => Some(format!("key={}", encode_component(key))),
            _ => None,
        }
    }
}

/// Constructs a full URL for an endpoint against a base URL.
///
/// `extra_params` are appended after the endpoint's own query parameters,
/// with both keys and values percent-encoded.
#[must_use]
pub fn construct_endpoint_url(
    base_url: &str,
    endpoint: &Endpoint,
    extra_params: &[(String, String)],
) -> String {
    let path = endpoint.to_path();

    let mut query_parts = Vec::new();
    if let Some(fixed) = endpoint.query_params() {
        query_parts.push(fixed);
    }
    for (key, value) in extra_params {
        query_parts.push(format!(
            "{}={}",
            encode_component(key),
            encode_component(value)
        ));
    }

    let query_string = if query_parts.is_empty() {
        String::new()
    } else {
        format!("?{}", query_parts.join("&"))
    };

    format!("{base_url}{path}{query_string}")
}
