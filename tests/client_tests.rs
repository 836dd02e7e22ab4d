use barcodeapi::{Client, DEFAULT_BASE_URL};
use std::time::Duration;

#[test]
fn test_client_default_origin() {
    let client = Client::new();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(client.base_url(), "https://barcodeapi.org");
    assert_eq!(client.token(), None);
}

#[test]
fn test_builder_full_chain() {
    let client = Client::builder()
        .base_url("https://example.com")
        .token("abc")
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "https://example.com");
    assert_eq!(client.token(), Some("abc"));
}

#[test]
fn test_base_url_trailing_slash_equivalence() {
    let with_slash = Client::builder()
        .base_url("https://example.com/")
        .build()
        .unwrap();
    let without_slash = Client::builder()
        .base_url("https://example.com")
        .build()
        .unwrap();

    assert_eq!(with_slash.base_url(), without_slash.base_url());
}

#[test]
fn test_token_lifecycle() {
    let mut client = Client::builder().token("abc").build().unwrap();
    assert_eq!(client.token(), Some("abc"));

    client.set_token(Some("xyz".to_string()));
    assert_eq!(client.token(), Some("xyz"));

    client.set_token(None);
    assert_eq!(client.token(), None);
}

#[test]
fn test_client_is_cloneable() {
    let client = Client::builder().token("abc").build().unwrap();
    let cloned = client.clone();
    assert_eq!(cloned.base_url(), client.base_url());
    assert_eq!(cloned.token(), client.token());
}

#[test]
fn test_default_impl_matches_new() {
    let defaulted = Client::default();
    assert_eq!(defaulted.base_url(), DEFAULT_BASE_URL);
}
