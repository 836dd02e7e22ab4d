//! A Rust client library for the [BarcodeAPI.org](https://barcodeapi.org)
//! REST interface.
//!
//! The crate exposes a single [`Client`] whose methods map one-to-one onto
//! the service endpoints: generate a barcode image, decode an uploaded
//! image, bulk-generate from a CSV, fetch server and type metadata, inspect
//! rate-limit and session state, and create or retrieve shares.
//!
//! Every call issues exactly one HTTP request over a shared connection pool;
//! non-2xx statuses surface as [`BarcodeError::Api`] and nothing is retried
//! or swallowed.
//!
//! # Example
//!
//! ```no_run
//! use barcodeapi::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new();
//!
//! // Generate a QR code and save the image
//! let barcode = client.generate("Hello, world!").with_type("qr").send().await?;
//! std::fs::write("hello.png", barcode.bytes())?;
//!
//! // Decode it back
//! let decoded = client.decode(std::path::Path::new("hello.png")).await?;
//! println!("decoded: {:?}", decoded.text);
//!
//! // Bundle requests into a share
//! let key = client.create_share(["/api/qr/a", "/api/qr/b"]).await?;
//! let share = client.get_share(&key).await?;
//! println!("share: {share}");
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! BarcodeAPI uses an opaque token sent as `Authorization: Token=<token>`.
//! Set it at construction with [`ClientBuilder::token`] or later with
//! [`Client::set_token`]; clearing the token removes the header from all
//! subsequent calls.
//!
//! # Concurrency
//!
//! A `Client` is cheap to clone (the connection pool is shared). Token
//! mutation via `set_token` requires `&mut self`; for concurrent use with
//! different credentials, clone the client per credential instead.

mod client;
mod errors;
mod generate;
mod http;
mod upload;

pub use client::{Client, ClientBuilder};
pub use errors::BarcodeError;
pub use generate::GenerateBuilder;
pub use http::barcodes::{Barcode, DecodeResult};
pub use http::common::DEFAULT_BASE_URL;
pub use upload::ByteSource;
