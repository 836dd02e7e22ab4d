//! Byte sources for upload endpoints.
//!
//! The decode and bulk endpoints accept a file path, raw bytes, or an async
//! reader. All three are normalized to an in-memory byte buffer before the
//! request is built, mirroring how the service expects a complete multipart
//! body.

use crate::errors::BarcodeError;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt};

/// A source of bytes for an upload (`decode`, `bulk_generate`).
///
/// Construct one via the `From` impls for paths and byte buffers, or
/// [`ByteSource::reader`] for an arbitrary async reader:
///
/// ```no_run
/// # use barcodeapi::ByteSource;
/// # use std::path::Path;
/// let from_path = ByteSource::from(Path::new("barcode.png"));
/// let from_bytes = ByteSource::from(vec![0x89, 0x50, 0x4e, 0x47]);
/// ```
pub enum ByteSource {
    /// Read the file at this path.
    Path(PathBuf),
    /// Use these bytes as-is.
    Bytes(Vec<u8>),
    /// Drain this reader to completion.
    Reader(Box<dyn AsyncRead + Send + Unpin>),
}

impl ByteSource {
    /// Wraps an async reader as a byte source.
    pub fn reader<R: AsyncRead + Send + Unpin + 'static>(reader: R) -> Self {
        Self::Reader(Box::new(reader))
    }

    /// Normalizes the source to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `BarcodeError::Io` if the file cannot be read or the reader
    /// fails.
    pub async fn into_bytes(self) -> Result<Vec<u8>, BarcodeError> {
        match self {
            Self::Path(path) => {
                log::debug!("Reading byte source from file: {}", path.display());
                Ok(tokio::fs::read(&path).await?)
            }
            Self::Bytes(bytes) => Ok(bytes),
            Self::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf).await?;
                Ok(buf)
            }
        }
    }
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => f
                .debug_struct("Bytes")
                .field("len", &bytes.len())
                .finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<PathBuf> for ByteSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ByteSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ByteSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ByteSource {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Bytes> for ByteSource {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}
