//! Error type for the whole decode pipeline.

use coordinate_transformer::CoordinateConfigError;
use map_crypto::CryptoError;

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Key, base64, padding or inner-hex failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Truncated or corrupt deflate stream
    #[error("decompression failed: {0}")]
    Decompress(String),

    /// Malformed container or inconsistent header and grid
    #[error("container decode failed: {0}")]
    ContainerDecode(String),

    /// Header extents that cannot define a transform
    #[error("invalid coordinate configuration: {0}")]
    CoordinateConfig(#[from] CoordinateConfigError),

    #[error("unsupported map protocol: {0}")]
    UnsupportedProtocol(String),
}
