use std::str::FromStr;

use map_core::spatial::model::SpatialModel;
use map_crypto::{KeyEncoding, KeyMaterial};

use crate::error::{DecodeError, Result};

pub mod ijai;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    pub key_encoding: KeyEncoding,
}

/// One cloud map format: how to unwrap the raw blob and how to decode the
/// container inside it.
pub trait MapDecoder: Send + Sync {
    /// Raw blob to container bytes.
    fn unpack(&self, raw: &[u8], key_material: &KeyMaterial) -> Result<Vec<u8>>;

    fn decode(&self, container: &[u8]) -> Result<SpatialModel>;

    fn decode_blob(&self, raw: &[u8], key_material: &KeyMaterial) -> Result<SpatialModel> {
        let container = self.unpack(raw, key_material)?;
        self.decode(&container)
    }
}

pub trait DecoderProvider {
    fn get_decoder(&self) -> Box<dyn MapDecoder>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Ijai,
}

impl FromStr for Protocol {
    type Err = DecodeError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ijai" => Ok(Protocol::Ijai),
            other => Err(DecodeError::UnsupportedProtocol(other.to_string())),
        }
    }
}

pub fn get_provider(protocol: Protocol, config: DecoderConfig) -> Box<dyn DecoderProvider> {
    match protocol {
        Protocol::Ijai => Box::new(ijai::IjaiDecoderProvider { config }),
    }
}
