use log::debug;

use map_core::spatial::model::SpatialModel;
use map_crypto::{decrypt, derive_key, KeyMaterial};

use crate::assembler::assemble;
use crate::container::decode_container;
use crate::decompress::inflate;
use crate::error::Result;

use super::{DecoderConfig, DecoderProvider, MapDecoder};

pub struct IjaiDecoderProvider {
    pub config: DecoderConfig,
}

impl DecoderProvider for IjaiDecoderProvider {
    fn get_decoder(&self) -> Box<dyn MapDecoder> {
        Box::new(IjaiDecoder {
            config: self.config,
        })
    }
}

/// Ijai cloud maps: AES-ECB over hex text over a zlib stream over a protobuf
/// container.
pub struct IjaiDecoder {
    pub config: DecoderConfig,
}

impl MapDecoder for IjaiDecoder {
    fn unpack(&self, raw: &[u8], key_material: &KeyMaterial) -> Result<Vec<u8>> {
        let key = derive_key(key_material, self.config.key_encoding);
        let compressed = decrypt(raw, &key)?;
        debug!(
            "decrypted {} blob bytes into {} compressed bytes",
            raw.len(),
            compressed.len()
        );
        inflate(&compressed)
    }

    fn decode(&self, container: &[u8]) -> Result<SpatialModel> {
        let container = decode_container(container)?;
        assemble(container)
    }
}
