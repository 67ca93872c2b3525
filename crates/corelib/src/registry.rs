//! String id -> hashing variant mapping and convenience helpers.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{Config, Padding};
use crate::errors::Sha3Error;
use crate::params::{select_parameters, SpongeParameters};

/// A named `(output_bits, padding)` pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Variant {
    pub id: &'static str,
    pub output_bits: u32,
    pub padding: Padding,
}

impl Variant {
    pub fn parameters(&self) -> Result<SpongeParameters, Sha3Error> {
        select_parameters(self.output_bits)
    }

    pub fn is_fixed(&self) -> bool {
        self.output_bits != 0
    }

    pub fn config(&self) -> Config {
        Config::new(self.output_bits, self.padding)
    }
}

static VARIANTS: Lazy<Vec<Variant>> = Lazy::new(|| {
    let v = |id, output_bits, padding| Variant {
        id,
        output_bits,
        padding,
    };
    vec![
        v("sha3", 0, Padding::Sha3),
        v("sha3-224", 224, Padding::Sha3),
        v("sha3-256", 256, Padding::Sha3),
        v("sha3-384", 384, Padding::Sha3),
        v("sha3-512", 512, Padding::Sha3),
        v("keccak", 0, Padding::Keccak),
        v("keccak-224", 224, Padding::Keccak),
        v("keccak-256", 256, Padding::Keccak),
        v("keccak-384", 384, Padding::Keccak),
        v("keccak-512", 512, Padding::Keccak),
    ]
});

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// All registered variants, arbitrary-length ones first within each family.
pub fn list_variants() -> &'static [Variant] {
    VARIANTS.as_slice()
}

pub fn variant_by_id(id: &str) -> Option<Variant> {
    let id = normalize(id);
    VARIANTS.iter().find(|v| v.id == id).copied()
}

/// Whole-byte digest for a fixed-length variant id.
///
/// Supported ids: "sha3-224" .. "sha3-512", "keccak-224" .. "keccak-512".
pub fn digest_by_id(id: &str, data: &[u8]) -> Option<Vec<u8>> {
    let variant = variant_by_id(id).filter(Variant::is_fixed)?;
    variant.config().digest(data, data.len() * 8).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_supports_known_ids() {
        for id in [
            "sha3-224",
            "sha3-256",
            "sha3-384",
            "sha3-512",
            "keccak-224",
            "keccak-256",
            "keccak-384",
            "keccak-512",
        ] {
            let variant = variant_by_id(id).unwrap();
            let digest = digest_by_id(id, b"data").unwrap();
            assert_eq!(digest.len(), variant.output_bits as usize / 8);
        }
    }

    #[test]
    fn every_variant_has_table_parameters() {
        for variant in list_variants() {
            let params = variant.parameters().unwrap();
            assert_eq!(params.rate + params.capacity, 1600, "{}", variant.id);
        }
    }

    #[test]
    fn ids_are_normalized() {
        assert_eq!(variant_by_id("  SHA3-256 ").unwrap().output_bits, 256);
    }

    #[test]
    fn arbitrary_variants_have_no_one_shot_digest() {
        assert!(variant_by_id("keccak").is_some());
        assert!(digest_by_id("keccak", b"data").is_none());
        assert!(digest_by_id("sha3", b"data").is_none());
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(variant_by_id("blake3").is_none());
        assert!(digest_by_id("shake128", b"data").is_none());
    }

    #[test]
    fn sha3_and_keccak_differ() {
        let sha3 = digest_by_id("sha3-256", b"data").unwrap();
        let keccak = digest_by_id("keccak-256", b"data").unwrap();
        assert_ne!(sha3, keccak);
    }
}
