use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::{LegacyKeccakSponge, Sha3Sponge, SpongeEngine};
use crate::errors::Sha3Error;
use crate::params::select_parameters;
use crate::state::StreamingState;

/// Domain suffix applied by the Keccak engine before pad10*1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// FIPS 202 (`01` suffix).
    #[default]
    Sha3,
    /// Original Keccak submission (no suffix).
    Keccak,
}

impl Padding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Padding::Sha3 => "sha3",
            Padding::Keccak => "keccak",
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Padding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha3" => Ok(Padding::Sha3),
            "keccak" => Ok(Padding::Keccak),
            other => Err(anyhow!("unknown padding '{other}' (expected sha3 or keccak)")),
        }
    }
}

/// User/CLI-selected hashing job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub output_bits: u32, // 0, 224, 256, 384, 512
    #[serde(default)]
    pub padding: Padding,
    /// Bits to squeeze when `output_bits == 0`.
    #[serde(default)]
    pub squeeze_bits: Option<usize>,
}

impl Config {
    pub fn new(output_bits: u32, padding: Padding) -> Self {
        Self {
            output_bits,
            padding,
            squeeze_bits: None,
        }
    }

    pub fn arbitrary(padding: Padding, squeeze_bits: usize) -> Self {
        Self {
            output_bits: 0,
            padding,
            squeeze_bits: Some(squeeze_bits),
        }
    }

    pub fn validate(&self) -> Result<()> {
        select_parameters(self.output_bits)?;
        match (self.output_bits, self.squeeze_bits) {
            (0, None) => Err(anyhow!("squeeze_bits is required when output_bits is 0")),
            (0, Some(bits)) if bits == 0 || bits % 8 != 0 => Err(anyhow!(
                "squeeze_bits {bits} must be a positive multiple of 8"
            )),
            (fixed, Some(_)) if fixed != 0 => Err(anyhow!(
                "squeeze_bits only applies to arbitrary-length output (output_bits = 0), got {fixed}"
            )),
            _ => Ok(()),
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).context("parsing TOML config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(s).context("parsing JSON config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config file; `.json` is parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let is_json = path.extension().map(|e| e == "json").unwrap_or(false);
        let parsed = if is_json {
            Self::from_json_str(&s)
        } else {
            Self::from_toml_str(&s)
        };
        parsed.with_context(|| format!("loading config {}", path.display()))
    }

    /// Hash the first `bit_len` bits of `data` as configured.
    pub fn digest(&self, data: &[u8], bit_len: usize) -> Result<Vec<u8>, Sha3Error> {
        match self.padding {
            Padding::Sha3 => self.run::<Sha3Sponge>(data, bit_len),
            Padding::Keccak => self.run::<LegacyKeccakSponge>(data, bit_len),
        }
    }

    fn run<E: SpongeEngine>(&self, data: &[u8], bit_len: usize) -> Result<Vec<u8>, Sha3Error> {
        let mut state = StreamingState::<E>::init(self.output_bits)?;
        state.update(data, bit_len)?;
        if self.output_bits != 0 {
            return state.finalize_to_vec();
        }
        let bits = self.squeeze_bits.ok_or(Sha3Error::OutputLengthUnspecified)?;
        let mut out = vec![0u8; bits.div_ceil(8)];
        state.squeeze(&mut out, bits)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_defaults_to_sha3() {
        let cfg = Config::from_toml_str("output_bits = 256").unwrap();
        assert_eq!(cfg, Config::new(256, Padding::Sha3));
    }

    #[test]
    fn padding_parses_case_insensitively() {
        assert_eq!("KECCAK".parse::<Padding>().unwrap(), Padding::Keccak);
        assert!("shake".parse::<Padding>().is_err());
    }

    #[test]
    fn validate_rules() {
        assert!(Config::new(512, Padding::Keccak).validate().is_ok());
        assert!(Config::arbitrary(Padding::Keccak, 1024).validate().is_ok());

        let err = Config::new(160, Padding::Sha3).validate().unwrap_err();
        assert!(err.to_string().contains("unsupported hash length 160"));

        let err = Config::new(0, Padding::Sha3).validate().unwrap_err();
        assert!(err.to_string().contains("squeeze_bits is required"));

        let err = Config::arbitrary(Padding::Sha3, 12).validate().unwrap_err();
        assert!(err.to_string().contains("multiple of 8"));

        let mut cfg = Config::new(256, Padding::Sha3);
        cfg.squeeze_bits = Some(64);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn arbitrary_digest_has_requested_size() {
        let cfg = Config::arbitrary(Padding::Keccak, 200);
        assert_eq!(cfg.digest(b"abc", 24).unwrap().len(), 25);
    }
}
