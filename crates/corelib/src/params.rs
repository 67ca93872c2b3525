//! Output length -> sponge (rate, capacity) selection.

use serde::{Deserialize, Serialize};

use crate::errors::Sha3Error;

/// Width of the Keccak-f permutation in bits.
pub const PERMUTATION_WIDTH: u32 = 1600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpongeParameters {
    pub rate: u32,
    pub capacity: u32,
}

impl SpongeParameters {
    pub const fn new(rate: u32, capacity: u32) -> Self {
        Self { rate, capacity }
    }

    pub const fn width(&self) -> u32 {
        self.rate + self.capacity
    }
}

/// Legal configurations keyed by requested output length. `0` selects the
/// arbitrary-length default.
pub const PARAMETER_TABLE: [(u32, SpongeParameters); 5] = [
    (0, SpongeParameters::new(1024, 576)),
    (224, SpongeParameters::new(1152, 448)),
    (256, SpongeParameters::new(1088, 512)),
    (384, SpongeParameters::new(832, 768)),
    (512, SpongeParameters::new(576, 1024)),
];

/// Output lengths accepted by the one-shot entry point.
pub const FIXED_OUTPUT_LENGTHS: [u32; 4] = [224, 256, 384, 512];

pub fn select_parameters(output_bits: u32) -> Result<SpongeParameters, Sha3Error> {
    PARAMETER_TABLE
        .iter()
        .find(|(bits, _)| *bits == output_bits)
        .map(|(_, params)| *params)
        .ok_or(Sha3Error::BadHashLength(output_bits))
}

pub fn is_fixed_output_length(output_bits: u32) -> bool {
    FIXED_OUTPUT_LENGTHS.contains(&output_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_fills_the_permutation() {
        for (_, params) in PARAMETER_TABLE {
            assert_eq!(params.width(), PERMUTATION_WIDTH);
        }
    }

    #[test]
    fn capacity_is_twice_the_output() {
        for (bits, params) in PARAMETER_TABLE.iter().skip(1) {
            assert_eq!(params.capacity, 2 * bits);
        }
    }

    #[test]
    fn unknown_lengths_are_rejected() {
        for bits in [1, 8, 160, 255, 257, 1024] {
            assert_eq!(
                select_parameters(bits),
                Err(Sha3Error::BadHashLength(bits))
            );
        }
        assert_eq!(
            select_parameters(0),
            Ok(SpongeParameters::new(1024, 576))
        );
    }
}
