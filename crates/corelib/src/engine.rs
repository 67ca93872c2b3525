//! Sponge engine capability boundary.
//!
//! The streaming layer only needs InitSponge/Absorb/Squeeze. Any engine with
//! a 1600-bit state can sit behind [`SpongeEngine`]; the Keccak backend crate
//! is wired in here.

use sha3nist_backend_keccak::{Domain, KeccakSponge, SpongeError};

use crate::errors::EngineError;
use crate::params::SpongeParameters;

pub use sha3nist_backend_keccak::{KeccakDomain, LegacyKeccakSponge, Sha3Domain, Sha3Sponge};

pub trait SpongeEngine: Sized {
    fn init_sponge(params: SpongeParameters) -> Result<Self, EngineError>;
    fn absorb(&mut self, data: &[u8], bit_len: usize) -> Result<(), EngineError>;
    fn squeeze(&mut self, out: &mut [u8], bit_len: usize) -> Result<(), EngineError>;
}

impl From<SpongeError> for EngineError {
    fn from(err: SpongeError) -> Self {
        match err {
            SpongeError::InvalidParameters { rate, capacity } => EngineError::Parameters {
                rate: u32::try_from(rate).unwrap_or(u32::MAX),
                capacity: u32::try_from(capacity).unwrap_or(u32::MAX),
            },
            SpongeError::AbsorbAfterSqueeze => EngineError::AbsorbAfterSqueeze,
            SpongeError::PartialByteQueued => EngineError::UnalignedContinuation,
            SpongeError::BufferTooShort { bit_len, available } => {
                EngineError::ShortBuffer { bit_len, available }
            }
            SpongeError::UnalignedSqueeze(bits) => EngineError::UnalignedSqueeze(bits),
        }
    }
}

impl<D: Domain> SpongeEngine for KeccakSponge<D> {
    fn init_sponge(params: SpongeParameters) -> Result<Self, EngineError> {
        Self::new(params.rate as usize, params.capacity as usize).map_err(EngineError::from)
    }

    fn absorb(&mut self, data: &[u8], bit_len: usize) -> Result<(), EngineError> {
        KeccakSponge::<D>::absorb(self, data, bit_len).map_err(EngineError::from)
    }

    fn squeeze(&mut self, out: &mut [u8], bit_len: usize) -> Result<(), EngineError> {
        KeccakSponge::<D>::squeeze(self, out, bit_len).map_err(EngineError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_map_onto_engine_errors() {
        let err = <Sha3Sponge as SpongeEngine>::init_sponge(SpongeParameters::new(1000, 600))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Parameters {
                rate: 1000,
                capacity: 600
            }
        );

        let mut sponge = Sha3Sponge::init_sponge(SpongeParameters::new(1088, 512)).unwrap();
        SpongeEngine::absorb(&mut sponge, &[0x01], 1).unwrap();
        assert_eq!(
            SpongeEngine::absorb(&mut sponge, &[0x01], 8),
            Err(EngineError::UnalignedContinuation)
        );
    }
}
