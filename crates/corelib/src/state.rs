//! Init/Update/Final session over a [`SpongeEngine`].

use std::fmt;

use crate::align::BitBuffer;
use crate::engine::{LegacyKeccakSponge, Sha3Sponge, SpongeEngine};
use crate::errors::Sha3Error;
use crate::params::{select_parameters, SpongeParameters};

/// Lifecycle of a session: `Configured -> Absorbing -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configured,
    Absorbing,
    Finalized,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Configured => "configured",
            Phase::Absorbing => "absorbing",
            Phase::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// An exclusively owned hashing session.
///
/// `fixed_output_length == 0` means the caller picks the output size at
/// extraction time through [`StreamingState::squeeze`]; otherwise
/// [`StreamingState::finalize`] produces exactly that many bits.
#[derive(Debug, Clone)]
pub struct StreamingState<E: SpongeEngine = Sha3Sponge> {
    sponge: E,
    params: SpongeParameters,
    fixed_output_length: u32,
    phase: Phase,
}

/// FIPS 202 session.
pub type Sha3State = StreamingState<Sha3Sponge>;
/// Original Keccak padding session.
pub type KeccakState = StreamingState<LegacyKeccakSponge>;

impl<E: SpongeEngine> StreamingState<E> {
    /// Select parameters for `output_bits` (0, 224, 256, 384 or 512) and
    /// initialise the sponge.
    pub fn init(output_bits: u32) -> Result<Self, Sha3Error> {
        let params = select_parameters(output_bits)?;
        let sponge = E::init_sponge(params).map_err(Sha3Error::EngineInit)?;
        Ok(Self {
            sponge,
            params,
            fixed_output_length: output_bits,
            phase: Phase::Configured,
        })
    }

    /// Absorb the first `bit_len` bits of `data`.
    ///
    /// Whole bytes go to the engine first; a trailing partial byte, whose
    /// significant bits are the high ones, is right-justified and absorbed
    /// on its own. Only the last fragment of the last call may be partial.
    pub fn update(&mut self, data: &[u8], bit_len: usize) -> Result<(), Sha3Error> {
        self.ensure_open("update")?;
        let input = BitBuffer::new(data, bit_len).map_err(Sha3Error::Absorption)?;

        let (prefix, prefix_bits) = input.aligned_prefix();
        self.sponge
            .absorb(prefix, prefix_bits)
            .map_err(Sha3Error::Absorption)?;
        self.phase = Phase::Absorbing;

        if let Some(tail) = input.tail() {
            self.sponge
                .absorb(&[tail.byte], tail.bits)
                .map_err(Sha3Error::Absorption)?;
        }
        Ok(())
    }

    /// Squeeze `fixed_output_length` bits into `out`. The session is
    /// finalized whether or not the engine accepts the call.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<(), Sha3Error> {
        self.ensure_open("finalize")?;
        if self.fixed_output_length == 0 {
            return Err(Sha3Error::OutputLengthUnspecified);
        }
        self.phase = Phase::Finalized;
        self.sponge
            .squeeze(out, self.fixed_output_length as usize)
            .map_err(Sha3Error::Squeeze)
    }

    /// [`StreamingState::finalize`] into a freshly allocated digest.
    pub fn finalize_to_vec(&mut self) -> Result<Vec<u8>, Sha3Error> {
        let mut out = vec![0u8; self.output_len_bytes()];
        self.finalize(&mut out)?;
        Ok(out)
    }

    /// Arbitrary-length extraction for sessions initialised with 0.
    /// Repeated calls continue the output stream.
    pub fn squeeze(&mut self, out: &mut [u8], bit_len: usize) -> Result<(), Sha3Error> {
        if self.fixed_output_length != 0 {
            return Err(Sha3Error::FixedOutputLength(self.fixed_output_length));
        }
        self.phase = Phase::Finalized;
        self.sponge
            .squeeze(out, bit_len)
            .map_err(Sha3Error::Squeeze)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn parameters(&self) -> SpongeParameters {
        self.params
    }

    pub fn fixed_output_length(&self) -> u32 {
        self.fixed_output_length
    }

    /// Digest size in bytes; 0 in arbitrary-length mode.
    pub fn output_len_bytes(&self) -> usize {
        self.fixed_output_length as usize / 8
    }

    pub fn engine(&self) -> &E {
        &self.sponge
    }

    fn ensure_open(&self, op: &'static str) -> Result<(), Sha3Error> {
        if self.phase == Phase::Finalized {
            return Err(Sha3Error::InvalidStateTransition {
                op,
                phase: self.phase,
            });
        }
        Ok(())
    }
}

/// Init with the FIPS 202 engine.
pub fn init(output_bits: u32) -> Result<Sha3State, Sha3Error> {
    StreamingState::init(output_bits)
}

pub fn update<E: SpongeEngine>(
    state: &mut StreamingState<E>,
    data: &[u8],
    bit_len: usize,
) -> Result<(), Sha3Error> {
    state.update(data, bit_len)
}

pub fn finalize<E: SpongeEngine>(
    state: &mut StreamingState<E>,
    out: &mut [u8],
) -> Result<(), Sha3Error> {
    state.finalize(out)
}

pub fn squeeze<E: SpongeEngine>(
    state: &mut StreamingState<E>,
    out: &mut [u8],
    bit_len: usize,
) -> Result<(), Sha3Error> {
    state.squeeze(out, bit_len)
}
