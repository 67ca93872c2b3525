//! Keccak-f[1600] sponge engine with bit-granular absorption.
//!
//! Provides the three primitives the streaming layer consumes:
//! [`KeccakSponge::new`] (InitSponge), [`KeccakSponge::absorb`] and
//! [`KeccakSponge::squeeze`]. Input bits are numbered LSB first inside each
//! byte; a trailing partial byte carries its bits in the low positions.

mod domain;
mod errors;

pub use domain::{Domain, KeccakDomain, Sha3Domain};
pub use errors::SpongeError;

use std::fmt;
use std::marker::PhantomData;

use tiny_keccak::keccakf;

/// Permutation width in bits.
pub const WIDTH: usize = 1600;

const LANES: usize = 25;
const STATE_BYTES: usize = WIDTH / 8;

#[derive(Clone)]
pub struct KeccakSponge<D: Domain = Sha3Domain> {
    lanes: [u64; LANES],
    rate: usize,
    capacity: usize,
    queue: [u8; STATE_BYTES],
    bits_in_queue: usize,
    squeezing: bool,
    bits_available: usize,
    _domain: PhantomData<D>,
}

/// FIPS 202 padding (SHA3-224/256/384/512).
pub type Sha3Sponge = KeccakSponge<Sha3Domain>;
/// Original Keccak submission padding.
pub type LegacyKeccakSponge = KeccakSponge<KeccakDomain>;

impl<D: Domain> KeccakSponge<D> {
    /// InitSponge: `rate + capacity` must equal [`WIDTH`] and the rate must be
    /// a whole number of lanes.
    pub fn new(rate: usize, capacity: usize) -> Result<Self, SpongeError> {
        if rate == 0 || rate % 64 != 0 || rate.checked_add(capacity) != Some(WIDTH) {
            return Err(SpongeError::InvalidParameters { rate, capacity });
        }
        Ok(Self {
            lanes: [0u64; LANES],
            rate,
            capacity,
            queue: [0u8; STATE_BYTES],
            bits_in_queue: 0,
            squeezing: false,
            bits_available: 0,
            _domain: PhantomData,
        })
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_squeezing(&self) -> bool {
        self.squeezing
    }

    /// Absorb the first `bit_len` bits of `data`.
    ///
    /// Only the last call before squeezing may have `bit_len % 8 != 0`.
    pub fn absorb(&mut self, data: &[u8], bit_len: usize) -> Result<(), SpongeError> {
        if self.squeezing {
            return Err(SpongeError::AbsorbAfterSqueeze);
        }
        if self.bits_in_queue % 8 != 0 {
            return Err(SpongeError::PartialByteQueued);
        }
        let available = data.len().saturating_mul(8);
        if bit_len > available {
            return Err(SpongeError::BufferTooShort { bit_len, available });
        }

        let full = bit_len / 8;
        let rate_bytes = self.rate / 8;
        let mut input = &data[..full];
        while !input.is_empty() {
            let offset = self.bits_in_queue / 8;
            let take = usize::min(rate_bytes - offset, input.len());
            self.queue[offset..offset + take].copy_from_slice(&input[..take]);
            self.bits_in_queue += take * 8;
            input = &input[take..];
            if self.bits_in_queue == self.rate {
                self.absorb_queue();
            }
        }

        let partial = bit_len % 8;
        if partial != 0 {
            let mask = (1u8 << partial) - 1;
            self.queue[self.bits_in_queue / 8] = data[full] & mask;
            self.bits_in_queue += partial;
        }
        Ok(())
    }

    /// Squeeze `bit_len` bits into `out`. Pads on the first call; later calls
    /// continue the output stream.
    pub fn squeeze(&mut self, out: &mut [u8], bit_len: usize) -> Result<(), SpongeError> {
        if bit_len % 8 != 0 {
            return Err(SpongeError::UnalignedSqueeze(bit_len));
        }
        let available = out.len().saturating_mul(8);
        if bit_len > available {
            return Err(SpongeError::BufferTooShort { bit_len, available });
        }
        if !self.squeezing {
            self.pad_and_switch_to_squeezing();
        }

        let rate_bytes = self.rate / 8;
        let total = bit_len / 8;
        let mut written = 0;
        while written < total {
            if self.bits_available == 0 {
                keccakf(&mut self.lanes);
                self.extract();
            }
            let offset = rate_bytes - self.bits_available / 8;
            let take = usize::min(self.bits_available / 8, total - written);
            out[written..written + take].copy_from_slice(&self.queue[offset..offset + take]);
            self.bits_available -= take * 8;
            written += take;
        }
        Ok(())
    }

    fn push_bit(&mut self, bit: u8) {
        self.queue[self.bits_in_queue / 8] |= (bit & 1) << (self.bits_in_queue % 8);
        self.bits_in_queue += 1;
        if self.bits_in_queue == self.rate {
            self.absorb_queue();
        }
    }

    // suffix || pad10*1
    fn pad_and_switch_to_squeezing(&mut self) {
        for i in 0..D::SUFFIX_BITS {
            self.push_bit(D::SUFFIX >> i);
        }
        self.push_bit(1);
        let last = self.rate - 1;
        self.queue[last / 8] |= 1 << (last % 8);
        self.absorb_queue();
        self.extract();
        self.squeezing = true;
    }

    fn absorb_queue(&mut self) {
        let rate_bytes = self.rate / 8;
        for (lane, chunk) in self
            .lanes
            .iter_mut()
            .zip(self.queue[..rate_bytes].chunks_exact(8))
        {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        keccakf(&mut self.lanes);
        self.queue = [0u8; STATE_BYTES];
        self.bits_in_queue = 0;
    }

    fn extract(&mut self) {
        let rate_bytes = self.rate / 8;
        for (chunk, lane) in self.queue[..rate_bytes]
            .chunks_exact_mut(8)
            .zip(self.lanes.iter())
        {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        self.bits_available = self.rate;
    }
}

impl<D: Domain> fmt::Debug for KeccakSponge<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakSponge")
            .field("domain", &D::NAME)
            .field("rate", &self.rate)
            .field("capacity", &self.capacity)
            .field("squeezing", &self.squeezing)
            .finish_non_exhaustive()
    }
}
