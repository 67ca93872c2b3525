//! One-shot hashing: Init, Update, Final in a single call.

use crate::engine::{Sha3Sponge, SpongeEngine};
use crate::errors::Sha3Error;
use crate::params::is_fixed_output_length;
use crate::state::StreamingState;

/// Hash the first `bit_len` bits of `data` into `out` with FIPS 202 padding.
///
/// Only the fixed lengths 224, 256, 384 and 512 are accepted here.
pub fn hash(
    output_bits: u32,
    data: &[u8],
    bit_len: usize,
    out: &mut [u8],
) -> Result<(), Sha3Error> {
    hash_with::<Sha3Sponge>(output_bits, data, bit_len, out)
}

/// [`hash`] over an arbitrary engine.
pub fn hash_with<E: SpongeEngine>(
    output_bits: u32,
    data: &[u8],
    bit_len: usize,
    out: &mut [u8],
) -> Result<(), Sha3Error> {
    if !is_fixed_output_length(output_bits) {
        return Err(Sha3Error::BadHashLength(output_bits));
    }
    let mut state = StreamingState::<E>::init(output_bits)?;
    state.update(data, bit_len)?;
    state.finalize(out)
}

/// Whole-byte one-shot hash returning the digest.
pub fn hash_to_vec(output_bits: u32, data: &[u8]) -> Result<Vec<u8>, Sha3Error> {
    hash_bytes_with::<Sha3Sponge>(output_bits, data)
}

pub fn hash_bytes_with<E: SpongeEngine>(
    output_bits: u32,
    data: &[u8],
) -> Result<Vec<u8>, Sha3Error> {
    let mut out = vec![0u8; output_bits as usize / 8];
    hash_with::<E>(output_bits, data, data.len() * 8, &mut out)?;
    Ok(out)
}
