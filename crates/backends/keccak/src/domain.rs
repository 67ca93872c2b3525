//! Domain-separation suffixes appended before pad10*1.
//!
//! Suffix bits are given LSB first: bit 0 of `SUFFIX` is the first bit
//! appended after the message.

/// Bits the sponge appends to the message before padding.
pub trait Domain {
    const SUFFIX: u8;
    const SUFFIX_BITS: usize;
    const NAME: &'static str;
}

/// FIPS 202 SHA-3: message || 01.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha3Domain;

impl Domain for Sha3Domain {
    const SUFFIX: u8 = 0b10;
    const SUFFIX_BITS: usize = 2;
    const NAME: &'static str = "sha3";
}

/// Original Keccak submission: no suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeccakDomain;

impl Domain for KeccakDomain {
    const SUFFIX: u8 = 0;
    const SUFFIX_BITS: usize = 0;
    const NAME: &'static str = "keccak";
}
