use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SpongeError {
    #[error("invalid sponge parameters: rate {rate} + capacity {capacity} (rate must be a non-zero multiple of 64, sum must be 1600)")]
    InvalidParameters { rate: usize, capacity: usize },
    #[error("cannot absorb once squeezing has started")]
    AbsorbAfterSqueeze,
    #[error("a partial byte is already queued; only the last fragment may be unaligned")]
    PartialByteQueued,
    #[error("bit length {bit_len} exceeds buffer of {available} bits")]
    BufferTooShort { bit_len: usize, available: usize },
    #[error("squeeze length {0} is not a multiple of 8")]
    UnalignedSqueeze(usize),
}
