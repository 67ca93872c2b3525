use thiserror::Error;

use crate::state::Phase;

/// Failures reported by a sponge engine through [`crate::engine::SpongeEngine`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("engine rejected parameters rate={rate} capacity={capacity}")]
    Parameters { rate: u32, capacity: u32 },
    #[error("absorb called after squeezing started")]
    AbsorbAfterSqueeze,
    #[error("only the final fragment may end on a non-byte boundary")]
    UnalignedContinuation,
    #[error("bit length {bit_len} exceeds buffer of {available} bits")]
    ShortBuffer { bit_len: usize, available: usize },
    #[error("squeeze length {0} is not a multiple of 8")]
    UnalignedSqueeze(usize),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Sha3Error {
    #[error("unsupported hash length {0} bits")]
    BadHashLength(u32),
    #[error("sponge initialisation failed: {0}")]
    EngineInit(#[source] EngineError),
    #[error("absorption failed: {0}")]
    Absorption(#[source] EngineError),
    #[error("squeeze failed: {0}")]
    Squeeze(#[source] EngineError),
    #[error("cannot {op} a session in the {phase} phase")]
    InvalidStateTransition { op: &'static str, phase: Phase },
    #[error("output length is arbitrary; use squeeze with an explicit bit count")]
    OutputLengthUnspecified,
    #[error("session has a fixed output length of {0} bits; use finalize")]
    FixedOutputLength(u32),
}
