//! Core library: streaming SHA-3/Keccak sessions over a pluggable sponge
//! engine, plus the one-shot entry point and variant registry used by the CLI.

pub mod align;
pub mod config;
pub mod engine;
pub mod errors;
pub mod hash;
pub mod params;
pub mod registry;
pub mod state;

pub use errors::{EngineError, Sha3Error};
pub use hash::{hash, hash_to_vec, hash_with};
pub use params::{SpongeParameters, PARAMETER_TABLE};
pub use state::{finalize, init, squeeze, update, KeccakState, Phase, Sha3State, StreamingState};

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_variants_and_parameters() {
        assert!(!registry::list_variants().is_empty());
        assert_eq!(PARAMETER_TABLE.len(), 5);
        assert!(!version().is_empty());
    }
}
