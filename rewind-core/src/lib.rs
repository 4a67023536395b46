//! Shared building blocks for the rewind samplers: the error taxonomy, the
//! checkpoint snapshot and the seeding helpers.

pub mod error;
pub mod rng;
pub mod state;

pub use error::SamplerError;
pub use state::SamplerState;
