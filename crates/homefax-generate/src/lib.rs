//! Seeded record generation for HomeFax.
//!
//! Every generator function takes the random source explicitly, so a run is
//! reproducible from its seed and any single state can be regenerated alone.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;

pub use engine::{GenerationEngine, GenerationResult, stream_seed};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, StateReport};
