//! # fovgen-batch
//!
//! File writer and the generate pipeline.
//!
//! Call [`pipeline::generate`] to render and write one `.vot` footprint per
//! camera-optic pairing. The pipeline is fail-fast: the first error aborts
//! the run with nothing retried and no partial-failure recovery.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::BatchError;
pub use pipeline::{generate, pairings, GenerateOptions, GenerateReport, PairOutput, PairScope};
pub use writer::WriteResult;
