//! Defines the training sample and its reader.

/// Defines the sample struct.
pub mod sample_struct;
/// Defines a builder that reads a sample from a file.
pub mod sample_reader;

pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
