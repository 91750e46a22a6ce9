//! # iris-io
//!
//! Read iris samples from header-less CSV files and write tuning reports as
//! JSON. Bridges external files into the `iris-knn` sample types.

mod error;
mod reader;
mod report;

pub use error::IoError;
pub use reader::{HEADER, SampleReader, read_known_samples};
pub use report::{TuningReport, to_json, write_report};
