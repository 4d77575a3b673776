//! Extractors Crate
//!
//! This crate turns raw lines of a character-delimited stream into structured
//! records ready for grouping and aggregation: one or more label values, an
//! optional date/time value for temporal bucketing, and a set of numeric
//! summary candidates. It is designed to be reusable across different
//! stream sources.
//!
//! # Architecture
//!
//! - **Types**: The record type, extractor trait and errors are defined in
//!   the `shared-types` crate
//! - **Serialisers**: Turn one raw record into an ordered field sequence,
//!   optionally after regex-based filtering
//! - **Extractors**: Read configured field indices out of the split sequence
//!
//! # Available Extractors
//!
//! - `CsvDataExtractor`: Extracts records from character-separated streams
//! - `RegexDataExtractor`: Same, with regex pre-filtering of the raw text
//!
//! # Example
//!
//! ```rust
//! use extractors::{DataExtractor, RegexDataExtractor};
//!
//! let extractor = RegexDataExtractor::new(r"^\d.*", vec![1])
//!     .unwrap()
//!     .with_date_value_index(Some(0))
//!     .with_summary_indices(vec![2]);
//!
//! let record = extractor.extract("2023-01-01,sensorA,42.5").unwrap().unwrap();
//! assert_eq!(record.label, "sensorA");
//! ```

pub mod delimited;
pub mod serialiser;

// Re-export commonly used types
pub use delimited::{CsvDataExtractor, RegexDataExtractor, StringDataExtractor};
pub use serialiser::{CsvSerialiser, RegexSerialiser, Serialiser};

// Re-export the DataExtractor trait from shared-types for convenience
pub use shared_types::DataExtractor;
