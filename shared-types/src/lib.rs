pub mod extraction;

pub use extraction::{
    DataExtractor, ExtractedRecord, ExtractionError, ExtractionMethod, SummaryValue,
};
