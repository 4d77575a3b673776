use shared_types::{DataExtractor, ExtractedRecord, ExtractionError, ExtractionMethod};

use super::StringDataExtractor;
use crate::serialiser::{CsvSerialiser, Serialiser};

/// Extractor for plain character-separated streams, with no pre-filtering:
/// every raw record reaches the delimiter split, so extraction never yields
/// a filtered-out (`None`) result.
#[derive(Debug, Clone)]
pub struct CsvDataExtractor {
    base: StringDataExtractor,
}

impl CsvDataExtractor {
    /// Create an extractor grouping on the fields at `label_indices`, split
    /// on the default `,` delimiter
    pub fn new(label_indices: Vec<usize>) -> Self {
        Self {
            base: StringDataExtractor::new(label_indices, CsvSerialiser::new().into()),
        }
    }

    /// Override the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        let serialiser = self.base.serialiser().clone().with_delimiter(delimiter);
        self.base = self.base.with_serialiser(serialiser);
        self
    }

    /// Replace the record boundary on the active serialiser; empty argument
    /// preserves the prior value
    pub fn with_item_terminator(mut self, terminator: &str) -> Self {
        self.base = self.base.with_item_terminator(terminator);
        self
    }

    /// Replace the active serialiser wholesale
    pub fn with_serialiser(mut self, serialiser: impl Into<Serialiser>) -> Self {
        self.base = self.base.with_serialiser(serialiser);
        self
    }

    /// Set the date field position; `None` preserves the prior setting
    pub fn with_date_value_index(mut self, index: Option<usize>) -> Self {
        self.base = self.base.with_date_value_index(index);
        self
    }

    /// Set the chrono format the date field must parse under; empty argument
    /// preserves the prior value
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.base = self.base.with_date_format(format);
        self
    }

    /// Name the composite label; empty argument preserves the prior value
    pub fn with_label_alias(mut self, alias: &str) -> Self {
        self.base = self.base.with_label_alias(alias);
        self
    }

    /// Name the date field; empty argument preserves the prior value
    pub fn with_date_alias(mut self, alias: &str) -> Self {
        self.base = self.base.with_date_alias(alias);
        self
    }

    /// Replace the summary indices wholesale
    pub fn with_summary_indices(mut self, indices: Vec<usize>) -> Self {
        self.base = self.base.with_summary_indices(indices);
        self
    }

    /// The index configuration this extractor reads fields with
    pub fn config(&self) -> &StringDataExtractor {
        &self.base
    }
}

impl DataExtractor for CsvDataExtractor {
    fn extract(&self, raw_record: &str) -> Result<Option<ExtractedRecord>, ExtractionError> {
        self.base.extract(raw_record)
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::CharacterSeparated
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
