use shared_types::{DataExtractor, ExtractedRecord, ExtractionError, ExtractionMethod};

use super::StringDataExtractor;
use crate::serialiser::{RegexSerialiser, Serialiser};

/// Extractor for character-separated streams with regex pre-filtering of the
/// raw text: records the pattern does not match never reach the delimiter
/// split or the aggregation engine.
///
/// Cloning produces a fully independent instance — the serialiser
/// configuration (pattern, delimiter, item terminator) is copied, not shared,
/// so post-clone configuration of one instance is never observed by another.
#[derive(Debug, Clone)]
pub struct RegexDataExtractor {
    regex: String,
    base: StringDataExtractor,
}

impl RegexDataExtractor {
    /// Create an extractor filtering on `pattern`, grouping on the fields at
    /// `label_indices`
    pub fn new(pattern: &str, label_indices: Vec<usize>) -> Result<Self, ExtractionError> {
        Self::from_parts(pattern, label_indices, None, None, None, None)
    }

    /// As [`RegexDataExtractor::new`], with the date field position set
    pub fn with_date_index(
        pattern: &str,
        label_indices: Vec<usize>,
        date_index: usize,
    ) -> Result<Self, ExtractionError> {
        Self::from_parts(pattern, label_indices, None, Some(date_index), None, None)
    }

    /// Full construction form. A `None` date index leaves date extraction
    /// unconfigured; a `None` serialiser means a fresh regex-filtering
    /// serialiser is built from `pattern`.
    pub fn from_parts(
        pattern: &str,
        label_indices: Vec<usize>,
        label_alias: Option<&str>,
        date_index: Option<usize>,
        date_alias: Option<&str>,
        serialiser: Option<Serialiser>,
    ) -> Result<Self, ExtractionError> {
        let serialiser = match serialiser {
            Some(serialiser) => serialiser,
            None => RegexSerialiser::new(pattern)?.into(),
        };

        let base = StringDataExtractor::new(label_indices, serialiser)
            .with_label_alias(label_alias.unwrap_or(""))
            .with_date_alias(date_alias.unwrap_or(""))
            .with_date_value_index(date_index);

        Ok(Self {
            regex: pattern.to_string(),
            base,
        })
    }

    /// Replace the record boundary on the active serialiser; empty argument
    /// preserves the prior value
    pub fn with_item_terminator(mut self, terminator: &str) -> Self {
        self.base = self.base.with_item_terminator(terminator);
        self
    }

    /// Replace the active serialiser wholesale; compatibility with the index
    /// configuration is the caller's responsibility
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

    pub fn pattern(&self) -> &str {
        &self.regex
    }

    /// The index configuration this extractor reads fields with
    pub fn config(&self) -> &StringDataExtractor {
        &self.base
    }
}

impl DataExtractor for RegexDataExtractor {
    fn extract(&self, raw_record: &str) -> Result<Option<ExtractedRecord>, ExtractionError> {
        self.base.extract(raw_record)
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::RegexFiltered
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
