mod csv_extractor;
mod date_parser;
mod regex_extractor;

pub use csv_extractor::CsvDataExtractor;
pub use regex_extractor::RegexDataExtractor;

use shared_types::{ExtractedRecord, ExtractionError, SummaryValue};
use tracing::warn;

use crate::serialiser::Serialiser;

/// Separator between label components when multiple label indices are
/// configured
const LABEL_SEPARATOR: &str = "-";

/// Index-based extraction core shared by the concrete delimited-text
/// extractors: which positions of a split record carry the label, the
/// date/time value and the numeric summary candidates.
///
/// Configure once on a single thread, then hand each concurrent consumer its
/// own clone; extraction itself is a pure transform with no per-call state.
#[derive(Debug, Clone)]
pub struct StringDataExtractor {
    label_indices: Vec<usize>,
    label_alias: Option<String>,
    date_index: Option<usize>,
    date_alias: Option<String>,
    date_format: Option<String>,
    summary_indices: Vec<usize>,
    serialiser: Serialiser,
}

impl StringDataExtractor {
    pub fn new(label_indices: Vec<usize>, serialiser: Serialiser) -> Self {
        Self {
            label_indices,
            label_alias: None,
            date_index: None,
            date_alias: None,
            date_format: None,
            summary_indices: Vec::new(),
            serialiser,
        }
    }

    /// Name the composite label; empty argument preserves the prior value
    pub fn with_label_alias(mut self, alias: &str) -> Self {
        if !alias.is_empty() {
            self.label_alias = Some(alias.to_string());
        }
        self
    }

    /// Name the date field; empty argument preserves the prior value
    pub fn with_date_alias(mut self, alias: &str) -> Self {
        if !alias.is_empty() {
            self.date_alias = Some(alias.to_string());
        }
        self
    }

    /// Set which field position holds the date/time value. `None` preserves
    /// the prior setting rather than clearing it.
    pub fn with_date_value_index(mut self, index: Option<usize>) -> Self {
        if let Some(index) = index {
            self.date_index = Some(index);
        }
        self
    }

    /// Set the chrono format string the date field must parse under; empty
    /// argument preserves the prior value
    pub fn with_date_format(mut self, format: &str) -> Self {
        if !format.is_empty() {
            self.date_format = Some(format.to_string());
        }
        self
    }

    /// Replace the summary indices wholesale
    pub fn with_summary_indices(mut self, indices: Vec<usize>) -> Self {
        self.summary_indices = indices;
        self
    }

    /// Replace the record boundary on the active serialiser; empty argument
    /// preserves the prior value
    pub fn with_item_terminator(mut self, terminator: &str) -> Self {
        self.serialiser = self.serialiser.with_item_terminator(terminator);
        self
    }

    /// Replace the active serialiser wholesale. The prior instance is fully
    /// superseded; compatibility with the configured indices is the caller's
    /// responsibility.
    pub fn with_serialiser(mut self, serialiser: impl Into<Serialiser>) -> Self {
        self.serialiser = serialiser.into();
        self
    }

    pub fn label_indices(&self) -> &[usize] {
        &self.label_indices
    }

    pub fn label_alias(&self) -> Option<&str> {
        self.label_alias.as_deref()
    }

    pub fn date_value_index(&self) -> Option<usize> {
        self.date_index
    }

    pub fn date_alias(&self) -> Option<&str> {
        self.date_alias.as_deref()
    }

    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// The summary indices exactly as they were supplied, so a clone can
    /// reproduce the original configuration rather than a derived form
    pub fn original_summary_indices(&self) -> &[usize] {
        &self.summary_indices
    }

    pub fn item_terminator(&self) -> &str {
        self.serialiser.item_terminator()
    }

    pub fn serialiser(&self) -> &Serialiser {
        &self.serialiser
    }

    /// Join the values at the configured label indices, in index order
    pub fn extract_label(&self, fields: &[String]) -> Result<String, ExtractionError> {
        let mut components = Vec::with_capacity(self.label_indices.len());
        for &index in &self.label_indices {
            components.push(field_at(fields, index)?.to_string());
        }
        Ok(components.join(LABEL_SEPARATOR))
    }

    /// The literal field value at the date index, or `None` when no date
    /// extraction is configured. When a date format is set the value must
    /// parse under it.
    pub fn extract_date(&self, fields: &[String]) -> Result<Option<String>, ExtractionError> {
        let Some(index) = self.date_index else {
            return Ok(None);
        };

        let raw = field_at(fields, index)?;

        if let Some(format) = &self.date_format {
            if date_parser::parse_date(raw, format).is_none() {
                return Err(ExtractionError::DateParseError {
                    index,
                    raw: raw.to_string(),
                });
            }
        }

        Ok(Some(raw.to_string()))
    }

    /// One summary slot per configured index, in original order. A missing
    /// field fails the whole record; a present but non-numeric field only
    /// fails its own slot.
    pub fn extract_summaries(&self, fields: &[String]) -> Result<Vec<SummaryValue>, ExtractionError> {
        let mut summaries = Vec::with_capacity(self.summary_indices.len());

        for &index in &self.summary_indices {
            let raw = field_at(fields, index)?;
            let value = parse_summary(raw);
            if value.is_none() {
                warn!(index, raw, "Summary field is not numeric");
            }
            summaries.push(SummaryValue {
                index,
                raw: raw.to_string(),
                value,
            });
        }

        Ok(summaries)
    }

    /// Run the full pipeline over one raw record: serialise, then read the
    /// configured indices. `Ok(None)` means the serialiser's pre-filter
    /// excluded the record; a failure never yields a partial record.
    pub fn extract(&self, raw_record: &str) -> Result<Option<ExtractedRecord>, ExtractionError> {
        let Some(fields) = self.serialiser.split(raw_record)? else {
            return Ok(None);
        };

        let label = self.extract_label(&fields)?;
        let date = self.extract_date(&fields)?;
        let summaries = self.extract_summaries(&fields)?;

        Ok(Some(ExtractedRecord {
            label,
            label_alias: self.label_alias.clone(),
            date,
            date_alias: self.date_alias.clone(),
            summaries,
        }))
    }
}

fn field_at(fields: &[String], index: usize) -> Result<&str, ExtractionError> {
    fields
        .get(index)
        .map(|field| field.as_str())
        .ok_or(ExtractionError::FieldIndexOutOfRange {
            index,
            field_count: fields.len(),
        })
}

fn parse_summary(raw: &str) -> Option<f64> {
    raw.replace(',', "").replace('$', "").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialiser::CsvSerialiser;

    fn fields(record: &str) -> Vec<String> {
        record.split(',').map(|s| s.to_string()).collect()
    }

    fn extractor(label_indices: Vec<usize>) -> StringDataExtractor {
        StringDataExtractor::new(label_indices, CsvSerialiser::new().into())
    }

    #[test]
    fn test_extract_label_single_index() {
        let extractor = extractor(vec![1]);
        let label = extractor.extract_label(&fields("2023-01-01,sensorA,42.5")).unwrap();
        assert_eq!(label, "sensorA");
    }

    #[test]
    fn test_extract_label_joins_in_index_order() {
        let extractor = extractor(vec![1, 0]);
        let label = extractor.extract_label(&fields("west,sensorA,42.5")).unwrap();
        assert_eq!(label, "sensorA-west");
    }

    #[test]
    fn test_extract_label_out_of_range() {
        let extractor = extractor(vec![5]);
        let result = extractor.extract_label(&fields("2023-01-01,sensorA,42.5"));
        match result {
            Err(ExtractionError::FieldIndexOutOfRange { index, field_count }) => {
                assert_eq!(index, 5);
                assert_eq!(field_count, 3);
            }
            other => panic!("Expected FieldIndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_date_unconfigured() {
        let extractor = extractor(vec![1]);
        assert_eq!(extractor.extract_date(&fields("a,b,c")).unwrap(), None);
    }

    #[test]
    fn test_extract_date_configured() {
        let extractor = extractor(vec![1]).with_date_value_index(Some(0));
        let date = extractor.extract_date(&fields("2023-01-01,sensorA,42.5")).unwrap();
        assert_eq!(date.as_deref(), Some("2023-01-01"));
    }

    #[test]
    fn test_extract_date_with_format_validation() {
        let extractor = extractor(vec![1])
            .with_date_value_index(Some(0))
            .with_date_format("%Y-%m-%d");

        let ok = extractor.extract_date(&fields("2023-01-01,sensorA,42.5"));
        assert_eq!(ok.unwrap().as_deref(), Some("2023-01-01"));

        let bad = extractor.extract_date(&fields("not-a-date,sensorA,42.5"));
        assert!(matches!(bad, Err(ExtractionError::DateParseError { index: 0, .. })));
    }

    #[test]
    fn test_extract_summaries_in_original_order() {
        let extractor = extractor(vec![0]).with_summary_indices(vec![2, 1]);
        let summaries = extractor.extract_summaries(&fields("x,1.5,2.5")).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].index, 2);
        assert_eq!(summaries[0].value, Some(2.5));
        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].value, Some(1.5));
    }

    #[test]
    fn test_non_numeric_summary_fails_only_its_slot() {
        let extractor = extractor(vec![0]).with_summary_indices(vec![1, 2]);
        let summaries = extractor.extract_summaries(&fields("x,oops,2.5")).unwrap();
        assert!(!summaries[0].is_numeric());
        assert_eq!(summaries[0].raw, "oops");
        assert!(summaries[1].is_numeric());
    }

    #[test]
    fn test_missing_summary_field_fails_record() {
        let extractor = extractor(vec![0]).with_summary_indices(vec![7]);
        let result = extractor.extract_summaries(&fields("x,1.5"));
        assert!(matches!(
            result,
            Err(ExtractionError::FieldIndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn test_summary_parsing_tolerates_currency_formatting() {
        assert_eq!(parse_summary("$1,234.50"), Some(1234.5));
        assert_eq!(parse_summary(" 42.5 "), Some(42.5));
        assert_eq!(parse_summary("n/a"), None);
    }

    #[test]
    fn test_extract_full_record() {
        let extractor = extractor(vec![1])
            .with_date_value_index(Some(0))
            .with_summary_indices(vec![2]);

        let record = extractor.extract("2023-01-01,sensorA,42.5").unwrap().unwrap();
        assert_eq!(record.label, "sensorA");
        assert_eq!(record.date.as_deref(), Some("2023-01-01"));
        assert_eq!(record.summaries.len(), 1);
        assert_eq!(record.summaries[0].value, Some(42.5));
    }

    #[test]
    fn test_extract_out_of_range_produces_no_partial_record() {
        let extractor = extractor(vec![5]);
        let result = extractor.extract("2023-01-01,sensorA,42.5");
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_noops_preserve_state() {
        let extractor = extractor(vec![0])
            .with_label_alias("sensor")
            .with_date_value_index(Some(1))
            .with_date_format("%Y-%m-%d")
            .with_label_alias("")
            .with_date_value_index(None)
            .with_date_format("")
            .with_item_terminator("");

        assert_eq!(extractor.label_alias(), Some("sensor"));
        assert_eq!(extractor.date_value_index(), Some(1));
        assert_eq!(extractor.date_format(), Some("%Y-%m-%d"));
        assert_eq!(extractor.item_terminator(), "\n");
    }

    #[test]
    fn test_with_serialiser_supersedes_prior_settings() {
        let extractor = extractor(vec![0])
            .with_item_terminator("\r\n")
            .with_serialiser(CsvSerialiser::new());
        // Wholesale replacement: the old terminator is not merged in
        assert_eq!(extractor.item_terminator(), "\n");
    }

    #[test]
    fn test_original_summary_indices_returned_as_supplied() {
        let extractor = extractor(vec![0]).with_summary_indices(vec![3, 1, 3]);
        assert_eq!(extractor.original_summary_indices(), &[3, 1, 3]);
    }
}
