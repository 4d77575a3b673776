use serde::{Deserialize, Serialize};

/// Core trait that all data extractors must implement
pub trait DataExtractor {
    /// Extract a structured record from one raw text record.
    ///
    /// `Ok(None)` means the record was deliberately filtered out (for example
    /// by a regex pre-filter) and nothing should reach the aggregation engine.
    fn extract(&self, raw_record: &str) -> Result<Option<ExtractedRecord>, ExtractionError>;

    /// What serialisation method does this extractor use?
    fn method(&self) -> ExtractionMethod;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Field index {index} out of range: record has {field_count} fields")]
    FieldIndexOutOfRange { index: usize, field_count: usize },

    #[error("Summary field {index} is not numeric: '{raw}'")]
    SummaryParseError { index: usize, raw: String },

    #[error("Date field {index} does not match the configured format: '{raw}'")]
    DateParseError { index: usize, raw: String },
}

/// Serialisation methods available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    CharacterSeparated,
    RegexFiltered,
}

/// A structured record extracted from one raw line, as handed to the
/// aggregation engine for grouping and summation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Composite label value the record is grouped on
    pub label: String,
    /// Human readable name for the composite label, if configured
    pub label_alias: Option<String>,
    /// Date/time string used for temporal bucketing, if configured
    pub date: Option<String>,
    /// Human readable name for the date field, if configured
    pub date_alias: Option<String>,
    /// Summary candidates in the order their indices were configured
    pub summaries: Vec<SummaryValue>,
}

/// One summary slot of an extracted record.
///
/// A slot whose raw text is not numeric keeps `value: None`; the failure is
/// scoped to this slot and does not invalidate the rest of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryValue {
    /// Field index the value was read from
    pub index: usize,
    /// Literal field text as it appeared in the record
    pub raw: String,
    /// Parsed numeric value, `None` when the text is not numeric
    pub value: Option<f64>,
}

impl SummaryValue {
    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }

    /// Resolve the slot, surfacing a parse failure as an error attributable
    /// to this field. Whether a failed slot aborts the whole record is the
    /// aggregation engine's policy, not this layer's.
    pub fn parsed(&self) -> Result<f64, ExtractionError> {
        self.value.ok_or_else(|| ExtractionError::SummaryParseError {
            index: self.index,
            raw: self.raw.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_method_serialization() {
        let method = ExtractionMethod::RegexFiltered;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"regex-filtered\"");

        let deserialized: ExtractionMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, method);
    }

    #[test]
    fn test_summary_value_parsed() {
        let good = SummaryValue {
            index: 2,
            raw: "42.5".to_string(),
            value: Some(42.5),
        };
        assert!(good.is_numeric());
        assert_eq!(good.parsed().unwrap(), 42.5);

        let bad = SummaryValue {
            index: 3,
            raw: "n/a".to_string(),
            value: None,
        };
        assert!(!bad.is_numeric());
        match bad.parsed() {
            Err(ExtractionError::SummaryParseError { index, raw }) => {
                assert_eq!(index, 3);
                assert_eq!(raw, "n/a");
            }
            other => panic!("Expected SummaryParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_extracted_record_serialization() {
        let record = ExtractedRecord {
            label: "sensorA".to_string(),
            label_alias: Some("sensor".to_string()),
            date: Some("2023-01-01".to_string()),
            date_alias: None,
            summaries: vec![SummaryValue {
                index: 2,
                raw: "42.5".to_string(),
                value: Some(42.5),
            }],
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ExtractedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_error_display() {
        let err = ExtractionError::FieldIndexOutOfRange {
            index: 5,
            field_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Field index 5 out of range: record has 3 fields"
        );
    }
}
