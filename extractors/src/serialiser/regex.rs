use regex::Regex;
use shared_types::ExtractionError;

use super::CsvSerialiser;

/// Regex-filtering variant of the character-separated splitter: the raw text
/// is tested against a caller-authored pattern before delimiter splitting,
/// which lets noisy or multi-format streams be normalised up front.
#[derive(Debug, Clone)]
pub struct RegexSerialiser {
    pattern: Regex,
    inner: CsvSerialiser,
}

impl RegexSerialiser {
    pub fn new(pattern: &str) -> Result<Self, ExtractionError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ExtractionError::ConfigError(format!("Invalid regex pattern: {}", e)))?;

        Ok(Self {
            pattern,
            inner: CsvSerialiser::new(),
        })
    }

    /// Replace the delimiter splitter the matched text is handed to
    pub fn with_inner(mut self, inner: CsvSerialiser) -> Self {
        self.inner = inner;
        self
    }

    /// Delegates to the inner splitter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.inner = self.inner.with_delimiter(delimiter);
        self
    }

    /// Delegates to the inner splitter; empty argument preserves the prior
    /// value.
    pub fn with_item_terminator(mut self, terminator: &str) -> Self {
        self.inner = self.inner.with_item_terminator(terminator);
        self
    }

    pub fn item_terminator(&self) -> &str {
        self.inner.item_terminator()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Split one raw record after testing it against the pattern.
    ///
    /// A non-matching record is excluded from extraction (`Ok(None)`), not an
    /// error. On a match, the text of capture group 1 — when the pattern
    /// defines one and it participated in the match — otherwise the whole
    /// match, is handed to the delimiter splitter. The pattern therefore
    /// fully controls what portion of the record reaches the split.
    pub fn split(&self, raw_record: &str) -> Result<Option<Vec<String>>, ExtractionError> {
        let Some(captures) = self.pattern.captures(raw_record) else {
            return Ok(None);
        };

        let matched = captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str())
            .unwrap_or(raw_record);

        self.inner.split(matched).map(Some)
    }
}
