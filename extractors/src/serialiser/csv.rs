use csv::ReaderBuilder;
use shared_types::ExtractionError;

use super::DEFAULT_ITEM_TERMINATOR;

/// Splits one raw record on a configured character delimiter. Quoted fields
/// behave per RFC 4180.
#[derive(Debug, Clone)]
pub struct CsvSerialiser {
    delimiter: u8,
    item_terminator: String,
}

impl CsvSerialiser {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            item_terminator: DEFAULT_ITEM_TERMINATOR.to_string(),
        }
    }

    /// Override the field delimiter. The default is `,`
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Override the record boundary advertised to the upstream reader. The
    /// default is `"\n"`; an empty argument preserves the prior value.
    pub fn with_item_terminator(mut self, terminator: &str) -> Self {
        if !terminator.is_empty() {
            self.item_terminator = terminator.to_string();
        }
        self
    }

    pub fn item_terminator(&self) -> &str {
        &self.item_terminator
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Split one raw record into its fields, in order of occurrence.
    ///
    /// A record with fewer fields than some configured index is not an error
    /// here; absence is detected at index lookup time. An empty record yields
    /// an empty field sequence.
    pub fn split(&self, raw_record: &str) -> Result<Vec<String>, ExtractionError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(raw_record.as_bytes());

        match reader.records().next() {
            Some(Ok(record)) => Ok(record.iter().map(|field| field.to_string()).collect()),
            Some(Err(e)) => Err(ExtractionError::ParseError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }
}

impl Default for CsvSerialiser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let serialiser = CsvSerialiser::new();
        let fields = serialiser.split("2023-01-01,sensorA,42.5").unwrap();
        assert_eq!(fields, vec!["2023-01-01", "sensorA", "42.5"]);
    }

    #[test]
    fn test_split_preserves_order() {
        let serialiser = CsvSerialiser::new();
        let fields = serialiser.split("c,a,b").unwrap();
        assert_eq!(fields, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_split_custom_delimiter() {
        let serialiser = CsvSerialiser::new().with_delimiter(b'|');
        let fields = serialiser.split("a|b|c").unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_field() {
        let serialiser = CsvSerialiser::new();
        let fields = serialiser.split("\"a,b\",c").unwrap();
        assert_eq!(fields, vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_empty_record() {
        let serialiser = CsvSerialiser::new();
        let fields = serialiser.split("").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_short_record_is_not_an_error() {
        let serialiser = CsvSerialiser::new();
        let fields = serialiser.split("only-one-field").unwrap();
        assert_eq!(fields, vec!["only-one-field"]);
    }

    #[test]
    fn test_empty_terminator_is_noop() {
        let serialiser = CsvSerialiser::new()
            .with_item_terminator("\r\n")
            .with_item_terminator("");
        assert_eq!(serialiser.item_terminator(), "\r\n");
    }

    #[test]
    fn test_default_terminator() {
        assert_eq!(CsvSerialiser::new().item_terminator(), "\n");
    }
}
