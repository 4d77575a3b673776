mod csv;
mod regex;

pub use csv::CsvSerialiser;
pub use regex::RegexSerialiser;

use shared_types::ExtractionError;

/// Default record boundary within a raw stream
pub const DEFAULT_ITEM_TERMINATOR: &str = "\n";

/// The serialisation capability: turn one raw record into an ordered field
/// sequence. A closed set of two variants — a plain character-separated
/// splitter, and a regex-filtering variant that tests the raw text against a
/// pattern before delegating to the splitter.
#[derive(Debug, Clone)]
pub enum Serialiser {
    Csv(CsvSerialiser),
    Regex(RegexSerialiser),
}

impl Serialiser {
    /// Split one raw record into its ordered fields.
    ///
    /// `Ok(None)` means the regex variant's pattern did not match and the
    /// record is excluded from extraction; the plain variant never filters.
    pub fn split(&self, raw_record: &str) -> Result<Option<Vec<String>>, ExtractionError> {
        match self {
            Serialiser::Csv(csv) => csv.split(raw_record).map(Some),
            Serialiser::Regex(regex) => regex.split(raw_record),
        }
    }

    /// The record boundary the upstream reader should segment the raw
    /// stream with. This layer never segments byte streams itself.
    pub fn item_terminator(&self) -> &str {
        match self {
            Serialiser::Csv(csv) => csv.item_terminator(),
            Serialiser::Regex(regex) => regex.item_terminator(),
        }
    }

    /// Replace the item terminator. An empty argument preserves the
    /// previously configured value.
    pub fn with_item_terminator(self, terminator: &str) -> Self {
        match self {
            Serialiser::Csv(csv) => Serialiser::Csv(csv.with_item_terminator(terminator)),
            Serialiser::Regex(regex) => Serialiser::Regex(regex.with_item_terminator(terminator)),
        }
    }

    /// Replace the field delimiter of the underlying splitter
    pub fn with_delimiter(self, delimiter: u8) -> Self {
        match self {
            Serialiser::Csv(csv) => Serialiser::Csv(csv.with_delimiter(delimiter)),
            Serialiser::Regex(regex) => Serialiser::Regex(regex.with_delimiter(delimiter)),
        }
    }
}

impl From<CsvSerialiser> for Serialiser {
    fn from(serialiser: CsvSerialiser) -> Self {
        Serialiser::Csv(serialiser)
    }
}

impl From<RegexSerialiser> for Serialiser {
    fn from(serialiser: RegexSerialiser) -> Self {
        Serialiser::Regex(serialiser)
    }
}
