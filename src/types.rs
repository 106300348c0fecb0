//! Core data types for FMG text banks

/// Content value marking an intentionally empty/unused string slot.
///
/// Runs of `%null%` rows are collapsed into hidden row groups on export so
/// translators only see slots that actually hold text.
pub const NULL_MARKER: &str = "%null%";

/// One translatable string: an opaque id plus its text.
///
/// Content may contain embedded newlines. Ids are passed through as strings
/// and are not required to be unique; duplicates survive both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub id: String,
    pub content: String,
}

impl TextEntry {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Whether this entry holds the `%null%` placeholder.
    pub fn is_null_marker(&self) -> bool {
        self.content == NULL_MARKER
    }
}

/// An ordered FMG text bank: fixed header metadata plus its entries.
///
/// The three metadata fields are constants of the format. They are written
/// verbatim on every export and never read back from a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FmgDocument {
    pub entries: Vec<TextEntry>,
}

impl FmgDocument {
    pub const COMPRESSION: &'static str = "None";
    pub const VERSION: &'static str = "DarkSouls3";
    pub const BIG_ENDIAN: &'static str = "False";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TextEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
