use serde::{Deserialize, Serialize};

/// One three-line element set: a name line followed by the two fixed-column data lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TleRecord {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl TleRecord {
    pub fn new(
        name: impl Into<String>,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Catalog number taken from the fixed columns of line 1.
    pub fn norad_id(&self) -> String {
        norad_id(&self.line1)
    }

    pub fn is_well_formed(&self) -> bool {
        looks_like_element_lines(&self.line1, &self.line2)
    }

    pub fn to_block(&self) -> String {
        [self.name.as_str(), self.line1.as_str(), self.line2.as_str()].join("\n")
    }
}

/// Entry of a bulk catalog. Groups that do not look like element sets are carried
/// through untouched and never take part in identifier matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEntry {
    Element(TleRecord),
    Malformed { lines: Vec<String> },
}

impl CatalogEntry {
    pub fn norad_id(&self) -> Option<String> {
        match self {
            CatalogEntry::Element(record) => Some(record.norad_id()),
            CatalogEntry::Malformed { .. } => None,
        }
    }

    pub fn to_block(&self) -> String {
        match self {
            CatalogEntry::Element(record) => record.to_block(),
            CatalogEntry::Malformed { lines } => lines.join("\n"),
        }
    }
}

/// Raw response bodies of the two sources, as produced by the extract phase.
#[derive(Debug, Clone)]
pub struct SourceTexts {
    pub bulk: String,
    pub single: String,
}

#[derive(Debug, Clone)]
pub struct MergeResult {
    pub entries: Vec<CatalogEntry>,
    pub single_id: String,
    pub skipped: Vec<String>,
    pub output_text: String,
}

/// Characters 2..7 of a first data line, trimmed. The catalog number is right-aligned
/// and may be space padded, so it must be read by column and not by token.
pub fn norad_id(line1: &str) -> String {
    let columns: String = line1.chars().skip(2).take(5).collect();
    columns.trim().to_string()
}

fn looks_like_element_lines(line1: &str, line2: &str) -> bool {
    line1.trim_start().starts_with("1 ") && line2.trim_start().starts_with("2 ")
}
