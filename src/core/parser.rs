use crate::domain::model::{CatalogEntry, TleRecord};
use crate::utils::error::{MergeError, Result};

/// Line boundaries recognised in fetched text: `\n`, `\r` (so `\r\n` as well), vertical
/// tab, form feed, the ASCII file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Non-blank lines of `text` with trailing whitespace removed. Leading whitespace is
/// kept because the data lines are column addressed.
pub fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
}

/// Parses a single-object response into exactly one record.
///
/// Two lines are taken as the bare data lines and get `fallback_name` as their name.
/// Anything past the third line is ignored. The body is trimmed as a whole first, so
/// padding before the first line does not shift its columns.
pub fn parse_single(text: &str, fallback_name: &str) -> Result<TleRecord> {
    let mut lines: Vec<&str> = significant_lines(text.trim()).collect();

    if lines.len() < 2 {
        return Err(MergeError::format(format!(
            "expected at least 2 non-empty lines, found {}",
            lines.len()
        )));
    }

    if lines.len() == 2 {
        tracing::debug!("Single record has no name line, using '{}'", fallback_name);
        lines.insert(0, fallback_name);
    } else if lines.len() > 3 {
        tracing::debug!(
            "Single record response has {} lines, keeping the first 3",
            lines.len()
        );
    }

    Ok(TleRecord::new(lines[0], lines[1], lines[2]))
}

/// Parses a bulk catalog in fixed groups of three lines.
///
/// A group that does not look like an element set is kept as [`CatalogEntry::Malformed`]
/// and the walk still advances by three lines. Fewer than three trailing lines are dropped.
pub fn parse_catalog(text: &str) -> Vec<CatalogEntry> {
    let lines: Vec<&str> = significant_lines(text).collect();
    let mut entries = Vec::with_capacity(lines.len() / 3);

    let mut groups = lines.chunks_exact(3);
    for group in groups.by_ref() {
        let candidate = TleRecord::new(group[0], group[1], group[2]);
        if candidate.is_well_formed() {
            entries.push(CatalogEntry::Element(candidate));
        } else {
            tracing::debug!(
                "Keeping malformed catalog group starting with '{}'",
                candidate.name
            );
            entries.push(CatalogEntry::Malformed {
                lines: group.iter().map(|line| line.to_string()).collect(),
            });
        }
    }

    let leftover = groups.remainder();
    if !leftover.is_empty() {
        tracing::warn!(
            "Dropping {} trailing catalog line(s) that do not form a full record",
            leftover.len()
        );
    }

    entries
}
