use crate::domain::model::{CatalogEntry, TleRecord};

/// Replaces any catalog element carrying the identifier of `single` with `single` itself,
/// appended last. Returns the merged entries and the identifiers that were dropped.
pub fn merge(bulk: Vec<CatalogEntry>, single: TleRecord) -> (Vec<CatalogEntry>, Vec<String>) {
    let single_id = single.norad_id();
    let mut skipped = Vec::new();

    let mut merged: Vec<CatalogEntry> = bulk
        .into_iter()
        .filter(|entry| match entry.norad_id() {
            Some(id) if id == single_id => {
                tracing::info!("Skipping existing catalog entry (NORAD {})", id);
                skipped.push(id);
                false
            }
            _ => true,
        })
        .collect();

    merged.push(CatalogEntry::Element(single));
    (merged, skipped)
}

/// Blank line between entries, single trailing newline.
pub fn render(entries: &[CatalogEntry]) -> String {
    let blocks: Vec<String> = entries.iter().map(CatalogEntry::to_block).collect();
    let mut text = blocks.join("\n\n");
    text.push('\n');
    text
}
