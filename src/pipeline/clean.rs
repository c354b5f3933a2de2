use regex::Regex;

use super::types::{PageRecord, PageTextSource};

/// Remove pagination footer lines ("Page n of m") from extracted page text.
/// Surviving lines are rejoined with newlines and trimmed.
pub fn clean_page_text(text: &str) -> String {
    let footer = Regex::new(r"(?i)\bPage\s*\d+\s+of\s+\d+\b").unwrap();
    let kept: Vec<&str> = text.lines().filter(|line| !footer.is_match(line)).collect();
    kept.join("\n").trim().to_string()
}

/// Collect cleaned page records from `start_page` (0-based) onward.
///
/// A page whose extraction fails is logged and skipped; a page with no text
/// is excluded entirely rather than represented as an empty record. Section
/// assignment happens later, so `section` starts out empty.
pub fn collect_pages(
    source: &dyn PageTextSource,
    start_page: usize,
    page_offset: u32,
    source_name: &str,
    doc_type: &str,
) -> Vec<PageRecord> {
    let mut pages = Vec::new();

    for page_index in start_page..source.page_count() {
        let raw = match source.page_text(page_index) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(page = page_index, error = %e, "failed to extract page text");
                continue;
            }
        };
        let Some(raw) = raw else {
            tracing::debug!(page = page_index, "page is empty, skipping");
            continue;
        };

        let text = clean_page_text(&raw);
        if text.is_empty() {
            tracing::debug!(page = page_index, "page is empty after cleaning, skipping");
            continue;
        }

        pages.push(PageRecord {
            page_num: page_index as u32 + page_offset,
            text,
            section: String::new(),
            source: source_name.to_string(),
            doc_type: doc_type.to_string(),
        });
    }

    tracing::info!(count = pages.len(), "extracted text from pages");
    pages
}
