use regex::Regex;

use super::types::SectionEntry;

/// Parse table-of-contents text into ordered (title, start page) entries.
///
/// Each element of `toc_pages` is the extracted text of one designated TOC
/// page, or `None` when extraction produced nothing for that page. A missing
/// page is logged and contributes zero entries; it never aborts the rest.
///
/// A TOC line looks like `A. Overview of Fiscal Policy.......... 5`:
/// an uppercase enumeration letter, the title, a dotted leader, and the
/// starting page number. Anything else on the page is not a TOC entry.
pub fn extract_sections(toc_pages: &[Option<String>]) -> Vec<SectionEntry> {
    let line_pattern = Regex::new(r"^([A-Z]\.\s.+?)\.{3,}\s+(\d+)$").unwrap();
    let mut sections = Vec::new();

    for (page_index, page_text) in toc_pages.iter().enumerate() {
        let Some(text) = page_text else {
            tracing::warn!(page = page_index, "failed to process TOC page");
            continue;
        };

        for line in text.lines() {
            if let Some(cap) = line_pattern.captures(line.trim()) {
                if let Ok(start_page) = cap[2].parse::<u32>() {
                    sections.push(SectionEntry {
                        title: cap[1].trim().to_string(),
                        start_page,
                    });
                }
            }
        }
    }

    tracing::info!(count = sections.len(), "extracted section entries from TOC");
    sections
}

/// Strip enumeration prefixes and leader-dot residue from titles, in place.
///
/// Removes a leading `X. ` prefix, deletes runs of two or more periods,
/// collapses repeated whitespace, and trims. Idempotent.
pub fn normalize_titles(sections: &mut [SectionEntry]) {
    let prefix = Regex::new(r"^[A-Z]\.\s+").unwrap();
    let dots = Regex::new(r"\.{2,}").unwrap();
    let spaces = Regex::new(r"\s{2,}").unwrap();

    for entry in sections.iter_mut() {
        let title = prefix.replace(&entry.title, "");
        let title = dots.replace_all(&title, "");
        let title = spaces.replace_all(&title, " ");
        entry.title = title.trim().to_string();
    }
}
