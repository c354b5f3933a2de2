use serde::{Deserialize, Serialize};

use super::types::{PageRecord, SectionEntry};

/// Sentinel section for pages no range claims (front matter before the first
/// section start).
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// A contiguous page interval owned by one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRange {
    pub title: String,
    pub start_page: u32,
    pub end_page: u32,
}

impl SectionRange {
    pub fn contains(&self, page_num: u32) -> bool {
        self.start_page <= page_num && page_num <= self.end_page
    }
}

/// Convert ordered section start pages into contiguous, non-overlapping
/// page ranges.
///
/// TOC start pages are printed page numbers; subtracting `page_offset`
/// realigns them with the extracted numbering. After a stable sort by
/// adjusted start page, each section ends where the next one begins and the
/// last section runs to `max_page`.
///
/// Two sections sharing an adjusted start page leave the earlier entry with
/// `start_page > end_page`; such a range contains no page and the later
/// entry claims them all.
pub fn resolve_ranges(
    sections: &[SectionEntry],
    page_offset: u32,
    max_page: u32,
) -> Vec<SectionRange> {
    let mut adjusted: Vec<SectionEntry> = sections
        .iter()
        .map(|s| SectionEntry {
            title: s.title.clone(),
            start_page: s.start_page.saturating_sub(page_offset),
        })
        .collect();
    adjusted.sort_by_key(|s| s.start_page);

    adjusted
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let end_page = match adjusted.get(i + 1) {
                Some(next) => next.start_page.saturating_sub(1),
                None => max_page,
            };
            SectionRange {
                title: entry.title.clone(),
                start_page: entry.start_page,
                end_page,
            }
        })
        .collect()
}

/// Assign each page to the first range (in sorted order) containing its page
/// number, or the [`NOT_ASSIGNED`] sentinel when none does.
pub fn assign_sections(pages: &mut [PageRecord], ranges: &[SectionRange]) {
    for page in pages.iter_mut() {
        page.section = ranges
            .iter()
            .find(|range| range.contains(page.page_num))
            .map(|range| range.title.clone())
            .unwrap_or_else(|| NOT_ASSIGNED.to_string());
    }
    tracing::info!(count = pages.len(), "annotated pages with section metadata");
}
