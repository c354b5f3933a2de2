use crate::pipeline::types::DocumentChunk;

/// Literal marker emitted when no source documents survived retrieval,
/// including the unfiltered fallback pass.
pub const NO_SOURCES_MARKER: &str = "**No Sources Found**";

/// Format one citation line per retrieved document, in retrieval order:
/// 1-based ordinal, source filename, assigned section, page number.
pub fn citation_lines(documents: &[DocumentChunk]) -> Vec<String> {
    documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            format!(
                "**Doc {}:** {} | {} | Page {}",
                i + 1,
                doc.metadata.source,
                doc.metadata.section,
                doc.metadata.page_num
            )
        })
        .collect()
}

/// Append the human-readable citation block to a generated answer.
/// With no citations the block states explicitly that no sources were found;
/// the answer itself is always kept.
pub fn append_citations(answer: &str, citations: &[String]) -> String {
    if citations.is_empty() {
        format!("{answer}\n\n{NO_SOURCES_MARKER}")
    } else {
        format!("{answer}\n\n**Sources:**\n{}", citations.join("\n"))
    }
}
