use serde::{Deserialize, Serialize};

use super::IngestError;

/// A (title, start page) pair parsed from the table of contents.
/// Start pages are printed page numbers until the range resolver adjusts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub title: String,
    pub start_page: u32,
}

/// One non-empty extracted page, cleaned and annotated with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Offset-adjusted page number (matches the printed numbering).
    pub page_num: u32,
    pub text: String,
    pub section: String,
    pub source: String,
    pub doc_type: String,
}

/// A bounded span of page text carrying the page's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub section: String,
    pub page_num: u32,
    pub source: String,
    pub doc_type: String,
}

/// Metadata attached to an embedding-ready document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub section: String,
    pub page_num: u32,
    pub source: String,
    pub doc_type: String,
}

/// Embedding-ready unit: chunk content plus its metadata. One per Chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub context: String,
    pub metadata: ChunkMetadata,
}

impl From<Chunk> for DocumentChunk {
    fn from(chunk: Chunk) -> Self {
        Self {
            context: chunk.content,
            metadata: ChunkMetadata {
                section: chunk.section,
                page_num: chunk.page_num,
                source: chunk.source,
                doc_type: chunk.doc_type,
            },
        }
    }
}

/// Page-level text access for a loaded document.
pub trait PageTextSource {
    /// Text of the page at `page_index` (0-based), or `None` when the page
    /// has no usable text layer.
    fn page_text(&self, page_index: usize) -> Result<Option<String>, IngestError>;

    fn page_count(&self) -> usize;
}
