use super::types::{Chunk, DocumentChunk, PageRecord};

/// Splits page text into bounded, overlapping chunks that carry the page's
/// section and provenance metadata.
///
/// Splitting walks a separator cascade (paragraph, then line, then word):
/// text is cut on the coarsest separator first, and any piece still over
/// `chunk_size` falls through to the next separator. The trailing
/// `chunk_overlap` characters of each finished chunk re-seed the next one so
/// consecutive chunks from the same text share context.
pub struct MetadataChunker {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<&'static str>,
}

impl MetadataChunker {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            separators: vec!["\n\n", "\n", " "],
        }
    }

    /// Chunk every page; each chunk inherits the page's metadata unchanged.
    /// A page with no text contributes zero chunks.
    pub fn chunk_pages(&self, pages: &[PageRecord]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for page in pages {
            for piece in self.split_text(&page.text) {
                chunks.push(Chunk {
                    content: piece,
                    section: page.section.clone(),
                    page_num: page.page_num,
                    source: page.source.clone(),
                    doc_type: page.doc_type.clone(),
                });
            }
        }
        tracing::info!(count = chunks.len(), "generated text chunks");
        chunks
    }

    /// Split raw text into pieces no longer than `chunk_size` characters
    /// (except for a single unbreakable word longer than the limit).
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, 0)
            .into_iter()
            .filter(|piece| !piece.trim().is_empty())
            .collect()
    }

    fn split_recursive(&self, text: &str, depth: usize) -> Vec<String> {
        if char_len(text) <= self.chunk_size {
            return if text.is_empty() {
                Vec::new()
            } else {
                vec![text.to_string()]
            };
        }

        let separator = self.separators.get(depth).copied().unwrap_or(" ");
        let mut pieces: Vec<String> = Vec::new();
        let mut current = String::new();

        for part in text.split(separator) {
            let candidate_len = if current.is_empty() {
                char_len(part)
            } else {
                char_len(&current) + separator.len() + char_len(part)
            };

            if candidate_len > self.chunk_size && !current.is_empty() {
                pieces.push(current.clone());
                // Trailing overlap of the finished chunk seeds the next one.
                let overlap = tail_chars(&current, self.chunk_overlap);
                current = if overlap.is_empty() {
                    part.to_string()
                } else {
                    format!("{overlap}{separator}{part}")
                };
            } else if current.is_empty() {
                current = part.to_string();
            } else {
                current.push_str(separator);
                current.push_str(part);
            }
        }

        if !current.is_empty() {
            pieces.push(current);
        }

        // Pieces still over the limit fall through to the finer separator.
        let mut result = Vec::new();
        for piece in pieces {
            if char_len(&piece) > self.chunk_size && depth + 1 < self.separators.len() {
                result.extend(self.split_recursive(&piece, depth + 1));
            } else {
                result.push(piece);
            }
        }
        result
    }
}

impl Default for MetadataChunker {
    fn default() -> Self {
        Self::new(1000, 200)
    }
}

/// Convert chunks into embedding-ready documents, one-to-one.
pub fn chunks_to_documents(chunks: Vec<Chunk>) -> Vec<DocumentChunk> {
    let documents: Vec<DocumentChunk> = chunks.into_iter().map(DocumentChunk::from).collect();
    tracing::info!(count = documents.len(), "converted chunks to document format");
    documents
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn tail_chars(text: &str, n: usize) -> String {
    let len = char_len(text);
    if len <= n {
        return text.to_string();
    }
    text.chars().skip(len - n).collect()
}
