use crate::pipeline::types::DocumentChunk;

use super::types::{DocumentSink, RetrievalFilter, VectorSearch};
use super::RagError;

/// Retrieve with the router's filter, retrying once unfiltered on empty.
///
/// The retry guards against a filename/year mismatch silently producing an
/// empty result set; the result may still be empty after it.
pub fn retrieve_with_fallback(
    store: &dyn VectorSearch,
    query: &str,
    k: usize,
    filter: &RetrievalFilter,
) -> Result<Vec<DocumentChunk>, RagError> {
    let documents = store.retrieve(query, k, filter)?;
    if documents.is_empty() && filter.is_restrictive() {
        tracing::info!("no documents found, retrying without filter");
        return store.retrieve(query, k, &RetrievalFilter::All);
    }
    Ok(documents)
}

/// In-memory store for tests and small corpora.
/// Ranks by naive keyword overlap rather than embeddings.
pub struct InMemoryVectorSearch {
    documents: Vec<DocumentChunk>,
}

impl InMemoryVectorSearch {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for InMemoryVectorSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentSink for InMemoryVectorSearch {
    fn store(&mut self, documents: Vec<DocumentChunk>) -> Result<usize, RagError> {
        let count = documents.len();
        self.documents.extend(documents);
        tracing::info!(count, total = self.documents.len(), "stored documents");
        Ok(count)
    }
}

impl VectorSearch for InMemoryVectorSearch {
    fn retrieve(
        &self,
        query: &str,
        k: usize,
        filter: &RetrievalFilter,
    ) -> Result<Vec<DocumentChunk>, RagError> {
        let query_words: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut scored: Vec<(usize, &DocumentChunk)> = self
            .documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| {
                let content = doc.context.to_lowercase();
                let score = query_words
                    .iter()
                    .filter(|word| content.contains(word.as_str()))
                    .count();
                (score, doc)
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, doc)| doc.clone())
            .collect())
    }
}
