use serde::{Deserialize, Serialize};

use crate::pipeline::types::DocumentChunk;

use super::RagError;

/// Predicate restricting which stored documents a query may retrieve.
/// Derived per query by the router; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalFilter {
    /// No restriction: search the whole corpus.
    All,
    /// Restrict to documents whose `source` metadata matches exactly.
    SourceEquals(String),
}

impl RetrievalFilter {
    pub fn matches(&self, document: &DocumentChunk) -> bool {
        match self {
            RetrievalFilter::All => true,
            RetrievalFilter::SourceEquals(source) => document.metadata.source == *source,
        }
    }

    pub fn is_restrictive(&self) -> bool {
        *self != RetrievalFilter::All
    }
}

/// Completed answer: generated text with the citation block appended, plus
/// the individual citation lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub citations: Vec<String>,
}

/// Vector store query seam. Embedding the query is the store's concern.
pub trait VectorSearch {
    fn retrieve(
        &self,
        query: &str,
        k: usize,
        filter: &RetrievalFilter,
    ) -> Result<Vec<DocumentChunk>, RagError>;
}

/// Embedding destination for ingested documents.
pub trait DocumentSink {
    /// Store documents, returning how many were written.
    fn store(&mut self, documents: Vec<DocumentChunk>) -> Result<usize, RagError>;
}

/// LLM text generation seam.
pub trait LlmGenerate {
    fn generate(&self, system: &str, prompt: &str) -> Result<String, RagError>;
}
