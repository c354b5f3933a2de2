//! budget-rag: ingestion and question answering over fiscal budget
//! statement PDFs.
//!
//! The ingestion half turns a PDF into embedding-ready, section-tagged
//! chunks: TOC parsing, title normalization, page cleaning, section-range
//! resolution, and overlapping chunking with provenance metadata. The
//! answering half routes a question to the right fiscal-year subset of the
//! corpus, retrieves passages (with an unfiltered fallback), and returns a
//! grounded answer with a citation block.
//!
//! Embedding, vector storage, and text generation are seams
//! ([`rag::VectorSearch`], [`rag::DocumentSink`], [`rag::LlmGenerate`])
//! implemented by the caller.

pub mod config;
pub mod pipeline;
pub mod rag;

pub use config::{ChatConfig, PipelineConfig};
pub use pipeline::ingest::{ingest_corpus, ingest_pdf};
pub use pipeline::types::{Chunk, ChunkMetadata, DocumentChunk, PageRecord, SectionEntry};
pub use pipeline::IngestError;
pub use rag::assistant::BudgetAssistant;
pub use rag::types::{ChatAnswer, RetrievalFilter};
pub use rag::RagError;
