pub mod types;
pub mod toc;
pub mod clean;
pub mod sections;
pub mod chunker;
pub mod pdf;
pub mod ingest;

pub use types::*;
pub use ingest::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF not found at path: {0}")]
    SourceNotFound(PathBuf),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("no PDF files found under: {0}")]
    EmptyCorpus(PathBuf),
}
