use std::path::Path;

use super::types::PageTextSource;
use super::IngestError;

/// PDF-backed page text source using the pdf-extract crate.
///
/// Extracts the embedded text layer of every page up front; budget statements
/// are digital PDFs, so no OCR pass is involved.
pub struct PdfTextExtractor {
    pages: Vec<String>,
    filename: String,
}

impl PdfTextExtractor {
    pub fn open(path: &Path) -> Result<Self, IngestError> {
        if !path.exists() {
            tracing::error!(path = %path.display(), "PDF not found");
            return Err(IngestError::SourceNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| IngestError::PdfParsing(e.to_string()))?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::info!(file = %filename, pages = pages.len(), "loaded PDF");
        Ok(Self { pages, filename })
    }

    /// Basename of the source file, used as chunk `source` metadata.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl PageTextSource for PdfTextExtractor {
    fn page_text(&self, page_index: usize) -> Result<Option<String>, IngestError> {
        match self.pages.get(page_index) {
            Some(text) if !text.trim().is_empty() => Ok(Some(text.clone())),
            _ => Ok(None),
        }
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}
