use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;

use super::chunker::{chunks_to_documents, MetadataChunker};
use super::clean::collect_pages;
use super::pdf::PdfTextExtractor;
use super::sections::{assign_sections, resolve_ranges};
use super::toc::{extract_sections, normalize_titles};
use super::types::{DocumentChunk, PageTextSource};
use super::IngestError;

/// Derive the doc_type tag from a source filename.
/// Filenames carrying a covered fiscal year get a year-scoped tag.
pub fn doc_type_for_source(filename: &str) -> String {
    let lower = filename.to_lowercase();
    if lower.contains("fy2024") {
        "budget_statement_2024".to_string()
    } else if lower.contains("fy2025") {
        "budget_statement_2025".to_string()
    } else {
        "budget_statement".to_string()
    }
}

/// Run the document-to-chunk pipeline over one loaded page source.
///
/// TOC extraction, title normalization, page cleaning, section-range
/// resolution, and chunking, in that order. A TOC page that fails to extract
/// contributes zero entries and never aborts the rest.
pub fn ingest_source(
    source: &dyn PageTextSource,
    source_name: &str,
    config: &PipelineConfig,
) -> Vec<DocumentChunk> {
    let doc_type = doc_type_for_source(source_name);

    let (toc_first, toc_last) = config.toc_pages;
    let mut toc_texts = Vec::new();
    for page_index in toc_first..=toc_last {
        match source.page_text(page_index) {
            Ok(text) => toc_texts.push(text),
            Err(e) => {
                tracing::warn!(page = page_index, error = %e, "failed to process TOC page");
                toc_texts.push(None);
            }
        }
    }

    let mut sections = extract_sections(&toc_texts);
    normalize_titles(&mut sections);

    let mut pages = collect_pages(
        source,
        config.start_page,
        config.page_offset,
        source_name,
        &doc_type,
    );

    if let Some(max_page) = pages.iter().map(|p| p.page_num).max() {
        let ranges = resolve_ranges(&sections, config.page_offset, max_page);
        assign_sections(&mut pages, &ranges);
    }

    let chunker = MetadataChunker::new(config.chunk_size, config.chunk_overlap);
    let chunks = chunker.chunk_pages(&pages);
    chunks_to_documents(chunks)
}

/// Ingest one budget PDF into embedding-ready documents.
pub fn ingest_pdf(pdf_path: &Path, config: &PipelineConfig) -> Result<Vec<DocumentChunk>, IngestError> {
    tracing::info!(path = %pdf_path.display(), "processing PDF");
    let extractor = PdfTextExtractor::open(pdf_path)?;
    let source_name = extractor.filename().to_string();
    Ok(ingest_source(&extractor, &source_name, config))
}

/// Ingest every PDF under a knowledge-base directory, recursively.
///
/// A document that fails to load is logged and skipped; the batch continues.
/// An empty corpus is fatal before any embedding work happens.
pub fn ingest_corpus(dir: &Path, config: &PipelineConfig) -> Result<Vec<DocumentChunk>, IngestError> {
    let pdf_paths = find_pdfs(dir)?;
    if pdf_paths.is_empty() {
        tracing::warn!(dir = %dir.display(), "no PDF files found");
        return Err(IngestError::EmptyCorpus(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for path in pdf_paths {
        match ingest_pdf(&path, config) {
            Ok(docs) => documents.extend(docs),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to ingest PDF, skipping")
            }
        }
    }
    Ok(documents)
}

fn find_pdfs(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut found = Vec::new();
    if !dir.exists() {
        return Ok(found);
    }

    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
            {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}
