//! Explicit, passed-down configuration for both halves of the system.
//! Constructed by the caller and handed to each component; nothing here is
//! process-global.

use serde::{Deserialize, Serialize};

/// Settings for the document-to-chunk pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum chunk length, in characters.
    pub chunk_size: usize,
    /// Characters of trailing overlap carried into the next chunk.
    pub chunk_overlap: usize,
    /// Inclusive range of 0-based page indices holding the table of contents.
    pub toc_pages: (usize, usize),
    /// First 0-based page index of body text.
    pub start_page: usize,
    /// Offset aligning printed page numbers with extracted indices.
    pub page_offset: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            toc_pages: (0, 1),
            start_page: 2,
            page_offset: 1,
        }
    }
}

/// Settings for the question-answering side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of documents to retrieve per query.
    pub retriever_k: usize,
    /// Most recent conversation turns folded into the prompt.
    pub history_turns: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            retriever_k: 25,
            history_turns: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_defaults_match_contract() {
        let config = PipelineConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.toc_pages, (0, 1));
        assert_eq!(config.start_page, 2);
        assert_eq!(config.page_offset, 1);
    }

    #[test]
    fn chat_defaults_match_contract() {
        let config = ChatConfig::default();
        assert_eq!(config.retriever_k, 25);
        assert_eq!(config.history_turns, 4);
    }

    #[test]
    fn configs_round_trip_through_json() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
