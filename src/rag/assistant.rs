use crate::config::ChatConfig;

use super::citation::{append_citations, citation_lines};
use super::prompt::{build_prompt, SYSTEM_PROMPT};
use super::retrieval::retrieve_with_fallback;
use super::router::detect_filter;
use super::types::{ChatAnswer, LlmGenerate, VectorSearch};
use super::RagError;

/// Question-answering front end over the embedded budget corpus.
///
/// Coordinates: route → retrieve (with fallback) → prompt → generate → cite.
pub struct BudgetAssistant<'a, G: LlmGenerate, V: VectorSearch> {
    generator: &'a G,
    store: &'a V,
    config: ChatConfig,
}

impl<'a, G: LlmGenerate, V: VectorSearch> BudgetAssistant<'a, G, V> {
    pub fn new(generator: &'a G, store: &'a V, config: ChatConfig) -> Self {
        Self {
            generator,
            store,
            config,
        }
    }

    /// Answer a question grounded in retrieved passages.
    ///
    /// Lack of sources never blocks the answer: an empty retrieval still
    /// produces a generated response, with an explicit no-sources notice in
    /// the citation block.
    pub fn answer(
        &self,
        question: &str,
        history: &[(String, String)],
    ) -> Result<ChatAnswer, RagError> {
        let filter = detect_filter(question);
        let documents =
            retrieve_with_fallback(self.store, question, self.config.retriever_k, &filter)?;

        let prompt = build_prompt(question, &documents, history, self.config.history_turns);
        let generated = self.generator.generate(SYSTEM_PROMPT, &prompt)?;

        let citations = citation_lines(&documents);
        let answer = append_citations(&generated, &citations);

        Ok(ChatAnswer { answer, citations })
    }
}
