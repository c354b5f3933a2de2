use crate::pipeline::types::DocumentChunk;

/// Grounding rules for answer generation: corpus-only content, covered
/// fiscal years, and an explicit fabrication prohibition.
pub const SYSTEM_PROMPT: &str = "You are a highly reliable assistant answering questions based on Singapore's FY2024 and FY2025 budget documents. \
You MUST use only the content from these documents. You MAY summarize and synthesize across them, including comparing statistics across FY2024 and FY2025 when both are available in the retrieved content. \
Do not guess or fabricate any data. \
If the answer is not even indirectly supported by the documents, respond: 'I do not have sufficient information based on the provided documents.' \
Only mention fiscal years FY2024 and FY2025 unless another year is explicitly stated in the documents.";

/// Assemble the user prompt: recent conversation turns, retrieved passages,
/// then the question.
pub fn build_prompt(
    question: &str,
    documents: &[DocumentChunk],
    history: &[(String, String)],
    history_turns: usize,
) -> String {
    let mut prompt = String::new();

    let recent = &history[history.len().saturating_sub(history_turns)..];
    if !recent.is_empty() {
        prompt.push_str("Conversation so far:\n");
        for (asked, answered) in recent {
            prompt.push_str(&format!("Q: {asked}\nA: {answered}\n"));
        }
        prompt.push('\n');
    }

    prompt.push_str("Here are some documents to help you:\n\n");
    for doc in documents {
        prompt.push_str(&doc.context);
        prompt.push_str("\n\n");
    }

    prompt.push_str(&format!("Now answer the question: {question}\n\n"));
    prompt.push_str(
        "If the documents do not directly answer the question, but contain related figures \
         or closely associated statistics, you MAY include them with a clear disclaimer \
         explaining how they are related.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::ChunkMetadata;

    fn doc(context: &str) -> DocumentChunk {
        DocumentChunk {
            context: context.into(),
            metadata: ChunkMetadata {
                section: "Revenue".into(),
                page_num: 4,
                source: "fy2024_budget_statement.pdf".into(),
                doc_type: "budget_statement_2024".into(),
            },
        }
    }

    #[test]
    fn system_prompt_carries_grounding_rules() {
        assert!(SYSTEM_PROMPT.contains("MUST use only the content"));
        assert!(SYSTEM_PROMPT.contains("Do not guess or fabricate"));
        assert!(SYSTEM_PROMPT.contains("FY2024 and FY2025"));
    }

    #[test]
    fn prompt_contains_question_and_passages() {
        let prompt = build_prompt(
            "What was healthcare spending?",
            &[doc("Healthcare spending reached $17b.")],
            &[],
            4,
        );

        assert!(prompt.contains("What was healthcare spending?"));
        assert!(prompt.contains("Healthcare spending reached $17b."));
        assert!(!prompt.contains("Conversation so far"));
    }

    #[test]
    fn prompt_keeps_only_recent_history() {
        let history: Vec<(String, String)> = (1..=6)
            .map(|i| (format!("question {i}"), format!("answer {i}")))
            .collect();
        let prompt = build_prompt("next?", &[], &history, 4);

        assert!(!prompt.contains("question 1"));
        assert!(!prompt.contains("question 2"));
        assert!(prompt.contains("question 3"));
        assert!(prompt.contains("answer 6"));
    }
}
