//! Full-path test: fake page sources through ingestion, storage, and
//! question answering.

use budget_rag::pipeline::ingest::ingest_source;
use budget_rag::pipeline::types::PageTextSource;
use budget_rag::pipeline::IngestError;
use budget_rag::rag::retrieval::InMemoryVectorSearch;
use budget_rag::rag::types::{DocumentSink, LlmGenerate};
use budget_rag::rag::RagError;
use budget_rag::{BudgetAssistant, ChatConfig, PipelineConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

struct FakeDocument {
    pages: Vec<Option<String>>,
}

impl PageTextSource for FakeDocument {
    fn page_text(&self, page_index: usize) -> Result<Option<String>, IngestError> {
        Ok(self.pages.get(page_index).cloned().flatten())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn statement(year: u32, body_lines: [&str; 2]) -> FakeDocument {
    FakeDocument {
        pages: vec![
            Some(format!(
                "BUDGET STATEMENT {year}\nA. Overview of Fiscal Policy...... 3\nB. Expenditure Highlights...... 4"
            )),
            Some("(second contents page, no entries)".into()),
            Some(format!("{}\nPage 3 of 4", body_lines[0])),
            Some(body_lines[1].to_string()),
        ],
    }
}

struct EchoLlm;

impl LlmGenerate for EchoLlm {
    fn generate(&self, _system: &str, _prompt: &str) -> Result<String, RagError> {
        Ok("Grounded answer.".into())
    }
}

fn seeded_store() -> InMemoryVectorSearch {
    init_tracing();
    let config = PipelineConfig::default();
    let mut store = InMemoryVectorSearch::new();

    let fy2024 = statement(
        2024,
        [
            "Fiscal policy stayed expansionary through the year.",
            "Healthcare spending reached seventeen billion dollars.",
        ],
    );
    let fy2025 = statement(
        2025,
        [
            "Fiscal consolidation begins this year.",
            "Healthcare spending is projected at eighteen billion dollars.",
        ],
    );

    let docs_2024 = ingest_source(&fy2024, "fy2024_budget_statement.pdf", &config);
    let docs_2025 = ingest_source(&fy2025, "fy2025_budget_statement.pdf", &config);
    assert!(!docs_2024.is_empty());
    assert!(!docs_2025.is_empty());

    store.store(docs_2024).unwrap();
    store.store(docs_2025).unwrap();
    store
}

#[test]
fn year_scoped_question_cites_only_that_statement() {
    let store = seeded_store();
    let assistant = BudgetAssistant::new(&EchoLlm, &store, ChatConfig::default());

    let result = assistant
        .answer("What was healthcare spending in FY2024?", &[])
        .unwrap();

    assert!(!result.citations.is_empty());
    for line in &result.citations {
        assert!(
            line.contains("fy2024_budget_statement.pdf"),
            "citation crossed the year filter: {line}"
        );
    }
}

#[test]
fn comparison_question_reaches_both_statements() {
    let store = seeded_store();
    let assistant = BudgetAssistant::new(&EchoLlm, &store, ChatConfig::default());

    let result = assistant
        .answer("Compare healthcare spending in 2024 and 2025", &[])
        .unwrap();

    let cited = result.citations.join("\n");
    assert!(cited.contains("fy2024_budget_statement.pdf"));
    assert!(cited.contains("fy2025_budget_statement.pdf"));
}

#[test]
fn sections_survive_into_citations() {
    let store = seeded_store();
    let assistant = BudgetAssistant::new(&EchoLlm, &store, ChatConfig::default());

    let result = assistant
        .answer("What was healthcare spending in FY2024?", &[])
        .unwrap();

    let cited = result.citations.join("\n");
    assert!(
        cited.contains("Overview of Fiscal Policy") || cited.contains("Expenditure Highlights"),
        "expected a resolved section title, got: {cited}"
    );
}
