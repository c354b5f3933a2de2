use regex::Regex;

use super::types::RetrievalFilter;

/// Fiscal years covered by the corpus filename convention
/// `fy<YYYY>_budget_statement.pdf`.
const COVERED_YEARS: [&str; 2] = ["2024", "2025"];

/// Detect fiscal-year intent in a question and build the retrieval filter.
///
/// A "compare" question touching both covered years searches the whole
/// corpus; a single detected year restricts retrieval to that year's
/// statement; anything else is unfiltered. Deterministic for a given
/// question string.
pub fn detect_filter(question: &str) -> RetrievalFilter {
    let lower = question.to_lowercase();

    if lower.contains("compare") && question.contains("2024") && question.contains("2025") {
        tracing::info!("retrieval filter: none (cross-year comparison)");
        return RetrievalFilter::All;
    }

    if let Some(year) = detect_year(&lower) {
        if COVERED_YEARS.contains(&year) {
            let source = format!("fy{year}_budget_statement.pdf");
            tracing::info!(source = %source, "retrieval filter: source match");
            return RetrievalFilter::SourceEquals(source);
        }
    }

    tracing::info!("retrieval filter: none");
    RetrievalFilter::All
}

/// First fiscal year mentioned: either `fy<YYYY>` (optional whitespace) or a
/// bare 4-digit token starting with 20, whichever capture matched.
fn detect_year(lower: &str) -> Option<&str> {
    let pattern = Regex::new(r"fy\s*(20\d{2})|(?:[^0-9]|^)(20\d{2})(?:[^0-9]|$)").unwrap();
    let cap = pattern.captures(lower)?;
    cap.get(1).or_else(|| cap.get(2)).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fy_prefixed_year_filters_to_source() {
        assert_eq!(
            detect_filter("What was healthcare spending in FY2024?"),
            RetrievalFilter::SourceEquals("fy2024_budget_statement.pdf".into())
        );
    }

    #[test]
    fn fy_with_whitespace_is_detected() {
        assert_eq!(
            detect_filter("Revenue projections for fy 2025?"),
            RetrievalFilter::SourceEquals("fy2025_budget_statement.pdf".into())
        );
    }

    #[test]
    fn bare_year_filters_to_source() {
        assert_eq!(
            detect_filter("How large was the 2025 deficit?"),
            RetrievalFilter::SourceEquals("fy2025_budget_statement.pdf".into())
        );
    }

    #[test]
    fn compare_across_both_years_is_unfiltered() {
        assert_eq!(
            detect_filter("Compare spending in 2024 and 2025"),
            RetrievalFilter::All
        );
    }

    #[test]
    fn compare_with_single_year_still_filters() {
        assert_eq!(
            detect_filter("Compare spending categories in 2024"),
            RetrievalFilter::SourceEquals("fy2024_budget_statement.pdf".into())
        );
    }

    #[test]
    fn uncovered_year_is_unfiltered() {
        assert_eq!(
            detect_filter("What happened in the 2019 budget?"),
            RetrievalFilter::All
        );
    }

    #[test]
    fn no_year_is_unfiltered() {
        assert_eq!(
            detect_filter("What were the main budget priorities?"),
            RetrievalFilter::All
        );
    }

    #[test]
    fn router_is_deterministic() {
        let question = "What was healthcare spending in FY2024?";
        assert_eq!(detect_filter(question), detect_filter(question));
    }

    #[test]
    fn embedded_digits_are_not_a_year() {
        // "12025" has no non-digit boundary before the 2025 run.
        assert_eq!(detect_filter("Invoice 12025 totals?"), RetrievalFilter::All);
    }
}
