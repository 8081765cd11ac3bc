//! Aggregate quality assessment over a set of paper records.

use crate::extract::PaperRecord;
use std::fmt::Write as _;

/// Published-date prefixes counted as recent.
///
/// Fixed literals, not a clock-derived window; results published outside
/// these two years are not counted even after the calendar moves on.
const RECENT_YEAR_PREFIXES: [&str; 2] = ["2024", "2025"];

/// Category tags counted as AI/ML work.
const AI_ML_TAGS: [&str; 4] = ["cs.ai", "cs.lg", "cs.cv", "stat.ml"];

/// Summarize recency and subject-area match over `records`.
///
/// Returns the empty string for an empty input. The AI/ML line is omitted
/// entirely when no record carries a matching tag.
pub fn assess(records: &[PaperRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let recent = records
        .iter()
        .filter(|record| {
            RECENT_YEAR_PREFIXES
                .iter()
                .any(|prefix| record.published.starts_with(prefix))
        })
        .count();
    let ai_ml = records
        .iter()
        .filter(|record| {
            let category = record.category.to_lowercase();
            AI_ML_TAGS.iter().any(|tag| category.contains(tag))
        })
        .count();

    let mut summary = String::new();
    summary.push_str("Search quality:\n");
    let _ = writeln!(summary, "- Total papers: {}", records.len());
    let _ = writeln!(summary, "- Published 2024-2025: {recent}");
    if ai_ml > 0 {
        let _ = writeln!(summary, "- AI/ML papers: {ai_ml}");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::assess;
    use crate::extract::PaperRecord;
    use pretty_assertions::assert_eq;

    fn record(published: &str, category: &str) -> PaperRecord {
        PaperRecord {
            title: "Title".to_string(),
            authors: "A. Author".to_string(),
            published: published.to_string(),
            summary: "Summary.".to_string(),
            link: String::new(),
            category: category.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        assert_eq!(assess(&[]), "");
    }

    #[test]
    fn counts_totals_recency_and_ai_ml_tags() {
        let records = vec![
            record("2024-01-03", "cs.LG"),
            record("2025-06-30", "cs.CR"),
            record("2021-05-12", "cs.LG"),
            record("Unknown Date", "Unknown"),
            record("2019-11-01", "math.CO"),
        ];
        let summary = assess(&records);
        assert_eq!(
            summary,
            "Search quality:\n- Total papers: 5\n- Published 2024-2025: 2\n- AI/ML papers: 2\n"
        );
    }

    #[test]
    fn omits_ai_ml_line_when_count_is_zero() {
        let records = vec![record("2024-01-03", "math.CO")];
        let summary = assess(&records);
        assert!(!summary.contains("AI/ML"));
        assert!(summary.contains("- Published 2024-2025: 1"));
    }

    #[test]
    fn recency_uses_literal_year_prefixes() {
        // A fixed policy: 2026 papers are not counted as recent.
        let records = vec![record("2026-01-01", "cs.AI")];
        let summary = assess(&records);
        assert!(summary.contains("- Published 2024-2025: 0"));
    }
}
