//! Synthesis of the user-facing response text.

use crate::assess::assess;
use crate::extract::PaperRecord;
use std::fmt::Write as _;

/// Abstract characters shown per record before the ellipsis.
const ABSTRACT_DISPLAY_CHARS: usize = 400;

/// Render paper records (and their quality assessment) into one display
/// string for `query`.
///
/// An empty record set yields a fixed "no relevant academic papers found"
/// message naming the query; nothing else is appended in that case.
pub fn render(query: &str, records: &[PaperRecord]) -> String {
    if records.is_empty() {
        return format!(
            "No relevant academic papers found for \"{query}\". \
             Try rephrasing your query or using more specific academic terms."
        );
    }

    let mut text = format!(
        "Here is what I found for \"{query}\" ({} papers):\n",
        records.len()
    );
    for (index, record) in records.iter().enumerate() {
        let _ = write!(
            text,
            "\n{}. {}\n   Authors: {}\n   Published: {}\n   Category: {}\n   Abstract: {}...\n   Link: {}\n",
            index + 1,
            record.title,
            record.authors,
            record.published,
            record.category,
            truncate_chars(&record.summary, ABSTRACT_DISPLAY_CHARS),
            record.link,
        );
    }

    let quality = assess(records);
    if !quality.is_empty() {
        text.push('\n');
        text.push_str(&quality);
    }
    text
}

/// First `limit` characters of `text`, on char boundaries.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::extract::PaperRecord;
    use pretty_assertions::assert_eq;

    fn record(title: &str, summary: &str) -> PaperRecord {
        PaperRecord {
            title: title.to_string(),
            authors: "A. Author, B. Builder".to_string(),
            published: "2024-01-03".to_string(),
            summary: summary.to_string(),
            link: "http://arxiv.org/abs/2401.01234v1".to_string(),
            category: "cs.LG".to_string(),
        }
    }

    #[test]
    fn empty_records_yield_fixed_no_results_message() {
        let text = render("quantum cryptography", &[]);
        assert_eq!(
            text,
            "No relevant academic papers found for \"quantum cryptography\". \
             Try rephrasing your query or using more specific academic terms."
        );
    }

    #[test]
    fn renders_numbered_blocks_in_input_order() {
        let records = vec![record("First Paper", "One."), record("Second Paper", "Two.")];
        let text = render("bandits", &records);
        assert!(text.contains("\"bandits\" (2 papers)"));
        let first = text.find("1. First Paper").expect("first block");
        let second = text.find("2. Second Paper").expect("second block");
        assert!(first < second);
        assert!(text.contains("   Authors: A. Author, B. Builder\n"));
        assert!(text.contains("   Link: http://arxiv.org/abs/2401.01234v1\n"));
    }

    #[test]
    fn truncates_long_abstracts_to_display_limit() {
        let long_summary = "x".repeat(450);
        let records = vec![record("Long One", &long_summary)];
        let text = render("analysis", &records);
        let expected = format!("Abstract: {}...", "x".repeat(400));
        assert!(text.contains(&expected));
        assert!(!text.contains(&"x".repeat(401)));
    }

    #[test]
    fn appends_quality_summary_after_records() {
        let records = vec![record("Paper", "Short.")];
        let text = render("deep learning", &records);
        let block = text.find("1. Paper").expect("record block");
        let quality = text.find("Search quality:").expect("quality block");
        assert!(block < quality);
        assert!(text.contains("- AI/ML papers: 1"));
    }
}
