//! Tolerant extraction of paper records from raw search output.
//!
//! The arXiv response is an Atom-like feed, but this module deliberately
//! scans it as text instead of parsing it structurally: entries arrive
//! with missing, repeated, or out-of-order fields, and a malformed entry
//! must cost nothing more than its own record.

use regex::Regex;

/// Placeholder when an entry lists no authors.
const UNKNOWN_AUTHOR: &str = "Unknown Author";
/// Placeholder when an entry carries no published date.
const UNKNOWN_DATE: &str = "Unknown Date";
/// Placeholder when an entry carries no category tag.
const UNKNOWN_CATEGORY: &str = "Unknown";
/// Authors kept per record before the list is cut off.
const MAX_AUTHORS: usize = 3;

/// One paper extracted from a search response.
///
/// Built fresh per search call and discarded once the response text has
/// been rendered; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRecord {
    /// Paper title, whitespace-normalized.
    pub title: String,
    /// Up to three author names, comma-joined.
    pub authors: String,
    /// First 10 characters of the published date.
    pub published: String,
    /// Whitespace-normalized abstract text.
    pub summary: String,
    /// Canonical identifier URL, empty when unavailable.
    pub link: String,
    /// First category tag found.
    pub category: String,
}

/// Field scanner over entry-delimited search output.
pub struct RecordExtractor {
    entry: Regex,
    title: Regex,
    summary: Regex,
    published: Regex,
    author_name: Regex,
    category: Regex,
    link: Regex,
}

impl RecordExtractor {
    /// Compile the field patterns once.
    pub fn new() -> Self {
        // The patterns are fixed literals; compilation cannot fail at runtime.
        Self {
            entry: Regex::new(r"(?s)<entry[^>]*>.*?</entry>").expect("valid regex"),
            title: Regex::new(r"(?s)<title[^>]*>(.*?)</title>").expect("valid regex"),
            summary: Regex::new(r"(?s)<summary[^>]*>(.*?)</summary>").expect("valid regex"),
            published: Regex::new(r"<published[^>]*>([^<]*)</published>").expect("valid regex"),
            author_name: Regex::new(r"(?s)<name[^>]*>(.*?)</name>").expect("valid regex"),
            category: Regex::new(r#"<category[^>]*\bterm="([^"]*)""#).expect("valid regex"),
            link: Regex::new(r"(?s)<id[^>]*>(.*?)</id>").expect("valid regex"),
        }
    }

    /// Scan raw response text into paper records.
    ///
    /// An entry that yields no title or no abstract is dropped silently;
    /// every other field falls back to a placeholder. Never errors.
    pub fn extract(&self, raw: &str) -> Vec<PaperRecord> {
        let mut records = Vec::new();
        for entry in self.entry.find_iter(raw) {
            let block = entry.as_str();

            let Some(title) = self.first_capture(&self.title, block) else {
                continue;
            };
            let Some(summary) = self.first_capture(&self.summary, block) else {
                continue;
            };

            let authors: Vec<String> = self
                .author_name
                .captures_iter(block)
                .take(MAX_AUTHORS)
                .map(|captures| collapse_whitespace(&captures[1]))
                .collect();
            let authors = if authors.is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                authors.join(", ")
            };

            let published = self
                .published
                .captures(block)
                .map(|captures| captures[1].trim().chars().take(10).collect::<String>())
                .unwrap_or_else(|| UNKNOWN_DATE.to_string());

            let category = self
                .category
                .captures(block)
                .map(|captures| captures[1].trim().to_string())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

            let link = self
                .link
                .captures(block)
                .map(|captures| captures[1].trim().to_string())
                .unwrap_or_default();

            records.push(PaperRecord {
                title,
                authors,
                published,
                summary,
                link,
                category,
            });
        }
        records
    }

    /// First capture of `pattern` in `block`, whitespace-normalized.
    fn first_capture(&self, pattern: &Regex, block: &str) -> Option<String> {
        pattern
            .captures(block)
            .map(|captures| collapse_whitespace(&captures[1]))
    }
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim and collapse internal whitespace runs (including newlines) to
/// single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
