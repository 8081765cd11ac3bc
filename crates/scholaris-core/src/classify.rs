//! Academic-intent classification for free-text queries.

/// Keywords that mark a query as academic.
const ACADEMIC_KEYWORDS: &[&str] = &[
    "research",
    "study",
    "analysis",
    "scientific",
    "algorithm",
    "method",
    "machine learning",
    "ai",
    "artificial intelligence",
    "deep learning",
    "neural network",
    "computer science",
    "physics",
    "mathematics",
    "quantum",
    "cryptography",
    "blockchain",
    "paper",
    "academic",
];

/// Whether free text looks like an academic research query.
///
/// Case-insensitive substring match against a fixed keyword list. Pure and
/// deterministic; the caller decides what to do with non-academic text.
pub fn is_academic(query: &str) -> bool {
    let lowered = query.to_lowercase();
    ACADEMIC_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
