use once_cell::sync::Lazy;
use regex::Regex;

/// Annotation terms that mark a feature as a mobile element. Matched as
/// case-insensitive substrings.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "transposase",
    "insertion sequence",
    "mobile element",
    "IS family",
    "transposable element",
    "tnpA",
];

/// Insertion sequence family names such as `IS10` or `is256`, as whole words.
///
/// Word boundaries and digits are Unicode aware, so `IS10é` is not a match.
pub const IS_FAMILY_PATTERN: &str = r"(?i)\bIS\d+\b";

static IS_FAMILY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IS_FAMILY_PATTERN).expect("IS family pattern is valid"));

/// Decides whether a free-text annotation denotes a mobile element.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

impl KeywordClassifier {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs in `text` or it names an IS family.
    pub fn classify(
        &self,
        text: &str,
    ) -> bool {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .any(|k| lowered.contains(k.as_str()))
            || IS_FAMILY_REGEX.is_match(text)
    }
}
