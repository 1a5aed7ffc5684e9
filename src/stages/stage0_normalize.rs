use std::sync::LazyLock;

use regex::Regex;

/// A transcript line consisting solely of `[` + label + `]`
static MARKER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[^\]]+\]$").expect("marker pattern is valid"));

/// Characters rewritten to spaces when normalizing a bracket label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Characters historically "trimmed" from labels; replaced with a space
    pub trim_chars: Vec<char>,
    /// Separator characters replaced with a space
    pub space_chars: Vec<char>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            trim_chars: vec![':'],
            space_chars: vec!['&', '/', '+', '-', '(', ')', ','],
        }
    }
}

impl NormalizerConfig {
    /// Build a config from the literal character lists used on the command line
    pub fn from_strings(trim_chars: &str, space_chars: &str) -> Self {
        Self {
            trim_chars: trim_chars.chars().collect(),
            space_chars: space_chars.chars().collect(),
        }
    }

    fn is_separator(&self, c: char) -> bool {
        self.trim_chars.contains(&c) || self.space_chars.contains(&c)
    }
}

/// Canonicalize a raw bracket label into a comparable key
///
/// 1. Strip enclosing square brackets
/// 2. Replace every trim/space character with a space
/// 3. Collapse whitespace runs to a single space
/// 4. Lowercase and trim
///
/// Bracket stripping runs again at the end so that the result is a fixed point:
/// `normalize_key(normalize_key(s)) == normalize_key(s)`.
pub fn normalize_key(raw: &str, config: &NormalizerConfig) -> String {
    let unwrapped = strip_brackets(raw);

    let replaced: String = unwrapped
        .chars()
        .map(|c| if config.is_separator(c) { ' ' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    strip_brackets(&collapsed.to_lowercase()).to_string()
}

/// Remove every enclosing `[`..`]` pair, trimming whitespace between pairs
fn strip_brackets(raw: &str) -> &str {
    let mut s = raw.trim();
    while s.len() >= 2 && s.starts_with('[') && s.ends_with(']') {
        s = s[1..s.len() - 1].trim();
    }
    s
}

/// Whether the line is a section marker rather than content
pub fn is_marker_line(line: &str) -> bool {
    MARKER_LINE.is_match(line.trim())
}

/// Normalized keys of every marker line, in transcript order
pub fn extract_key_candidates<S: AsRef<str>>(lines: &[S], config: &NormalizerConfig) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_marker_line(line))
        .map(|line| normalize_key(line, config))
        .collect()
}
