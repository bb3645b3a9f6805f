//! Line tokenizer shared by all languages.

use std::sync::LazyLock;

use regex::Regex;

/// Whitespace, brackets and sentence punctuation, ellipses, a handful of
/// stray symbols, double hyphens, and a period glued to a closing quote.
const SEPARATOR_PATTERN: &str = r#"[\s\\/()\[\]<>;:,‚—?!|"«»…#]|\.\.\.+|[\x{2002}\x{FFFD}⌂\x{A0}∞½¾►=]|--|\.['"’“”«»‘′″„-]"#;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEPARATOR_PATTERN).expect("separator pattern is valid"));

/// Characters trimmed from both ends of every raw token.
pub const PUNCTUATION: &[char] = &[
    '∙', '!', '‼', '¡', '\\', '"', '#', '£', '€', '$', '¥', '%', '&', '\'', '(', ')', '*', '+',
    '±', '×', '÷', '·', ',', '-', '.', '/', ':', ';', '<', '=', '>', '?', '¿', '@', '[', ']',
    '^', 'ˆ', '¨', '_', '`', '—', '–', '\u{AD}', '{', '|', '}', '~', '≈', '≠', '→', '↓', '¬',
    '’', '“', '”', '«', '»', '≫', '‘', '…', '¦', '›', '🌼', '′', '″', '¹', '§', '¼', '⅜', '½',
    '¾', '⅘', '©', '✒', '•', '►', '●', '★', '❤', '➡', '➜', '➚', '➘', '➔', '✔', '➓', '➒', '➑',
    '➐', '➏', '➎', '➍', '➌', '➋', '➊', '❸', '❷', '■', '†', '✝', '✌', '\u{FFFC}', '\u{FE0F}',
    '³', '\u{200E}', '²', '‚', '„', ' ', '\u{200B}',
];

/// Trim [`PUNCTUATION`] from both ends of a token.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(PUNCTUATION)
}

/// Splits lines into raw tokens. Empty pieces between adjacent separators
/// are yielded as-is and dropped later by the stem filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokens<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        SEPARATORS.split(line)
    }
}
