//! Trailing contraction removal (`don't`, `you've`, `I'd've`).

use std::sync::LazyLock;

use regex::Regex;

static STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"['’]+[smtdn]$|['’](?:ve|ll|re|nt|ya|yer)$")
        .expect("strict contraction pattern is valid")
});

static LENIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"['’`‘]+[smtdn]$|['’‘`]+(?:ve|ll|re|nt|ya|yer)$")
        .expect("lenient contraction pattern is valid")
});

/// Which apostrophe variants introduce a contraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractionRule {
    /// Straight and right single quotes, as found in English text.
    Strict,
    /// Also backticks and left quotes, for mixed-language tokens in German text.
    Lenient,
}

impl ContractionRule {
    fn pattern(self) -> &'static Regex {
        match self {
            ContractionRule::Strict => &STRICT,
            ContractionRule::Lenient => &LENIENT,
        }
    }

    /// Remove a trailing contraction, and a second one if the first removal
    /// exposed it. Tokens without a contraction come back unchanged.
    pub fn strip(self, token: &str) -> String {
        let pattern = self.pattern();
        let once = pattern.replace(token, "");
        if pattern.is_match(&once) {
            pattern.replace(&once, "").into_owned()
        } else {
            once.into_owned()
        }
    }
}
