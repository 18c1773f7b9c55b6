//! Phone-number patterns supplied with the engine.
//!
//! The engine accepts any `Regex`; these are the ready-made ones.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Ten digits at the start of a token, anything may follow.
pub const SIMPLE_NUMBER_PATTERN: &str = r"^\d{10}";

/// `(DDD)` plus an optional whitespace character, then `DDD-DDDD`, nothing else.
pub const NUMBER_WITH_PARENTHESES_PATTERN: &str = r"^\(\d{3}\)\s?\d{3}-\d{4}$";

/// `DDD`, a space/period/hyphen, `DDD`, another delimiter, `DDDD`. The two
/// delimiters are chosen independently.
pub const DELIMITED_NUMBER_PATTERN: &str = r"^\d{3}[\s.-]\d{3}[\s.-]\d{4}$";

static SIMPLE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_ascii(SIMPLE_NUMBER_PATTERN).expect("valid simple pattern"));
static NUMBER_WITH_PARENTHESES_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_ascii(NUMBER_WITH_PARENTHESES_PATTERN).expect("valid parentheses pattern")
});
static DELIMITED_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_ascii(DELIMITED_NUMBER_PATTERN).expect("valid delimited pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePattern {
    Simple,
    Parenthesized,
    Delimited,
}

impl PhonePattern {
    pub const ALL: [PhonePattern; 3] = [
        PhonePattern::Simple,
        PhonePattern::Parenthesized,
        PhonePattern::Delimited,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PhonePattern::Simple => "simple",
            PhonePattern::Parenthesized => "parenthesized",
            PhonePattern::Delimited => "delimited",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhonePattern::Simple => SIMPLE_NUMBER_PATTERN,
            PhonePattern::Parenthesized => NUMBER_WITH_PARENTHESES_PATTERN,
            PhonePattern::Delimited => DELIMITED_NUMBER_PATTERN,
        }
    }

    /// Compile a fresh copy of the pattern.
    pub fn compile(self) -> Result<Regex, regex::Error> {
        compile_ascii(self.as_str())
    }

    /// Shared compiled pattern, built on first use.
    pub fn regex(self) -> &'static Regex {
        match self {
            PhonePattern::Simple => &SIMPLE_NUMBER_RE,
            PhonePattern::Parenthesized => &NUMBER_WITH_PARENTHESES_RE,
            PhonePattern::Delimited => &DELIMITED_NUMBER_RE,
        }
    }
}

impl std::fmt::Display for PhonePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// `\d` and `\s` match ASCII only.
fn compile_ascii(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).unicode(false).build()
}
