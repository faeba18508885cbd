//! Compiled lexical patterns, one per category.
//!
//! `regex` has no lookaround, so context (line start, preceding whitespace, `set`/`goto`/`echo`)
//! is matched outside the reported token: each alternative wraps its token in exactly one
//! capturing group and structural groups are non-capturing. A pattern without capturing groups
//! reports the whole match.

use super::classifier::LexicalCategory;
use super::keywords;
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

const COMMENT: &str = r"(?i)^\s*(@?(?:rem\b|::).*)|\S\s*(&\s*(?:rem\b|::).*)";

const STRING: &str = r#""[^"]*"|'[^']*'|(?i:\becho)\s+(\S.*)"#;

const OPERATOR: &str = r"&&|&|\|\||\||[012]?>>?|<|!|=|\^";

const PARAMETER: &str = r"\s((?:/|--?)\w+)";

const IDENTIFIER: &str =
    r#"(?i)\bset\s+(?:/[ap]\s+)?"?([^\s="]+)\s*=|(%[^%\s]+%)|(%~[fdpnxsatz]+\d)"#;

const LABEL: &str = r"(?i)^\s*(:[^\s:]+)|\bgoto(?:\s*:|\s+)([^\s:]+)";

#[derive(Debug)]
pub struct Pattern {
    category: LexicalCategory,
    regex: Regex,
}

impl Pattern {
    fn new(category: LexicalCategory, source: &str) -> Self {
        let regex = Regex::new(source)
            .unwrap_or_else(|err| panic!("invalid {category:?} pattern: {err}"));
        Self { category, regex }
    }

    pub fn category(&self) -> LexicalCategory {
        self.category
    }

    /// Token ranges, left to right, never empty.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| token_range(&caps))
            .filter(|range| !range.is_empty())
    }

    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.find_iter(text).next()
    }
}

fn token_range(caps: &Captures<'_>) -> Option<Range<usize>> {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .or_else(|| caps.get(0))
        .map(|m| m.range())
}

fn keyword_source() -> String {
    let names = keywords::all_names()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)(?:^|\s)(@?(?:{names}))\b")
}

/// The full pattern set, built once on first use.
#[derive(Debug)]
pub struct PatternSet {
    comment: Pattern,
    ordered: [Pattern; 5],
    identifier: Pattern,
}

static PATTERNS: LazyLock<PatternSet> = LazyLock::new(PatternSet::build);

impl PatternSet {
    pub fn get() -> &'static PatternSet {
        &PATTERNS
    }

    fn build() -> Self {
        Self {
            comment: Pattern::new(LexicalCategory::Comment, COMMENT),
            ordered: [
                Pattern::new(LexicalCategory::String, STRING),
                Pattern::new(LexicalCategory::Keyword, &keyword_source()),
                Pattern::new(LexicalCategory::Operator, OPERATOR),
                Pattern::new(LexicalCategory::Parameter, PARAMETER),
                Pattern::new(LexicalCategory::Label, LABEL),
            ],
            identifier: Pattern::new(LexicalCategory::Identifier, IDENTIFIER),
        }
    }

    pub fn comment(&self) -> &Pattern {
        &self.comment
    }

    /// First-match-wins passes, highest precedence first.
    pub fn ordered(&self) -> &[Pattern] {
        &self.ordered
    }

    /// Reported last and never filtered against other spans.
    pub fn identifier(&self) -> &Pattern {
        &self.identifier
    }

    pub fn pattern(&self, category: LexicalCategory) -> &Pattern {
        match category {
            LexicalCategory::Comment => &self.comment,
            LexicalCategory::String => &self.ordered[0],
            LexicalCategory::Keyword => &self.ordered[1],
            LexicalCategory::Operator => &self.ordered[2],
            LexicalCategory::Parameter => &self.ordered[3],
            LexicalCategory::Label => &self.ordered[4],
            LexicalCategory::Identifier => &self.identifier,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/patterns.rs"]
mod tests;
