//! Line classifier: partitions one line (or any span) into categorized ranges.

use super::patterns::PatternSet;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LexicalCategory {
    Comment,
    String,
    Keyword,
    Operator,
    Parameter,
    Identifier,
    Label,
}

impl LexicalCategory {
    pub const ALL: [Self; 7] = [
        Self::Comment,
        Self::String,
        Self::Keyword,
        Self::Operator,
        Self::Parameter,
        Self::Identifier,
        Self::Label,
    ];
}

/// Byte range inside the classified text, tagged with its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedSpan {
    pub start: usize,
    pub len: usize,
    pub category: LexicalCategory,
}

impl ClassifiedSpan {
    pub fn new(range: Range<usize>, category: LexicalCategory) -> Self {
        Self {
            start: range.start,
            len: range.end.saturating_sub(range.start),
            category,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Hover semantics: the char at `offset` lies inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }

    /// Caret semantics: the char just before `caret` lies inside the span.
    pub fn contains_caret(&self, caret: usize) -> bool {
        self.start < caret && caret <= self.end()
    }

    pub fn intersects(&self, other: &ClassifiedSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.range()).unwrap_or("")
    }
}

/// Classifies `text`; deterministic and side-effect free.
///
/// A comment starting at offset 0 swallows the whole line. Otherwise string, keyword,
/// operator, parameter and label matches are accepted in that order unless they overlap an
/// already accepted span, and identifiers are appended last without any overlap check so that
/// completion and quick-info can always find them. The result order is unspecified.
pub fn classify(text: &str) -> Vec<ClassifiedSpan> {
    let patterns = PatternSet::get();
    let mut spans = Vec::new();

    if let Some(range) = patterns.comment().find(text) {
        let comment = ClassifiedSpan::new(range, patterns.comment().category());
        spans.push(comment);
        if comment.start == 0 {
            return spans;
        }
    }

    for pattern in patterns.ordered() {
        for range in pattern.find_iter(text) {
            let candidate = ClassifiedSpan::new(range, pattern.category());
            if !spans.iter().any(|accepted| accepted.intersects(&candidate)) {
                spans.push(candidate);
            }
        }
    }

    let identifier = patterns.identifier();
    spans.extend(
        identifier
            .find_iter(text)
            .map(|range| ClassifiedSpan::new(range, identifier.category())),
    );

    spans
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/classifier.rs"]
mod tests;
