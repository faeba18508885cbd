//! Completion engine: keyword and `%variable%` completion at a caret.

use super::classifier::{classify, ClassifiedSpan, LexicalCategory};
use super::keywords;
use crate::kernel::document::Document;
use crate::kernel::services::ports::{CompletionSettings, Environment};
use rustc_hash::FxHashSet;
use std::ops::Range;
use unicode_xid::UnicodeXID;

/// Keywords that may be followed by another keyword.
const CHAINING_KEYWORDS: [&str; 2] = ["if", "not"];

#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub document: &'a Document,
    /// Byte offset of the caret at trigger time.
    pub caret: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Keyword,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: String,
    pub insert_text: String,
    pub description: String,
    pub kind: CompletionKind,
}

impl CompletionItem {
    fn keyword(entry: &keywords::KeywordEntry) -> Self {
        Self {
            label: entry.name.to_string(),
            insert_text: entry.name.to_string(),
            description: entry.description.to_string(),
            kind: CompletionKind::Keyword,
        }
    }

    fn variable(name: &str, description: String) -> Self {
        Self {
            label: name.to_string(),
            insert_text: name.to_string(),
            description,
            kind: CompletionKind::Variable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSet {
    /// Document byte range the chosen item replaces.
    pub replace: Range<usize>,
    /// Sorted alphabetically by label.
    pub items: Vec<CompletionItem>,
}

pub fn complete(
    request: CompletionRequest<'_>,
    env: &dyn Environment,
    settings: &CompletionSettings,
) -> Option<CompletionSet> {
    let document = request.document;
    let caret = document.clamp(request.caret);
    if caret == 0 {
        return None;
    }

    let line_idx = document.line_of_offset(caret);
    let line_start = document.line_start(line_idx);
    let line = document.line(line_idx);
    let col = caret.saturating_sub(line_start).min(line.len());

    let spans = classify(&line);
    let in_comment_or_string = spans.iter().any(|span| {
        matches!(
            span.category,
            LexicalCategory::Comment | LexicalCategory::String
        ) && span.contains_caret(col)
    });
    if in_comment_or_string {
        return None;
    }

    let token = TokenContext::at(&line, col)?;
    let identifier = spans
        .iter()
        .find(|span| span.category == LexicalCategory::Identifier && span.contains_caret(col));

    let (replace, mut items) = match identifier {
        Some(current) => {
            let name = name_range(current, &line);
            let current = line_start + current.start..line_start + current.end();
            (
                line_start + name.start..line_start + name.end,
                variable_completions(document, env, settings, current),
            )
        }
        None if settings.keywords && token.is_bare_word(&line) => (
            line_start + token.word.start..line_start + token.word.end,
            keywords::entries()
                .iter()
                .map(CompletionItem::keyword)
                .collect(),
        ),
        None => return None,
    };
    if items.is_empty() {
        return None;
    }

    items.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.label.cmp(&b.label))
    });

    Some(CompletionSet { replace, items })
}

/// Line range of the variable name inside an identifier span, `%` delimiters excluded.
fn name_range(span: &ClassifiedSpan, line: &str) -> Range<usize> {
    let text = span.text(line);
    let start = span.start + usize::from(text.starts_with('%'));
    let end = span.end() - usize::from(text.len() > 1 && text.ends_with('%'));
    start..end.max(start)
}

fn variable_completions(
    document: &Document,
    env: &dyn Environment,
    settings: &CompletionSettings,
    current: Range<usize>,
) -> Vec<CompletionItem> {
    let mut seen = FxHashSet::default();
    let mut items = Vec::new();

    if settings.environment_variables {
        for (name, value) in env.vars() {
            if seen.insert(name.to_ascii_uppercase()) {
                items.push(CompletionItem::variable(&name, value));
            }
        }
    }

    if settings.document_variables {
        for (line_idx, line) in document.lines() {
            let line_start = document.line_start(line_idx);
            for span in classify(&line) {
                if span.category != LexicalCategory::Identifier
                    || is_same_span(&span, line_start, &current)
                {
                    continue;
                }
                let Some(name) = reference_name(span.text(&line)) else {
                    continue;
                };
                if seen.insert(name.to_ascii_uppercase()) {
                    let description = format!("Referenced on line {}", line_idx + 1);
                    items.push(CompletionItem::variable(name, description));
                }
            }
        }
    }

    items
}

fn is_same_span(span: &ClassifiedSpan, line_start: usize, other: &Range<usize>) -> bool {
    line_start + span.start == other.start && line_start + span.end() == other.end
}

/// `%NAME%` -> `NAME`; other identifier forms have no reusable name.
fn reference_name(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('%')?.strip_suffix('%')?;
    (!inner.is_empty()).then_some(inner)
}

/// Token boundaries around the caret, within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenContext {
    /// Word replaced by the completion; empty when the caret is not touching a word.
    word: Range<usize>,
    /// The word, or the single char before the caret when there is no word.
    under_caret: Range<usize>,
}

impl TokenContext {
    /// `None` when the preceding token rules completion out.
    fn at(line: &str, col: usize) -> Option<Self> {
        let word = word_bounds(line, col);
        let under_caret = if word.is_empty() {
            line[..col]
                .char_indices()
                .next_back()
                .map(|(idx, ch)| idx..idx + ch.len_utf8())
                .unwrap_or(col..col)
        } else {
            word.clone()
        };

        if preceding_token(line, word.start).is_some_and(suppresses_completion) {
            return None;
        }

        Some(Self { word, under_caret })
    }

    fn is_bare_word(&self, line: &str) -> bool {
        line[self.under_caret.clone()]
            .chars()
            .all(|ch| ch.is_alphabetic() || ch.is_whitespace())
    }
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || UnicodeXID::is_xid_continue(ch)
}

fn word_bounds(line: &str, col: usize) -> Range<usize> {
    let start = line[..col]
        .char_indices()
        .rev()
        .take_while(|(_, ch)| is_word_char(*ch))
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(col);
    let end = line[col..]
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map(|(idx, _)| col + idx)
        .unwrap_or(line.len());
    start..end
}

/// Text glued to the front of the word (`%`, `@`, `x=%`), or else the previous
/// whitespace-separated token.
fn preceding_token(line: &str, word_start: usize) -> Option<&str> {
    let head = &line[..word_start];
    let attached_start = head.trim_end_matches(|ch: char| !ch.is_whitespace()).len();
    let attached = &head[attached_start..];
    if !attached.is_empty() {
        return Some(attached);
    }

    let before = head.trim_end();
    if before.is_empty() {
        return None;
    }
    let start = before
        .trim_end_matches(|ch: char| !ch.is_whitespace())
        .len();
    Some(&before[start..])
}

fn suppresses_completion(token: &str) -> bool {
    // `@` only silences echo for the command that follows it.
    let token = token.strip_prefix('@').unwrap_or(token);
    let Some(first) = token.chars().next() else {
        return false;
    };
    if !first.is_alphabetic() && first != '%' {
        return true;
    }
    keywords::is_keyword(token)
        && !CHAINING_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(token))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/completion.rs"]
mod tests;
