//! Hover tooltips for variables and keywords.

use super::classifier::{classify, ClassifiedSpan, LexicalCategory};
use super::keywords;
use crate::kernel::document::Document;
use crate::kernel::services::ports::{Environment, QuickInfoSettings};
use std::ops::Range;

#[derive(Debug, Clone, Copy)]
pub struct QuickInfoRequest<'a> {
    pub document: &'a Document,
    /// Byte offset under the pointer.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickInfo {
    /// Document byte range the tooltip applies to.
    pub span: Range<usize>,
    /// One entry per tooltip line group.
    pub contents: Vec<String>,
}

pub fn quick_info(
    request: QuickInfoRequest<'_>,
    env: &dyn Environment,
    settings: &QuickInfoSettings,
) -> Option<QuickInfo> {
    let document = request.document;
    let position = document.clamp(request.position);
    let line_idx = document.line_of_offset(position);
    let line_start = document.line_start(line_idx);
    let line = document.line(line_idx);
    let col = position.saturating_sub(line_start);

    let spans = classify(&line);
    let to_document = |span: &ClassifiedSpan| line_start + span.start..line_start + span.end();

    if let Some(span) = span_at(&spans, LexicalCategory::Identifier, col) {
        if let Some(contents) = variable_contents(span.text(&line), env, settings) {
            return Some(QuickInfo {
                span: to_document(span),
                contents,
            });
        }
    }

    let span = span_at(&spans, LexicalCategory::Keyword, col)?;
    let name = span.text(&line).trim();
    let name = name.strip_prefix('@').unwrap_or(name).to_lowercase();
    let description = keywords::lookup(&name)?;
    Some(QuickInfo {
        span: to_document(span),
        contents: vec![description.to_string()],
    })
}

fn span_at(spans: &[ClassifiedSpan], category: LexicalCategory, col: usize) -> Option<&ClassifiedSpan> {
    spans
        .iter()
        .find(|span| span.category == category && span.contains(col))
}

fn variable_contents(
    text: &str,
    env: &dyn Environment,
    settings: &QuickInfoSettings,
) -> Option<Vec<String>> {
    let name = text.trim().trim_matches('%');
    let value = env.var(name).filter(|value| !value.is_empty())?;
    let split = settings.split_path && name.eq_ignore_ascii_case("path");
    let render = |value: &str| {
        if split {
            split_path(value)
        } else {
            value.to_string()
        }
    };

    let mut contents = vec![render(&value)];
    if settings.show_expanded {
        let expanded = env.expand(&value);
        if expanded != value {
            contents.push(render(&expanded));
        }
    }
    Some(contents)
}

fn split_path(value: &str) -> String {
    value
        .split(';')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/quick_info.rs"]
mod tests;
