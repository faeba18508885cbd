//! Conversions between document byte offsets and protocol types.

use crate::kernel::batch::completion::{CompletionKind, CompletionSet};
use crate::kernel::batch::quick_info::QuickInfo;
use crate::kernel::{classify, ClassifiedSpan, Document, LexicalCategory};
use lsp_types::{
    CompletionItem, CompletionItemKind, CompletionList, CompletionResponse, CompletionTextEdit,
    Hover, HoverContents, MarkedString, Position, PositionEncodingKind, Range, SemanticToken,
    SemanticTokenType, SemanticTokensLegend, TextEdit,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionEncoding {
    Utf8,
    #[default]
    Utf16,
    Utf32,
}

impl PositionEncoding {
    /// Prefers UTF-8; otherwise the first of UTF-32/UTF-16 the client lists. UTF-16 when
    /// the client says nothing.
    pub fn negotiate(offered: Option<&[PositionEncodingKind]>) -> Self {
        let Some(offered) = offered else {
            return Self::Utf16;
        };
        if offered.contains(&PositionEncodingKind::UTF8) {
            return Self::Utf8;
        }
        offered
            .iter()
            .find_map(|kind| {
                if *kind == PositionEncodingKind::UTF32 {
                    Some(Self::Utf32)
                } else if *kind == PositionEncodingKind::UTF16 {
                    Some(Self::Utf16)
                } else {
                    None
                }
            })
            .unwrap_or(Self::Utf16)
    }

    pub fn to_lsp_kind(self) -> PositionEncodingKind {
        match self {
            Self::Utf8 => PositionEncodingKind::UTF8,
            Self::Utf16 => PositionEncodingKind::UTF16,
            Self::Utf32 => PositionEncodingKind::UTF32,
        }
    }

    fn units(self, ch: char) -> u32 {
        match self {
            Self::Utf8 => ch.len_utf8() as u32,
            Self::Utf16 => ch.len_utf16() as u32,
            Self::Utf32 => 1,
        }
    }

    pub fn col_units_for_str(self, s: &str) -> u32 {
        s.chars().map(|ch| self.units(ch)).sum()
    }
}

/// Byte offset of `col` units into `line`; never splits a char and clamps to the line end.
pub fn col_to_byte(line: &str, col: u32, encoding: PositionEncoding) -> usize {
    let mut units = 0u32;
    for (byte, ch) in line.char_indices() {
        let next = units.saturating_add(encoding.units(ch));
        if next > col {
            return byte;
        }
        units = next;
    }
    line.len()
}

pub fn position_to_offset(
    document: &Document,
    position: Position,
    encoding: PositionEncoding,
) -> usize {
    let line_idx = position.line as usize;
    if line_idx >= document.line_count() {
        return document.len();
    }
    let line = document.line(line_idx);
    document.line_start(line_idx) + col_to_byte(&line, position.character, encoding)
}

pub fn offset_to_position(
    document: &Document,
    offset: usize,
    encoding: PositionEncoding,
) -> Position {
    let offset = document.clamp(offset);
    let line_idx = document.line_of_offset(offset);
    let head = document.slice(document.line_start(line_idx)..offset);
    Position::new(line_idx as u32, encoding.col_units_for_str(&head))
}

pub fn range_to_offsets(
    document: &Document,
    range: Range,
    encoding: PositionEncoding,
) -> std::ops::Range<usize> {
    let start = position_to_offset(document, range.start, encoding);
    let end = position_to_offset(document, range.end, encoding);
    start..end.max(start)
}

pub fn offsets_to_range(
    document: &Document,
    range: std::ops::Range<usize>,
    encoding: PositionEncoding,
) -> Range {
    Range::new(
        offset_to_position(document, range.start, encoding),
        offset_to_position(document, range.end, encoding),
    )
}

/// Index of each category in the legend; order matches `semantic_tokens_legend`.
fn token_type_index(category: LexicalCategory) -> u32 {
    match category {
        LexicalCategory::Comment => 0,
        LexicalCategory::String => 1,
        LexicalCategory::Keyword => 2,
        LexicalCategory::Operator => 3,
        LexicalCategory::Parameter => 4,
        LexicalCategory::Identifier => 5,
        LexicalCategory::Label => 6,
    }
}

pub fn semantic_tokens_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: vec![
            SemanticTokenType::COMMENT,
            SemanticTokenType::STRING,
            SemanticTokenType::KEYWORD,
            SemanticTokenType::OPERATOR,
            SemanticTokenType::PARAMETER,
            SemanticTokenType::VARIABLE,
            SemanticTokenType::new("label"),
        ],
        token_modifiers: Vec::new(),
    }
}

/// Sorted, non-overlapping spans: the earliest start wins, then the narrower span.
pub fn resolve_overlaps(mut spans: Vec<ClassifiedSpan>) -> Vec<ClassifiedSpan> {
    spans.sort_by_key(|span| (span.start, span.len));
    let mut out: Vec<ClassifiedSpan> = Vec::with_capacity(spans.len());
    let mut covered_to = 0usize;
    for span in spans {
        if span.len == 0 || (!out.is_empty() && span.start < covered_to) {
            continue;
        }
        covered_to = span.end();
        out.push(span);
    }
    out
}

/// Delta-encoded tokens for `lines` (clamped to the document).
pub fn semantic_tokens(
    document: &Document,
    lines: std::ops::Range<usize>,
    encoding: PositionEncoding,
) -> Vec<SemanticToken> {
    let end = lines.end.min(document.line_count());
    let mut out = Vec::new();
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for line_idx in lines.start..end {
        let line = document.line(line_idx);
        for span in resolve_overlaps(classify(&line)) {
            let start = encoding.col_units_for_str(&line[..span.start]);
            let length = encoding.col_units_for_str(span.text(&line));
            if length == 0 {
                continue;
            }

            let line_no = line_idx as u32;
            let delta_line = line_no - prev_line;
            let delta_start = if delta_line == 0 {
                start - prev_start
            } else {
                start
            };
            out.push(SemanticToken {
                delta_line,
                delta_start,
                length,
                token_type: token_type_index(span.category),
                token_modifiers_bitset: 0,
            });
            prev_line = line_no;
            prev_start = start;
        }
    }

    out
}

pub fn completion_response(
    document: &Document,
    set: &CompletionSet,
    encoding: PositionEncoding,
) -> CompletionResponse {
    let range = offsets_to_range(document, set.replace.clone(), encoding);
    let items = set
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| CompletionItem {
            label: item.label.clone(),
            kind: Some(match item.kind {
                CompletionKind::Keyword => CompletionItemKind::KEYWORD,
                CompletionKind::Variable => CompletionItemKind::VARIABLE,
            }),
            detail: Some(item.description.clone()),
            sort_text: Some(format!("{idx:05}")),
            text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(
                range,
                item.insert_text.clone(),
            ))),
            ..Default::default()
        })
        .collect();

    CompletionResponse::List(CompletionList {
        is_incomplete: false,
        items,
    })
}

pub fn hover(document: &Document, info: QuickInfo, encoding: PositionEncoding) -> Hover {
    Hover {
        contents: HoverContents::Array(
            info.contents.into_iter().map(MarkedString::String).collect(),
        ),
        range: Some(offsets_to_range(document, info.span, encoding)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lsp/convert.rs"]
mod tests;
