//! Closing-pair insertion for brackets, quotes and `%` references.

use crate::kernel::document::Document;

pub const OPENING_CHARS: [char; 6] = ['[', '(', '{', '%', '"', '\''];

pub fn closing_char(typed: char) -> Option<char> {
    match typed {
        '[' => Some(']'),
        '(' => Some(')'),
        '{' => Some('}'),
        '%' | '"' | '\'' => Some(typed),
        _ => None,
    }
}

fn is_symmetric(ch: char) -> bool {
    closing_char(ch) == Some(ch)
}

/// True when the char at `typed_at` is the last meaningful char on `line`.
pub fn can_complete_pair(line: &str, typed_at: usize) -> bool {
    let trimmed = line.trim_end_matches(['\r', '\n', ' ', ';', ',']);
    trimmed.len() == typed_at + 1
}

/// Where to insert the closing char after `typed` was entered just before `offset_after_typed`.
pub fn pair_insertion(
    document: &Document,
    offset_after_typed: usize,
    typed: char,
) -> Option<(usize, char)> {
    let close = closing_char(typed)?;
    let offset = document.clamp(offset_after_typed);
    let line_idx = document.line_of_offset(offset);
    let line_start = document.line_start(line_idx);
    let line = document.line(line_idx);

    let col = offset.checked_sub(line_start)?;
    let typed_at = col.checked_sub(typed.len_utf8())?;
    if !line.get(typed_at..)?.starts_with(typed) || !can_complete_pair(&line, typed_at) {
        return None;
    }

    if is_symmetric(typed) && line[..col].matches(typed).count() % 2 == 0 {
        return None;
    }

    Some((offset, close))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/type_through.rs"]
mod tests;
