use super::*;

fn first(category: LexicalCategory, text: &str) -> &str {
    PatternSet::get()
        .pattern(category)
        .find(text)
        .map(|range| &text[range])
        .unwrap_or("")
}

fn all(category: LexicalCategory, text: &str) -> Vec<&str> {
    PatternSet::get()
        .pattern(category)
        .find_iter(text)
        .map(|range| &text[range])
        .collect()
}

#[test]
fn test_precedence_order_is_explicit() {
    let order: Vec<_> = PatternSet::get()
        .ordered()
        .iter()
        .map(Pattern::category)
        .collect();
    assert_eq!(
        order,
        vec![
            LexicalCategory::String,
            LexicalCategory::Keyword,
            LexicalCategory::Operator,
            LexicalCategory::Parameter,
            LexicalCategory::Label,
        ]
    );
    assert_eq!(
        PatternSet::get().comment().category(),
        LexicalCategory::Comment
    );
    assert_eq!(
        PatternSet::get().identifier().category(),
        LexicalCategory::Identifier
    );
}

#[test]
fn test_keyword_pattern() {
    assert_eq!(first(LexicalCategory::Keyword, "call notepad.exe"), "call");
    assert_eq!(all(LexicalCategory::Keyword, "if not exist")[1], "not");
    assert_eq!(first(LexicalCategory::Keyword, "%call"), "");
    assert_eq!(first(LexicalCategory::Keyword, "ifnot"), "");
    assert_eq!(first(LexicalCategory::Keyword, "@echo off"), "@echo");
    assert_eq!(first(LexicalCategory::Keyword, "COMPACT /c"), "COMPACT");
}

#[test]
fn test_identifier_pattern() {
    assert_eq!(first(LexicalCategory::Identifier, "set foo = hat"), "foo");
    assert_eq!(first(LexicalCategory::Identifier, "set foo=hat"), "foo");
    assert_eq!(first(LexicalCategory::Identifier, "if %foo% = hat"), "%foo%");
    assert_ne!(first(LexicalCategory::Identifier, "setfoo=hat"), "foo");
    assert_eq!(first(LexicalCategory::Identifier, "cd %~dp0"), "%~dp0");
    assert_eq!(first(LexicalCategory::Identifier, "set /a count=1"), "count");
    assert_eq!(first(LexicalCategory::Identifier, "set \"name=value\""), "name");
}

#[test]
fn test_comment_pattern() {
    assert_eq!(first(LexicalCategory::Comment, "   :: hat"), ":: hat");
    assert_eq!(first(LexicalCategory::Comment, ":: hat"), ":: hat");
    assert_eq!(first(LexicalCategory::Comment, "foo &:: hat"), "&:: hat");
    assert_eq!(
        first(LexicalCategory::Comment, "foo &:: hat &:: test"),
        "&:: hat &:: test"
    );

    assert_eq!(first(LexicalCategory::Comment, "   REM hat"), "REM hat");
    assert_eq!(first(LexicalCategory::Comment, "rem hat"), "rem hat");
    assert_eq!(first(LexicalCategory::Comment, "foo &rem hat"), "&rem hat");
    assert_eq!(
        first(LexicalCategory::Comment, "foo &rem hat &REM test"),
        "&rem hat &REM test"
    );
    assert_eq!(first(LexicalCategory::Comment, "@rem quiet"), "@rem quiet");
    assert_eq!(first(LexicalCategory::Comment, "remark.exe"), "");
    assert_eq!(first(LexicalCategory::Comment, "echo rem"), "");
}

#[test]
fn test_string_pattern() {
    assert_eq!(first(LexicalCategory::String, " test  'hat'  foo"), "'hat'");
    assert_eq!(first(LexicalCategory::String, " test  \"hat\"  foo"), "\"hat\"");
    assert_eq!(
        first(LexicalCategory::String, "\"foo 'test' bar\""),
        "\"foo 'test' bar\""
    );
    assert_eq!(first(LexicalCategory::String, "echo foo bar"), "foo bar");
    assert_eq!(first(LexicalCategory::String, " test  \"hat  "), "");
    assert_eq!(
        all(LexicalCategory::String, "copy \"a b\" \"c d\""),
        vec!["\"a b\"", "\"c d\""]
    );
}

#[test]
fn test_label_pattern() {
    assert_eq!(first(LexicalCategory::Label, ":foo"), ":foo");
    assert_eq!(first(LexicalCategory::Label, "goto:foo"), "foo");
    assert_eq!(first(LexicalCategory::Label, "goto foo"), "foo");
    assert_eq!(first(LexicalCategory::Label, "   goto:foo"), "foo");
    assert_eq!(first(LexicalCategory::Label, "goto :eof"), "eof");

    assert_eq!(first(LexicalCategory::Label, "notgoto:foo"), "");
    assert_eq!(first(LexicalCategory::Label, "notgoto foo"), "");
}

#[test]
fn test_parameter_pattern() {
    assert_eq!(first(LexicalCategory::Parameter, " /f "), "/f");
    assert_eq!(first(LexicalCategory::Parameter, " -f "), "-f");
    assert_eq!(first(LexicalCategory::Parameter, " --f "), "--f");

    assert_eq!(first(LexicalCategory::Parameter, "fo/f"), "");
    assert_eq!(first(LexicalCategory::Parameter, "fo-f"), "");
    assert_eq!(first(LexicalCategory::Parameter, "fo--f"), "");
    assert_eq!(first(LexicalCategory::Parameter, "-- f"), "");
}

#[test]
fn test_operator_pattern() {
    assert_eq!(
        all(LexicalCategory::Operator, "a && b || c | d"),
        vec!["&&", "||", "|"]
    );
    assert_eq!(all(LexicalCategory::Operator, "dir 2>> log.txt"), vec!["2>>"]);
    assert_eq!(all(LexicalCategory::Operator, "sort < in > out"), vec!["<", ">"]);
    assert_eq!(all(LexicalCategory::Operator, "echo ^& !x! a=b"), vec!["^", "&", "!", "!", "="]);
}
