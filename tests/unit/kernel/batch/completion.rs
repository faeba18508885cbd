use super::*;
use crate::kernel::services::adapters::StaticEnvironment;

fn run(text: &str, caret: usize, env: &StaticEnvironment) -> Option<CompletionSet> {
    run_with(text, caret, env, &CompletionSettings::default())
}

fn run_with(
    text: &str,
    caret: usize,
    env: &StaticEnvironment,
    settings: &CompletionSettings,
) -> Option<CompletionSet> {
    let document = Document::new(text);
    complete(CompletionRequest { document: &document, caret }, env, settings)
}

fn labels(set: &CompletionSet) -> Vec<&str> {
    set.items.iter().map(|item| item.label.as_str()).collect()
}

#[test]
fn test_no_completion_at_document_start() {
    let env = StaticEnvironment::new();
    assert_eq!(run("copy", 0, &env), None);
    assert_eq!(run("", 0, &env), None);
}

#[test]
fn test_no_completion_inside_comment_or_string() {
    let env = StaticEnvironment::new().with("PATH", "x");
    assert_eq!(run("rem cop", 7, &env), None);
    assert_eq!(run(":: %PA%", 6, &env), None);
    assert_eq!(run("x \"hello\"", 5, &env), None);
}

#[test]
fn test_keywords_on_bare_word() {
    let env = StaticEnvironment::new();
    let set = run("co", 2, &env).unwrap();

    assert_eq!(set.replace, 0..2);
    assert_eq!(set.items.len(), keywords::entries().len());
    assert!(set.items.iter().all(|item| item.kind == CompletionKind::Keyword));

    let copy = set.items.iter().find(|item| item.label == "copy").unwrap();
    assert_eq!(copy.insert_text, "copy");
    assert_eq!(copy.description, keywords::lookup("copy").unwrap());
}

#[test]
fn test_items_are_sorted_alphabetically() {
    let env = StaticEnvironment::new();
    let set = run("co", 2, &env).unwrap();
    let labels = labels(&set);
    assert!(labels
        .windows(2)
        .all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase()));
}

#[test]
fn test_keyword_suppresses_following_keyword() {
    let env = StaticEnvironment::new();
    assert_eq!(run("copy ", 5, &env), None);
    assert_eq!(run("copy ab", 7, &env), None);
    assert_eq!(run("@echo ", 6, &env), None);
    assert_eq!(run("GOTO x", 6, &env), None);
}

#[test]
fn test_if_and_not_allow_keyword_chaining() {
    let env = StaticEnvironment::new();

    let after_if = run("if ", 3, &env).unwrap();
    assert_eq!(after_if.replace, 3..3);
    assert!(labels(&after_if).contains(&"exist"));

    let after_not = run("if not ex", 9, &env).unwrap();
    assert_eq!(after_not.replace, 7..9);
    assert!(labels(&after_not).contains(&"exist"));

    assert!(run("IF ", 3, &env).is_some());
}

#[test]
fn test_at_sign_prefix_allows_completion() {
    let env = StaticEnvironment::new();
    let set = run("@ec", 3, &env).unwrap();
    assert_eq!(set.replace, 1..3);
    assert!(labels(&set).contains(&"echo"));
}

#[test]
fn test_non_letter_prefix_suppresses_completion() {
    let env = StaticEnvironment::new();
    assert_eq!(run("dir /", 5, &env), None);
    assert_eq!(run("dir /s", 6, &env), None);
    assert_eq!(run("dir 1 ", 6, &env), None);
    assert_eq!(run(":lab", 4, &env), None);
}

#[test]
fn test_non_alphabetic_word_gets_no_keywords() {
    let env = StaticEnvironment::new();
    assert_eq!(run("x1", 2, &env), None);
    assert_eq!(run("a=", 2, &env), None);
}

#[test]
fn test_environment_variables_inside_reference() {
    let env = StaticEnvironment::new()
        .with("TEMP", "C:\\Temp")
        .with("Path", "C:\\Windows");
    let set = run("dir %PA%", 7, &env).unwrap();

    assert_eq!(set.replace, 5..7);
    assert_eq!(labels(&set), vec!["Path", "TEMP"]);
    assert!(set.items.iter().all(|item| item.kind == CompletionKind::Variable));
    assert_eq!(set.items[0].description, "C:\\Windows");
}

#[test]
fn test_document_variables_deduplicated_after_environment() {
    let env = StaticEnvironment::new().with("Foo", "from env");
    let text = "dir %FOO%\ndir %bar%\ndir %BAR%\ndir %zz%";
    let caret = text.len() - 1;
    let set = run(text, caret, &env).unwrap();

    assert_eq!(set.replace, text.len() - 3..text.len() - 1);
    assert_eq!(labels(&set), vec!["bar", "Foo"]);

    let foo = &set.items[1];
    assert_eq!(foo.description, "from env");
    let bar = &set.items[0];
    assert_eq!(bar.description, "Referenced on line 2");
}

#[test]
fn test_current_reference_is_not_offered() {
    let env = StaticEnvironment::new();
    assert_eq!(run("dir %only%", 9, &env), None);
}

#[test]
fn test_caret_after_closing_percent_replaces_the_name() {
    let env = StaticEnvironment::new().with("PATH", "C:\\Windows");
    let set = run("if %PATH%", 9, &env).unwrap();

    assert_eq!(set.replace, 4..8);
    assert_eq!(labels(&set), vec!["PATH"]);
}

#[test]
fn test_settings_gate_each_source() {
    let env = StaticEnvironment::new().with("HOME", "x");
    let text = "dir %DOC%\ndir %H%";
    let caret = text.len() - 1;

    let no_env = CompletionSettings {
        environment_variables: false,
        ..CompletionSettings::default()
    };
    let set = run_with(text, caret, &env, &no_env).unwrap();
    assert_eq!(labels(&set), vec!["DOC"]);

    let no_doc = CompletionSettings {
        document_variables: false,
        ..CompletionSettings::default()
    };
    let set = run_with(text, caret, &env, &no_doc).unwrap();
    assert_eq!(labels(&set), vec!["HOME"]);

    let no_keywords = CompletionSettings {
        keywords: false,
        ..CompletionSettings::default()
    };
    assert_eq!(run_with("co", 2, &env, &no_keywords), None);
}

#[test]
fn test_caret_past_end_is_clamped() {
    let env = StaticEnvironment::new();
    let set = run("co", 99, &env).unwrap();
    assert_eq!(set.replace, 0..2);
}

#[test]
fn test_completion_on_later_line_uses_document_offsets() {
    let env = StaticEnvironment::new();
    let text = "@echo off\r\nif ex";
    let set = run(text, text.len(), &env).unwrap();
    assert_eq!(set.replace, text.len() - 2..text.len());
}

#[test]
fn test_preceding_token_helpers() {
    assert_eq!(preceding_token("copy ", 5), Some("copy"));
    assert_eq!(preceding_token("dir %", 5), Some("%"));
    assert_eq!(preceding_token("  ", 2), None);
    assert!(suppresses_completion("copy"));
    assert!(suppresses_completion("@ECHO"));
    assert!(!suppresses_completion("if"));
    assert!(!suppresses_completion("@"));
    assert!(!suppresses_completion("%"));
    assert!(suppresses_completion("/q"));
    assert_eq!(word_bounds("ab cd", 4), 3..5);
    assert_eq!(word_bounds("ab  ", 3), 3..3);
}
