//! Headless language core (classification, completion, quick-info).

pub mod batch;
pub mod document;
pub mod language;
pub mod services;

pub use batch::{
    classify, complete, quick_info, ClassifiedSpan, CompletionItem, CompletionKind,
    CompletionRequest, CompletionSet, LexicalCategory, QuickInfo, QuickInfoRequest,
};
pub use document::Document;
pub use language::LanguageId;
