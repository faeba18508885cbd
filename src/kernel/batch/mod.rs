//! Batch-script language core.

pub mod classifier;
pub mod completion;
pub mod keywords;
pub mod patterns;
pub mod quick_info;
pub mod type_through;

pub use classifier::{classify, ClassifiedSpan, LexicalCategory};
pub use completion::{complete, CompletionItem, CompletionKind, CompletionRequest, CompletionSet};
pub use quick_info::{quick_info, QuickInfo, QuickInfoRequest};
pub use type_through::{can_complete_pair, closing_char, pair_insertion};
