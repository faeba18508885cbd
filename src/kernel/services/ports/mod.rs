//! Service ports: traits + data contracts.

pub mod environment;
pub mod settings;

pub use environment::{expand_references, Environment};
pub use settings::{CompletionSettings, QuickInfoSettings, Settings, TypeThroughSettings};
