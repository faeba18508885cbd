use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub quick_info: QuickInfoSettings,
    #[serde(default)]
    pub type_through: TypeThroughSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    /// Offer the batch command vocabulary on bare words.
    pub keywords: bool,
    /// Offer process environment variables inside `%...%`.
    pub environment_variables: bool,
    /// Offer `%NAME%` references found elsewhere in the document.
    pub document_variables: bool,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            keywords: true,
            environment_variables: true,
            document_variables: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickInfoSettings {
    /// Render `PATH` one segment per line.
    pub split_path: bool,
    /// Append the expanded value when it differs from the raw one.
    pub show_expanded: bool,
}

impl Default for QuickInfoSettings {
    fn default() -> Self {
        Self {
            split_path: true,
            show_expanded: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeThroughSettings {
    pub enabled: bool,
}

impl Default for TypeThroughSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
