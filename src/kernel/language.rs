use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LanguageId {
    Batch,
}

impl LanguageId {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bat" | "cmd" => Some(Self::Batch),
            _ => None,
        }
    }

    /// Protocol-level language id, as sent in `textDocument/didOpen`.
    pub fn language_id(self) -> &'static str {
        match self {
            Self::Batch => "bat",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Batch => &["bat", "cmd"],
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Batch => "Batch",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
