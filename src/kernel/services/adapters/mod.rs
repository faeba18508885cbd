//! Service adapters: OS specific implementations.

pub mod environment;
pub mod paths;
pub mod settings;

pub use environment::{ProcessEnvironment, StaticEnvironment};
pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, get_settings_path, load_settings,
    load_settings_from,
};
