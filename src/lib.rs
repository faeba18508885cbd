//! cmdlang - language services for Windows batch scripts (`.bat` / `.cmd`).
//!
//! Module layout:
//! - kernel: classification, completion, quick-info and type-through (pure, host-agnostic)
//! - kernel::services: ports (traits + data contracts) and adapters (process env, settings files)
//! - lsp: Language Server Protocol host over stdio
//! - logging: tracing setup for the server binary

pub mod kernel;
pub mod logging;
pub mod lsp;
