use cmdlang::kernel::services::adapters::{ensure_settings_file, load_settings, ProcessEnvironment};
use cmdlang::kernel::services::ports::Settings;
use cmdlang::logging;
use lsp_server::Connection;
use std::process::ExitCode;

fn main() -> ExitCode {
    let settings_path = ensure_settings_file();
    let settings = load_settings().unwrap_or_default();
    let _logging = logging::init(settings.log_filter.as_deref());

    match settings_path {
        Ok(path) => tracing::info!(path = %path.display(), "settings"),
        Err(err) => tracing::warn!(error = %err, "settings file unavailable, using defaults"),
    }

    match run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "server stopped");
            eprintln!("cmdlang: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let (connection, io_threads) = Connection::stdio();
    cmdlang::lsp::serve(connection, settings, ProcessEnvironment)?;
    io_threads.join()?;
    Ok(())
}
