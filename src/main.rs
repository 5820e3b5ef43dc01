//! Scholarsite binary entrypoint kept minimal. The pipeline lives in the library.

use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use scholarsite::app::{self, render_output};
use scholarsite::args::{Args, determine_log_level, resolve_run_config};
use scholarsite::theme::{self, ThemeStore};

/// Log timer writing `YYYY-MM-DD-T HH:MM:SS` local timestamps.
struct ScholarsiteTimer;

impl tracing_subscriber::fmt::time::FormatTime for ScholarsiteTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&scholarsite::util::log_timestamp())
    }
}

/// Keeps the non-blocking log writer flushing until exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/scholarsite.log`, falling back to stderr.
fn init_logging(config_dir: &Path, level: &str) {
    let logs = theme::logs_dir(config_dir);
    let log_path = logs.join("scholarsite.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let opened = std::fs::create_dir_all(&logs).and_then(|()| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });
    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ScholarsiteTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ScholarsiteTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config_dir = theme::config_dir(args.config_dir.as_deref());
    init_logging(&config_dir, &determine_log_level(&args));
    tracing::info!(config = %config_dir.display(), "Scholarsite starting");

    let settings = theme::load_settings(&theme::settings_path(&config_dir));
    let mut config = match resolve_run_config(&args, &settings) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid configuration");
            eprintln!("scholarsite: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.theme_store = Some(ThemeStore::new(theme::theme_path(&config_dir)));

    let view = match app::run(&config).await {
        Ok(view) => view,
        Err(err) => {
            tracing::error!(error = %err, "render failed");
            eprintln!("scholarsite: {err}");
            return ExitCode::FAILURE;
        }
    };
    let output = render_output(&view, config.text);

    if let Some(path) = &args.out {
        if let Err(err) = tokio::fs::write(path, &output).await {
            tracing::error!(path = %path.display(), error = %err, "failed to write output");
            eprintln!("scholarsite: failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        tracing::info!(path = %path.display(), bytes = output.len(), "output written");
    } else {
        println!("{output}");
    }
    tracing::info!("Scholarsite exited");
    ExitCode::SUCCESS
}
