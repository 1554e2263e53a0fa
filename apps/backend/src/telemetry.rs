//! Process-wide tracing subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

pub const DEFAULT_LOG_FILTER: &str = "info,actix_web=info,actix_server=warn";

/// `RUST_LOG` when set, otherwise the configured directives.
pub fn log_filter(configured: &str) -> Result<EnvFilter, AppError> {
    select_filter(std::env::var("RUST_LOG").ok(), configured)
}

fn select_filter(from_env: Option<String>, configured: &str) -> Result<EnvFilter, AppError> {
    let directives = from_env
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| configured.to_string());
    EnvFilter::try_new(&directives)
        .map_err(|err| AppError::config(format!("invalid log filter `{directives}`: {err}")))
}

/// JSON logs on stdout.
pub fn init_tracing(filter: EnvFilter) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
