use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Output goes to stderr; stdout carries the
/// tools' status lines.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = if verbose {
        "filecraft=debug,info".to_string()
    } else {
        format!("filecraft={}", level.unwrap_or("info"))
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
