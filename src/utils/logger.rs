use crate::app::OutputMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// JSON logs go with JSON output, compact logs with cards.
pub fn init_logger(output: OutputMode, verbose: bool) {
    match output {
        OutputMode::Json => init_json_logger(verbose),
        OutputMode::Cards => init_cli_logger(verbose),
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("domain_checker=debug,warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("domain_checker=warn"))
    };

    // 日誌寫到 stderr，stdout 留給結果輸出
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

/// JSON lines on stderr, for when the output is collected by another tool.
pub fn init_json_logger(verbose: bool) {
    let default_directive = if verbose {
        "domain_checker=debug,warn"
    } else {
        "domain_checker=info"
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
                .json(),
        )
        .init();
}
