use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "spendscope_cli=info,spendscope_finance=info,spendscope_ingest=info";

/// Log to stderr so report JSON on stdout stays clean. `RUST_LOG` overrides
/// the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
