use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Environment variables:
/// - RUST_LOG: filter directives (default: "info")
///
/// Output goes to stderr so stdout only carries command replies.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
