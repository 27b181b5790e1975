/// Configure tracing once at application startup.
///
/// Output goes to stderr so it never interleaves with the stdout dialogue.
/// `RUST_LOG` controls verbosity; without it only errors are shown.
///
/// ```bash
/// RUST_LOG=debug stockroom   # per-request spans from clients and the store
/// RUST_LOG=info stockroom    # orders, replacements, lifecycle
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
