use tracing_subscriber::{fmt, EnvFilter};

/// Filter directives, e.g. `GIT_CREDENTIAL_OP_LOG=debug`.
pub const LOG_ENV: &str = "GIT_CREDENTIAL_OP_LOG";

/// Installs the global subscriber. Logs go to stderr; stdout belongs to git.
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
