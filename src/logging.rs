//! Diagnostic logging setup.
//!
//! Command output goes to stdout through `ui::messages`; tracing events go to
//! stderr so they never mix with it. The filter is read from
//! `GERENCIADOR_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "GERENCIADOR_LOG";

pub fn init() {
    let env = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. from a test harness) is not an error worth reporting
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
