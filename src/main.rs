//! gerenciador main entrypoint.

use gerenciador::ui::messages::error;
use gerenciador::{logging, run};

fn main() {
    logging::init();

    if let Err(e) = run() {
        tracing::debug!(error = ?e, "command failed");
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
