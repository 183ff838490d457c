//! release_maker - manage GitHub releases from the command line.

use std::process;

use release_maker::cli;
use release_maker::cli::OutputManager;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            let output = OutputManager::new();
            output.error(&format!("Fatal error: {e}"));
            process::exit(e.exit_code());
        }
    }
}
