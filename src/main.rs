// Entry point: program main
// Installs file logging when requested and runs the TUI.
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs

use std::process;

#[tokio::main]
async fn main() {
    match sortvis::logging::init() {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "logging to file"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("sortvis: {e}");
            process::exit(2);
        }
    }

    // Run interactive program
    if let Err(e) = sortvis::ui::run().await {
        tracing::error!(error = %e, "terminal program failed");
        eprintln!("sortvis: {e}");
        process::exit(2);
    }
}
