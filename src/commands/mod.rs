pub mod help;
pub mod range;

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::error;

use crate::services::dashboard_service::Dashboard;

/// Interactive range selector: read commands from stdin until EOF or
/// `quit`, re-rendering the dashboard on each activation. Everything here
/// is synchronous — the one async operation (the fetch) is already done
/// by the time the loop starts.
pub fn run(dashboard: &mut Dashboard, report_path: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = line.split_whitespace().next() else {
            prompt()?;
            continue;
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" | "q" => break,
            "help" | "?" => help::execute(),
            _ => {
                if let Err(e) = range::execute(dashboard, command, report_path) {
                    error!("Error executing range selection {}: {}", command, e);
                    println!("❌ {}", e);
                }
            }
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("range> ");
    io::stdout().flush()
}
