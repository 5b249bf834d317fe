mod commands;
mod reporter;
mod terminal;

use std::fs;
use std::path::Path;

use commands::CommandLine;
use terminal::logging;
use vlansweep_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command_line = match CommandLine::try_parse_args() {
        Ok(command_line) => command_line,
        Err(e) => {
            // Argument errors happen before the reporter exists, but the log
            // is still the durable record: truncate it and file the rendered
            // usage/error text before clap prints it and exits non-zero.
            record_argument_failure(&Config::default().log_path, &e.render().to_string());
            e.exit();
        }
    };

    logging::init();

    commands::sweep::run(command_line).await
}

fn record_argument_failure(log_path: &Path, rendered: &str) {
    // Best effort: an unwritable log must not mask the argument error.
    let _ = fs::write(log_path, rendered);
}
