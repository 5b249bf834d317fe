//! The dual-sink reporter: colorized lines on the console, the same lines
//! color-stripped in an append-only log file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use tracing::warn;
use vlansweep_common::report::{Event, Outcome, Reporter};

use crate::terminal::print;

pub struct RunReporter {
    log: BufWriter<File>,
    log_failed: bool,
}

impl RunReporter {
    /// Opens the log sink, truncating whatever a previous run left behind.
    /// It stays appendable until the process exits.
    pub fn create(log_path: &Path) -> Result<Self> {
        let file = File::create(log_path)
            .with_context(|| format!("cannot open log file '{}'", log_path.display()))?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: File) -> Self {
        Self {
            log: BufWriter::new(file),
            log_failed: false,
        }
    }

    /// Prints a console line and mirrors it, color-stripped, into the log.
    /// Every operator-visible line goes through here, decorations included.
    pub fn display(&mut self, line: &str) {
        println!("{}", line);
        self.log_line(&print::strip_codes(line));
    }

    /// Records a line in the log without echoing it to the console, for text
    /// that reaches the operator some other way (e.g. a returned error).
    pub fn log_only(&mut self, line: &str) {
        self.log_line(line);
    }

    fn log_line(&mut self, line: &str) {
        let result = writeln!(self.log, "{}", line).and_then(|_| self.log.flush());
        if let Err(e) = result {
            // Losing the durable record must not take the sweep down, but
            // the operator gets told the first time it happens.
            if !self.log_failed {
                self.log_failed = true;
                warn!("log sink write failed, record will be incomplete: {}", e);
            }
        }
    }
}

impl Reporter for RunReporter {
    fn emit(&mut self, event: &Event) {
        let line = match event {
            Event::Info(msg) => format!("{} {}", "[+]".green().bold(), msg),
            Event::Warning(msg) => format!("{} {}", "[*]".yellow().bold(), msg.yellow()),
            Event::Probe(result) => match result.outcome {
                Outcome::Success => {
                    format!("{} {}", "[+]".green().bold(), result.to_string().green())
                }
                Outcome::Failed => {
                    format!("{} {}", "[-]".red().bold(), result.to_string().red().bold())
                }
            },
        };
        self.display(&line);
    }
}
