use std::time::{Duration, Instant};

use colored::*;
use vlansweep_common::report::{Event, Reporter};
use vlansweep_core::inspect::{AddressPolicy, SystemInspector};
use vlansweep_core::probe::SystemPinger;
use vlansweep_core::sweep::{self, SweepSummary};
use vlansweep_core::{discovery, targets};

use crate::commands::CommandLine;
use crate::reporter::RunReporter;
use crate::terminal::print;

/// The whole run: discover subinterfaces, load targets, sweep, summarize.
///
/// The terminal failures (no argument is handled before this, missing/empty
/// target file, zero active subinterfaces) all fire before the first probe.
/// They reach the log through the reporter and the console through the
/// returned error. Probe failures are data and never affect the exit code.
pub async fn run(command_line: CommandLine) -> anyhow::Result<()> {
    let cfg = command_line.to_config();
    let mut reporter = RunReporter::create(&cfg.log_path)?;

    reporter.display(&print::header("vlan reachability sweep"));

    let inspector = SystemInspector::new(AddressPolicy::First);
    let subinterfaces = match discovery::discover(&cfg, &inspector, &mut reporter) {
        Ok(subinterfaces) => subinterfaces,
        Err(e) => {
            reporter.log_only(&format!("[-] {}", e));
            return Err(e.into());
        }
    };

    let targets = match targets::load(&command_line.target_file) {
        Ok(targets) => targets,
        Err(e) => {
            reporter.log_only(&format!("[-] {}", e));
            return Err(e.into());
        }
    };
    reporter.emit(&Event::Info(format!(
        "loaded {} targets from {}",
        targets.len(),
        command_line.target_file.display()
    )));

    let start: Instant = Instant::now();
    let pinger = SystemPinger::new();
    let summary = sweep::run_sweep(
        &subinterfaces,
        &targets,
        cfg.probe_count,
        &pinger,
        &mut reporter,
    )
    .await;

    sweep_ends(&summary, start.elapsed(), &mut reporter);
    Ok(())
}

fn sweep_ends(summary: &SweepSummary, total_time: Duration, reporter: &mut RunReporter) {
    reporter.emit(&Event::Info(format!(
        "sweep complete: {} probes, {} reachable, {} unreachable in {:.2}s",
        summary.total,
        summary.succeeded,
        summary.failed,
        total_time.as_secs_f64()
    )));

    let reachable: ColoredString = format!("{} reachable", summary.succeeded).bold().green();
    let unreachable: ColoredString = if summary.failed > 0 {
        format!("{} unreachable", summary.failed).bold().red()
    } else {
        format!("{} unreachable", summary.failed).normal()
    };

    reporter.display(&print::fat_separator());
    reporter.display(&print::centered(&format!("{} │ {}", reachable, unreachable)));
    reporter.display(&print::fat_separator());
}
