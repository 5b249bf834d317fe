//! The cross-product driver: every active subinterface against every target.

use vlansweep_common::network::subinterface::ActiveSubinterface;
use vlansweep_common::network::vlan::destination_vlan_label;
use vlansweep_common::report::{Event, Outcome, ProbeResult, Reporter};

use crate::probe::ProbeService;

/// Tally of a completed sweep. Probe failures are data; they show up here and
/// nowhere in the process exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Probes every (subinterface, target) pair exactly once, no retries.
///
/// Iteration is source-major: one subinterface's full target sweep is probed
/// and reported before the next subinterface starts. That grouping is what
/// makes the console output reviewable per VLAN, so it must not be reordered.
/// Each result reaches the reporter before the next pair is probed.
pub async fn run_sweep(
    subinterfaces: &[ActiveSubinterface],
    targets: &[String],
    probe_count: u32,
    prober: &dyn ProbeService,
    reporter: &mut dyn Reporter,
) -> SweepSummary {
    let mut summary = SweepSummary::default();

    for subif in subinterfaces {
        reporter.emit(&Event::Info(format!(
            "probing {} targets from {} [vlan {}]",
            targets.len(),
            subif,
            subif.vlan_id
        )));

        for target in targets {
            let outcome = prober.probe(subif, target, probe_count).await;

            summary.total += 1;
            match outcome {
                Outcome::Success => summary.succeeded += 1,
                Outcome::Failed => summary.failed += 1,
            }

            reporter.emit(&Event::Probe(ProbeResult {
                interface: subif.name.clone(),
                source: subif.addr,
                target: target.clone(),
                vlan_label: destination_vlan_label(target),
                outcome,
            }));
        }
    }

    summary
}
