#![cfg(test)]
//! Full-pipeline runs against fake OS capabilities: no real interfaces, no
//! packets, no privileges.

use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::net::Ipv4Addr;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use vlansweep_common::config::Config;
use vlansweep_common::network::subinterface::ActiveSubinterface;
use vlansweep_common::report::{Event, Outcome, RecordingReporter};
use vlansweep_core::inspect::{InterfaceInspector, Resolution};
use vlansweep_core::probe::ProbeService;
use vlansweep_core::{discovery, sweep, targets};

struct FakeInspector {
    table: HashMap<String, Ipv4Addr>,
}

impl FakeInspector {
    fn new(entries: &[(&str, Ipv4Addr)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(name, addr)| (name.to_string(), *addr))
                .collect(),
        }
    }
}

impl InterfaceInspector for FakeInspector {
    fn resolve(&self, name: &str) -> Resolution {
        match self.table.get(name) {
            Some(addr) => Resolution {
                exists: true,
                ipv4: Some(*addr),
            },
            None => Resolution::ABSENT,
        }
    }
}

struct FakeProber {
    unreachable: HashSet<String>,
}

impl FakeProber {
    fn new(unreachable: &[&str]) -> Self {
        Self {
            unreachable: unreachable.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ProbeService for FakeProber {
    async fn probe(&self, _subif: &ActiveSubinterface, target: &str, _count: u32) -> Outcome {
        if self.unreachable.contains(target) {
            Outcome::Failed
        } else {
            Outcome::Success
        }
    }
}

fn config(vlan_ids: Vec<u16>) -> Config {
    Config {
        base_interface: "eth0".to_string(),
        vlan_ids,
        ..Config::default()
    }
}

fn target_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn full_pipeline_probes_the_cross_product_in_order() {
    let inspector = FakeInspector::new(&[
        ("eth0.10", Ipv4Addr::new(10, 0, 10, 5)),
        ("eth0.20", Ipv4Addr::new(10, 0, 20, 5)),
    ]);
    let file = target_file("# sweep targets\n10.0.10.1\n\n10.0.20.1\n");
    let mut reporter = RecordingReporter::new();

    let cfg = config(vec![10, 999, 20]);
    let subinterfaces = discovery::discover(&cfg, &inspector, &mut reporter).unwrap();
    let targets = targets::load(file.path()).unwrap();

    let prober = FakeProber::new(&[]);
    let summary =
        sweep::run_sweep(&subinterfaces, &targets, cfg.probe_count, &prober, &mut reporter).await;

    // vlan 999 is skipped with a warning, the other two survive in order
    assert_eq!(subinterfaces.len(), 2);
    assert_eq!(subinterfaces[0].vlan_id, 10);
    assert_eq!(subinterfaces[1].vlan_id, 20);
    assert_eq!(
        reporter.warnings(),
        vec!["eth0.999: interface not found, skipped"]
    );

    assert_eq!(summary.total, 4);
    assert_eq!(summary.succeeded, 4);

    let pairs: Vec<(String, String)> = reporter
        .probe_results()
        .iter()
        .map(|r| (r.interface.clone(), r.target.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("eth0.10".to_string(), "10.0.10.1".to_string()),
            ("eth0.10".to_string(), "10.0.20.1".to_string()),
            ("eth0.20".to_string(), "10.0.10.1".to_string()),
            ("eth0.20".to_string(), "10.0.20.1".to_string()),
        ]
    );
}

#[tokio::test]
async fn unreachable_targets_are_recorded_and_the_run_completes() {
    let inspector = FakeInspector::new(&[("eth0.10", Ipv4Addr::new(10, 0, 10, 5))]);
    let file = target_file("10.0.20.1\n10.0.30.1\n");
    let mut reporter = RecordingReporter::new();

    let cfg = config(vec![10]);
    let subinterfaces = discovery::discover(&cfg, &inspector, &mut reporter).unwrap();
    let targets = targets::load(file.path()).unwrap();

    let prober = FakeProber::new(&["10.0.20.1"]);
    let summary =
        sweep::run_sweep(&subinterfaces, &targets, cfg.probe_count, &prober, &mut reporter).await;

    assert_eq!(summary.total, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 1);

    let results = reporter.probe_results();
    assert_eq!(results[0].outcome, Outcome::Failed);
    assert_eq!(results[0].vlan_label, Some(20));
    assert_eq!(results[1].outcome, Outcome::Success);
}

#[tokio::test]
async fn no_active_subinterface_aborts_before_any_probe() {
    let inspector = FakeInspector::new(&[]);
    let mut reporter = RecordingReporter::new();

    let cfg = config(vec![10, 20]);
    let result = discovery::discover(&cfg, &inspector, &mut reporter);

    assert!(result.is_err());
    assert!(reporter.probe_results().is_empty());
    assert_eq!(reporter.warnings().len(), 2);
}

#[test]
fn probe_events_interleave_with_interface_headers() {
    // The reporter stream groups each interface's sweep under its own Info
    // header line; downstream log review depends on that shape.
    let subifs = vec![
        ActiveSubinterface {
            name: "eth0.10".to_string(),
            addr: Ipv4Addr::new(10, 0, 10, 5),
            vlan_id: 10,
        },
        ActiveSubinterface {
            name: "eth0.20".to_string(),
            addr: Ipv4Addr::new(10, 0, 20, 5),
            vlan_id: 20,
        },
    ];
    let targets = vec!["10.0.1.1".to_string()];
    let mut reporter = RecordingReporter::new();

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    rt.block_on(async {
        sweep::run_sweep(&subifs, &targets, 1, &FakeProber::new(&[]), &mut reporter).await
    });

    let shape: Vec<&str> = reporter
        .events
        .iter()
        .map(|event| match event {
            Event::Info(_) => "info",
            Event::Warning(_) => "warning",
            Event::Probe(_) => "probe",
        })
        .collect();
    assert_eq!(shape, vec!["info", "probe", "info", "probe"]);
}
