use std::fmt;
use std::net::Ipv4Addr;

/// Verdict of a single probe pair. The probe service's exit status is
/// authoritative; no partial-success classification exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed,
}

/// One probed (subinterface, target) pair. Created by the engine, handed to
/// the reporter, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub interface: String,
    pub source: Ipv4Addr,
    pub target: String,
    /// Cosmetic annotation, see [`crate::network::vlan::destination_vlan_label`].
    pub vlan_label: Option<u16>,
    pub outcome: Outcome,
}

/// Everything the run wants an operator to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Info(String),
    Warning(String),
    Probe(ProbeResult),
}

/// Sink for run output. Implementations must keep the distinction between
/// successful, failed and informational events visible, and must write events
/// in the order they arrive.
pub trait Reporter {
    fn emit(&mut self, event: &Event);
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "OK"),
            Outcome::Failed => write!(f, "FAILED"),
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vlan_label {
            Some(label) => write!(
                f,
                "{} ({}) -> {} [vlan {}]: {}",
                self.interface, self.source, self.target, label, self.outcome
            ),
            None => write!(
                f,
                "{} ({}) -> {}: {}",
                self.interface, self.source, self.target, self.outcome
            ),
        }
    }
}

/// Reporter that remembers every event. Test double for engine-ordering
/// assertions; lives here so every crate's tests can use it.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe_results(&self) -> Vec<&ProbeResult> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Probe(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Warning(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn emit(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
