//! Works out which configured VLAN ids currently map to a live, addressed
//! subinterface on this host.

use tracing::debug;
use vlansweep_common::config::Config;
use vlansweep_common::error::DiscoveryError;
use vlansweep_common::network::subinterface::{ActiveSubinterface, subinterface_name};
use vlansweep_common::report::{Event, Reporter};

use crate::inspect::InterfaceInspector;

/// Resolves every configured VLAN id against the interface table, in input
/// order. VLANs whose subinterface is missing or unaddressed are skipped with
/// a warning; discovery order defines probe order downstream.
///
/// Fails only when the whole pass produces nothing — the run cannot continue
/// without a source interface.
pub fn discover(
    config: &Config,
    inspector: &dyn InterfaceInspector,
    reporter: &mut dyn Reporter,
) -> Result<Vec<ActiveSubinterface>, DiscoveryError> {
    let mut active: Vec<ActiveSubinterface> = Vec::with_capacity(config.vlan_ids.len());

    for &vlan_id in &config.vlan_ids {
        let name = subinterface_name(&config.base_interface, vlan_id);
        let resolution = inspector.resolve(&name);
        debug!(interface = %name, ?resolution, "resolved candidate subinterface");

        if !resolution.exists {
            reporter.emit(&Event::Warning(format!(
                "{}: interface not found, skipped",
                name
            )));
            continue;
        }

        match resolution.ipv4 {
            Some(addr) => {
                let subif = ActiveSubinterface { name, addr, vlan_id };
                reporter.emit(&Event::Info(format!("found active subinterface {}", subif)));
                active.push(subif);
            }
            None => {
                reporter.emit(&Event::Warning(format!("{}: no IPv4 address, skipped", name)));
            }
        }
    }

    if active.is_empty() {
        return Err(DiscoveryError::NoActiveInterfaces {
            base_interface: config.base_interface.clone(),
            vlan_ids: config.vlan_ids.clone(),
        });
    }

    Ok(active)
}
