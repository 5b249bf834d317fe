use std::path::PathBuf;

/// Run configuration, built once at startup and passed explicitly into the
/// discoverer and the probe engine. Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Physical interface the VLAN subinterfaces hang off (e.g. `eth0`).
    pub base_interface: String,
    /// VLAN ids to check, in the order they should be swept.
    pub vlan_ids: Vec<u16>,
    /// Echo requests per probe pair.
    pub probe_count: u32,
    /// Plain-text log file, truncated at startup.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_interface: "eth0".to_string(),
            vlan_ids: vec![10, 20, 30, 40],
            probe_count: 3,
            log_path: PathBuf::from("vlansweep.log"),
        }
    }
}
