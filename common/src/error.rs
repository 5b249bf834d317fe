use std::path::PathBuf;

use thiserror::Error;

/// Terminal discovery failures. Individual VLANs that fail to resolve are
/// skipped with a warning, not errors; this only fires when nothing survives.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no active VLAN subinterface found on '{base_interface}' for VLANs {vlan_ids:?}")]
    NoActiveInterfaces {
        base_interface: String,
        vlan_ids: Vec<u16>,
    },
}

/// Terminal target-file failures, checked before any probe is sent.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("target file '{0}' not found or not readable")]
    NotFound(PathBuf),
    #[error("target file '{0}' contains no usable targets")]
    Empty(PathBuf),
    #[error("failed to read target file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
