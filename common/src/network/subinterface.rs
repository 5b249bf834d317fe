use std::fmt;
use std::net::Ipv4Addr;

/// A VLAN subinterface that exists on this host and holds an IPv4 address.
///
/// Instances are only ever created by discovery; an interface that is missing
/// or unaddressed never becomes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSubinterface {
    /// Kernel interface name, `base.vlanID`.
    pub name: String,
    /// The address probes egress from.
    pub addr: Ipv4Addr,
    pub vlan_id: u16,
}

/// Derives the kernel name of a VLAN subinterface from its base interface.
pub fn subinterface_name(base: &str, vlan_id: u16) -> String {
    format!("{}.{}", base, vlan_id)
}

impl fmt::Display for ActiveSubinterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.addr)
    }
}
