//! Interface inspection: does a named interface exist, and what IPv4 address
//! does it hold?

use std::net::Ipv4Addr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

/// What the OS knows about a named interface. A missing interface is a normal
/// answer here, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub exists: bool,
    pub ipv4: Option<Ipv4Addr>,
}

impl Resolution {
    pub const ABSENT: Resolution = Resolution {
        exists: false,
        ipv4: None,
    };
}

/// How to pick among multiple IPv4 addresses on one interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressPolicy {
    /// First address in kernel order. Matches the historical behavior.
    #[default]
    First,
    /// First RFC 1918 address, falling back to kernel order.
    PreferPrivate,
}

/// OS interface-inspection capability. Swapped out for a fake in tests.
pub trait InterfaceInspector {
    fn resolve(&self, name: &str) -> Resolution;
}

/// Production inspector backed by the kernel's interface table.
#[derive(Debug, Default)]
pub struct SystemInspector {
    policy: AddressPolicy,
}

impl SystemInspector {
    pub fn new(policy: AddressPolicy) -> Self {
        Self { policy }
    }
}

impl InterfaceInspector for SystemInspector {
    fn resolve(&self, name: &str) -> Resolution {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        match interfaces.iter().find(|iface| iface.name == name) {
            Some(iface) => Resolution {
                exists: true,
                ipv4: select_ipv4(iface, self.policy),
            },
            None => Resolution::ABSENT,
        }
    }
}

fn select_ipv4(iface: &NetworkInterface, policy: AddressPolicy) -> Option<Ipv4Addr> {
    let addrs: Vec<Ipv4Addr> = iface
        .ips
        .iter()
        .filter_map(|net| match net {
            IpNetwork::V4(v4) => Some(v4.ip()),
            IpNetwork::V6(_) => None,
        })
        .collect();

    match policy {
        AddressPolicy::First => addrs.first().copied(),
        AddressPolicy::PreferPrivate => addrs
            .iter()
            .find(|addr| addr.is_private())
            .or_else(|| addrs.first())
            .copied(),
    }
}
