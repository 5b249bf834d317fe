/// Best-effort destination VLAN annotation: the third dot-separated component
/// of the address, by site convention the VLAN-carrying octet.
///
/// Purely cosmetic. `None` for anything that does not have a numeric third
/// component (hostnames, IPv6, short addresses); never panics.
pub fn destination_vlan_label(addr: &str) -> Option<u16> {
    addr.split('.').nth(2)?.parse().ok()
}
