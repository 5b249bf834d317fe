pub mod subinterface;
pub mod vlan;
