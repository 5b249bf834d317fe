//! The discovery-and-probing engine behind `vlansweep`.
//!
//! The pipeline is strictly sequential: [`discovery`] works out which VLAN
//! subinterfaces are alive, [`targets`] loads the destination list, and
//! [`sweep`] drives the cross-product of the two through a [`probe::ProbeService`].
//! The OS-facing pieces (interface inspection, the actual ping) sit behind
//! traits so the whole pipeline runs against fakes in tests.

pub mod discovery;
pub mod inspect;
pub mod probe;
pub mod sweep;
pub mod targets;
