//! The reachability probe itself, behind a capability trait so the engine can
//! be exercised without sending packets or holding raw-socket privileges.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::warn;
use vlansweep_common::network::subinterface::ActiveSubinterface;
use vlansweep_common::report::Outcome;

/// Sends a bounded reachability probe from a specific local subinterface.
#[async_trait]
pub trait ProbeService: Send + Sync {
    async fn probe(&self, subif: &ActiveSubinterface, target: &str, count: u32) -> Outcome;
}

/// Production prober: the system `ping`, bound to the source subinterface.
/// Exit status zero is the one and only definition of reachable.
#[derive(Debug, Default)]
pub struct SystemPinger;

impl SystemPinger {
    pub fn new() -> Self {
        Self
    }

    fn command(subif: &ActiveSubinterface, target: &str, count: u32) -> Command {
        let mut cmd = Command::new("ping");
        // Linux binds to the interface by name; the BSD ping on macOS binds
        // to a source address instead.
        #[cfg(target_os = "linux")]
        cmd.arg("-I").arg(&subif.name);
        #[cfg(target_os = "macos")]
        cmd.arg("-S").arg(subif.addr.to_string());

        cmd.arg("-c").arg(count.to_string()).arg(target);
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        cmd
    }
}

#[async_trait]
impl ProbeService for SystemPinger {
    async fn probe(&self, subif: &ActiveSubinterface, target: &str, count: u32) -> Outcome {
        match Self::command(subif, target, count).status().await {
            Ok(status) if status.success() => Outcome::Success,
            Ok(_) => Outcome::Failed,
            Err(e) => {
                warn!(interface = %subif.name, target, "failed to spawn ping: {}", e);
                Outcome::Failed
            }
        }
    }
}
