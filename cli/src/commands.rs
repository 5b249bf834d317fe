pub mod sweep;

use std::path::PathBuf;

use clap::Parser;
use vlansweep_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "vlansweep")]
#[command(about = "Verifies inter-VLAN reachability from every local VLAN subinterface.")]
pub struct CommandLine {
    /// File with one probe target per line; blank lines and '#' comments are skipped
    pub target_file: PathBuf,

    /// Base interface the VLAN subinterfaces hang off
    #[arg(short, long)]
    pub interface: Option<String>,

    /// Comma-separated VLAN ids to sweep, in order
    #[arg(long, value_delimiter = ',')]
    pub vlans: Option<Vec<u16>>,

    /// Echo requests sent per probe pair
    #[arg(short, long)]
    pub count: Option<u32>,

    /// Log file, truncated at startup
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl CommandLine {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    #[cfg(test)]
    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Defaults overridden by whatever flags were given.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        if let Some(interface) = &self.interface {
            cfg.base_interface = interface.clone();
        }
        if let Some(vlans) = &self.vlans {
            cfg.vlan_ids = vlans.clone();
        }
        if let Some(count) = self.count {
            cfg.probe_count = count;
        }
        if let Some(log) = &self.log {
            cfg.log_path = log.clone();
        }
        cfg
    }
}
