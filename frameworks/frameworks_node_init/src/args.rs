//! Command-Line Argument Parsing Module
//!
//! Typed options go through clap. Everything after `--` is kept verbatim as
//! `-name[=value]` settings and handed to [`Settings::parse_parameters`].

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::chain_params::Network;
use crate::error::InitError;
use crate::settings::Settings;

/// Config file name looked up inside the data directory
pub const DEFAULT_CONFIG_FILE: &str = "noded.conf";

/// Node daemon command-line arguments
#[derive(Parser, Debug)]
#[command(name = "noded")]
#[command(about = "Consensus node daemon")]
pub struct NodeArgs {
    /// Data directory (defaults to $HOME/.noded)
    #[arg(long)]
    pub datadir: Option<PathBuf>,

    /// Config file, relative paths resolve against the data directory
    #[arg(long)]
    pub conf: Option<PathBuf>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    /// Remaining `-name[=value]` settings (everything after --)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub settings: Vec<String>,
}

impl NodeArgs {
    /// Resolve the data directory
    pub fn data_dir(&self) -> PathBuf {
        match &self.datadir {
            Some(dir) => dir.clone(),
            None => default_data_dir(),
        }
    }

    /// Resolve the config file path against `data_dir`
    pub fn config_path(&self, data_dir: &Path) -> PathBuf {
        match &self.conf {
            Some(conf) if conf.is_absolute() => conf.clone(),
            Some(conf) => data_dir.join(conf),
            None => data_dir.join(DEFAULT_CONFIG_FILE),
        }
    }

    /// Command-line settings, typed flags included
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::parse_parameters(&self.settings);
        if self.testnet {
            settings.set("-testnet", "1");
        }
        if self.regtest {
            settings.set("-regtest", "1");
        }
        settings
    }

    /// Network chosen by the typed flags and the merged settings
    pub fn network(&self, settings: &Settings) -> Result<Network, InitError> {
        Network::select(
            self.testnet || settings.get_bool_arg("-testnet", false),
            self.regtest || settings.get_bool_arg("-regtest", false),
        )
    }
}

fn default_data_dir() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(".noded"),
        _ => PathBuf::from("/").join(".noded"),
    }
}
