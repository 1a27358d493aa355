//! Initialization errors

use std::io;
use std::path::PathBuf;

use usecases_script::ScriptError;

/// Errors that abort node startup
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("specified data directory \"{}\" does not exist", .0.display())]
    DataDirMissing(PathBuf),
    #[error("error reading config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid combination of -regtest and -testnet")]
    ConflictingNetworks,
    #[error("failed to install handler for signal {signal}")]
    SignalHandler { signal: i32 },
    #[error("failed to spawn shutdown monitor: {0}")]
    ThreadSpawn(#[source] io::Error),
    #[error("shutdown monitor thread panicked")]
    MonitorPanicked,
    #[error(transparent)]
    Script(#[from] ScriptError),
}
