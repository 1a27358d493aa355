//! Startup Sequence
//!
//! [`app_init`] is the whole lifetime of the daemon: resolve settings, start
//! the shutdown monitor, run [`app_init_main`], then block until shutdown is
//! requested. If [`app_init_main`] fails the monitor is interrupted instead
//! and the error is returned.

use std::path::PathBuf;

use infrastructure_bignum_encoding::TextCodec;
use tracing::{debug, error, info};
use usecases_script::Script;

use crate::args::NodeArgs;
use crate::chain_params::ChainParams;
use crate::error::InitError;
use crate::params::apply_interactions;
use crate::settings::Settings;
use crate::shutdown::{install_signal_handlers, ShutdownMonitor};

/// Marker pushed into coinbase scripts to signal BIP16 support
pub const P2SH_COINBASE_MARKER: &[u8] = b"/P2SH/";

/// Everything resolved before the node starts
#[derive(Debug, Clone)]
pub struct NodeContext {
    pub settings: Settings,
    pub chain: ChainParams,
    pub data_dir: PathBuf,
}

/// Resolve the data directory, merge the config file and select the network
pub fn prepare(args: &NodeArgs) -> Result<NodeContext, InitError> {
    let data_dir = args.data_dir();
    if !data_dir.is_dir() {
        return Err(InitError::DataDirMissing(data_dir));
    }

    let mut settings = args.to_settings();
    settings.read_config_file(&args.config_path(&data_dir))?;

    let network = args.network(&settings)?;
    settings.soft_set_bool_arg("-server", true);

    let chain = ChainParams::for_network(network);
    info!(
        network = network.name(),
        data_dir = %chain.data_dir(&data_dir).display(),
        "settings loaded"
    );
    Ok(NodeContext {
        settings,
        chain,
        data_dir,
    })
}

/// Script the miner places in every coinbase
pub fn coinbase_flags() -> Result<Script, InitError> {
    let mut script = Script::new();
    script.push_slice(P2SH_COINBASE_MARKER)?;
    Ok(script)
}

/// Process-level setup once settings are known
pub fn app_init_main(ctx: &mut NodeContext) -> Result<Script, InitError> {
    restrict_umask();
    install_signal_handlers()?;
    apply_interactions(&mut ctx.settings);

    info!(
        network = ctx.chain.network.name(),
        port = ctx.chain.default_port,
        pow_limit = %TextCodec::to_hex(&ctx.chain.pow_limit),
        bits = format_args!("{:#010x}", ctx.chain.pow_limit_compact()),
        "chain parameters"
    );

    let flags = coinbase_flags()?;
    debug!(len = flags.len(), "coinbase flags");
    Ok(flags)
}

#[cfg(unix)]
fn restrict_umask() {
    // SAFETY: umask only changes the process file creation mask
    unsafe {
        libc::umask(0o077);
    }
}

#[cfg(not(unix))]
fn restrict_umask() {}

/// Run the node until shutdown is requested
pub fn app_init(args: &NodeArgs) -> Result<(), InitError> {
    let mut ctx = prepare(args)?;

    let monitor = ShutdownMonitor::spawn()?;
    let result = app_init_main(&mut ctx);
    if let Err(err) = &result {
        error!("initialization failed: {}", err);
        monitor.interrupt();
    }
    monitor.join()?;

    info!("shutdown complete");
    result.map(|_| ())
}
