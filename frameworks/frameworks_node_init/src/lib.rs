//! Frameworks Layer: Node Initialization
//!
//! Provides the process plumbing around the numeric core: command-line and
//! config-file settings, network parameter selection, signal handling and the
//! startup/shutdown sequence of the `noded` binary.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line parsing with clap
//! - **[`settings`](settings/index.html)**: Single- and multi-value setting maps,
//!   config file reading, soft-set helpers
//! - **[`params`](params/index.html)**: Parameter interaction rules
//! - **[`chain_params`](chain_params/index.html)**: Per-network constants,
//!   including the proof-of-work limit
//! - **[`shutdown`](shutdown/index.html)**: Shutdown flags, signal handlers and the
//!   shutdown monitor thread
//! - **[`init`](init/index.html)**: The startup sequence
//!
//! ## Initialization Sequence
//!
//! 1. Parse arguments, resolve the data directory, read the config file
//! 2. Select the network (main, testnet, regtest)
//! 3. Start the shutdown monitor
//! 4. Restrict the umask, install signal handlers, apply parameter interactions
//! 5. Block until shutdown is requested (SIGTERM/SIGINT), then tear down
//!
//! ## See Also
//!
//! - [`infrastructure_bignum_encoding`](../infrastructure_bignum_encoding/index.html): compact target encoding
//! - [`usecases_script`](../usecases_script/index.html): script builder

pub mod args;
pub mod chain_params;
pub mod error;
pub mod init;
pub mod params;
pub mod settings;
pub mod shutdown;

pub use args::NodeArgs;
pub use chain_params::{ChainParams, Network};
pub use error::InitError;
pub use init::{app_init, app_init_main, coinbase_flags, prepare, NodeContext};
pub use params::apply_interactions;
pub use settings::Settings;
pub use shutdown::{
    install_signal_handlers, shutdown_requested, start_shutdown, take_reopen_log_request,
    ShutdownMonitor,
};
