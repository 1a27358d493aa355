//! Node Daemon Binary Entry Point
//!
//! Parses arguments, installs the tracing subscriber and runs the startup
//! sequence. Exits with status 1 when startup fails.

use std::process;

use clap::Parser;
use frameworks_node_init::{app_init, NodeArgs};

fn main() {
    let args = NodeArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .init();

    if let Err(e) = app_init(&args) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
