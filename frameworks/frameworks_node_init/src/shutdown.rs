//! Shutdown and Signal Handling Module
//!
//! Signal handlers only flip atomic flags. A monitor thread polls the
//! shutdown flag and returns once it is raised (or once it is interrupted
//! because startup failed).
//!
//! | signal           | effect                          |
//! |------------------|---------------------------------|
//! | SIGTERM, SIGINT  | request shutdown                |
//! | SIGHUP           | request log file reopen         |

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::InitError;

/// How often the monitor checks the shutdown flag
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);
static REOPEN_LOG_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Ask the node to shut down
pub fn start_shutdown() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Release);
}

pub fn shutdown_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::Acquire)
}

/// Lower the shutdown flag again
pub fn clear_shutdown_request() {
    SHUTDOWN_REQUESTED.store(false, Ordering::Release);
}

/// Consume a pending log reopen request
pub fn take_reopen_log_request() -> bool {
    REOPEN_LOG_REQUESTED.swap(false, Ordering::AcqRel)
}

#[cfg(unix)]
extern "C" fn handle_sigterm(_: libc::c_int) {
    SHUTDOWN_REQUESTED.store(true, Ordering::Release);
}

#[cfg(unix)]
extern "C" fn handle_sighup(_: libc::c_int) {
    REOPEN_LOG_REQUESTED.store(true, Ordering::Release);
}

#[cfg(unix)]
unsafe fn install_handler(
    signal: libc::c_int,
    handler: extern "C" fn(libc::c_int),
) -> Result<(), InitError> {
    let mut sa: libc::sigaction = std::mem::zeroed();
    sa.sa_sigaction = handler as libc::sighandler_t;
    sa.sa_flags = 0;
    libc::sigemptyset(&mut sa.sa_mask);

    if libc::sigaction(signal, &sa, std::ptr::null_mut()) != 0 {
        return Err(InitError::SignalHandler { signal });
    }
    Ok(())
}

/// Install the SIGTERM, SIGINT and SIGHUP handlers
#[cfg(unix)]
pub fn install_signal_handlers() -> Result<(), InitError> {
    // SAFETY: the handlers only store to atomics
    unsafe {
        install_handler(libc::SIGTERM, handle_sigterm)?;
        install_handler(libc::SIGINT, handle_sigterm)?;
        install_handler(libc::SIGHUP, handle_sighup)?;
    }
    debug!("signal handlers installed");
    Ok(())
}

#[cfg(not(unix))]
pub fn install_signal_handlers() -> Result<(), InitError> {
    Ok(())
}

/// Background thread waiting for a shutdown request
#[derive(Debug)]
pub struct ShutdownMonitor {
    interrupted: Arc<AtomicBool>,
    handle: JoinHandle<bool>,
}

impl ShutdownMonitor {
    pub fn spawn() -> Result<Self, InitError> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupted);
        let handle = thread::Builder::new()
            .name("shutdown-monitor".to_string())
            .spawn(move || monitor_loop(&flag))
            .map_err(InitError::ThreadSpawn)?;
        Ok(Self {
            interrupted,
            handle,
        })
    }

    /// Make the monitor return without a shutdown request
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::Release);
    }

    /// Wait for the monitor. `true` when it saw a shutdown request.
    pub fn join(self) -> Result<bool, InitError> {
        self.handle.join().map_err(|_| InitError::MonitorPanicked)
    }
}

fn monitor_loop(interrupted: &AtomicBool) -> bool {
    loop {
        if shutdown_requested() {
            info!("shutdown requested");
            return true;
        }
        if interrupted.load(Ordering::Acquire) {
            debug!("shutdown monitor interrupted");
            return false;
        }
        if take_reopen_log_request() {
            info!("SIGHUP received, reopening log");
        }
        thread::sleep(POLL_INTERVAL);
    }
}
