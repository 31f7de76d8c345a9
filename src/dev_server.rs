//! Dev-server launch and readiness probing.
//!
//! The server is spawned detached and outlives the scaffolder. Readiness is
//! an HTTP poll against the pinned port, bounded by a deadline, instead of a
//! fixed sleep before opening the browser.

use anyhow::{Context, Result};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::ScaffoldError;
use crate::toolchain;

/// Matches the port pinned in the generated vite.config.js.
pub const PORT: u16 = 3000;

const POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn url() -> String {
    format!("http://localhost:{PORT}/")
}

/// Spawn `npm run dev` detached in the project root.
pub fn start(project_root: &Path) -> Result<(), ScaffoldError> {
    toolchain::spawn_detached("npm", &["run", "dev"], project_root)
}

/// Poll the dev-server URL until it answers or `deadline` elapses.
pub fn wait_until_ready(deadline: Duration) -> bool {
    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
    {
        Ok(c) => c,
        Err(_) => return false,
    };

    let started = Instant::now();
    while started.elapsed() < deadline {
        if client
            .get(url())
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
        {
            return true;
        }
        thread::sleep(POLL_INTERVAL);
    }
    false
}

/// Open the user's default browser at the dev-server URL.
pub fn open_browser() -> Result<()> {
    open::that(url()).with_context(|| format!("Failed to open browser at {}", url()))
}
