//! New command - scaffold a starter single-page app
//!
//! # Usage
//!
//! ```bash
//! sprout new my-app          # base starter: Redux + Tailwind
//! sprout new my-app --full   # adds router, layout, placeholder pages,
//!                            # then starts the dev server in the browser
//! sprout new                 # prompts for the project name
//! ```

mod internal;

use anyhow::Result;

/// Execute the new command
pub fn execute(name: Option<String>, full: bool) -> Result<()> {
    internal::run(name, full)
}
