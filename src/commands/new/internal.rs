//! Internal implementation for the new command
//!
//! Resolves the project name (argument or prompt), picks the variant, and
//! hands off to the scaffold pipeline rooted at the invocation directory.

use anyhow::{bail, Result};
use std::env;
use std::io::{self, Write};

use sprout::{Scaffold, Variant};

pub fn run(name: Option<String>, full: bool) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => prompt_project_name()?,
    };
    validate_name(&name)?;

    let variant = if full { Variant::Full } else { Variant::Base };
    let base_dir = env::current_dir()?;

    Scaffold::new(base_dir, variant).run(&name)
}

fn prompt_project_name() -> Result<String> {
    print!("Enter your project name: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Project name cannot be empty");
    }
    Ok(())
}
