use anyhow::Result;
use colored::Colorize;

use sprout::environment::{Environment, REQUIRED_TOOLS};

pub fn execute(json_output: bool) -> Result<i32> {
    let env = Environment::detect()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        println!("🏥 Checking host toolchain...");
        println!("  OS: {} ({})", env.os, env.arch);

        let mut names: Vec<&String> = env.tools.keys().collect();
        names.sort();
        for name in names {
            let info = &env.tools[name];
            let required = REQUIRED_TOOLS.contains(&name.as_str());
            if info.available {
                let version = info.version.as_deref().unwrap_or("detected");
                println!("  {} {}: {}", "✓".green(), name, version);
            } else if required {
                println!("  {} {}: not found (required)", "✗".red(), name);
            } else {
                println!("  {} {}: not found", "-".yellow(), name);
            }
        }
    }

    if env.has_required() {
        Ok(0)
    } else {
        if !json_output {
            eprintln!(
                "\nMissing required tools: {}. Install Node.js to get npm and npx.",
                env.missing_required().join(", ")
            );
        }
        Ok(1)
    }
}
