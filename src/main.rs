use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold Vite + React single-page apps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new single-page app
    New {
        /// Project name (prompted for when omitted)
        name: Option<String>,

        /// Full starter: router, layout, placeholder pages, dev server launch
        #[arg(long)]
        full: bool,
    },

    /// Check that the host toolchain can run a scaffold
    Doctor {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name, full } => {
            commands::new::execute(name, full)?;
        }
        Commands::Doctor { json } => {
            let exit_code = commands::doctor::execute(json)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
