//! Scaffold pipeline: bootstrap → install → configure → write sources.
//!
//! Fail-fast and non-resumable: the first error aborts the remaining steps
//! and leaves the partial project on disk. Re-running against an existing
//! project directory fails inside the bootstrap tool (it refuses to reuse
//! the target directory).

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dev_server;
use crate::error::ScaffoldError;
use crate::project::ProjectRoot;
use crate::templates;
use crate::toolchain;

const BASE_PACKAGES: &[&str] = &[
    "react-icons",
    "react-redux",
    "@reduxjs/toolkit",
    "tailwindcss",
    "postcss",
    "autoprefixer",
];

const FULL_PACKAGES: &[&str] = &["react-router-dom", "react-spinners"];

const DEV_SERVER_DEADLINE: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Base starter: Redux store, Tailwind, empty root component.
    Base,
    /// Adds routing, layout and placeholder components, then launches the
    /// dev server and opens the browser.
    Full,
}

pub struct Scaffold {
    base_dir: PathBuf,
    variant: Variant,
}

impl Scaffold {
    pub fn new(base_dir: impl AsRef<Path>, variant: Variant) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            variant,
        }
    }

    /// Run the full pipeline for `name`.
    pub fn run(&self, name: &str) -> Result<()> {
        toolchain::require("npm")?;
        toolchain::require("npx")?;

        println!("🌱 Creating Vite React app: {name}");
        self.bootstrap(name)?;

        let root = ProjectRoot::resolve(&self.base_dir, name)?;

        println!("📦 Installing dependencies...");
        self.install_dependencies(&root)?;

        println!("🎨 Initializing Tailwind CSS...");
        toolchain::run("npx", &["tailwindcss", "init", "-p"], root.path())?;

        self.write_project_files(&root, name)?;

        println!("\n✨ React app setup complete!");

        if self.variant == Variant::Full {
            self.launch_dev_server(&root)?;
        } else {
            println!("\nNext steps:");
            println!("  1. cd {name}");
            println!("  2. npm run dev");
        }

        Ok(())
    }

    /// Step 1: delegate project creation to the Vite scaffolding tool.
    /// The extra `--` forwards the template selector through npm.
    fn bootstrap(&self, name: &str) -> Result<(), ScaffoldError> {
        toolchain::run(
            "npm",
            &["create", "vite@latest", name, "--", "--template", "react"],
            &self.base_dir,
        )
    }

    fn install_dependencies(&self, root: &ProjectRoot) -> Result<(), ScaffoldError> {
        let mut args = vec!["install"];
        args.extend_from_slice(BASE_PACKAGES);
        if self.variant == Variant::Full {
            args.extend_from_slice(FULL_PACKAGES);
        }
        toolchain::run("npm", &args, root.path())
    }

    /// Steps 5–9: overwrite generated defaults with the fixed catalog.
    /// Every write fully replaces whatever the bootstrap tool produced.
    pub fn write_project_files(&self, root: &ProjectRoot, name: &str) -> Result<(), ScaffoldError> {
        root.write("tailwind.config.js", templates::TAILWIND_CONFIG)?;
        println!("  ✓ Updated tailwind.config.js");

        root.write("vite.config.js", templates::VITE_CONFIG)?;
        println!("  ✓ Updated vite.config.js");

        if root.remove_if_present("src/App.css")? {
            println!("  ✓ Removed src/App.css");
        }

        match self.variant {
            Variant::Base => root.write("src/App.jsx", templates::APP_JSX)?,
            Variant::Full => root.write("src/App.jsx", templates::FULL_APP_JSX)?,
        }
        println!("  ✓ Rewritten src/App.jsx");

        root.write("src/index.css", templates::INDEX_CSS)?;
        println!("  ✓ Updated src/index.css");

        root.write("src/store.js", templates::STORE_JS)?;
        println!("  ✓ Created src/store.js");

        root.write("src/main.jsx", templates::MAIN_JSX)?;
        println!("  ✓ Updated src/main.jsx");

        root.write("index.html", &templates::index_html(name))?;
        println!("  ✓ Updated index.html");

        match self.variant {
            Variant::Base => {
                root.write("README.md", &templates::readme(name))?;
            }
            Variant::Full => {
                self.write_full_components(root)?;
                root.write("README.md", templates::FULL_README)?;
                if root.remove_if_present("src/assets/react.svg")? {
                    println!("  ✓ Removed src/assets/react.svg");
                }
            }
        }
        println!("  ✓ Updated README.md");

        Ok(())
    }

    fn write_full_components(&self, root: &ProjectRoot) -> Result<(), ScaffoldError> {
        root.mkdir("src/pages")?;
        root.mkdir("src/layouts")?;
        root.mkdir("src/components")?;

        root.write("src/pages/Home.jsx", templates::HOME_JSX)?;
        root.write("src/pages/NotFound.jsx", templates::NOT_FOUND_JSX)?;
        root.write("src/layouts/MainLayout.jsx", templates::MAIN_LAYOUT_JSX)?;
        root.write("src/components/Navbar.jsx", templates::NAVBAR_JSX)?;
        root.write("src/components/Footer.jsx", templates::FOOTER_JSX)?;
        println!("  ✓ Created pages, layout and component placeholders");

        Ok(())
    }

    /// Step 10: spawn-and-forget the dev server, then poll it before
    /// opening the browser. A server that never answers is a warning, not
    /// a failure: it was spawned and keeps running either way.
    fn launch_dev_server(&self, root: &ProjectRoot) -> Result<()> {
        println!("\n⏳ Starting dev server...");
        dev_server::start(root.path())?;

        if dev_server::wait_until_ready(DEV_SERVER_DEADLINE) {
            println!("  ✓ Dev server ready at {}", dev_server::url());
            if let Err(e) = dev_server::open_browser() {
                eprintln!("  ⚠️  {e}");
            }
        } else {
            eprintln!(
                "  ⚠️  Dev server did not answer within {}s; open {} manually",
                DEV_SERVER_DEADLINE.as_secs(),
                dev_server::url()
            );
        }

        Ok(())
    }
}
