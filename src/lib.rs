pub mod dev_server;
pub mod environment;
pub mod error;
pub mod project;
pub mod scaffold;
pub mod templates;
pub mod toolchain;

// Re-export commonly used types
pub use environment::Environment;
pub use error::ScaffoldError;
pub use project::ProjectRoot;
pub use scaffold::{Scaffold, Variant};
