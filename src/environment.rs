use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::process::Command;

/// Tools the scaffolder shells out to. A run cannot start without these.
pub const REQUIRED_TOOLS: &[&str] = &["npm", "npx"];

/// Informational only; reported by `doctor` but not required.
const OPTIONAL_TOOLS: &[&str] = &["node", "git"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Environment {
    pub os: String,
    pub arch: String,
    pub tools: HashMap<String, ToolInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolInfo {
    pub available: bool,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl Environment {
    pub fn detect() -> Result<Self> {
        let mut tools = HashMap::new();
        for name in REQUIRED_TOOLS.iter().chain(OPTIONAL_TOOLS.iter()).copied() {
            tools.insert(name.to_string(), probe_tool(name));
        }

        Ok(Environment {
            os: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
            tools,
        })
    }

    pub fn has_required(&self) -> bool {
        REQUIRED_TOOLS
            .iter()
            .all(|name| self.tools.get(*name).map_or(false, |info| info.available))
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_TOOLS
            .iter()
            .filter(|name| !self.tools.get(**name).map_or(false, |info| info.available))
            .copied()
            .collect()
    }
}

fn probe_tool(name: &str) -> ToolInfo {
    let mut info = ToolInfo {
        available: false,
        version: None,
        path: None,
    };

    if let Ok(path) = which::which(name) {
        info.available = true;
        info.path = Some(path.display().to_string());

        if let Ok(output) = Command::new(name).arg("--version").output() {
            let version_str = String::from_utf8_lossy(&output.stdout);
            if !version_str.is_empty() {
                info.version = Some(version_str.lines().next().unwrap_or("").to_string());
            }
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_reports_host() {
        let env = Environment::detect().unwrap();
        assert!(!env.os.is_empty());
        assert!(!env.arch.is_empty());
        for name in REQUIRED_TOOLS {
            assert!(env.tools.contains_key(*name));
        }
    }

    #[test]
    fn test_probe_missing_tool() {
        let info = probe_tool("definitely-not-a-real-program-xyz");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert!(info.path.is_none());
    }

    #[test]
    fn test_missing_required_consistent_with_has_required() {
        let env = Environment::detect().unwrap();
        assert_eq!(env.has_required(), env.missing_required().is_empty());
    }
}
