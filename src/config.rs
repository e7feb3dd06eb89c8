//! Optional settings loaded from checklist.conl

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WIKI_BASE: &str = "https://eldenring.wiki.fextralife.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; EldenRingChecklist/1.0)";

/// Settings as written in the CONL file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    wiki_base: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub wiki_base: String,
    pub user_agent: String,
    /// None leaves the HTTP client's default in place
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl Settings {
    /// Load settings from a CONL file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings: {}", path.display()))
            }
        };
        Self::from_conl(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))
    }

    pub fn from_conl(content: &str) -> Result<Self> {
        let file: SettingsFile = serde_conl::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            wiki_base: file
                .wiki_base
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.wiki_base),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
            timeout: file.timeout_secs.map(Duration::from_secs),
        })
    }
}
