//! Configuration for desktop integration.
//!
//! The profile root and launcher directory are injected explicitly rather than
//! read from ambient globals, so the integrator can be pointed at temporary
//! directories in tests.

use crate::error::{Result, SsbError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Browser binary used in generated `Exec=` lines when none is configured.
pub const DEFAULT_BROWSER_BINARY: &str = "/usr/bin/floorp";

/// Paths the integrator operates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Active browser profile root. Per-SSB data lives under `<root>/ssb/<id>/`.
    pub profile_root: PathBuf,
    /// Directory holding `.desktop` launcher descriptors.
    pub launcher_dir: PathBuf,
    /// Browser executable invoked by generated launcher entries.
    pub browser_binary: PathBuf,
}

impl DesktopConfig {
    /// Create a configuration with an explicit launcher directory.
    pub fn new(profile_root: impl Into<PathBuf>, launcher_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_root: profile_root.into(),
            launcher_dir: launcher_dir.into(),
            browser_binary: PathBuf::from(DEFAULT_BROWSER_BINARY),
        }
    }

    /// Create a configuration using the conventional per-user launcher
    /// directory (`~/.local/share/applications`).
    pub fn from_environment(profile_root: impl Into<PathBuf>) -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| SsbError::Config {
            message: "Could not determine home directory".to_string(),
        })?;
        let launcher_dir = home.join(".local").join("share").join("applications");
        Ok(Self::new(profile_root, launcher_dir))
    }

    /// Override the browser binary used in `Exec=` lines.
    pub fn with_browser_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.browser_binary = binary.into();
        self
    }

    /// Private data directory for one SSB: `<profile-root>/ssb/<id>/`.
    pub fn ssb_dir(&self, ssb_id: &str) -> PathBuf {
        self.profile_root.join("ssb").join(ssb_id)
    }

    /// Icon path inside an SSB's private directory.
    pub fn icon_path(&self, ssb_id: &str) -> PathBuf {
        self.ssb_dir(ssb_id).join("icon.png")
    }
}
