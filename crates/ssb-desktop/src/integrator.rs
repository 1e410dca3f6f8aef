//! Install/uninstall lifecycle for SSB launcher entries.
//!
//! `install` is fail-loud: any IO, network, or image error propagates to the
//! caller and may leave partial state behind. `uninstall` is the opposite: it
//! never fails, removing whatever exists and reporting problems as
//! diagnostics. Both recompute paths from the same derivation so uninstall
//! always finds what install wrote.

use crate::config::DesktopConfig;
use crate::desktop_entry::{quote_exec_arg, DesktopEntry};
use crate::error::{Result, SsbError};
use crate::icon::{self, IconSource, ICON_SIZE};
use crate::ssb::SiteSpecificBrowser;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

/// Result of an uninstall pass.
///
/// Uninstall never raises; removals that fail for reasons other than absence
/// are reported here and logged.
#[derive(Debug, Clone, Default)]
pub struct UninstallOutcome {
    /// Whether the launcher descriptor was removed.
    pub entry_removed: bool,
    /// Whether the private data directory was removed.
    pub dir_removed: bool,
    /// Non-fatal problems encountered (e.g. permission denied).
    pub issues: Vec<String>,
}

impl UninstallOutcome {
    /// True when no removal ran into an unexpected failure.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Integrates SSBs with the application launcher.
pub struct DesktopIntegrator {
    config: DesktopConfig,
    icons: Arc<dyn IconSource>,
    http: reqwest::Client,
}

impl DesktopIntegrator {
    /// Create an integrator over the given paths and icon provider.
    pub fn new(config: DesktopConfig, icons: Arc<dyn IconSource>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            config,
            icons,
            http,
        })
    }

    /// Launcher descriptor filename for an SSB.
    ///
    /// Single source of truth for the derivation; install and uninstall both
    /// go through here so they always agree on the file they target.
    fn desktop_file_name(ssb: &SiteSpecificBrowser) -> String {
        format!("floorp-{}-{}.desktop", ssb.name, ssb.id)
    }

    /// Full path of the launcher descriptor for an SSB.
    pub fn desktop_entry_path(&self, ssb: &SiteSpecificBrowser) -> PathBuf {
        self.config.launcher_dir.join(Self::desktop_file_name(ssb))
    }

    /// Whether a launcher descriptor currently exists for this SSB.
    pub fn is_installed(&self, ssb: &SiteSpecificBrowser) -> bool {
        self.desktop_entry_path(ssb).exists()
    }

    /// Install an SSB: create its data directory, persist its icon, and write
    /// a launcher descriptor.
    ///
    /// Re-running converges to the same on-disk state. A missing source icon
    /// is not an error; the descriptor simply omits its `Icon=` key.
    pub async fn install(&self, ssb: &SiteSpecificBrowser) -> Result<()> {
        let dir = self.config.ssb_dir(&ssb.id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| SsbError::io_with_path(e, dir.clone()))?;

        let icon_path = match self.icons.icon_for(&ssb.id, ICON_SIZE).await? {
            Some(descriptor) => {
                let loaded = icon::load_image(&self.http, &descriptor.src).await?;
                let path = self.config.icon_path(&ssb.id);
                icon::save_icon(&loaded, ICON_SIZE, ICON_SIZE, &path)?;
                Some(path)
            }
            None => {
                // TODO: ship a bundled default icon for SSBs without one.
                debug!("No source icon for SSB {}", ssb.id);
                None
            }
        };

        fs::create_dir_all(&self.config.launcher_dir)
            .await
            .map_err(|e| SsbError::io_with_path(e, self.config.launcher_dir.clone()))?;

        let exec = format!(
            "{} --profile {} --start-ssb {}",
            quote_exec_arg(&self.config.browser_binary.display().to_string()),
            quote_exec_arg(&self.config.profile_root.display().to_string()),
            quote_exec_arg(&ssb.id),
        );

        let mut builder = DesktopEntry::builder()
            .name(&ssb.name)
            .exec(exec)
            .terminal(false);
        if let Some(ref path) = icon_path {
            builder = builder.icon(path.display().to_string());
        }
        let entry = builder.build();

        let entry_path = self.desktop_entry_path(ssb);
        fs::write(&entry_path, entry.render())
            .await
            .map_err(|e| SsbError::io_with_path(e, entry_path.clone()))?;

        info!(
            "Installed launcher entry for SSB {} at {:?} (icon: {})",
            ssb.id,
            entry_path,
            icon_path.is_some()
        );

        Ok(())
    }

    /// Uninstall an SSB: remove its launcher descriptor and its data
    /// directory.
    ///
    /// Safe to call at any point of the lifecycle, including after a failed or
    /// partial install and repeatedly. Each removal is attempted regardless of
    /// the other's outcome.
    pub async fn uninstall(&self, ssb: &SiteSpecificBrowser) -> UninstallOutcome {
        let mut outcome = UninstallOutcome::default();

        let entry_path = self.desktop_entry_path(ssb);
        match fs::remove_file(&entry_path).await {
            Ok(()) => {
                debug!("Removed launcher entry {:?}", entry_path);
                outcome.entry_removed = true;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Launcher entry {:?} already absent", entry_path);
            }
            Err(e) => {
                warn!("Failed to remove launcher entry {:?}: {}", entry_path, e);
                outcome
                    .issues
                    .push(format!("launcher entry {}: {}", entry_path.display(), e));
            }
        }

        let dir = self.config.ssb_dir(&ssb.id);
        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                debug!("Removed SSB directory {:?}", dir);
                outcome.dir_removed = true;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("SSB directory {:?} already absent", dir);
            }
            Err(e) => {
                warn!("Failed to remove SSB directory {:?}: {}", dir, e);
                outcome
                    .issues
                    .push(format!("data directory {}: {}", dir.display(), e));
            }
        }

        info!(
            "Uninstalled SSB {}: entry_removed={}, dir_removed={}",
            ssb.id, outcome.entry_removed, outcome.dir_removed
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_file_name_derivation() {
        let ssb = SiteSpecificBrowser::new("abc123", "Example");
        assert_eq!(
            DesktopIntegrator::desktop_file_name(&ssb),
            "floorp-Example-abc123.desktop"
        );

        // Name is used verbatim, spaces included.
        let ssb = SiteSpecificBrowser::new("x1", "My App");
        assert_eq!(
            DesktopIntegrator::desktop_file_name(&ssb),
            "floorp-My App-x1.desktop"
        );
    }

    #[test]
    fn test_outcome_is_clean() {
        let mut outcome = UninstallOutcome::default();
        assert!(outcome.is_clean());

        outcome.issues.push("launcher entry /x: denied".into());
        assert!(!outcome.is_clean());
    }
}
