//! ssb-desktop - Application-launcher integration for site-specific browsers.
//!
//! A site-specific browser (SSB) is a web app pinned to run in its own browser
//! window. This crate makes an SSB launchable from a freedesktop.org-style
//! application menu: it maintains a private per-SSB data directory under the
//! browser profile, a 128x128 PNG icon inside it, and a `.desktop` descriptor
//! in the user's launcher directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ssb_desktop::{DesktopConfig, DesktopIntegrator, SiteSpecificBrowser};
//!
//! #[tokio::main]
//! async fn main() -> ssb_desktop::Result<()> {
//!     let config = DesktopConfig::from_environment("/home/user/.floorp/profile")?;
//!     let integrator = DesktopIntegrator::new(config, Arc::new(registry_icons))?;
//!
//!     let ssb = SiteSpecificBrowser::new("abc123", "Example");
//!     integrator.install(&ssb).await?;
//!
//!     // Later; never fails, reports problems as diagnostics.
//!     let outcome = integrator.uninstall(&ssb).await;
//!     assert!(outcome.is_clean());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod desktop_entry;
pub mod error;
pub mod icon;
pub mod integrator;
pub mod ssb;

// Re-export commonly used types
pub use config::{DesktopConfig, DEFAULT_BROWSER_BINARY};
pub use desktop_entry::{DesktopEntry, DesktopEntryBuilder};
pub use error::{Result, SsbError};
pub use icon::{IconDescriptor, IconSource, ICON_SIZE};
pub use integrator::{DesktopIntegrator, UninstallOutcome};
pub use ssb::SiteSpecificBrowser;
