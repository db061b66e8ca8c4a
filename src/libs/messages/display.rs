//! Display implementation for application messages.
//!
//! All user-facing text lives here so wording stays consistent between
//! console and tracing output.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CHECK MESSAGES ===
            Message::InstalledVersion { app_name, version } => format!("Installed {} version: {}", app_name, version),
            Message::UpdateAvailable { latest, current } => {
                format!("Update available\n  New version: {}\n  Current version: {}", latest, current)
            }
            Message::LatestVersionInstalled => "You are running the latest version!".to_string(),

            // === INSTALL MESSAGES ===
            Message::Installing => "Installing...".to_string(),
            Message::UpdateCompleted { app_name } => format!("{} successfully updated!", app_name),
            Message::InstallerRetained(path) => format!("The installer was kept at {}", path),
        };
        write!(f, "{}", text)
    }
}
