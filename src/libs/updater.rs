//! Check-download-install pipeline for one product.
//!
//! A run moves through `checking → (up to date | downloading → installing → done)`
//! and never loops. Each step is also exposed on its own so it can be driven
//! and tested in isolation:
//!
//! 1. [`Updater::check`] locates the install, reads its version, asks the
//!    vendor for the latest one and compares them.
//! 2. [`Updater::download`] streams the installer into the download directory.
//! 3. [`Updater::install`] runs it silently and removes it on success.
//!
//! [`Updater::run`] chains the three and prints progress messages. The
//! terminal outcome is returned to the caller, which reports it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use piriform_updater::libs::{
//!     config::Config, product::CCLEANER, progress::ConsoleProgress, system::SystemShell,
//!     transport::HttpTransport, updater::Updater,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::read(None)?;
//! let updater = Updater::new(config, SystemShell, HttpTransport::new()?);
//! let outcome = updater.run(&CCLEANER, &mut ConsoleProgress::new()).await?;
//! # Ok(())
//! # }
//! ```

use super::config::Config;
use super::error::UpdateError;
use super::installed;
use super::messages::Message;
use super::product::Product;
use super::progress::Progress;
use super::remote;
use super::system::Shell;
use super::transport::Transport;
use super::version::Version;
use crate::{msg_debug, msg_print, msg_warning};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of comparing the installed version with the vendor's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    UpToDate { current: Version },
    Available(UpdatePlan),
}

/// Everything needed to fetch and install a newer release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub product: Product,
    pub current: Version,
    pub latest: Version,
    pub installer_name: String,
    pub download_url: String,
}

/// Terminal state of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate { current: Version },
    Updated { previous: Version, installed: Version },
}

/// Installer download URL for `installer_name`.
pub fn download_url(download_host: &str, installer_name: &str) -> String {
    format!("{}/{}", download_host.trim_end_matches('/'), installer_name)
}

pub struct Updater<S, T> {
    config: Config,
    shell: S,
    transport: T,
    download_dir: PathBuf,
}

impl<S: Shell, T: Transport> Updater<S, T> {
    /// Creates an updater that downloads into the current directory.
    pub fn new(config: Config, shell: S, transport: T) -> Self {
        Self {
            config,
            shell,
            transport,
            download_dir: PathBuf::from("."),
        }
    }

    pub fn with_download_dir(mut self, download_dir: impl Into<PathBuf>) -> Self {
        self.download_dir = download_dir.into();
        self
    }

    /// Compares the installed version of `product` against the vendor's latest.
    ///
    /// Fails before any network call if the product is not installed.
    pub async fn check(&self, product: &Product) -> Result<UpdateCheck, UpdateError> {
        let executable = installed::locate(product, &self.config.install_root)?;
        let current = installed::read_version(&self.shell, &executable).await?;
        msg_debug!(Message::InstalledVersion {
            app_name: product.name.to_string(),
            version: current.to_string(),
        });

        let latest = remote::fetch_latest(&self.transport, &self.config.check_host, product, &current).await?;
        if !latest.greater_than(&current) {
            debug!("{} {} is not newer than {}", product.name, latest, current);
            return Ok(UpdateCheck::UpToDate { current });
        }

        let installer_name = product.installer_filename(&latest);
        let download_url = download_url(&self.config.download_host, &installer_name);
        Ok(UpdateCheck::Available(UpdatePlan {
            product: *product,
            current,
            latest,
            installer_name,
            download_url,
        }))
    }

    /// Streams the planned installer into the download directory.
    pub async fn download(&self, plan: &UpdatePlan, progress: &mut dyn Progress) -> Result<PathBuf, UpdateError> {
        let destination = self.download_dir.join(&plan.installer_name);
        let bytes = self.transport.download(&plan.download_url, &destination, progress).await?;
        info!("downloaded {} bytes to {}", bytes, destination.display());
        Ok(destination)
    }

    /// Runs the installer silently and deletes it once it succeeds.
    ///
    /// On failure the installer is left in place for inspection. A file that
    /// cannot be removed after a successful install only produces a warning.
    pub async fn install(&self, installer: &Path) -> Result<(), UpdateError> {
        let output = self.shell.run_installer(installer, &self.config.silent_flag).await?;
        info!("installer exited with {:?}", output.code);

        if !output.success() {
            return Err(UpdateError::InstallerFailed {
                code: output.code,
                output: output.text,
                installer: installer.to_path_buf(),
            });
        }

        if let Err(error) = tokio::fs::remove_file(installer).await {
            warn!("failed to remove {}: {}", installer.display(), error);
            msg_warning!(Message::InstallerRetained(installer.display().to_string()));
        }
        Ok(())
    }

    /// Runs the whole pipeline for `product`, printing progress messages.
    pub async fn run(&self, product: &Product, progress: &mut dyn Progress) -> Result<UpdateOutcome, UpdateError> {
        let plan = match self.check(product).await? {
            UpdateCheck::UpToDate { current } => return Ok(UpdateOutcome::UpToDate { current }),
            UpdateCheck::Available(plan) => plan,
        };

        msg_print!(Message::UpdateAvailable {
            latest: plan.latest.to_string(),
            current: plan.current.to_string(),
        });

        let installer = self.download(&plan, progress).await?;

        msg_print!(Message::Installing);
        if let Err(error) = self.install(&installer).await {
            if let UpdateError::InstallerFailed { installer, .. } = &error {
                msg_warning!(Message::InstallerRetained(installer.display().to_string()));
            }
            return Err(error);
        }

        Ok(UpdateOutcome::Updated {
            previous: plan.current,
            installed: plan.latest,
        })
    }
}
