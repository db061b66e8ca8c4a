use crate::libs::{
    config::Config,
    messages::Message,
    product::{Product, CCLEANER, SPECCY},
    progress::ConsoleProgress,
    system::SystemShell,
    transport::HttpTransport,
    updater::{UpdateOutcome, Updater},
};
use crate::{msg_info, msg_success};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductKey {
    Ccleaner,
    Speccy,
}

impl ProductKey {
    pub fn product(self) -> &'static Product {
        match self {
            ProductKey::Ccleaner => &CCLEANER,
            ProductKey::Speccy => &SPECCY,
        }
    }
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(value_enum, help = "Product to update")]
    pub product: ProductKey,
    #[arg(long, value_name = "DIR", help = "Program installation root (defaults to %ProgramFiles%)")]
    pub install_root: Option<PathBuf>,
    #[arg(long, value_name = "DIR", help = "Directory to download the installer to (defaults to the current directory)")]
    pub download_dir: Option<PathBuf>,
}

/// Checks the selected product and installs the latest version if it is newer.
pub async fn cmd(args: UpdateArgs) -> Result<()> {
    let config = Config::read(args.install_root)?;
    let download_dir = match args.download_dir {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to resolve the current directory")?,
    };

    let product = args.product.product();
    let updater = Updater::new(config, SystemShell, HttpTransport::new()?).with_download_dir(download_dir);
    match updater.run(product, &mut ConsoleProgress::new()).await? {
        UpdateOutcome::UpToDate { .. } => msg_info!(Message::LatestVersionInstalled),
        UpdateOutcome::Updated { .. } => msg_success!(Message::UpdateCompleted {
            app_name: product.name.to_string(),
        }),
    }

    Ok(())
}
