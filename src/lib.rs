//! # Piriform Updater
//!
//! Keeps locally installed CCleaner and Speccy builds current: it reads the
//! installed executable's file version, asks the vendor for the latest
//! release, and if that is newer downloads the installer and runs it
//! silently.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use piriform_updater::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
