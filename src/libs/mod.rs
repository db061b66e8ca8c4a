//! Core library modules for piriform-updater.
//!
//! ## Features
//!
//! - **Detection**: Locating an installed product and reading its file version
//! - **Version Check**: Querying the vendor endpoint for the latest release
//! - **Update**: Streaming the installer down and running it unattended
//! - **Infrastructure**: Configuration, data storage, errors, console messages
//!
//! ## Usage
//!
//! ```rust
//! use piriform_updater::libs::{product::CCLEANER, version::Version};
//!
//! assert_eq!(CCLEANER.installer_filename(&Version::new(6, 1, 123)), "ccsetup61.exe");
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod installed;
pub mod messages;
pub mod product;
pub mod progress;
pub mod remote;
pub mod system;
pub mod transport;
pub mod updater;
pub mod version;
