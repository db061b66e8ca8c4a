//! Convenient macros for application messaging and logging.
//!
//! Every user-facing line goes through one of these macros. In normal mode
//! they print plain console text; in debug mode (`PIRIFORM_UPDATER_DEBUG`
//! or `RUST_LOG` set) they emit `tracing` events instead, so messages
//! interleave with the pipeline's debug logs under one subscriber.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix, on stderr
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use piriform_updater::{msg_info, msg_success};
//! use piriform_updater::libs::messages::Message;
//!
//! msg_info!(Message::LatestVersionInstalled);
//! msg_success!(Message::UpdateCompleted { app_name: "CCleaner".to_string() });
//! ```

use std::sync::OnceLock;

/// Cached result of the debug-mode environment check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Environment variable that turns on debug output.
pub const DEBUG_VAR: &str = "PIRIFORM_UPDATER_DEBUG";

/// Checks if debug mode is enabled.
///
/// Debug mode is on when either `PIRIFORM_UPDATER_DEBUG` or `RUST_LOG` is
/// set. The result is computed once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_VAR).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
///
/// - **Debug Mode**: Uses `tracing::info!`
/// - **Normal Mode**: Uses `println!`
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix.
///
/// Errors go to stderr in normal mode and through `tracing::error!` in
/// debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Emits a debug message, only in debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
