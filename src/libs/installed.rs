//! Detection of an installed product and its version.

use super::error::UpdateError;
use super::product::Product;
use super::system::Shell;
use super::version::Version;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds `<root>/<name>/<name>.exe`.
///
/// Both the product directory and the executable inside it must exist.
///
/// # Examples
///
/// ```rust,no_run
/// use piriform_updater::libs::{installed, product::CCLEANER};
/// use std::path::Path;
///
/// let exe = installed::locate(&CCLEANER, Path::new(r"C:\Program Files"))?;
/// assert!(exe.ends_with("CCleaner.exe"));
/// # Ok::<(), piriform_updater::libs::error::UpdateError>(())
/// ```
pub fn locate(product: &Product, install_root: &Path) -> Result<PathBuf, UpdateError> {
    let install_dir = install_root.join(product.name);
    let executable = install_dir.join(product.executable_name());

    if install_dir.is_dir() && executable.is_file() {
        debug!("found {} at {}", product.name, executable.display());
        Ok(executable)
    } else {
        debug!("{} not found at {}", product.name, executable.display());
        Err(UpdateError::NotInstalled { expected: executable })
    }
}

/// Reads the installed executable's version through `shell`.
pub async fn read_version<S: Shell>(shell: &S, executable: &Path) -> Result<Version, UpdateError> {
    let output = shell.query_file_version(executable).await?;
    if !output.success() {
        return Err(UpdateError::VersionQueryFailed { code: output.code });
    }

    let line = last_line(&output.text);
    debug!("file version text: {:?}", line);
    Version::parse_file_version(line)
}

/// Last line of the trimmed output. `wmic` prints a `Version` header line
/// followed by the value, with `\r\r\n` line endings.
fn last_line(text: &str) -> &str {
    text.trim().lines().last().map(str::trim).unwrap_or_default()
}
