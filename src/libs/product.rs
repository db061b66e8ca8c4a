//! Registry of the products this tool knows how to update.

use super::version::Version;

/// A vendor application that can be located, version-checked and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Install directory and executable stem, e.g. `CCleaner`.
    pub name: &'static str,
    /// Short product code sent to the update endpoint.
    pub id: &'static str,
    /// Filename stem of the vendor's installer.
    pub setup: &'static str,
}

pub const CCLEANER: Product = Product {
    name: "CCleaner",
    id: "cc",
    setup: "ccsetup",
};

pub const SPECCY: Product = Product {
    name: "Speccy",
    id: "sp",
    setup: "spsetup",
};

impl Product {
    /// `<name>.exe`, the file expected inside the install directory.
    pub fn executable_name(&self) -> String {
        format!("{}.exe", self.name)
    }

    /// Installer filename for a release: setup prefix followed by the major
    /// and minor numbers with no separator, so 6.1.x gives `ccsetup61.exe`.
    // 5.12 and 51.2 both yield `ccsetup512.exe`.
    pub fn installer_filename(&self, version: &Version) -> String {
        format!("{}{}{}.exe", self.setup, version.major, version.minor)
    }
}
