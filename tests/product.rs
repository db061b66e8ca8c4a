#[cfg(test)]
mod tests {
    use piriform_updater::libs::product::{CCLEANER, SPECCY};
    use piriform_updater::libs::version::Version;

    #[test]
    fn test_registry_entries() {
        assert_eq!(CCLEANER.name, "CCleaner");
        assert_eq!(CCLEANER.id, "cc");
        assert_eq!(CCLEANER.setup, "ccsetup");
        assert_eq!(SPECCY.name, "Speccy");
        assert_eq!(SPECCY.id, "sp");
        assert_eq!(SPECCY.setup, "spsetup");
    }

    #[test]
    fn test_executable_name() {
        assert_eq!(CCLEANER.executable_name(), "CCleaner.exe");
        assert_eq!(SPECCY.executable_name(), "Speccy.exe");
    }

    #[test]
    fn test_installer_filename_concatenates_major_and_minor() {
        assert_eq!(CCLEANER.installer_filename(&Version::new(6, 1, 123)), "ccsetup61.exe");
        assert_eq!(SPECCY.installer_filename(&Version::new(1, 32, 803)), "spsetup132.exe");
    }

    #[test]
    fn test_installer_filename_is_ambiguous_for_multi_digit_minor() {
        let a = CCLEANER.installer_filename(&Version::new(5, 12, 0));
        let b = CCLEANER.installer_filename(&Version::new(51, 2, 0));
        assert_eq!(a, "ccsetup512.exe");
        assert_eq!(a, b);
    }
}
