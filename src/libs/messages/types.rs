#[derive(Debug, Clone)]
pub enum Message {
    // === CHECK MESSAGES ===
    InstalledVersion {
        app_name: String,
        version: String,
    },
    UpdateAvailable {
        latest: String,
        current: String,
    },
    LatestVersionInstalled,

    // === INSTALL MESSAGES ===
    Installing,
    UpdateCompleted {
        app_name: String,
    },
    InstallerRetained(String), // installer path
}
