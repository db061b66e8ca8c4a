//! Operating-system commands used by the updater.
//!
//! Two external programs are involved in a run: the file-version query for
//! the installed executable, and the downloaded installer itself. Both sit
//! behind the [`Shell`] trait so the pipeline can be driven by a fake in
//! tests, while [`SystemShell`] runs the real commands.
//!
//! ## Windows Implementation
//!
//! The file version is read with
//! `wmic DATAFILE WHERE NAME="C:\\Program Files\\CCleaner\\CCleaner.exe" GET Version`.
//! WQL string literals need every backslash doubled, and the whole clause is
//! passed as a raw argument so the quoting reaches `wmic` untouched.

use super::error::UpdateError;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

const WMIC: &str = "wmic";

/// Windows process creation flag to hide console windows.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

/// Exit status and combined text output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated without an exit code.
    pub code: Option<i32>,
    pub text: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability for the two external commands a run needs.
#[allow(async_fn_in_trait)]
pub trait Shell {
    /// Queries the file-version resource of `executable`.
    async fn query_file_version(&self, executable: &Path) -> Result<CommandOutput, UpdateError>;

    /// Runs a downloaded installer with its unattended-install switch.
    async fn run_installer(&self, installer: &Path, silent_flag: &str) -> Result<CommandOutput, UpdateError>;
}

/// [`Shell`] backed by real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
    async fn query_file_version(&self, executable: &Path) -> Result<CommandOutput, UpdateError> {
        let escaped = escape_wql_path(executable);
        let mut command = Command::new(WMIC);
        push_file_version_query(&mut command, &escaped);
        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        debug!("querying file version of {}", executable.display());
        let output = run(command, WMIC).await?;
        Ok(CommandOutput {
            code: output.code,
            text: version_query_text(&output.stdout, &output.stderr),
        })
    }

    async fn run_installer(&self, installer: &Path, silent_flag: &str) -> Result<CommandOutput, UpdateError> {
        let mut command = Command::new(installer);
        command.arg(silent_flag);

        debug!("running installer {} {}", installer.display(), silent_flag);
        let output = run(command, &installer.display().to_string()).await?;
        Ok(CommandOutput {
            code: output.code,
            text: merge_output(&output.stdout, &output.stderr),
        })
    }
}

/// Doubles backslashes for use inside a WQL string literal.
pub fn escape_wql_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "\\\\")
}

#[cfg(windows)]
fn push_file_version_query(command: &mut Command, escaped_path: &str) {
    command.raw_arg(format!("DATAFILE WHERE NAME=\"{}\" GET Version", escaped_path));
}

#[cfg(not(windows))]
fn push_file_version_query(command: &mut Command, escaped_path: &str) {
    command.args(["DATAFILE", "WHERE", &format!("NAME=\"{}\"", escaped_path), "GET", "Version"]);
}

/// Appends stderr after stdout, as the installer failure report shows both.
pub fn merge_output(stdout: &str, stderr: &str) -> String {
    let mut text = stdout.to_string();
    if !stderr.trim().is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(stderr);
    }
    text
}

/// Output of the file-version query.
///
/// Only the last line of the text is parsed, so stderr is used only when
/// stdout is empty.
pub fn version_query_text(stdout: &str, stderr: &str) -> String {
    if stdout.trim().is_empty() {
        stderr.to_string()
    } else {
        stdout.to_string()
    }
}

struct RawOutput {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

async fn run(mut command: Command, program: &str) -> Result<RawOutput, UpdateError> {
    let output = command.output().await.map_err(|source| UpdateError::Spawn {
        program: program.to_string(),
        source,
    })?;

    debug!("{} exited with {:?}", program, output.status.code());
    Ok(RawOutput {
        code: output.status.code(),
        stdout: decode_output(&output.stdout),
        stderr: decode_output(&output.stderr),
    })
}

/// Converts console output to UTF-8.
///
/// `wmic` writes UTF-16 with a byte-order mark when its output is
/// redirected on some systems; other tools write the ANSI code page.
/// Anything that is not valid UTF-8 is read as Windows-1252.
pub fn decode_output(bytes: &[u8]) -> String {
    if let [0xFF, 0xFE, rest @ ..] = bytes {
        return encoding_rs::UTF_16LE.decode_without_bom_handling(rest).0.into_owned();
    }

    if let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_string();
    }

    encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
}
