//! Fakes for the shell and transport capabilities.

#![allow(dead_code)]

use piriform_updater::libs::error::UpdateError;
use piriform_updater::libs::progress::Progress;
use piriform_updater::libs::system::{CommandOutput, Shell};
use piriform_updater::libs::transport::Transport;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Answers the file-version query and the installer run with canned output.
#[derive(Clone)]
pub struct FakeShell {
    pub version_output: CommandOutput,
    pub installer_output: CommandOutput,
    pub installer_removes_itself: bool,
    pub queried: Rc<RefCell<Vec<PathBuf>>>,
    pub installs: Rc<RefCell<Vec<(PathBuf, String)>>>,
}

impl FakeShell {
    pub fn with_version(text: &str) -> Self {
        Self {
            version_output: CommandOutput {
                code: Some(0),
                text: format!("Version        \r\r\n{}  \r\r\n\r\r\n", text),
            },
            installer_output: CommandOutput {
                code: Some(0),
                text: String::new(),
            },
            installer_removes_itself: false,
            queried: Rc::default(),
            installs: Rc::default(),
        }
    }

    pub fn failing_query(code: i32) -> Self {
        let mut shell = Self::with_version("");
        shell.version_output = CommandOutput {
            code: Some(code),
            text: "Node - HOST\r\nERROR:\r\nDescription = Invalid query".to_string(),
        };
        shell
    }

    pub fn installer_exits_with(mut self, code: i32, text: &str) -> Self {
        self.installer_output = CommandOutput {
            code: Some(code),
            text: text.to_string(),
        };
        self
    }
}

impl Shell for FakeShell {
    async fn query_file_version(&self, executable: &Path) -> Result<CommandOutput, UpdateError> {
        self.queried.borrow_mut().push(executable.to_path_buf());
        Ok(self.version_output.clone())
    }

    async fn run_installer(&self, installer: &Path, silent_flag: &str) -> Result<CommandOutput, UpdateError> {
        self.installs.borrow_mut().push((installer.to_path_buf(), silent_flag.to_string()));
        if self.installer_removes_itself {
            fs::remove_file(installer)?;
        }
        Ok(self.installer_output.clone())
    }
}

/// Serves a fixed check response and a fixed installer payload.
#[derive(Clone)]
pub struct FakeTransport {
    pub body: String,
    pub payload: Vec<u8>,
    pub chunk_size: usize,
    pub declare_length: bool,
    pub fetched: Rc<RefCell<Vec<String>>>,
    pub downloaded: Rc<RefCell<Vec<(String, PathBuf)>>>,
}

impl FakeTransport {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: body.to_string(),
            payload: b"MZ fake installer payload".to_vec(),
            chunk_size: 8,
            declare_length: true,
            fetched: Rc::default(),
            downloaded: Rc::default(),
        }
    }
}

impl Transport for FakeTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, UpdateError> {
        self.fetched.borrow_mut().push(url.to_string());
        Ok(self.body.clone())
    }

    async fn download(&self, url: &str, destination: &Path, progress: &mut dyn Progress) -> Result<u64, UpdateError> {
        self.downloaded.borrow_mut().push((url.to_string(), destination.to_path_buf()));
        let total = self.declare_length.then_some(self.payload.len() as u64);

        let mut written = Vec::new();
        for chunk in self.payload.chunks(self.chunk_size) {
            written.extend_from_slice(chunk);
            progress.update(written.len() as u64, total);
        }
        fs::write(destination, &written)?;
        progress.finish();

        Ok(written.len() as u64)
    }
}

/// Records every progress callback.
#[derive(Default)]
pub struct RecordingProgress {
    pub updates: Vec<(u64, Option<u64>)>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn update(&mut self, current: u64, total: Option<u64>) {
        self.updates.push((current, total));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Creates `<root>/<name>/<name>.exe`.
pub fn install_product(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    let exe = dir.join(format!("{}.exe", name));
    fs::write(&exe, b"MZ").unwrap();
    exe
}
