//! Console download progress.

use std::io::{self, Write};

const BAR_LEN: usize = 32;

/// Receives byte counts while a download streams in.
pub trait Progress {
    /// Called after each chunk with the running total and the declared size.
    fn update(&mut self, current: u64, total: Option<u64>);

    /// Called once the body has been fully written.
    fn finish(&mut self);
}

/// Renders one progress line, without the trailing carriage return.
///
/// ```rust
/// use piriform_updater::libs::progress::render;
///
/// let line = render(50, Some(100));
/// assert!(line.ends_with("50.00% (50/100)"));
/// ```
pub fn render(current: u64, total: Option<u64>) -> String {
    match total.filter(|&t| t > 0) {
        Some(total) => {
            let ratio = current as f64 / total as f64;
            let filled = ((BAR_LEN as f64 * ratio).round() as usize).min(BAR_LEN);
            let bar = format!("{}{}", "█".repeat(filled), " ".repeat(BAR_LEN - filled));
            format!(
                "Downloading latest version |{}| {:.2}% ({}/{})",
                bar,
                ratio * 100.0,
                current,
                total
            )
        }
        None => format!("Downloading latest version ({} bytes)", current),
    }
}

/// Rewrites a single console line in place as chunks arrive.
///
/// Writes to stdout unless built with [`ConsoleProgress::with_writer`].
#[derive(Debug)]
pub struct ConsoleProgress<W = io::Stdout> {
    writer: W,
    line_open: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            line_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn update(&mut self, current: u64, total: Option<u64>) {
        let _ = write!(self.writer, "{}\r", render(current, total));
        self.line_open = true;

        if matches!(total, Some(total) if total > 0 && current >= total) {
            let _ = writeln!(self.writer);
            self.line_open = false;
        }
        let _ = self.writer.flush();
    }

    fn finish(&mut self) {
        if self.line_open {
            let _ = writeln!(self.writer);
            let _ = self.writer.flush();
            self.line_open = false;
        }
    }
}
