use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(120);
const FRAMES: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟", "✔"];

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Starts the sweep spinner. Later calls just replace its message.
pub fn start(msg: &str) {
    let pb: &ProgressBar = SPINNER.get_or_init(|| {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(FRAMES);
        pb.set_style(style);
        pb.enable_steady_tick(TICK);
        pb
    });
    pb.set_message(msg.to_string());
}

/// Feeds the live-host count into the spinner, if one is running.
pub fn report_discovery_progress(count: usize) {
    if let Some(pb) = SPINNER.get() {
        pb.set_message(progress_message(count));
    }
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

fn progress_message(count: usize) -> String {
    let hosts: &str = if count == 1 { "host" } else { "hosts" };
    format!("Sweeping... {} live {hosts} so far", count.to_string().green().bold())
}

fn is_drawing(pb: &ProgressBar) -> bool {
    !pb.is_finished() && !pb.is_hidden()
}

/// Log sink that prints above the spinner while it runs and straight to
/// stdout otherwise.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        match SPINNER.get() {
            Some(pb) if is_drawing(pb) => pb.println(msg),
            _ => println!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_message_pluralizes() {
        let one = console::strip_ansi_codes(&progress_message(1)).to_string();
        let many = console::strip_ansi_codes(&progress_message(12)).to_string();
        assert_eq!(one, "Sweeping... 1 live host so far");
        assert_eq!(many, "Sweeping... 12 live hosts so far");
    }
}
