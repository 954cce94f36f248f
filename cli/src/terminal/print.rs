use std::fmt::Display;

use colored::*;
use netsweep_common::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;
const FIELD_WIDTH: usize = 8;
const DETAIL_WIDTH: usize = 7;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Raw line of output; goes through the logger so it never tears the spinner.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, quiet: u8) {
    if no_banner || quiet > 0 {
        return;
    }
    let title: String = format!("NETSWEEP v{}", env!("CARGO_PKG_VERSION"));
    print(&titled_rule(&title, '═'));
    banner::print();
}

/// Section divider, hidden from `-q` on.
pub fn section(title: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }
    print(&titled_rule(&title.to_uppercase(), '─'));
}

/// `key.....: value`; the caller picks the value's color.
pub fn field(key: &str, value: impl Display) {
    let dots: String = ".".repeat((FIELD_WIDTH + 1).saturating_sub(key.len()));
    status(&format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn status(msg: &str) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

/// `[idx] name` line opening one host's block.
pub fn host_heading(idx: usize, name: &str) {
    let idx: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", idx.color(colors::SEPARATOR), name.color(colors::PRIMARY)));
}

pub fn host_details(details: &[(String, ColoredString)]) {
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(DETAIL_WIDTH.saturating_sub(key.len()));
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn rule() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// Closing rule of a normal run.
pub fn closing_rule(quiet: u8) {
    if quiet == 0 {
        rule();
    }
}

pub fn centered(msg: &str) {
    print(&center(msg));
}

const NO_HOSTS_ART: &str = r#"
         _   _  ___    _   _  ___  ____ _____ ____
        | \ | |/ _ \  | | | |/ _ \/ ___|_   _/ ___|
        |  \| | | | | | |_| | | | \___ \ | | \___ \
        | |\  | |_| | |  _  | |_| |___) || |  ___) |
        |_| \_|\___/  |_| |_|\___/|____/ |_| |____/
"#;

pub fn no_hosts() {
    print(&NO_HOSTS_ART.color(colors::NO_PORTS).bold().to_string());
}

/// `fill` on both sides of `⟦ title ⟧`, padded out to [`TOTAL_WIDTH`].
fn titled_rule(title: &str, fill: char) -> String {
    let label: String = format!("⟦ {title} ⟧");
    let pad: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    let left: String = fill.to_string().repeat(pad / 2);
    let right: String = fill.to_string().repeat(pad - pad / 2);
    format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.color(colors::PRIMARY).bold(),
        right.color(colors::SEPARATOR)
    )
}

fn center(msg: &str) -> String {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{pad}{msg}")
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
    fn titled_rule_fills_the_line() {
        let line = titled_rule("HOST DETAILS", '─');
        assert_eq!(console::measure_text_width(&line), TOTAL_WIDTH);
        assert!(console::strip_ansi_codes(&line).contains("⟦ HOST DETAILS ⟧"));
    }

    #[test]
    fn titled_rule_survives_titles_wider_than_the_line() {
        let title = "x".repeat(TOTAL_WIDTH * 2);
        let line = titled_rule(&title, '═');
        assert!(console::strip_ansi_codes(&line).starts_with("⟦ x"));
    }

    #[test]
    fn center_ignores_color_codes() {
        let msg = "done".green().bold().to_string();
        let centered = center(&msg);
        let pad = centered.len() - msg.len();
        assert_eq!(pad, (TOTAL_WIDTH - 4) / 2);
    }
}
