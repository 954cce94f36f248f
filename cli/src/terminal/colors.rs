use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const PORT: Color = Color::BrightMagenta;
pub const SERVICE: Color = Color::Green;
pub const NO_PORTS: Color = Color::Red;
