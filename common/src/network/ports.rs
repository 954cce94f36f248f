use std::fmt;

/// A TCP port paired with the service usually found behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortSpec {
    pub port: u16,
    pub service: &'static str,
}

impl PortSpec {
    pub const fn new(port: u16, service: &'static str) -> Self {
        Self { port, service }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.service)
    }
}

/// Ports probed on every live host, in reporting order.
pub static PORT_TABLE: [PortSpec; 18] = [
    PortSpec::new(21, "FTP"),
    PortSpec::new(22, "SSH"),
    PortSpec::new(23, "Telnet"),
    PortSpec::new(25, "SMTP"),
    PortSpec::new(53, "DNS"),
    PortSpec::new(80, "HTTP"),
    PortSpec::new(110, "POP3"),
    PortSpec::new(135, "RPC"),
    PortSpec::new(139, "NetBIOS"),
    PortSpec::new(143, "IMAP"),
    PortSpec::new(443, "HTTPS"),
    PortSpec::new(445, "SMB"),
    PortSpec::new(993, "IMAPS"),
    PortSpec::new(995, "POP3S"),
    PortSpec::new(3306, "MySQL"),
    PortSpec::new(3389, "RDP"),
    PortSpec::new(5432, "PostgreSQL"),
    PortSpec::new(8080, "HTTP-Proxy"),
];

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
