use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::network::ports::PORT_TABLE;

pub const DEFAULT_MAX_CONCURRENCY: usize = 50;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1_000);

/// How host liveness is decided during the network sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LivenessMethod {
    /// Shell out to the platform `ping` utility (one echo request).
    #[default]
    Ping,
    /// TCP connect to a few well-known ports; a refusal still proves the host is up.
    Tcp,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown liveness method '{0}', expected 'ping' or 'tcp'")]
pub struct ParseMethodError(String);

impl FromStr for LivenessMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ping" | "icmp" => Ok(Self::Ping),
            "tcp" => Ok(Self::Tcp),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

impl fmt::Display for LivenessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ping => write!(f, "ping"),
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound on in-flight host probes during the network sweep.
    pub max_concurrency: usize,
    /// Upper bound on in-flight connects during a port sweep.
    pub port_concurrency: usize,
    /// Per-probe timeout for host liveness.
    pub host_timeout: Duration,
    /// Per-connect timeout for a single port.
    pub port_timeout: Duration,
    /// How long to wait for a PTR answer.
    pub dns_timeout: Duration,
    pub method: LivenessMethod,
    /// Disables reverse DNS lookups entirely.
    pub no_dns: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            port_concurrency: PORT_TABLE.len(),
            host_timeout: DEFAULT_PROBE_TIMEOUT,
            port_timeout: DEFAULT_PROBE_TIMEOUT,
            dns_timeout: DEFAULT_PROBE_TIMEOUT,
            method: LivenessMethod::default(),
            no_dns: false,
            no_banner: false,
            quiet: 0,
        }
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
    fn defaults_match_reference_values() {
        let cfg = Config::default();
        assert_eq!(cfg.max_concurrency, 50);
        assert_eq!(cfg.host_timeout, Duration::from_millis(1000));
        assert_eq!(cfg.port_timeout, Duration::from_millis(1000));
        assert_eq!(cfg.port_concurrency, 18);
        assert_eq!(cfg.method, LivenessMethod::Ping);
        assert!(!cfg.no_dns);
    }

    #[test]
    fn liveness_method_parses_case_insensitive() {
        assert_eq!("PING".parse(), Ok(LivenessMethod::Ping));
        assert_eq!("icmp".parse(), Ok(LivenessMethod::Ping));
        assert_eq!("Tcp".parse(), Ok(LivenessMethod::Tcp));
        assert!("arp".parse::<LivenessMethod>().is_err());
    }
}
