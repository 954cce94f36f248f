use std::net::Ipv4Addr;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::trace;

use crate::error::ProbeError;
use crate::prober::HostProber;

/// Extra time granted to the `ping` process on top of its own wait, so that
/// process start-up does not eat into the reply window.
const PING_GRACE: Duration = Duration::from_millis(500);

/// Host prober backed by the system `ping` utility (one echo request).
///
/// Unprivileged users can run it on every mainstream OS, which is why it is
/// preferred over crafting ICMP ourselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct PingProber;

#[async_trait]
impl HostProber for PingProber {
    async fn probe_host(&self, addr: Ipv4Addr, probe_timeout: Duration) -> bool {
        match ping_once(addr, probe_timeout).await {
            Ok(()) => true,
            Err(e) => {
                trace!("{addr} down: {e}");
                false
            }
        }
    }
}

async fn ping_once(addr: Ipv4Addr, probe_timeout: Duration) -> Result<(), ProbeError> {
    let mut command = Command::new("ping");
    command
        .args(ping_args(addr, probe_timeout))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let status: ExitStatus =
        match tokio::time::timeout(probe_timeout + PING_GRACE, command.status()).await {
            Ok(status) => status.map_err(ProbeError::Spawn)?,
            Err(_elapsed) => return Err(ProbeError::Timeout(probe_timeout)),
        };

    if status.success() {
        Ok(())
    } else {
        Err(ProbeError::NoReply(status.code()))
    }
}

#[cfg(target_os = "windows")]
fn ping_args(addr: Ipv4Addr, probe_timeout: Duration) -> Vec<String> {
    let wait_ms: u128 = probe_timeout.as_millis().max(1);
    vec![
        "-n".into(),
        "1".into(),
        "-w".into(),
        wait_ms.to_string(),
        addr.to_string(),
    ]
}

#[cfg(target_os = "macos")]
fn ping_args(addr: Ipv4Addr, probe_timeout: Duration) -> Vec<String> {
    // BSD ping takes the reply wait in milliseconds.
    let wait_ms: u128 = probe_timeout.as_millis().max(1);
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait_ms.to_string(),
        addr.to_string(),
    ]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn ping_args(addr: Ipv4Addr, probe_timeout: Duration) -> Vec<String> {
    // iputils and busybox take whole seconds.
    let wait_secs: u64 = probe_timeout.as_millis().div_ceil(1_000).max(1) as u64;
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait_secs.to_string(),
        addr.to_string(),
    ]
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
    fn args_request_a_single_echo() {
        let args = ping_args(Ipv4Addr::new(192, 168, 1, 7), Duration::from_millis(1_000));
        assert_eq!(args.last().map(String::as_str), Some("192.168.1.7"));
        assert!(args.iter().any(|arg| arg == "1"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_wait_is_rounded_up_to_whole_seconds() {
        let args = ping_args(Ipv4Addr::LOCALHOST, Duration::from_millis(1_200));
        assert_eq!(args, ["-c", "1", "-W", "2", "127.0.0.1"]);

        let args = ping_args(Ipv4Addr::LOCALHOST, Duration::from_millis(10));
        assert_eq!(args[3], "1");
    }

    #[tokio::test]
    #[ignore]
    async fn ping_loopback() {
        assert!(PingProber.probe_host(Ipv4Addr::LOCALHOST, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    #[ignore]
    async fn ping_documentation_range_is_down() {
        let ip = Ipv4Addr::new(203, 0, 113, 1);
        assert!(!PingProber.probe_host(ip, Duration::from_secs(1)).await);
    }
}
