use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::trace;

use crate::error::ProbeError;
use crate::prober::{HostProber, PortProber};

/// Ports tried when TCP is used to decide liveness. A refusal on any of
/// them is as good as an accept: something on the host sent the RST.
pub const LIVENESS_PORTS: [u16; 4] = [80, 443, 22, 445];

/// Plain `connect()` prober. Needs no privileges.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpProber;

#[async_trait]
impl PortProber for TcpProber {
    async fn probe_port(&self, addr: Ipv4Addr, port: u16, probe_timeout: Duration) -> bool {
        let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);
        match handshake(socket_addr, probe_timeout).await {
            Ok(()) => true,
            Err(e) => {
                trace!("{socket_addr} closed: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl HostProber for TcpProber {
    async fn probe_host(&self, addr: Ipv4Addr, probe_timeout: Duration) -> bool {
        let mut attempts: JoinSet<Result<(), ProbeError>> = JoinSet::new();
        for port in LIVENESS_PORTS {
            let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(addr), port);
            attempts.spawn(handshake(socket_addr, probe_timeout));
        }

        while let Some(joined) = attempts.join_next().await {
            match joined {
                Ok(Ok(())) | Ok(Err(ProbeError::Refused)) => return true,
                Ok(Err(e)) => trace!("{addr}: {e}"),
                Err(e) => trace!("{addr}: liveness attempt aborted: {e}"),
            }
        }
        false
    }
}

/// One TCP handshake. The stream is dropped, and thereby closed, before returning.
pub async fn handshake(socket_addr: SocketAddr, probe_timeout: Duration) -> Result<(), ProbeError> {
    match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            Ok(())
        }
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => Err(ProbeError::Refused),
        Ok(Err(e)) => Err(ProbeError::Io(e)),
        Err(_elapsed) => Err(ProbeError::Timeout(probe_timeout)),
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
