use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

use netsweep_common::network::range;
use netsweep_common::utils::ip;
use netsweep_protocols::dns::{self, DNS_PORT};

use crate::error::ResolveError;

const RESOLV_CONF: &str = "/etc/resolv.conf";
const PUBLIC_RESOLVER: Ipv4Addr = Ipv4Addr::new(1, 1, 1, 1);
const MAX_DNS_PACKET: usize = 512;

/// Reverse lookup of a live address. Never fails: no name is `None`.
#[async_trait]
pub trait HostnameLookup: Send + Sync {
    async fn lookup(&self, addr: Ipv4Addr) -> Option<String>;
}

/// Lookup used with `--no-dns`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

#[async_trait]
impl HostnameLookup for NoLookup {
    async fn lookup(&self, _addr: Ipv4Addr) -> Option<String> {
        None
    }
}

/// Sends one PTR query per lookup to a single nameserver over UDP.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    server: Option<SocketAddr>,
    timeout: Duration,
}

impl DnsResolver {
    /// Uses the first `nameserver` from `/etc/resolv.conf`, if there is one.
    pub fn new(timeout: Duration) -> Self {
        let server: Option<SocketAddr> = std::fs::read_to_string(RESOLV_CONF)
            .ok()
            .and_then(|conf| parse_nameserver(&conf))
            .map(|ip| SocketAddr::new(ip, DNS_PORT));

        match server {
            Some(addr) => debug!("Using nameserver {addr}"),
            None => debug!("No nameserver configured, guessing per target"),
        }

        Self { server, timeout }
    }

    pub fn with_server(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            server: Some(server),
            timeout,
        }
    }

    async fn query(&self, addr: Ipv4Addr) -> Result<String, ResolveError> {
        let server: SocketAddr = self.server.unwrap_or_else(|| fallback_server(addr));

        let bind_addr: SocketAddr = match server {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((std::net::Ipv6Addr::UNSPECIFIED, 0)),
        };
        let socket: UdpSocket = UdpSocket::bind(bind_addr).await?;
        socket.connect(server).await?;

        let id: u16 = rand::random::<u16>();
        let packet: Vec<u8> = dns::create_ptr_packet(addr, id)?;
        socket.send(&packet).await?;

        match tokio::time::timeout(self.timeout, recv_answer(&socket, id)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(ResolveError::Timeout(self.timeout)),
        }
    }
}

/// Reads datagrams until the answer for transaction `id` shows up.
async fn recv_answer(socket: &UdpSocket, id: u16) -> Result<String, ResolveError> {
    let mut buf: [u8; MAX_DNS_PACKET] = [0u8; MAX_DNS_PACKET];
    loop {
        let len: usize = socket.recv(&mut buf).await?;
        let (response_id, hostname) = dns::get_hostname(&buf[..len])?;
        if response_id == id {
            return Ok(hostname);
        }
        trace!("dropping stray DNS answer {response_id} (waiting for {id})");
    }
}

#[async_trait]
impl HostnameLookup for DnsResolver {
    async fn lookup(&self, addr: Ipv4Addr) -> Option<String> {
        match self.query(addr).await {
            Ok(hostname) => Some(hostname.trim_end_matches('.').to_string()),
            Err(e) => {
                trace!("no hostname for {addr}: {e}");
                None
            }
        }
    }
}

/// First `nameserver` line of a resolv.conf body.
fn parse_nameserver(conf: &str) -> Option<IpAddr> {
    conf.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(addr)) => addr.parse::<IpAddr>().ok(),
                _ => None,
            }
        })
        .next()
}

/// Without a configured resolver, private targets ask the `.1` of their own
/// /24 (usually the router) and everything else asks a public resolver.
fn fallback_server(target: Ipv4Addr) -> SocketAddr {
    let server: Ipv4Addr = if ip::is_private(target) && !target.is_loopback() {
        range::subnet_hosts(target).start_addr
    } else {
        PUBLIC_RESOLVER
    };
    SocketAddr::new(IpAddr::V4(server), DNS_PORT)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
