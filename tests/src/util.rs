use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use netsweep_core::prober::{HostProber, PortProber};
use netsweep_core::scanner::HostnameLookup;

/// Scripted network: a fixed set of live hosts, each with a fixed set of open ports.
#[derive(Default)]
pub struct FakeNetwork {
    hosts: HashSet<Ipv4Addr>,
    open: HashSet<(Ipv4Addr, u16)>,
    names: Vec<(Ipv4Addr, &'static str)>,
    pub host_probes: AtomicUsize,
    pub port_probes: AtomicUsize,
}

impl FakeNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, addr: Ipv4Addr) -> Self {
        self.hosts.insert(addr);
        self
    }

    pub fn open(mut self, addr: Ipv4Addr, port: u16) -> Self {
        self.open.insert((addr, port));
        self
    }

    pub fn named(mut self, addr: Ipv4Addr, name: &'static str) -> Self {
        self.names.push((addr, name));
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl HostProber for FakeNetwork {
    async fn probe_host(&self, addr: Ipv4Addr, _timeout: Duration) -> bool {
        self.host_probes.fetch_add(1, Ordering::SeqCst);
        // Higher addresses answer first.
        let delay = 255u64.saturating_sub(u64::from(addr.octets()[3])) / 64;
        tokio::time::sleep(Duration::from_millis(delay)).await;
        self.hosts.contains(&addr)
    }
}

#[async_trait]
impl PortProber for FakeNetwork {
    async fn probe_port(&self, addr: Ipv4Addr, port: u16, _timeout: Duration) -> bool {
        self.port_probes.fetch_add(1, Ordering::SeqCst);
        self.open.contains(&(addr, port))
    }
}

#[async_trait]
impl HostnameLookup for FakeNetwork {
    async fn lookup(&self, addr: Ipv4Addr) -> Option<String> {
        self.names
            .iter()
            .find(|(ip, _)| *ip == addr)
            .map(|(_, name)| name.to_string())
    }
}

/// Number of file descriptors this process holds open.
#[cfg(target_os = "linux")]
pub fn open_fd_count() -> usize {
    std::fs::read_dir("/proc/self/fd")
        .map(|entries| entries.count())
        .unwrap_or(0)
}
