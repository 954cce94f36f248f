//! # Scan Service
//!
//! Implements the "scan my network" use case.
//!
//! The service owns the two sweeps and a hostname lookup and strings them
//! together: sweep the /24, then for each live host resolve its name and
//! sweep its ports. The reporting layer only ever sees [`HostReport`]s.

use std::net::Ipv4Addr;
use std::sync::Arc;

use netsweep_common::config::Config;
use netsweep_common::network::ports::PortSpec;
use tracing::info;

use crate::prober::{self, HostProber, PortProber};
use crate::scanner::network::HostFoundCallback;
use crate::scanner::{DnsResolver, HostnameLookup, NetworkSweep, NoLookup, PortSweep};

/// What was learned about one live host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostReport {
    pub addr: Ipv4Addr,
    pub hostname: Option<String>,
    /// Open ports, in port table order. Empty when nothing answered.
    pub open_ports: Vec<PortSpec>,
}

pub struct ScanService {
    network: NetworkSweep,
    ports: PortSweep,
    resolver: Arc<dyn HostnameLookup>,
}

impl ScanService {
    /// Wires up the real probers and resolver the configuration asks for.
    pub fn new(cfg: &Config) -> Self {
        let resolver: Arc<dyn HostnameLookup> = if cfg.no_dns {
            Arc::new(NoLookup)
        } else {
            Arc::new(DnsResolver::new(cfg.dns_timeout))
        };

        Self::with_parts(
            prober::host_prober(cfg.method),
            prober::port_prober(),
            resolver,
            cfg,
        )
    }

    pub fn with_parts(
        host_prober: Arc<dyn HostProber>,
        port_prober: Arc<dyn PortProber>,
        resolver: Arc<dyn HostnameLookup>,
        cfg: &Config,
    ) -> Self {
        Self {
            network: NetworkSweep::new(host_prober, cfg),
            ports: PortSweep::new(port_prober, cfg),
            resolver,
        }
    }

    /// Registers a callback fed with the running live-host count during sweeps.
    pub fn on_host_found(mut self, callback: HostFoundCallback) -> Self {
        self.network = self.network.with_callback(callback);
        self
    }

    /// Live hosts of the /24 around `sample`, ascending.
    pub async fn discover(&self, sample: Ipv4Addr) -> Vec<Ipv4Addr> {
        self.network.sweep(sample).await
    }

    /// Hostname and open ports of a single host.
    pub async fn inspect(&self, addr: Ipv4Addr) -> HostReport {
        let hostname: Option<String> = self.resolver.lookup(addr).await;
        let open_ports: Vec<PortSpec> = self.ports.sweep(addr).await;
        HostReport {
            addr,
            hostname,
            open_ports,
        }
    }

    /// Full pipeline: sweep the network, then inspect every live host in order.
    pub async fn scan(&self, sample: Ipv4Addr) -> Vec<HostReport> {
        let live: Vec<Ipv4Addr> = self.discover(sample).await;
        info!("Found {} active hosts", live.len());

        let mut reports: Vec<HostReport> = Vec::with_capacity(live.len());
        for addr in live {
            reports.push(self.inspect(addr).await);
        }
        reports
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
