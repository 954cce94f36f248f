use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use netsweep_common::config::Config;
use netsweep_common::network::range::{self, Ipv4Range};
use tracing::{debug, info};

use crate::prober::HostProber;
use crate::scheduler;

/// Called with the running number of live hosts each time one is found.
pub type HostFoundCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Liveness sweep over the /24 around a sample address.
#[derive(Clone)]
pub struct NetworkSweep {
    prober: Arc<dyn HostProber>,
    max_concurrency: usize,
    probe_timeout: Duration,
    on_host_found: Option<HostFoundCallback>,
}

impl NetworkSweep {
    pub fn new(prober: Arc<dyn HostProber>, cfg: &Config) -> Self {
        Self {
            prober,
            max_concurrency: cfg.max_concurrency,
            probe_timeout: cfg.host_timeout,
            on_host_found: None,
        }
    }

    pub fn with_callback(mut self, callback: HostFoundCallback) -> Self {
        self.on_host_found = Some(callback);
        self
    }

    /// The addresses a sweep from `sample` will probe: `.1` to `.254`, ascending.
    pub fn candidates(sample: Ipv4Addr) -> Vec<Ipv4Addr> {
        let hosts: Ipv4Range = range::subnet_hosts(sample);
        hosts.to_iter().collect()
    }

    /// Probes every candidate once and returns the live ones in ascending order.
    pub async fn sweep(&self, sample: Ipv4Addr) -> Vec<Ipv4Addr> {
        let candidates: Vec<Ipv4Addr> = Self::candidates(sample);
        info!(
            "Sweeping {}/{} ({} candidates)",
            range::subnet_of(sample).network(),
            range::SUBNET_PREFIX,
            candidates.len()
        );

        let prober: Arc<dyn HostProber> = Arc::clone(&self.prober);
        let probe_timeout: Duration = self.probe_timeout;
        let callback: Option<HostFoundCallback> = self.on_host_found.clone();
        let found: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

        let results: Vec<(Ipv4Addr, bool)> =
            scheduler::run_bounded(candidates, self.max_concurrency, move |addr| {
                let prober = Arc::clone(&prober);
                let callback = callback.clone();
                let found = Arc::clone(&found);
                async move {
                    let alive: bool = prober.probe_host(addr, probe_timeout).await;
                    if alive {
                        debug!("{addr} is up");
                        let count: usize = found.fetch_add(1, Ordering::Relaxed) + 1;
                        if let Some(cb) = callback {
                            cb(count);
                        }
                    }
                    alive
                }
            })
            .await;

        results
            .into_iter()
            .filter_map(|(addr, alive)| alive.then_some(addr))
            .collect()
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
