use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use netsweep_common::config::Config;
use netsweep_common::network::ports::{PORT_TABLE, PortSpec};
use tracing::debug;

use crate::prober::PortProber;
use crate::scheduler;

/// Connect sweep over [`PORT_TABLE`] for a single host.
#[derive(Clone)]
pub struct PortSweep {
    prober: Arc<dyn PortProber>,
    max_concurrency: usize,
    probe_timeout: Duration,
}

impl PortSweep {
    pub fn new(prober: Arc<dyn PortProber>, cfg: &Config) -> Self {
        Self {
            prober,
            max_concurrency: cfg.port_concurrency,
            probe_timeout: cfg.port_timeout,
        }
    }

    /// Open entries of the port table, in table order. Empty when nothing answers.
    pub async fn sweep(&self, addr: Ipv4Addr) -> Vec<PortSpec> {
        let prober: Arc<dyn PortProber> = Arc::clone(&self.prober);
        let probe_timeout: Duration = self.probe_timeout;

        let results: Vec<(PortSpec, bool)> =
            scheduler::run_bounded(PORT_TABLE.to_vec(), self.max_concurrency, move |spec| {
                let prober = Arc::clone(&prober);
                async move {
                    let open: bool = prober.probe_port(addr, spec.port, probe_timeout).await;
                    if open {
                        debug!("{addr}:{} ({}) open", spec.port, spec.service);
                    }
                    open
                }
            })
            .await;

        results
            .into_iter()
            .filter_map(|(spec, open)| open.then_some(spec))
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
