use std::net::Ipv4Addr;

use netsweep_common::config::Config;
use netsweep_core::discovery::{HostReport, ScanService};

use crate::terminal::print;

use super::scan::print_report;

pub async fn ports(addr: Ipv4Addr, cfg: &Config) -> anyhow::Result<()> {
    print::section("scanning ports", cfg.quiet);
    if cfg.quiet == 0 {
        print::status(&format!("Scanning ports on {addr}..."));
    }

    let service: ScanService = ScanService::new(cfg);
    let report: HostReport = service.inspect(addr).await;
    print_report(0, &report);
    Ok(())
}
