use std::net::Ipv4Addr;

use netsweep_common::config::Config;

use crate::terminal::print;

use super::{run_sweep, sample_address};

pub async fn discover(target: Option<Ipv4Addr>, cfg: &Config) -> anyhow::Result<()> {
    let sample: Ipv4Addr = sample_address(target, cfg);
    let (_service, hosts) = run_sweep(sample, cfg).await;

    if hosts.is_empty() {
        print::section("zero hosts detected", cfg.quiet);
        print::no_hosts();
        return Ok(());
    }

    print::section("active hosts", cfg.quiet);
    for (idx, addr) in hosts.iter().enumerate() {
        match cfg.quiet {
            2.. => print::print(&addr.to_string()),
            _ => print::host_heading(idx, &addr.to_string()),
        }
    }
    Ok(())
}
