use std::net::Ipv4Addr;

use colored::*;
use netsweep_common::config::Config;
use netsweep_core::discovery::HostReport;

use crate::mprint;
use crate::terminal::{format, print};

use super::{run_sweep, sample_address};

pub async fn scan(target: Option<Ipv4Addr>, cfg: &Config) -> anyhow::Result<()> {
    let sample: Ipv4Addr = sample_address(target, cfg);
    let (service, hosts) = run_sweep(sample, cfg).await;

    if hosts.is_empty() {
        no_hosts_found(cfg);
        return Ok(());
    }

    print::section("host details", cfg.quiet);
    let mut open_total: usize = 0;
    for (idx, addr) in hosts.iter().enumerate() {
        if cfg.quiet == 0 {
            print::status(&format!("Scanning ports on {addr}..."));
        }
        let report: HostReport = service.inspect(*addr).await;
        open_total += report.open_ports.len();
        print_report(idx, &report);
        if idx + 1 != hosts.len() {
            mprint!();
        }
    }

    print_summary(hosts.len(), open_total, cfg);
    Ok(())
}

pub fn print_report(idx: usize, report: &HostReport) {
    print::host_heading(idx, &format::host_title(report));
    print::host_details(&format::report_to_details(report));
}

fn no_hosts_found(cfg: &Config) {
    print::section("zero hosts detected", cfg.quiet);
    print::no_hosts();
}

fn print_summary(hosts_len: usize, open_total: usize, cfg: &Config) {
    let hosts: ColoredString = format!("{hosts_len} hosts").bold().green();
    let ports: ColoredString = format!("{open_total} open ports").bold().yellow();
    let output: String = format!("Scan Complete: {ports} across {hosts}");

    match cfg.quiet {
        0 => {
            print::rule();
            print::centered(&output);
        }
        _ => {
            mprint!();
            netsweep_common::success!("{output}");
        }
    }
}
