use colored::*;
use netsweep_common::network::ports::PortSpec;
use netsweep_core::discovery::HostReport;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// "addr (hostname)" or just the address when nothing resolved.
pub fn host_title(report: &HostReport) -> String {
    match &report.hostname {
        Some(name) => format!("{} ({})", report.addr, name),
        None => report.addr.to_string(),
    }
}

pub fn report_to_details(report: &HostReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        "IPv4".to_string(),
        report.addr.to_string().color(colors::IPV4_ADDR),
    )];

    if let Some(hostname) = &report.hostname {
        details.push(("Name".to_string(), hostname.normal()));
    }

    if report.open_ports.is_empty() {
        details.push(("Ports".to_string(), "No common ports open".color(colors::NO_PORTS)));
    } else {
        details.extend(report.open_ports.iter().map(port_to_detail));
    }
    details
}

fn port_to_detail(spec: &PortSpec) -> Detail {
    let value: String = format!(
        "{} {}",
        spec.service.color(colors::SERVICE),
        "OPEN".bold().green()
    );
    (spec.port.to_string(), value.color(colors::PORT))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
