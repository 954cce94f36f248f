#![cfg(test)]
use netsweep_common::config::Config;
use netsweep_common::network::ports::{PortSpec, PORT_TABLE};
use netsweep_core::discovery::{HostReport, ScanService};
use netsweep_core::scanner::NetworkSweep;
use std::net::Ipv4Addr;
use std::sync::atomic::Ordering;

use crate::util::FakeNetwork;

fn lan(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 1, last)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn sweep_finds_exactly_the_scripted_hosts() {
    let net = FakeNetwork::new().host(lan(50)).host(lan(1)).build();
    let service = ScanService::with_parts(net.clone(), net.clone(), net.clone(), &Config::default());

    let hosts = service.discover(lan(100)).await;

    assert_eq!(hosts, vec![lan(1), lan(50)]);
    assert_eq!(net.host_probes.load(Ordering::SeqCst), 254);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn full_scan_reports_hosts_names_and_ports() {
    let net = FakeNetwork::new()
        .host(lan(1))
        .host(lan(50))
        .open(lan(1), 80)
        .open(lan(1), 22)
        .open(lan(1), 53)
        .open(lan(50), 9999)
        .named(lan(1), "router.lan")
        .build();
    let service = ScanService::with_parts(net.clone(), net.clone(), net.clone(), &Config::default());

    let reports = service.scan(lan(100)).await;

    assert_eq!(
        reports,
        vec![
            HostReport {
                addr: lan(1),
                hostname: Some("router.lan".to_string()),
                open_ports: vec![
                    PortSpec::new(22, "SSH"),
                    PortSpec::new(53, "DNS"),
                    PortSpec::new(80, "HTTP"),
                ],
            },
            HostReport {
                addr: lan(50),
                hostname: None,
                open_ports: vec![],
            },
        ]
    );
    assert_eq!(net.port_probes.load(Ordering::SeqCst), 2 * PORT_TABLE.len());
}

#[tokio::test]
async fn empty_network_reports_nothing_and_skips_port_sweeps() {
    let net = FakeNetwork::new().build();
    let service = ScanService::with_parts(net.clone(), net.clone(), net.clone(), &Config::default());

    assert!(service.scan(lan(7)).await.is_empty());
    assert_eq!(net.port_probes.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn low_concurrency_still_covers_the_whole_subnet() {
    let net = FakeNetwork::new().host(lan(254)).host(lan(2)).build();
    let cfg = Config {
        max_concurrency: 3,
        port_concurrency: 1,
        ..Config::default()
    };
    let service = ScanService::with_parts(net.clone(), net.clone(), net.clone(), &cfg);

    assert_eq!(service.discover(lan(9)).await, vec![lan(2), lan(254)]);
    assert_eq!(net.host_probes.load(Ordering::SeqCst), 254);
}

#[test]
fn candidates_never_include_network_or_broadcast() {
    for sample in [lan(0), lan(1), lan(100), lan(255), Ipv4Addr::new(10, 9, 8, 7)] {
        let candidates = NetworkSweep::candidates(sample);
        assert_eq!(candidates.len(), 254);
        assert!(candidates.windows(2).all(|w| w[0] < w[1]));
        assert!(candidates
            .iter()
            .all(|ip| (1..=254).contains(&ip.octets()[3])));
    }
}
