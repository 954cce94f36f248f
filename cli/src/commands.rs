pub mod discover;
pub mod ports;
pub mod scan;

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use netsweep_common::config::{self, Config, LivenessMethod};
use netsweep_common::network::ports::PORT_TABLE;
use netsweep_common::network::{interface, range};
use netsweep_core::discovery::ScanService;

use crate::terminal::{colors, print, spinner};

#[derive(Parser)]
#[command(name = "netsweep", version)]
#[command(about = "Find live hosts on your /24 and the common services they expose.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Maximum number of hosts probed at the same time
    #[arg(short, long, global = true, default_value_t = config::DEFAULT_MAX_CONCURRENCY)]
    pub concurrency: usize,

    /// Maximum number of ports probed at the same time on one host
    #[arg(long, global = true, default_value_t = PORT_TABLE.len())]
    pub port_concurrency: usize,

    /// Host liveness timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 1_000)]
    pub host_timeout: u64,

    /// Port connect timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 1_000)]
    pub port_timeout: u64,

    /// Reverse DNS timeout in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = 1_000)]
    pub dns_timeout: u64,

    /// How to decide whether a host is alive: "ping" or "tcp"
    #[arg(short, long, global = true, default_value_t = LivenessMethod::Ping)]
    pub method: LivenessMethod,

    /// Skip reverse DNS lookups
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep a /24 and inspect every live host (default)
    #[command(alias = "s")]
    Scan {
        /// Any address inside the /24 to sweep; defaults to this machine's address
        #[arg(short, long)]
        target: Option<Ipv4Addr>,
    },
    /// Only list the live hosts of a /24
    #[command(alias = "d")]
    Discover {
        /// Any address inside the /24 to sweep; defaults to this machine's address
        #[arg(short, long)]
        target: Option<Ipv4Addr>,
    },
    /// Resolve and port-scan a single host
    #[command(alias = "p")]
    Ports { addr: Ipv4Addr },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Scan { target: None }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            max_concurrency: self.concurrency,
            port_concurrency: self.port_concurrency,
            host_timeout: Duration::from_millis(self.host_timeout),
            port_timeout: Duration::from_millis(self.port_timeout),
            dns_timeout: Duration::from_millis(self.dns_timeout),
            method: self.method,
            no_dns: self.no_dns,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

/// The address whose /24 gets swept: the explicit target, or our own address.
pub fn sample_address(target: Option<Ipv4Addr>, cfg: &Config) -> Ipv4Addr {
    let sample: Ipv4Addr = target.unwrap_or_else(interface::local_ipv4);
    let net = range::subnet_of(sample);

    if cfg.quiet == 0 {
        let key: &str = if target.is_some() { "Target" } else { "Your IP" };
        print::field(key, sample.to_string().color(colors::IPV4_ADDR));
        let network: String = format!("{}/{}", net.network(), net.prefix());
        print::field("Network", network.color(colors::TEXT_DEFAULT));
        print::field("Method", cfg.method.to_string().color(colors::ACCENT));
    }
    sample
}

/// The spinner only draws on a normal run; `-q` and up keep the terminal still.
fn shows_spinner(quiet: u8) -> bool {
    quiet == 0
}

/// Runs the network sweep, behind a spinner unless quiet, and prints the host count.
pub async fn run_sweep(sample: Ipv4Addr, cfg: &Config) -> (ScanService, Vec<Ipv4Addr>) {
    let mut service: ScanService = ScanService::new(cfg);

    print::section("sweeping network", cfg.quiet);
    if shows_spinner(cfg.quiet) {
        service = service.on_host_found(Arc::new(spinner::report_discovery_progress));
        spinner::start("This may take a minute...");
    }

    let start_time: Instant = Instant::now();
    let hosts: Vec<Ipv4Addr> = service.discover(sample).await;
    spinner::finish();

    let count: ColoredString = format!("{} active hosts", hosts.len()).bold().green();
    let took: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    netsweep_common::success!("Found {count} in {took}");

    (service, hosts)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
