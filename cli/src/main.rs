mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, ports, scan};
use netsweep_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or_default() {
        Commands::Scan { target } => scan::scan(target, &cfg).await?,
        Commands::Discover { target } => discover::discover(target, &cfg).await?,
        Commands::Ports { addr } => ports::ports(addr, &cfg).await?,
    }

    print::closing_rule(cfg.quiet);
    Ok(())
}
