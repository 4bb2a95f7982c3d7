use clap::Parser;
use naptr_lb_domain::CliOverrides;
use naptr_lb_infrastructure::dns::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "naptr-lb")]
#[command(version)]
#[command(about = "DNS forwarder that load balances NAPTR records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (repeatable, tried in order)
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstream: Vec<String>,

    /// Keep a single random NAPTR record per section instead of shuffling
    #[arg(long)]
    single: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream_servers: cli.upstream,
        single: cli.single,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting naptr-lb v{}", env!("CARGO_PKG_VERSION"));

    let chain = bootstrap::build_chain(&config)?;
    let handler = DnsServerHandler::new(chain);

    let dns_addr = config.server.listen_addr();
    if let Err(e) = server::start_dns_server(dns_addr, handler).await {
        error!(error = %e, "DNS server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
