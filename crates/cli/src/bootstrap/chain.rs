use naptr_lb_application::ports::EntropySource;
use naptr_lb_domain::Config;
use naptr_lb_infrastructure::dns::{
    DnsHandler, FastrandEntropy, NaptrLoadBalance, SeededEntropy, UpstreamForwarder,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Assemble `naptr_balance -> forward`.
pub fn build_chain(config: &Config) -> anyhow::Result<Arc<dyn DnsHandler>> {
    let mode = config.balance_mode()?;
    let upstreams = config.upstream.socket_addrs()?;
    let timeout = Duration::from_millis(config.upstream.timeout_ms);

    let entropy: Arc<dyn EntropySource> = match config.naptr_balance.seed {
        Some(seed) => {
            warn!(seed, "Using a fixed shuffle seed, record order is predictable");
            Arc::new(SeededEntropy::new(seed))
        }
        None => Arc::new(FastrandEntropy),
    };

    let forwarder: Arc<dyn DnsHandler> = Arc::new(UpstreamForwarder::new(&upstreams, timeout));
    let balancer = NaptrLoadBalance::new(mode, entropy, Some(forwarder));

    info!(
        mode = %balancer.mode(),
        upstreams = ?upstreams,
        timeout_ms = config.upstream.timeout_ms,
        "Handler chain: naptr_balance -> forward"
    );

    Ok(Arc::new(balancer))
}
