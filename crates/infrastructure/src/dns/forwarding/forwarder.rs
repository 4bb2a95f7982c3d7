use super::message_builder::MessageBuilder;
use crate::dns::handler::{DnsHandler, ResponseWriter};
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use naptr_lb_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Terminal handler: relays the query to upstream resolvers and writes
/// their answer back through the chain.
///
/// Servers are tried in configuration order; the first one that answers
/// with a decodable message carrying the query's ID wins.
pub struct UpstreamForwarder {
    transports: Vec<UdpTransport>,
    timeout: Duration,
}

impl UpstreamForwarder {
    pub const NAME: &'static str = "forward";

    pub fn new(servers: &[SocketAddr], timeout: Duration) -> Self {
        Self {
            transports: servers.iter().copied().map(UdpTransport::new).collect(),
            timeout,
        }
    }

    async fn exchange(&self, query_bytes: &[u8], query_id: u16) -> Result<Message, DomainError> {
        for transport in &self.transports {
            let response = match transport.send(query_bytes, self.timeout).await {
                Ok(r) => r,
                Err(e) => {
                    warn!(server = %transport.server_addr(), error = %e, "Upstream failed, trying next");
                    continue;
                }
            };

            match MessageBuilder::parse(&response.bytes) {
                Ok(message) if message.id != query_id => {
                    warn!(
                        server = %transport.server_addr(),
                        expected = query_id,
                        received = message.id,
                        "Upstream answer with mismatched ID, trying next"
                    );
                }
                Ok(message) => {
                    debug!(
                        server = %transport.server_addr(),
                        protocol = response.protocol_used,
                        rcode = ?message.response_code,
                        "Upstream answered"
                    );
                    return Ok(message);
                }
                Err(e) => {
                    warn!(server = %transport.server_addr(), error = %e, "Undecodable upstream answer, trying next");
                }
            }
        }

        Err(DomainError::TransportAllServersUnreachable)
    }
}

#[async_trait]
impl DnsHandler for UpstreamForwarder {
    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        request: &Message,
    ) -> Result<ResponseCode, DomainError> {
        let query_bytes = MessageBuilder::serialize(request)?;
        let response = self.exchange(&query_bytes, request.id).await?;
        let rcode = response.response_code;

        writer.write_msg(response).await?;
        Ok(rcode)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
