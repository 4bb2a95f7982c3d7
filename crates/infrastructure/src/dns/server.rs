use crate::dns::forwarding::MessageBuilder;
use crate::dns::handler::{DnsHandler, ResponseWriter};
use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Writes answers back to the client a datagram came from.
pub struct UdpResponseWriter {
    socket: Arc<UdpSocket>,
    local: SocketAddr,
    peer: SocketAddr,
}

impl UdpResponseWriter {
    pub fn new(socket: Arc<UdpSocket>, peer: SocketAddr) -> io::Result<Self> {
        let local = socket.local_addr()?;
        Ok(Self {
            socket,
            local,
            peer,
        })
    }
}

#[async_trait]
impl ResponseWriter for UdpResponseWriter {
    async fn write_msg(&mut self, response: Message) -> io::Result<()> {
        let wire = MessageBuilder::serialize(&response)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        self.socket.send_to(&wire, self.peer).await?;
        Ok(())
    }

    async fn write(&mut self, wire: &[u8]) -> io::Result<usize> {
        self.socket.send_to(wire, self.peer).await
    }

    fn local_addr(&self) -> SocketAddr {
        self.local
    }

    fn remote_addr(&self) -> SocketAddr {
        self.peer
    }
}

/// Entry point of the handler chain for raw UDP datagrams.
pub struct DnsServerHandler {
    chain: Arc<dyn DnsHandler>,
}

impl DnsServerHandler {
    pub fn new(chain: Arc<dyn DnsHandler>) -> Self {
        Self { chain }
    }

    /// Decode one query datagram, run it through the chain and answer it.
    ///
    /// Datagrams that are not DNS queries are dropped. When the chain fails,
    /// a SERVFAIL echoing the question is sent instead.
    pub async fn handle_datagram(&self, socket: Arc<UdpSocket>, query: &[u8], peer: SocketAddr) {
        let request = match MessageBuilder::parse(query) {
            Ok(message) if message.message_type == MessageType::Query => message,
            Ok(_) => {
                debug!(client = %peer, "Ignoring non-query message");
                return;
            }
            Err(e) => {
                debug!(client = %peer, error = %e, "Dropping undecodable datagram");
                return;
            }
        };

        if let Some(query) = request.queries.first() {
            info!(
                domain = %query.name(),
                record_type = ?query.query_type(),
                client = %peer,
                "DNS query received"
            );
        }

        let mut writer = match UdpResponseWriter::new(socket, peer) {
            Ok(w) => w,
            Err(e) => {
                error!(error = %e, "Failed to create response writer");
                return;
            }
        };

        match self.chain.serve_dns(&mut writer, &request).await {
            Ok(rcode) => {
                debug!(client = %peer, rcode = ?rcode, "Response sent");
            }
            Err(e) => {
                warn!(client = %peer, handler = self.chain.name(), error = %e, "Query failed");
                send_error_response(&mut writer, &request, ResponseCode::ServFail).await;
            }
        }
    }
}

async fn send_error_response(
    writer: &mut dyn ResponseWriter,
    request: &Message,
    code: ResponseCode,
) {
    debug!(code = ?code, "Sending error response");
    let response = MessageBuilder::error_response(request, code);

    if let Err(e) = writer.write_msg(response).await {
        error!(error = %e, "Failed to send error response");
    }
}
