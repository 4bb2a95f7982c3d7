//! Handler chain and response writer seams.
//!
//! A query travels down a chain of [`DnsHandler`]s. Each handler either
//! answers through the [`ResponseWriter`] it was given or passes the query
//! on, possibly wrapping the writer to see the answer on its way out.

use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use naptr_lb_domain::DomainError;
use std::io;
use std::net::SocketAddr;

/// Destination of a finished DNS response.
#[async_trait]
pub trait ResponseWriter: Send {
    /// Write a structured response message.
    async fn write_msg(&mut self, response: Message) -> io::Result<()>;

    /// Write an already serialized response.
    async fn write(&mut self, wire: &[u8]) -> io::Result<usize>;

    fn local_addr(&self) -> SocketAddr;

    fn remote_addr(&self) -> SocketAddr;
}

#[async_trait]
pub trait DnsHandler: Send + Sync {
    /// Serve `request`, writing the answer to `writer`.
    ///
    /// Returns the response code that was written.
    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        request: &Message,
    ) -> Result<ResponseCode, DomainError>;

    fn name(&self) -> &'static str;
}

/// Hand the query to `next`, or fail when `name` is the end of the chain.
pub async fn next_or_failure(
    name: &str,
    next: Option<&dyn DnsHandler>,
    writer: &mut dyn ResponseWriter,
    request: &Message,
) -> Result<ResponseCode, DomainError> {
    match next {
        Some(handler) => handler.serve_dns(writer, request).await,
        None => Err(DomainError::NoNextHandler(name.to_string())),
    }
}
