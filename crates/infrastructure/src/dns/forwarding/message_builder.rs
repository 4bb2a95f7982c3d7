//! DNS Message Builder
//!
//! Wire encoding and decoding of `hickory-proto` messages, plus the
//! synthesized error answers the server sends when the chain fails.

use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use naptr_lb_domain::DomainError;

/// Builds and (de)serializes DNS messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize a Message to wire format bytes
    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }

    /// Parse wire format bytes into a Message
    pub fn parse(bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS message: {}", e))
        })
    }

    /// Build an empty answer to `request` carrying `code`
    ///
    /// The question section is echoed so the client can match the reply.
    pub fn error_response(request: &Message, code: ResponseCode) -> Message {
        let mut response = Message::error_msg(request.id, request.op_code, code);
        response.metadata.recursion_desired = request.recursion_desired;
        response.metadata.recursion_available = true;
        response.queries = request.queries.clone();
        response
    }
}
