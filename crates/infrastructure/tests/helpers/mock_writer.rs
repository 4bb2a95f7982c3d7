use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use naptr_lb_application::ports::EntropySource;
use naptr_lb_domain::DomainError;
use naptr_lb_infrastructure::dns::{DnsHandler, MessageBuilder, ResponseWriter};
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writer that keeps everything written to it
pub struct RecordingWriter {
    pub messages: Vec<Message>,
    pub raw: Vec<Vec<u8>>,
    fail_with: Option<io::ErrorKind>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            raw: Vec::new(),
            fail_with: None,
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::new()
        }
    }

    pub fn last(&self) -> &Message {
        self.messages.last().expect("nothing was written")
    }
}

#[async_trait]
impl ResponseWriter for RecordingWriter {
    async fn write_msg(&mut self, response: Message) -> io::Result<()> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, "mock write failure"));
        }
        self.messages.push(response);
        Ok(())
    }

    async fn write(&mut self, wire: &[u8]) -> io::Result<usize> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, "mock write failure"));
        }
        self.raw.push(wire.to_vec());
        Ok(wire.len())
    }

    fn local_addr(&self) -> SocketAddr {
        "127.0.0.1:53".parse().unwrap()
    }

    fn remote_addr(&self) -> SocketAddr {
        "192.0.2.10:40000".parse().unwrap()
    }
}

/// Next handler that answers every query with the same message
pub struct StaticAnswerHandler {
    answer: Message,
    raw: bool,
}

impl StaticAnswerHandler {
    pub fn new(answer: Message) -> Self {
        Self { answer, raw: false }
    }

    /// Answer through the raw byte path instead of `write_msg`
    pub fn raw(answer: Message) -> Self {
        Self { answer, raw: true }
    }
}

#[async_trait]
impl DnsHandler for StaticAnswerHandler {
    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        _request: &Message,
    ) -> Result<ResponseCode, DomainError> {
        if self.raw {
            let wire = MessageBuilder::serialize(&self.answer)?;
            writer.write(&wire).await?;
        } else {
            writer.write_msg(self.answer.clone()).await?;
        }
        Ok(self.answer.response_code)
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Replays a fixed list of draws, cycling when exhausted
pub struct ScriptedEntropy {
    values: Vec<u16>,
    position: AtomicUsize,
}

impl ScriptedEntropy {
    pub fn new(values: &[u16]) -> Self {
        Self {
            values: values.to_vec(),
            position: AtomicUsize::new(0),
        }
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_u16(&self) -> u16 {
        let n = self.position.fetch_add(1, Ordering::SeqCst);
        self.values[n % self.values.len()]
    }
}
