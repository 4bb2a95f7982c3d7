use crate::dns::forwarding::RecordTypeMapper;
use crate::dns::handler::ResponseWriter;
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;
use naptr_lb_application::services::RecordShuffler;
use naptr_lb_domain::RecordType;
use std::io;
use std::mem;
use std::net::SocketAddr;
use tracing::{trace, warn};

/// Response writer that rebalances NAPTR records before handing the
/// message to the writer it wraps.
pub struct NaptrResponseWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    shuffler: &'a RecordShuffler,
}

impl<'a, W: ResponseWriter + ?Sized> NaptrResponseWriter<'a, W> {
    pub fn new(inner: &'a mut W, shuffler: &'a RecordShuffler) -> Self {
        Self { inner, shuffler }
    }
}

#[async_trait]
impl<'a, W: ResponseWriter + ?Sized> ResponseWriter for NaptrResponseWriter<'a, W> {
    async fn write_msg(&mut self, mut response: Message) -> io::Result<()> {
        rewrite_response(self.shuffler, &mut response);
        self.inner.write_msg(response).await
    }

    async fn write(&mut self, wire: &[u8]) -> io::Result<usize> {
        warn!(
            client = %self.inner.remote_addr(),
            "NaptrLoadBalance called with write: not shuffling records"
        );
        self.inner.write(wire).await
    }

    fn local_addr(&self) -> SocketAddr {
        self.inner.local_addr()
    }

    fn remote_addr(&self) -> SocketAddr {
        self.inner.remote_addr()
    }
}

/// Rebalance the answer, authority and additional sections of `response`.
///
/// Failed responses and zone transfers are left alone. Returns whether the
/// sections were handed to the shuffler.
pub fn rewrite_response(shuffler: &RecordShuffler, response: &mut Message) -> bool {
    if response.response_code != ResponseCode::NoError {
        trace!(rcode = ?response.response_code, "Not balancing failed response");
        return false;
    }

    // Zone transfers must keep their exact record order
    let zone_transfer = response
        .queries
        .first()
        .and_then(|query| RecordTypeMapper::from_hickory(query.query_type()))
        .is_some_and(|rt| rt.is_zone_transfer());
    if zone_transfer {
        trace!("Not balancing zone transfer");
        return false;
    }

    response.answers = shuffler.select(mem::take(&mut response.answers), is_naptr);
    response.authorities = shuffler.select(mem::take(&mut response.authorities), is_naptr);
    response.additionals = shuffler.select(mem::take(&mut response.additionals), is_naptr);

    true
}

pub fn is_naptr(record: &Record) -> bool {
    RecordTypeMapper::from_hickory(record.record_type()) == Some(RecordType::NAPTR)
}
