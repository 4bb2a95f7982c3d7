use super::writer::NaptrResponseWriter;
use crate::dns::handler::{next_or_failure, DnsHandler, ResponseWriter};
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use naptr_lb_application::ports::EntropySource;
use naptr_lb_application::services::RecordShuffler;
use naptr_lb_domain::{BalanceMode, DomainError};
use std::sync::Arc;

/// Chain link that rebalances NAPTR records in whatever the next handler
/// answers.
pub struct NaptrLoadBalance {
    next: Option<Arc<dyn DnsHandler>>,
    shuffler: RecordShuffler,
}

impl NaptrLoadBalance {
    pub const NAME: &'static str = "naptr_balance";

    pub fn new(
        mode: BalanceMode,
        entropy: Arc<dyn EntropySource>,
        next: Option<Arc<dyn DnsHandler>>,
    ) -> Self {
        Self {
            next,
            shuffler: RecordShuffler::new(mode, entropy),
        }
    }

    pub fn mode(&self) -> BalanceMode {
        self.shuffler.mode()
    }
}

#[async_trait]
impl DnsHandler for NaptrLoadBalance {
    async fn serve_dns(
        &self,
        writer: &mut dyn ResponseWriter,
        request: &Message,
    ) -> Result<ResponseCode, DomainError> {
        let mut balanced = NaptrResponseWriter::new(writer, &self.shuffler);
        next_or_failure(self.name(), self.next.as_deref(), &mut balanced, request).await
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
