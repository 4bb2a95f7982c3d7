pub mod entropy;
pub mod forwarding;
pub mod handler;
pub mod naptr_balance;
pub mod server;
pub mod transport;

pub use entropy::{FastrandEntropy, SeededEntropy};
pub use forwarding::{MessageBuilder, RecordTypeMapper, UpstreamForwarder};
pub use handler::{next_or_failure, DnsHandler, ResponseWriter};
pub use naptr_balance::{NaptrLoadBalance, NaptrResponseWriter};
pub use server::{DnsServerHandler, UdpResponseWriter};
