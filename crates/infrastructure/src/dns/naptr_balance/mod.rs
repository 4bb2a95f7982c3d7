//! NAPTR load balancing.
//!
//! Clients that always take the first NAPTR record of an answer end up
//! hammering the same target. This handler wraps the response writer of
//! the rest of the chain and reorders (or thins out) NAPTR records on the
//! way out, so that successive answers favour different targets.

mod plugin;
mod writer;

pub use plugin::NaptrLoadBalance;
pub use writer::{is_naptr, rewrite_response, NaptrResponseWriter};
