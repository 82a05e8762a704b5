//! Live adapters for the lookup ports.
//!
//! * [`whois`]: registry lookups over TCP port 43.
//! * [`wayback`]: archive lookups over HTTP.
//! * [`http`]: the shared HTTP client and page fetch helper.

pub mod http;
pub mod wayback;
pub mod whois;

pub use wayback::WaybackClient;
pub use whois::WhoisClient;
