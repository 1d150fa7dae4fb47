mod headers;
mod rate_limit;

pub use headers::{build_cors, security_headers};
pub use rate_limit::{RateLimiter, enforce_rate_limit};
