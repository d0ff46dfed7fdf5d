// marketplace_api/src/web/middleware/mod.rs

//! Cross-cutting request policies wrapped around every route.

pub mod rate_limit;
pub mod security_headers;

use actix_cors::Cors;

pub use rate_limit::enforce_rate_limit;
pub use security_headers::security_headers;

/// Any origin, method and header is allowed.
pub fn cors() -> Cors {
  Cors::permissive()
}
