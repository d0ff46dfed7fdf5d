// marketplace_api/src/web/middleware/security_headers.rs

use actix_web::middleware::DefaultHeaders;

/// Hardening headers added to every response that does not already set them.
pub fn security_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("Content-Security-Policy", "default-src 'self'; frame-ancestors 'self'; object-src 'none'"))
    .add(("Cross-Origin-Opener-Policy", "same-origin"))
    .add(("Cross-Origin-Resource-Policy", "cross-origin"))
    .add(("Origin-Agent-Cluster", "?1"))
    .add(("Referrer-Policy", "no-referrer"))
    .add(("Strict-Transport-Security", "max-age=15552000; includeSubDomains"))
    .add(("X-Content-Type-Options", "nosniff"))
    .add(("X-DNS-Prefetch-Control", "off"))
    .add(("X-Download-Options", "noopen"))
    .add(("X-Frame-Options", "SAMEORIGIN"))
    .add(("X-Permitted-Cross-Domain-Policies", "none"))
}
