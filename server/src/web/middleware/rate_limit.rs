// marketplace_api/src/web/middleware/rate_limit.rs

//! Per-client rate limiting.
//!
//! Each client (keyed by peer IP) gets a `governor` quota of `max_requests`
//! per `window`: a full burst is available up front and one request is
//! replenished every `window / max_requests`. Allowed responses carry
//! `RateLimit-*` headers; rejected requests get a 429 with `Retry-After`.

use std::num::NonZeroU32;
use std::time::Duration;

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{web, ResponseError};
use governor::clock::{Clock, DefaultClock};
use governor::middleware::StateInformationMiddleware;
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// Once this many clients are tracked, fully replenished ones are dropped on
/// the next check.
const RETAIN_THRESHOLD: usize = 10_000;

type KeyedLimiter<C> = RateLimiter<String, DashMapStateStore<String>, C, StateInformationMiddleware>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
  Allowed {
    limit: u32,
    remaining: u32,
    reset_after: Duration,
  },
  Limited {
    limit: u32,
    retry_after: Duration,
  },
}

pub struct ClientRateLimiter<C: Clock = DefaultClock> {
  limiter: KeyedLimiter<C>,
  clock: C,
  limit: NonZeroU32,
  replenish_every: Duration,
}

impl ClientRateLimiter<DefaultClock> {
  pub fn new(max_requests: usize, window: Duration) -> Self {
    Self::with_clock(max_requests, window, &DefaultClock::default())
  }
}

impl<C: Clock> ClientRateLimiter<C> {
  /// A limit of 0 is treated as 1.
  pub fn with_clock(max_requests: usize, window: Duration, clock: &C) -> Self {
    let limit = u32::try_from(max_requests)
      .ok()
      .and_then(NonZeroU32::new)
      .unwrap_or(NonZeroU32::MIN);
    let replenish_every = window / limit.get();
    let quota = Quota::with_period(replenish_every)
      .map(|q| q.allow_burst(limit))
      .unwrap_or_else(|| Quota::per_second(limit));

    Self {
      limiter: RateLimiter::dashmap_with_clock(quota, clock).with_middleware::<StateInformationMiddleware>(),
      clock: clock.clone(),
      limit,
      replenish_every,
    }
  }

  /// Spends one request from `client`'s quota unless it is exhausted.
  /// Rejected requests spend nothing.
  pub fn check(&self, client: &str) -> RateDecision {
    if self.limiter.len() >= RETAIN_THRESHOLD {
      self.limiter.retain_recent();
      debug!(tracked = self.limiter.len(), "Dropped idle rate-limit entries.");
    }

    match self.limiter.check_key(&client.to_string()) {
      Ok(snapshot) => {
        let remaining = snapshot.remaining_burst_capacity();
        RateDecision::Allowed {
          limit: self.limit.get(),
          remaining,
          reset_after: self.replenish_every * (self.limit.get() - remaining),
        }
      }
      Err(not_until) => RateDecision::Limited {
        limit: self.limit.get(),
        retry_after: not_until.wait_time_from(self.clock.now()),
      },
    }
  }
}

impl<C: Clock> std::fmt::Debug for ClientRateLimiter<C> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ClientRateLimiter")
      .field("limit", &self.limit)
      .field("replenish_every", &self.replenish_every)
      .finish_non_exhaustive()
  }
}

fn ceil_secs(duration: Duration) -> u64 {
  duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}

fn client_key(req: &ServiceRequest) -> String {
  req
    .peer_addr()
    .map(|addr| addr.ip().to_string())
    .unwrap_or_else(|| "unknown".to_string())
}

fn insert_rate_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset_secs: u64) {
  headers.insert(HeaderName::from_static("ratelimit-limit"), HeaderValue::from(limit));
  headers.insert(HeaderName::from_static("ratelimit-remaining"), HeaderValue::from(remaining));
  headers.insert(HeaderName::from_static("ratelimit-reset"), HeaderValue::from(reset_secs));
}

/// `actix_web::middleware::from_fn` middleware backed by `AppState::rate_limiter`.
/// Requests pass straight through when no `AppState` is registered.
pub async fn enforce_rate_limit<B>(
  req: ServiceRequest,
  next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error>
where
  B: MessageBody + 'static,
{
  let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
    return next.call(req).await.map(ServiceResponse::map_into_left_body);
  };

  let client = client_key(&req);
  match state.rate_limiter.check(&client) {
    RateDecision::Allowed {
      limit,
      remaining,
      reset_after,
    } => {
      let mut res = next.call(req).await?;
      insert_rate_headers(res.headers_mut(), limit, remaining, ceil_secs(reset_after));
      Ok(res.map_into_left_body())
    }
    RateDecision::Limited { limit, retry_after } => {
      let retry_after_secs = ceil_secs(retry_after);
      warn!(client = %client, retry_after_secs, "Rate limit exceeded.");
      let mut response = AppError::RateLimited { retry_after_secs }.error_response();
      insert_rate_headers(response.headers_mut(), limit, 0, retry_after_secs);
      Ok(req.into_response(response).map_into_right_body())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use governor::clock::FakeRelativeClock;

  fn limiter(max_requests: usize, window_secs: u64) -> (ClientRateLimiter<FakeRelativeClock>, FakeRelativeClock) {
    let clock = FakeRelativeClock::default();
    let limiter = ClientRateLimiter::with_clock(max_requests, Duration::from_secs(window_secs), &clock);
    (limiter, clock)
  }

  #[test]
  fn allows_a_full_burst_then_rejects() {
    let (limiter, _clock) = limiter(3, 60);

    for expected_remaining in [2, 1, 0] {
      match limiter.check("10.0.0.1") {
        RateDecision::Allowed { remaining, limit, .. } => {
          assert_eq!(limit, 3);
          assert_eq!(remaining, expected_remaining);
        }
        other => panic!("expected Allowed, got {:?}", other),
      }
    }
    match limiter.check("10.0.0.1") {
      RateDecision::Limited { retry_after, .. } => assert_eq!(retry_after, Duration::from_secs(20)),
      other => panic!("expected Limited, got {:?}", other),
    }
  }

  #[test]
  fn clients_are_counted_separately() {
    let (limiter, _clock) = limiter(1, 60);

    assert!(matches!(limiter.check("a"), RateDecision::Allowed { .. }));
    assert!(matches!(limiter.check("b"), RateDecision::Allowed { .. }));
    assert!(matches!(limiter.check("a"), RateDecision::Limited { .. }));
  }

  #[test]
  fn quota_replenishes_over_the_window() {
    let (limiter, clock) = limiter(2, 10);

    limiter.check("c");
    limiter.check("c");
    assert!(matches!(limiter.check("c"), RateDecision::Limited { .. }));

    clock.advance(Duration::from_secs(5));
    match limiter.check("c") {
      RateDecision::Allowed { remaining, reset_after, .. } => {
        assert_eq!(remaining, 0);
        assert_eq!(reset_after, Duration::from_secs(10));
      }
      other => panic!("expected Allowed, got {:?}", other),
    }

    clock.advance(Duration::from_secs(10));
    assert!(matches!(limiter.check("c"), RateDecision::Allowed { remaining: 1, .. }));
    assert!(matches!(limiter.check("c"), RateDecision::Allowed { remaining: 0, .. }));
  }

  #[test]
  fn rejected_requests_do_not_extend_the_block() {
    let (limiter, clock) = limiter(1, 10);

    limiter.check("d");
    for _ in 1..10 {
      clock.advance(Duration::from_secs(1));
      assert!(matches!(limiter.check("d"), RateDecision::Limited { .. }));
    }
    clock.advance(Duration::from_secs(1));
    assert!(matches!(limiter.check("d"), RateDecision::Allowed { .. }));
  }

  #[test]
  fn zero_limit_is_treated_as_one() {
    let (limiter, _clock) = limiter(0, 60);

    assert!(matches!(limiter.check("e"), RateDecision::Allowed { limit: 1, .. }));
    assert!(matches!(limiter.check("e"), RateDecision::Limited { .. }));
  }

  #[test]
  fn partial_seconds_round_up() {
    assert_eq!(ceil_secs(Duration::from_millis(1)), 1);
    assert_eq!(ceil_secs(Duration::from_secs(5)), 5);
    assert_eq!(ceil_secs(Duration::from_millis(5_001)), 6);
  }
}
