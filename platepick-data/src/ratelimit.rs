//! Per-client request throttling.
//!
//! The recommendation service asks a [`RateLimiter`] before doing any work.
//! [`WindowedRateLimiter`] implements a fixed window per client identity and
//! reads time through a [`Clock`] so tests can drive it deterministically.
//! Expired windows are swept at most once per window length, so memory
//! tracks the clients seen recently rather than every client ever seen.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Identity used when the caller's address is not known.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// The request may proceed.
    Allowed,
    /// The client has exhausted its window.
    Limited {
        /// Time until the window resets.
        retry_after: Duration,
    },
}

impl RateDecision {
    /// Whether the request may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decide whether a client may make another request.
pub trait RateLimiter: Send + Sync {
    /// Record a request from `client` and decide whether it may proceed.
    fn check(&self, client: &str) -> RateDecision;
}

impl<L: RateLimiter + ?Sized> RateLimiter for Arc<L> {
    fn check(&self, client: &str) -> RateDecision {
        (**self).check(client)
    }
}

/// `RateLimiter` that allows every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRateLimit;

impl RateLimiter for NoRateLimit {
    fn check(&self, _client: &str) -> RateDecision {
        RateDecision::Allowed
    }
}

/// Monotonic time source.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// `Clock` backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Window size and request allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed per window.
    pub limit: u32,
    /// Window length.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: 1000,
            window: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

#[derive(Debug)]
struct Windows {
    clients: HashMap<String, Window>,
    next_sweep: Instant,
}

impl Windows {
    fn sweep(&mut self, now: Instant) {
        let before = self.clients.len();
        self.clients.retain(|_, window| now <= window.reset_at);
        log::debug!(
            "swept {} expired rate-limit windows",
            before.saturating_sub(self.clients.len())
        );
    }
}

/// Fixed-window limiter keyed by client identity.
///
/// Each client gets `limit` requests per `window`, counted from its first
/// request in the window. Unknown and loopback identities are never
/// throttled.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use platepick_data::{RateLimitConfig, RateLimiter, WindowedRateLimiter};
///
/// let limiter = WindowedRateLimiter::new(RateLimitConfig {
///     limit: 1,
///     window: Duration::from_secs(60),
/// });
///
/// assert!(limiter.check("203.0.113.9").is_allowed());
/// assert!(!limiter.check("203.0.113.9").is_allowed());
/// assert!(limiter.check("127.0.0.1").is_allowed());
/// ```
#[derive(Debug)]
pub struct WindowedRateLimiter<C = SystemClock> {
    config: RateLimitConfig,
    clock: C,
    windows: Mutex<Windows>,
}

impl WindowedRateLimiter<SystemClock> {
    /// Create a limiter reading the system clock.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for WindowedRateLimiter<SystemClock> {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl<C: Clock> WindowedRateLimiter<C> {
    /// Create a limiter reading the supplied clock.
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Self {
        let next_sweep = later(clock.now(), config.window);
        Self {
            config,
            clock,
            windows: Mutex::new(Windows {
                clients: HashMap::new(),
                next_sweep,
            }),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Drop windows that have already reset.
    pub fn purge_expired(&self) {
        let now = self.clock.now();
        self.lock().sweep(now);
    }

    /// Number of clients with a live window.
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.lock().clients.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Windows> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock> RateLimiter for WindowedRateLimiter<C> {
    fn check(&self, client: &str) -> RateDecision {
        if is_exempt(client) {
            return RateDecision::Allowed;
        }
        let now = self.clock.now();
        let fresh = Window {
            count: 0,
            reset_at: later(now, self.config.window),
        };
        let mut windows = self.lock();
        if now >= windows.next_sweep {
            windows.sweep(now);
            windows.next_sweep = fresh.reset_at;
        }
        let window = windows.clients.entry(client.to_owned()).or_insert(fresh);
        if now > window.reset_at {
            *window = fresh;
        }
        if window.count >= self.config.limit {
            log::warn!("rate limit exceeded for client {client}");
            return RateDecision::Limited {
                retry_after: window.reset_at.saturating_duration_since(now),
            };
        }
        window.count = window.count.saturating_add(1);
        RateDecision::Allowed
    }
}

fn later(now: Instant, by: Duration) -> Instant {
    now.checked_add(by).unwrap_or(now)
}

/// Forwarded-for headers may list several hops, so loopback markers are
/// matched anywhere in the identity.
fn is_exempt(client: &str) -> bool {
    let identity = client.trim();
    identity.is_empty()
        || identity == UNKNOWN_CLIENT
        || ["127.0.0.1", "::1", "localhost"]
            .iter()
            .any(|marker| identity.contains(marker))
}
