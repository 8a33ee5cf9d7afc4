use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Seconds the /admin/health response may be served from cache.
pub const HEALTH_CACHE_SECS: i64 = 5;
