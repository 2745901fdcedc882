use std::sync::atomic::{AtomicUsize, Ordering};

use time::{OffsetDateTime, PrimitiveDateTime};

pub mod assets;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Local wall-clock time as a zone-less timestamp, matching the form the
/// departure inputs use. Falls back to UTC when the local offset cannot be
/// determined.
pub fn local_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}
