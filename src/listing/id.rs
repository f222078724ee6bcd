use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{SecondsFormat, Utc};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a listing id from the current time in milliseconds.
///
/// Ids issued by one process strictly increase: when the clock has not
/// moved past the previous id, the previous id + 1 is used instead.
pub fn next_id() -> String {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
