// src/shared/storage/id.rs
use chrono::Utc;

/// Record ids are millisecond timestamps. Two creates landing in the same
/// millisecond must still get distinct ids, so the generator bumps past the
/// collection's current maximum. Callers invoke this inside the store's
/// `update` closure, where the collection is stable.
pub fn next_id<I>(existing: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    let now = Utc::now().timestamp_millis();

    match existing.into_iter().max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}
