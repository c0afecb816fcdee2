//! Synthetic creation timestamps within the recent past.

use chrono::Duration;
use rand::Rng;

use crate::types::Timestamp;

/// Upper bound (inclusive) of the day offset.
pub const MAX_DAYS_BACK: i64 = 60;

/// Oldest offset [`random_past_timestamp`] can produce: 60 days, 23 hours, 59 minutes.
pub fn max_offset() -> Duration {
    Duration::days(MAX_DAYS_BACK) + Duration::hours(23) + Duration::minutes(59)
}

/// `now` minus a random number of days, hours and minutes.
pub fn random_past_timestamp<R: Rng>(rng: &mut R, now: Timestamp) -> Timestamp {
    let offset = Duration::days(rng.random_range(0..=MAX_DAYS_BACK))
        + Duration::hours(rng.random_range(0..=23))
        + Duration::minutes(rng.random_range(0..=59));
    now - offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_in_the_future_or_too_old() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        for _ in 0..5_000 {
            let ts = random_past_timestamp(&mut rng, now);
            assert!(ts <= now, "{ts} is after {now}");
            assert!(now - ts <= max_offset(), "{ts} is older than allowed");
        }
    }

    #[test]
    fn offsets_are_whole_minutes() {
        let mut rng = StdRng::seed_from_u64(5);
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        for _ in 0..200 {
            let ts = random_past_timestamp(&mut rng, now);
            assert_eq!((now - ts).num_seconds() % 60, 0);
        }
    }

    #[test]
    fn max_offset_in_minutes() {
        assert_eq!(max_offset().num_minutes(), 60 * 24 * 60 + 23 * 60 + 59);
    }
}
