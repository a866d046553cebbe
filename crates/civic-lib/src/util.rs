//! ID generation utilities.

use chrono::{DateTime, Utc};

/// Generate a new issue ID.
///
/// IDs are derived from the creation time in milliseconds, bumped past
/// `high_water` (the largest ID ever assigned or loaded) so they are
/// strictly increasing even when the clock stalls or runs backwards.
/// The `exists` closure checks for collisions.
///
/// Returns `None` once no ID above `high_water` is left.
pub fn generate_id<F>(created_at: DateTime<Utc>, high_water: i64, exists: F) -> Option<i64>
where
    F: Fn(i64) -> bool,
{
    let mut candidate = created_at
        .timestamp_millis()
        .max(high_water.checked_add(1)?);
    while exists(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_uses_timestamp() {
        let at = Utc.timestamp_millis_opt(1_717_171_717_171).unwrap();
        assert_eq!(generate_id(at, 0, |_| false), Some(1_717_171_717_171));
    }

    #[test]
    fn test_generate_id_passes_high_water() {
        let at = Utc.timestamp_millis_opt(1_000).unwrap();
        assert_eq!(generate_id(at, 5_000, |_| false), Some(5_001));
    }

    #[test]
    fn test_generate_id_same_millisecond_is_unique() {
        let at = Utc.timestamp_millis_opt(42_000).unwrap();
        let mut generated = HashSet::new();
        let mut high_water = 0;
        for _ in 0..5 {
            let id = generate_id(at, high_water, |id| generated.contains(&id)).unwrap();
            assert!(id > high_water);
            high_water = id;
            generated.insert(id);
        }
        assert_eq!(generated.len(), 5);
    }

    #[test]
    fn test_generate_id_collision_handling() {
        let at = Utc.timestamp_millis_opt(10).unwrap();
        let taken: HashSet<i64> = [10, 11, 12].into_iter().collect();
        assert_eq!(generate_id(at, 0, |id| taken.contains(&id)), Some(13));
    }

    #[test]
    fn test_generate_id_exhausted_at_top_of_range() {
        let at = Utc.timestamp_millis_opt(10).unwrap();
        assert_eq!(generate_id(at, i64::MAX, |_| false), None);
        assert_eq!(generate_id(at, i64::MAX - 1, |_| false), Some(i64::MAX));
        assert_eq!(generate_id(at, i64::MAX - 1, |id| id == i64::MAX), None);
    }
}
