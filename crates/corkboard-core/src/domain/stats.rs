//! Weekly posting statistics.
//!
//! The statistics window starts at the most recent Monday 00:00 in the
//! caller's timezone and has no upper bound, so a post carrying a
//! future-dated `created_at` (clock skew) still counts. Aggregation is a
//! pure reduction over pre-filtered rows; it never touches the store.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

/// Start of the current week: the most recent Monday, truncated to
/// 00:00:00.000 in `now`'s timezone.
///
/// Invoked exactly at Monday midnight this returns `now` unchanged.
pub fn week_start<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    let days_to_monday = now.weekday().num_days_from_monday() as i64;
    let monday = now.date_naive() - Duration::days(days_to_monday);
    let midnight = monday.and_time(NaiveTime::MIN);

    match now.timezone().from_local_datetime(&midnight) {
        LocalResult::Single(start) => start,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // A DST transition can skip midnight itself; the first representable
        // instant of that Monday is the boundary then.
        LocalResult::None => now
            .timezone()
            .from_local_datetime(&(midnight + Duration::hours(1)))
            .earliest()
            .unwrap_or(now),
    }
}

/// Projection of a post fetched for the statistics sweep.
///
/// Fields are optional so that a malformed row contributes zero characters
/// instead of failing the whole aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDigest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PostDigest {
    /// Characters this post contributes to the weekly totals, counted in
    /// Unicode scalar values.
    pub fn character_count(&self) -> u64 {
        let title = self.title.as_deref().map_or(0, |s| s.chars().count());
        let content = self.content.as_deref().map_or(0, |s| s.chars().count());
        (title + content) as u64
    }
}

/// Summary of the current week's posting activity. Recomputed fully on
/// every request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyStats {
    pub week_start: DateTime<FixedOffset>,
    pub total_posts: u64,
    pub total_characters: u64,
    pub average_characters_per_post: u64,
    pub posts_by_day: BTreeMap<NaiveDate, u64>,
}

impl WeeklyStats {
    /// Reduce posts already filtered to `created_at >= week_start` into the
    /// weekly summary. Days are bucketed in `week_start`'s timezone.
    pub fn aggregate<Tz: TimeZone>(week_start: DateTime<Tz>, posts: &[PostDigest]) -> Self {
        let total_posts = posts.len() as u64;
        let total_characters: u64 = posts.iter().map(PostDigest::character_count).sum();

        // Guards the division; an empty week reads as zero, not an error.
        let average_characters_per_post = if total_posts == 0 {
            0
        } else {
            ((total_characters as f64) / (total_posts as f64)).round() as u64
        };

        let mut posts_by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for post in posts {
            let day = post
                .created_at
                .with_timezone(&week_start.timezone())
                .date_naive();
            *posts_by_day.entry(day).or_insert(0) += 1;
        }

        Self {
            week_start: week_start.fixed_offset(),
            total_posts,
            total_characters,
            average_characters_per_post,
            posts_by_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn digest(title: &str, content: &str, created_at: DateTime<Utc>) -> PostDigest {
        PostDigest {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            created_at,
        }
    }

    #[test]
    fn week_start_is_always_monday_midnight_within_seven_days() {
        // Sweep two full weeks of candidate instants at awkward hours.
        for day in 0..14 {
            let now = utc(2024, 6, 3, 0, 0, 0) + Duration::days(day) + Duration::hours(15) + Duration::minutes(42);
            let start = week_start(now);

            assert_eq!(start.weekday(), Weekday::Mon);
            assert_eq!(start.time(), NaiveTime::MIN);
            let elapsed = now - start;
            assert!(elapsed >= Duration::zero());
            assert!(elapsed < Duration::days(7));
        }
    }

    #[test]
    fn sunday_afternoon_maps_to_previous_monday() {
        // 2024-06-09 is a Sunday; the week began six days earlier.
        let start = week_start(utc(2024, 6, 9, 15, 0, 0));
        assert_eq!(start, utc(2024, 6, 3, 0, 0, 0));
    }

    #[test]
    fn monday_midnight_is_its_own_week_start() {
        let monday = utc(2024, 6, 3, 0, 0, 0);
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn week_start_respects_the_local_offset() {
        // 01:00 Tuesday in Seoul is still Monday afternoon in UTC; the
        // boundary must be Monday midnight +09:00, not midnight UTC.
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = seoul.with_ymd_and_hms(2024, 6, 4, 1, 0, 0).unwrap();

        let start = week_start(now);
        assert_eq!(start, seoul.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn aggregate_matches_worked_example() {
        let start = utc(2024, 6, 3, 0, 0, 0);
        let posts = vec![
            digest("ab", "cdef", utc(2024, 6, 3, 10, 0, 0)),
            digest("", "x", utc(2024, 6, 4, 8, 0, 0)),
        ];

        let stats = WeeklyStats::aggregate(start, &posts);

        assert_eq!(stats.total_posts, 2);
        assert_eq!(stats.total_characters, 7);
        assert_eq!(stats.average_characters_per_post, 4);
        assert_eq!(stats.posts_by_day.len(), 2);
        assert_eq!(stats.posts_by_day[&date(2024, 6, 3)], 1);
        assert_eq!(stats.posts_by_day[&date(2024, 6, 4)], 1);
    }

    #[test]
    fn aggregate_of_empty_collection_is_all_zero() {
        let stats = WeeklyStats::aggregate(utc(2024, 6, 3, 0, 0, 0), &[]);

        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.total_characters, 0);
        assert_eq!(stats.average_characters_per_post, 0);
        assert!(stats.posts_by_day.is_empty());
    }

    #[test]
    fn missing_fields_contribute_zero_characters() {
        let posts = vec![PostDigest {
            title: None,
            content: None,
            created_at: utc(2024, 6, 5, 12, 0, 0),
        }];

        let stats = WeeklyStats::aggregate(utc(2024, 6, 3, 0, 0, 0), &posts);

        assert_eq!(stats.total_posts, 1);
        assert_eq!(stats.total_characters, 0);
        assert_eq!(stats.average_characters_per_post, 0);
        assert_eq!(stats.posts_by_day[&date(2024, 6, 5)], 1);
    }

    #[test]
    fn day_counts_sum_to_total_posts() {
        let posts = vec![
            digest("a", "b", utc(2024, 6, 3, 9, 0, 0)),
            digest("c", "d", utc(2024, 6, 3, 21, 0, 0)),
            digest("e", "f", utc(2024, 6, 5, 7, 0, 0)),
            digest("g", "h", utc(2024, 6, 7, 23, 59, 59)),
        ];

        let stats = WeeklyStats::aggregate(utc(2024, 6, 3, 0, 0, 0), &posts);

        let bucketed: u64 = stats.posts_by_day.values().sum();
        assert_eq!(bucketed, stats.total_posts);
    }

    #[test]
    fn average_rounds_half_away_from_zero() {
        // 1 + 1 + 3 = 5 characters over 3 posts: 1.67 rounds to 2.
        let posts = vec![
            digest("a", "", utc(2024, 6, 3, 1, 0, 0)),
            digest("", "b", utc(2024, 6, 3, 2, 0, 0)),
            digest("cd", "e", utc(2024, 6, 3, 3, 0, 0)),
        ];

        let stats = WeeklyStats::aggregate(utc(2024, 6, 3, 0, 0, 0), &posts);
        assert_eq!(stats.total_characters, 5);
        assert_eq!(stats.average_characters_per_post, 2);
    }

    #[test]
    fn characters_are_scalar_values_not_bytes() {
        let posts = vec![digest("안녕", "하세요", utc(2024, 6, 3, 10, 0, 0))];

        let stats = WeeklyStats::aggregate(utc(2024, 6, 3, 0, 0, 0), &posts);
        assert_eq!(stats.total_characters, 5);
    }

    #[test]
    fn days_are_bucketed_in_the_week_start_timezone() {
        // 16:30 UTC on Monday is already Tuesday in Seoul.
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        let start = seoul.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        let posts = vec![digest("t", "c", utc(2024, 6, 3, 16, 30, 0))];

        let stats = WeeklyStats::aggregate(start, &posts);
        assert_eq!(stats.posts_by_day[&date(2024, 6, 4)], 1);
    }
}
