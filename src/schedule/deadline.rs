use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use tracing::debug;

use crate::config::DeadlineSettings;
use crate::models::{GameStatus, TimeRemaining};

const SECS_PER_HOUR: i32 = 3600;

/// Gates prediction submission against the fixed daily cutoff.
///
/// The reference zone is a fixed UTC offset (UTC-5 by default) year-round;
/// daylight saving is deliberately ignored. OPEN/CLOSED is a pure function
/// of wall-clock time, so callers may poll from any thread with no
/// coordination.
pub struct DeadlineScheduler {
    cutoff_hour: u32,
    offset: FixedOffset,
    start_date: Option<NaiveDate>,
}

impl Default for DeadlineScheduler {
    fn default() -> Self {
        Self::new(&DeadlineSettings {
            cutoff_hour: 18,
            utc_offset_hours: -5,
            start_date: None,
        })
    }
}

impl DeadlineScheduler {
    pub fn new(settings: &DeadlineSettings) -> Self {
        let offset_hours = settings.utc_offset_hours.clamp(-12, 14);
        let offset = FixedOffset::east_opt(offset_hours * SECS_PER_HOUR)
            .expect("clamped offset is within chrono's valid range");

        Self {
            cutoff_hour: settings.cutoff_hour.min(23),
            offset,
            start_date: settings.start_date,
        }
    }

    /// True while the reference-zone hour-of-day is before the cutoff. At
    /// the cutoff instant itself the window is already closed.
    pub fn is_submission_open(&self, now: DateTime<Utc>) -> bool {
        now.with_timezone(&self.offset).hour() < self.cutoff_hour
    }

    /// The next cutoff instant: today's if still ahead, otherwise
    /// tomorrow's.
    pub fn next_deadline(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        let local = now.with_timezone(&self.offset);
        let cutoff = NaiveTime::from_hms_opt(self.cutoff_hour, 0, 0)
            .expect("cutoff hour is below 24");

        let mut date = local.date_naive();
        if local.time() >= cutoff {
            date += Duration::days(1);
        }

        self.offset
            .from_local_datetime(&date.and_time(cutoff))
            .single()
            .expect("fixed offsets map local times uniquely")
    }

    /// Time left until the next cutoff, decomposed into whole hours,
    /// minutes and seconds. Truncates; never negative.
    pub fn time_until_deadline(&self, now: DateTime<Utc>) -> TimeRemaining {
        let deadline = self.next_deadline(now);
        let secs = deadline.signed_duration_since(now).num_seconds().max(0);

        TimeRemaining {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
            seconds: secs % 60,
        }
    }

    /// The reference-zone calendar date identifying today's round.
    pub fn challenge_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// 1-based day count since the configured game start date.
    pub fn day_number(&self, now: DateTime<Utc>) -> Option<i64> {
        self.start_date
            .map(|start| (self.challenge_date(now) - start).num_days() + 1)
    }

    /// One snapshot of the whole window, for countdown displays.
    pub fn status(&self, now: DateTime<Utc>) -> GameStatus {
        let status = GameStatus {
            is_open: self.is_submission_open(now),
            deadline: self.next_deadline(now),
            time_remaining: self.time_until_deadline(now),
            challenge_date: self.challenge_date(now),
            day_number: self.day_number(now),
            last_updated: now,
        };

        debug!(
            is_open = status.is_open,
            deadline = %status.deadline,
            "computed game status"
        );

        status
    }
}

/// Human countdown formatting: "2d 3h", "3h 12m", "5m 10s", "42s".
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);
    let minutes = secs / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> DeadlineScheduler {
        DeadlineScheduler::default()
    }

    // 2026-08-07 12:00:00 UTC-5 == 17:00:00 UTC
    fn reference_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_open_before_cutoff() {
        assert!(scheduler().is_submission_open(reference_noon()));
    }

    #[test]
    fn test_closed_at_exactly_cutoff() {
        // 18:00:00 UTC-5 == 23:00:00 UTC
        let at_cutoff = Utc.with_ymd_and_hms(2026, 8, 7, 23, 0, 0).unwrap();
        let sched = scheduler();

        assert!(!sched.is_submission_open(at_cutoff));

        // The next window is tomorrow's: a full 24 hours away.
        let remaining = sched.time_until_deadline(at_cutoff);
        assert_eq!(remaining.hours, 24);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, 0);
    }

    #[test]
    fn test_countdown_from_noon() {
        let remaining = scheduler().time_until_deadline(reference_noon());
        assert_eq!(remaining.hours, 6);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, 0);
    }

    #[test]
    fn test_countdown_truncates_components() {
        // 17:15:30 reference time -> 44m 30s to the 18:00 cutoff
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 22, 15, 30).unwrap();
        let remaining = scheduler().time_until_deadline(now);

        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 44);
        assert_eq!(remaining.seconds, 30);
    }

    #[test]
    fn test_components_never_negative() {
        let sched = scheduler();
        for hour in 0..24 {
            let now = Utc.with_ymd_and_hms(2026, 8, 7, hour, 31, 7).unwrap();
            let remaining = sched.time_until_deadline(now);
            assert!(remaining.hours >= 0);
            assert!(remaining.minutes >= 0);
            assert!(remaining.seconds >= 0);
            assert!(remaining.total_seconds() <= 24 * 3600);
        }
    }

    #[test]
    fn test_after_cutoff_rolls_to_tomorrow() {
        // 20:00 reference time -> deadline is tomorrow at 18:00
        let evening = Utc.with_ymd_and_hms(2026, 8, 8, 1, 0, 0).unwrap();
        let sched = scheduler();

        assert!(!sched.is_submission_open(evening));
        let deadline = sched.next_deadline(evening);
        assert_eq!(deadline.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert_eq!(deadline.hour(), 18);
    }

    #[test]
    fn test_challenge_date_uses_reference_zone() {
        // 01:00 UTC on Aug 8 is still Aug 7 in UTC-5.
        let now = Utc.with_ymd_and_hms(2026, 8, 8, 1, 0, 0).unwrap();
        assert_eq!(
            scheduler().challenge_date(now),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
        );
    }

    #[test]
    fn test_day_number_counts_from_start_date() {
        let sched = DeadlineScheduler::new(&DeadlineSettings {
            cutoff_hour: 18,
            utc_offset_hours: -5,
            start_date: NaiveDate::from_ymd_opt(2026, 8, 1),
        });

        assert_eq!(sched.day_number(reference_noon()), Some(7));
        assert_eq!(scheduler().day_number(reference_noon()), None);
    }

    #[test]
    fn test_status_snapshot_is_consistent() {
        let now = reference_noon();
        let status = scheduler().status(now);

        assert!(status.is_open);
        assert_eq!(status.last_updated, now);
        assert_eq!(status.time_remaining.hours, 6);
        assert_eq!(status.deadline.hour(), 18);
    }

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(5 * 60 + 10)), "5m 10s");
        assert_eq!(format_duration(Duration::seconds(3 * 3600 + 12 * 60)), "3h 12m");
        assert_eq!(format_duration(Duration::seconds(51 * 3600)), "2d 3h");
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }
}
