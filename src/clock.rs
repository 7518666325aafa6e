use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// Wall clock for a single game: starts when the game is created and stops
/// exactly once, on the terminal transition.
///
/// The clock never schedules anything itself; the host's event loop drives it
/// through [`GameClock::tick_at`] on a roughly one-second interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    last_whole_secs: i64,
}

impl GameClock {
    pub fn start_now() -> Self {
        Self::started_at(Utc::now())
    }

    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            ended_at: None,
            last_whole_secs: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Stops the clock; later calls keep the first end time.
    pub fn stop_at(&mut self, now: DateTime<Utc>) {
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    pub fn stop_now(&mut self) {
        self.stop_at(Utc::now());
    }

    /// Final duration in whole seconds. `None` while the clock is running:
    /// live elapsed display is driven by ticks instead.
    pub fn elapsed_secs(&self) -> Option<u32> {
        self.ended_at
            .map(|ended_at| (ended_at - self.started_at).num_seconds().max(0) as u32)
    }

    /// Advances the clock, returning the new `"MM:SS"` display whenever the
    /// whole-second elapsed value moved since the previous tick. Returns
    /// `None` on sub-second ticks and always once stopped.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Option<String> {
        if self.ended_at.is_some() {
            return None;
        }

        let secs = (now - self.started_at).num_seconds().max(0);
        if secs > self.last_whole_secs {
            self.last_whole_secs = secs;
            Some(format_clock(secs as u32))
        } else {
            None
        }
    }

    pub fn tick_now(&mut self) -> Option<String> {
        self.tick_at(Utc::now())
    }
}

/// Zero-padded minutes and seconds; minutes grow unpadded past 99.
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(9 * 60 + 7), "09:07");
    }

    #[test]
    fn minutes_overflow_two_digits() {
        assert_eq!(format_clock(100 * 60 + 5), "100:05");
    }

    #[test]
    fn ticks_only_on_second_boundaries() {
        let mut clock = GameClock::started_at(epoch());

        assert_eq!(clock.tick_at(epoch() + Duration::milliseconds(500)), None);
        assert_eq!(
            clock.tick_at(epoch() + Duration::seconds(1)),
            Some("00:01".to_string())
        );
        assert_eq!(clock.tick_at(epoch() + Duration::seconds(1)), None);
        assert_eq!(
            clock.tick_at(epoch() + Duration::seconds(62)),
            Some("01:02".to_string())
        );
    }

    #[test]
    fn stopped_clock_never_ticks_again() {
        let mut clock = GameClock::started_at(epoch());
        clock.stop_at(epoch() + Duration::seconds(5));

        assert!(!clock.is_running());
        assert_eq!(clock.tick_at(epoch() + Duration::seconds(10)), None);
        assert_eq!(clock.elapsed_secs(), Some(5));
    }

    #[test]
    fn elapsed_is_unset_while_running() {
        let mut clock = GameClock::started_at(epoch());
        assert_eq!(clock.elapsed_secs(), None);

        // the first stop wins
        clock.stop_at(epoch() + Duration::seconds(3));
        clock.stop_at(epoch() + Duration::seconds(9));
        assert_eq!(clock.elapsed_secs(), Some(3));
    }
}
