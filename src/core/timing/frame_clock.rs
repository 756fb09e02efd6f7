use std::time::{Duration, Instant};

use crate::core::config::errors::ConfigError;

const MILLIS_PER_SECOND: u32 = 1000;

/// Decides when the next frame is due.
///
/// The interval is kept in whole milliseconds, so 60 fps gives a 16 ms
/// interval. The first `tick` anchors the clock without producing a frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    fps: u32,
    interval: Duration,
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            fps,
            interval: interval_for(fps)?,
            last_frame: None,
        })
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<(), ConfigError> {
        self.interval = interval_for(fps)?;
        self.fps = fps;
        Ok(())
    }

    /// Sets the interval directly; the reported fps follows from it and is
    /// never below 1, even for intervals longer than a second.
    pub fn set_time_between_frames(&mut self, interval: Duration) -> Result<(), ConfigError> {
        let millis = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        self.interval = Duration::from_millis(millis);
        self.fps = (u64::from(MILLIS_PER_SECOND) / millis).max(1) as u32;
        Ok(())
    }

    /// Re-anchors the clock at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// Returns true, and advances the clock to `now`, when a frame is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let last = *self.last_frame.get_or_insert(now);

        if now.saturating_duration_since(last) < self.interval {
            return false;
        }

        self.last_frame = Some(now);
        true
    }

    /// Time left until the next frame is due, zero if overdue.
    #[must_use]
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => (last + self.interval).saturating_duration_since(now),
            None => self.interval,
        }
    }
}

fn interval_for(fps: u32) -> Result<Duration, ConfigError> {
    if fps == 0 {
        return Err(ConfigError::ZeroFrameRate);
    }
    if fps > MILLIS_PER_SECOND {
        return Err(ConfigError::FrameRateTooHigh { fps });
    }
    Ok(Duration::from_millis(u64::from(MILLIS_PER_SECOND / fps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn sixty_fps_gives_sixteen_millisecond_interval() {
        let clock = FrameClock::new(60).expect("valid fps");

        assert_eq!(clock.interval(), ms(16));
        assert_eq!(clock.fps(), 60);
    }

    #[test]
    fn zero_fps_is_rejected() {
        assert_eq!(FrameClock::new(0).unwrap_err(), ConfigError::ZeroFrameRate);

        let mut clock = FrameClock::new(30).expect("valid fps");
        assert_eq!(clock.set_fps(0), Err(ConfigError::ZeroFrameRate));
        assert_eq!(clock.interval(), ms(33));
    }

    #[test]
    fn fps_above_one_thousand_is_rejected() {
        assert_eq!(
            FrameClock::new(1001).unwrap_err(),
            ConfigError::FrameRateTooHigh { fps: 1001 }
        );
        assert_eq!(FrameClock::new(1000).expect("valid fps").interval(), ms(1));
    }

    #[test]
    fn first_tick_only_anchors() {
        let mut clock = FrameClock::new(60).expect("valid fps");
        let start = Instant::now();

        assert!(!clock.tick(start));
        assert_eq!(clock.last_frame(), Some(start));
    }

    #[test]
    fn frame_is_due_only_after_full_interval() {
        let mut clock = FrameClock::new(60).expect("valid fps");
        let start = Instant::now();
        clock.reset(start);

        assert!(!clock.tick(start + ms(15)));
        assert_eq!(clock.last_frame(), Some(start));

        assert!(clock.tick(start + ms(16)));
        assert_eq!(clock.last_frame(), Some(start + ms(16)));

        assert!(!clock.tick(start + ms(17)));
    }

    #[test]
    fn time_until_next_frame_counts_down_to_zero() {
        let mut clock = FrameClock::new(50).expect("valid fps");
        let start = Instant::now();
        clock.reset(start);

        assert_eq!(clock.time_until_next_frame(start + ms(5)), ms(15));
        assert_eq!(clock.time_until_next_frame(start + ms(40)), Duration::ZERO);
    }

    #[test]
    fn time_between_frames_drives_reported_fps() {
        let mut clock = FrameClock::new(60).expect("valid fps");

        clock.set_time_between_frames(ms(25)).expect("non-zero interval");

        assert_eq!(clock.interval(), ms(25));
        assert_eq!(clock.fps(), 40);
        assert_eq!(
            clock.set_time_between_frames(Duration::from_micros(500)),
            Err(ConfigError::ZeroFrameInterval)
        );
    }

    #[test]
    fn intervals_longer_than_a_second_report_one_fps() {
        let mut clock = FrameClock::new(60).expect("valid fps");

        clock.set_time_between_frames(ms(2500)).expect("non-zero interval");

        assert_eq!(clock.interval(), ms(2500));
        assert_eq!(clock.fps(), 1);
    }

    #[test]
    fn huge_interval_saturates_instead_of_wrapping() {
        let mut clock = FrameClock::new(60).expect("valid fps");

        clock.set_time_between_frames(Duration::MAX).expect("non-zero interval");

        assert_eq!(clock.interval(), ms(u64::MAX));
        assert_eq!(clock.fps(), 1);
    }
}
