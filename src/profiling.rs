//! Frame timing and the event log shown in the control panel.
//!
//! [`FrameStats`] keeps running statistics over the frame loop: the smoothed
//! frame period, the share of it spent ticking and drawing, the extremes and
//! the uptime. [`EventLog`] keeps the last few controller signals as short
//! text lines.
//!
//! ```ignore
//! let mut stats = FrameStats::new();
//! let mut events = EventLog::new();
//!
//! loop {
//!     let frame_start = Instant::now();
//!     for signal in phone.tick(dt).iter() {
//!         events.record(signal);
//!     }
//!     // ... draw ...
//!     let busy = frame_start.elapsed();
//!     // ... sleep out the frame ...
//!     stats.record(frame_start.elapsed(), busy);
//! }
//! ```

use core::fmt::{self, Write};
use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Frame Statistics
// =============================================================================

/// Weight of the newest sample in the smoothed frame period.
const SMOOTHING: f32 = 0.1;

/// Running frame loop statistics.
pub struct FrameStats {
    last: Duration,
    busy: Duration,
    shortest: Option<Duration>,
    longest: Duration,
    /// Smoothed frame period in microseconds.
    smoothed_us: f32,
    frames: u64,
    started: Instant,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            last: Duration::ZERO,
            busy: Duration::ZERO,
            shortest: None,
            longest: Duration::ZERO,
            smoothed_us: 0.0,
            frames: 0,
            started: Instant::now(),
        }
    }

    /// Add one frame. `period` is the full frame including the sleep, `busy`
    /// the part spent ticking and drawing.
    pub fn record(&mut self, period: Duration, busy: Duration) {
        let sample_us = period.as_micros() as f32;
        self.smoothed_us = if self.frames == 0 {
            sample_us
        } else {
            SMOOTHING.mul_add(sample_us - self.smoothed_us, self.smoothed_us)
        };

        self.last = period;
        self.busy = busy.min(period);
        self.shortest = Some(self.shortest.map_or(period, |s| s.min(period)));
        self.longest = self.longest.max(period);
        self.frames += 1;
    }

    /// Shortest frame so far, `None` before the first frame.
    #[inline]
    pub const fn shortest(&self) -> Option<Duration> {
        self.shortest
    }

    #[inline]
    pub const fn longest(&self) -> Duration {
        self.longest
    }

    /// Smoothed frame period.
    pub fn average(&self) -> Duration {
        Duration::from_micros(self.smoothed_us as u64)
    }

    /// Frames per second from the smoothed period (0 before the first frame).
    pub fn fps(&self) -> u32 {
        if self.smoothed_us < 1.0 {
            return 0;
        }
        (1_000_000.0 / self.smoothed_us).round() as u32
    }

    /// Busy share of the last frame, 0-100.
    pub fn load_percent(&self) -> u8 {
        if self.last.is_zero() {
            return 0;
        }
        (self.busy.as_micros() * 100 / self.last.as_micros()) as u8
    }

    #[inline]
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Footer line: `50fps 12%`.
    pub fn summary(&self) -> String<16> {
        let mut line = String::new();
        let _ = write!(line, "{}fps {}%", self.fps(), self.load_percent());
        line
    }

    /// Frame time line in milliseconds: `avg 20.1 min 19 max 25`.
    pub fn timings(&self) -> String<32> {
        let mut line = String::new();
        let Some(shortest) = self.shortest else {
            let _ = line.push_str("avg -- min -- max --");
            return line;
        };
        let avg_ms = self.average().as_secs_f32() * 1000.0;
        let _ = write!(
            line,
            "avg {avg_ms:.1} min {} max {}",
            shortest.as_millis(),
            self.longest.as_millis()
        );
        line
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

/// `H:MM:SS` clock for a duration. Hours are not padded.
pub fn clock_hms(elapsed: Duration) -> String<12> {
    let total = elapsed.as_secs();
    let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);
    let mut text = String::new();
    let _ = write!(text, "{hours}:{minutes:02}:{seconds:02}");
    text
}

// =============================================================================
// Event Log
// =============================================================================

/// Lines kept in the log; older lines scroll off.
pub const EVENT_LINES: usize = 6;

/// Stored line capacity (the panel fits 24 glyphs, two go to the prompt).
pub const EVENT_LINE_CAPACITY: usize = 22;

type EventLine = String<EVENT_LINE_CAPACITY>;

/// The most recent events, oldest first.
pub struct EventLog {
    lines: Deque<EventLine, EVENT_LINES>,
}

impl EventLog {
    pub const fn new() -> Self {
        Self { lines: Deque::new() }
    }

    /// Append a plain message.
    pub fn push(&mut self, message: &str) {
        self.record(&message);
    }

    /// Append anything printable, cut to the line capacity.
    pub fn record(&mut self, event: &dyn fmt::Display) {
        let mut line = Clipped(EventLine::new());
        let _ = write!(line, "{event}");

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let _ = self.lines.push_back(line.0);
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(heapless::string::StringInner::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer that drops whatever no longer fits instead of failing.
struct Clipped(EventLine);

impl Write for Clipped {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HardwareToggle, PowerState, Signal};

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_stats_empty() {
        let stats = FrameStats::new();
        assert_eq!(stats.shortest(), None);
        assert_eq!(stats.timings().as_str(), "avg -- min -- max --");
        assert_eq!(stats.fps(), 0);
        assert_eq!(stats.load_percent(), 0);
    }

    #[test]
    fn test_first_frame_seeds_average() {
        let mut stats = FrameStats::new();
        stats.record(ms(20), ms(5));
        assert_eq!(stats.average(), ms(20));
        assert_eq!(stats.fps(), 50);
        assert_eq!(stats.load_percent(), 25);
    }

    #[test]
    fn test_extremes_and_smoothing() {
        let mut stats = FrameStats::new();
        for period in [20, 10, 30] {
            stats.record(ms(period), ms(1));
        }
        assert_eq!(stats.shortest(), Some(ms(10)));
        assert_eq!(stats.longest(), ms(30));
        assert_eq!(stats.load_percent(), 3, "Load follows the last frame");

        let avg = stats.average().as_micros();
        assert!((19_000..22_000).contains(&avg), "Smoothed period moves slowly, got {avg}us");
    }

    #[test]
    fn test_summary_line() {
        let mut stats = FrameStats::new();
        stats.record(ms(20), ms(2));
        assert_eq!(stats.summary().as_str(), "50fps 10%");
    }

    #[test]
    fn test_timings_line() {
        let mut stats = FrameStats::new();
        for period in [20, 10, 30] {
            stats.record(ms(period), ms(1));
        }
        assert_eq!(stats.timings().as_str(), "avg 20.1 min 10 max 30");
    }

    #[test]
    fn test_clock_hms() {
        assert_eq!(clock_hms(Duration::ZERO).as_str(), "0:00:00");
        assert_eq!(clock_hms(Duration::from_secs(3723)).as_str(), "1:02:03");
    }

    #[test]
    fn test_event_log_scrolls() {
        let mut events = EventLog::new();
        assert!(events.is_empty());

        for n in 0..=EVENT_LINES {
            events.push(&format!("event {n}"));
        }
        assert_eq!(events.len(), EVENT_LINES);
        assert_eq!(events.lines().next(), Some("event 1"), "First line scrolled off");
        assert_eq!(events.lines().last(), Some("event 6"));
    }

    #[test]
    fn test_event_log_clips_long_lines() {
        let mut events = EventLog::new();
        events.push("Microphone toggled by the privacy switch");

        let line = events.lines().next().unwrap_or_default();
        assert_eq!(line.len(), EVENT_LINE_CAPACITY);
        assert!(line.starts_with("Microphone toggled"));
    }

    #[test]
    fn test_event_log_formats_signals() {
        let mut events = EventLog::new();
        events.record(&Signal::PowerStateChanged(PowerState::Booting));
        events.record(&Signal::VolumeChanged(80));
        events.record(&Signal::ToggleChanged(HardwareToggle::Camera, false));

        let lines: Vec<&str> = events.lines().collect();
        assert_eq!(lines, ["Power: Booting", "Volume: 80%", "Camera: OFF"]);
    }
}
