//! Power key press-duration classification.
//!
//! The simulator has a single power key. Releasing it before
//! `LONG_PRESS_DURATION` is a short press; holding it that long fires a long
//! press immediately (while still held), and the following release is swallowed.
//!
//! Timestamps are passed in by the caller (time since simulator start), so the
//! classifier is testable without sleeping.

use std::time::Duration;

use crate::config::LONG_PRESS_DURATION;

/// Classified power key gesture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PressKind {
    Short,
    Long,
}

/// Hold tracking for the power key.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerButton {
    pressed_at: Option<Duration>,
    long_fired: bool,
}

impl PowerButton {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            long_fired: false,
        }
    }

    /// Key went down. Repeated presses while held are ignored.
    pub const fn press(&mut self, now: Duration) {
        if self.pressed_at.is_none() {
            self.pressed_at = Some(now);
            self.long_fired = false;
        }
    }

    /// Poll once per frame while held. Returns `Long` once per hold.
    pub fn update(&mut self, now: Duration) -> Option<PressKind> {
        let pressed_at = self.pressed_at?;
        if !self.long_fired && now.saturating_sub(pressed_at) >= LONG_PRESS_DURATION {
            self.long_fired = true;
            return Some(PressKind::Long);
        }
        None
    }

    /// Key went up. Returns `Short` unless the hold already fired a long press.
    ///
    /// A release that crosses the long-press threshold without an `update`
    /// in between still counts as long.
    pub fn release(&mut self, now: Duration) -> Option<PressKind> {
        let pressed_at = self.pressed_at.take()?;
        if self.long_fired {
            self.long_fired = false;
            return None;
        }
        if now.saturating_sub(pressed_at) >= LONG_PRESS_DURATION {
            Some(PressKind::Long)
        } else {
            Some(PressKind::Short)
        }
    }

    #[inline]
    pub const fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_short_press() {
        let mut button = PowerButton::new();
        button.press(ms(1000));
        assert_eq!(button.update(ms(1200)), None);
        assert_eq!(button.release(ms(1300)), Some(PressKind::Short));
        assert!(!button.is_held());
    }

    #[test]
    fn test_long_press_fires_while_held() {
        let mut button = PowerButton::new();
        button.press(ms(0));
        assert_eq!(button.update(ms(799)), None);
        assert_eq!(button.update(ms(800)), Some(PressKind::Long));
        assert_eq!(button.update(ms(2000)), None, "Long press fires once per hold");
        assert_eq!(button.release(ms(2100)), None, "Release after long press is swallowed");
    }

    #[test]
    fn test_long_release_without_update() {
        let mut button = PowerButton::new();
        button.press(ms(0));
        assert_eq!(button.release(ms(900)), Some(PressKind::Long));
    }

    #[test]
    fn test_release_without_press() {
        let mut button = PowerButton::new();
        assert_eq!(button.release(ms(50)), None);
        assert_eq!(button.update(ms(5000)), None);
    }

    #[test]
    fn test_repeat_press_keeps_original_timestamp() {
        let mut button = PowerButton::new();
        button.press(ms(0));
        button.press(ms(700));
        assert_eq!(button.update(ms(800)), Some(PressKind::Long));
    }
}
