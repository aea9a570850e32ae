//! Lock screen swipe-to-unlock recognizer.
//!
//! Tracks a single vertical drag. The track only exists between press and
//! release, so one gesture can unlock at most once.
//!
//! # Gesture Rules
//!
//! - Press records the start y.
//! - Drag computes `start_y - y`. A positive delta updates the track (clamped
//!   to `MAX_SWIPE`); a zero or negative delta leaves it unchanged.
//! - Release at or past `UNLOCK_THRESHOLD` reports [`GestureOutcome::Unlock`].
//!   Anything shorter springs back to rest over `SPRING_BACK_DURATION`.
//!
//! The recognizer never touches the controller. It hands the outcome back
//! to its caller, which owns the lock state.

use std::time::Duration;

use crate::animations::SpringBack;
use crate::config::{MAX_SWIPE, UNLOCK_HIGHLIGHT, UNLOCK_THRESHOLD};

/// An in-progress drag on the unlock handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GestureTrack {
    start_y: i32,
    delta: i32,
}

impl GestureTrack {
    const fn new(start_y: i32) -> Self {
        Self { start_y, delta: 0 }
    }

    /// Current upward displacement in pixels.
    #[inline]
    pub const fn delta(&self) -> i32 {
        self.delta
    }
}

/// What a pointer release on the lock screen amounted to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GestureOutcome {
    /// Swipe reached the threshold.
    Unlock,
    /// Swipe too short; the handle springs back.
    SpringBack,
    /// Release with no gesture in progress.
    Ignored,
}

/// Lock screen view state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LockScreen {
    track: Option<GestureTrack>,
    spring: Option<SpringBack>,
}

impl LockScreen {
    pub const fn new() -> Self {
        Self {
            track: None,
            spring: None,
        }
    }

    /// Start a gesture at `y` (screen-local). Cancels any running spring-back.
    pub const fn press(&mut self, y: i32) {
        self.track = Some(GestureTrack::new(y));
        self.spring = None;
    }

    /// Pointer moved to `y`. Ignored unless a gesture is in progress.
    pub fn drag(&mut self, y: i32) {
        if let Some(track) = &mut self.track {
            let delta = track.start_y - y;
            if delta > 0 {
                track.delta = delta.min(MAX_SWIPE);
            }
        }
    }

    /// Finish the gesture and report what it did.
    pub fn release(&mut self) -> GestureOutcome {
        let Some(track) = self.track.take() else {
            return GestureOutcome::Ignored;
        };

        if track.delta >= UNLOCK_THRESHOLD {
            GestureOutcome::Unlock
        } else {
            if track.delta > 0 {
                self.spring = Some(SpringBack::new(track.delta));
            }
            GestureOutcome::SpringBack
        }
    }

    /// Advance the spring-back animation.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(spring) = &mut self.spring
            && spring.advance(dt)
        {
            self.spring = None;
        }
    }

    /// Drop any gesture and animation (used when the screen is re-shown).
    pub const fn reset(&mut self) {
        self.track = None;
        self.spring = None;
    }

    /// Handle displacement to draw: the live drag, else the spring position.
    pub fn swipe_offset(&self) -> i32 {
        match (self.track, self.spring) {
            (Some(track), _) => track.delta,
            (None, Some(spring)) => spring.offset(),
            (None, None) => 0,
        }
    }

    #[inline]
    pub const fn is_dragging(&self) -> bool {
        self.track.is_some()
    }

    #[inline]
    pub const fn track(&self) -> Option<GestureTrack> {
        self.track
    }

    /// Handle ring lights up past the highlight distance.
    pub fn is_highlighted(&self) -> bool {
        self.swipe_offset() > UNLOCK_HIGHLIGHT
    }

    /// Releasing now would unlock.
    pub fn is_past_threshold(&self) -> bool {
        self.track.is_some_and(|track| track.delta >= UNLOCK_THRESHOLD)
    }

    /// Hint text under the handle.
    pub fn hint(&self) -> &'static str {
        if self.is_past_threshold() {
            "Release to unlock"
        } else {
            "Swipe up to unlock"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(lock: &mut LockScreen, from: i32, to: i32) -> GestureOutcome {
        lock.press(from);
        lock.drag(to);
        lock.release()
    }

    #[test]
    fn test_swipe_below_threshold_never_unlocks() {
        for distance in [0, 1, 50, 99] {
            let mut lock = LockScreen::new();
            assert_eq!(
                swipe(&mut lock, 300, 300 - distance),
                GestureOutcome::SpringBack,
                "{distance}px should not unlock"
            );
        }
    }

    #[test]
    fn test_swipe_at_or_past_threshold_unlocks() {
        for distance in [100, 150, 250] {
            let mut lock = LockScreen::new();
            assert_eq!(
                swipe(&mut lock, 320, 320 - distance),
                GestureOutcome::Unlock,
                "{distance}px should unlock"
            );
        }
    }

    #[test]
    fn test_unlock_fires_once_per_gesture() {
        let mut lock = LockScreen::new();
        assert_eq!(swipe(&mut lock, 300, 150), GestureOutcome::Unlock);
        assert_eq!(lock.release(), GestureOutcome::Ignored, "Second release has no gesture");
        assert!(!lock.is_dragging());
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut lock = LockScreen::new();
        lock.drag(10);
        assert_eq!(lock.swipe_offset(), 0);
        assert_eq!(lock.release(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_delta_clamped_to_max_swipe() {
        let mut lock = LockScreen::new();
        lock.press(350);
        lock.drag(0);
        assert_eq!(lock.swipe_offset(), MAX_SWIPE);
    }

    #[test]
    fn test_downward_drag_keeps_last_upward_delta() {
        let mut lock = LockScreen::new();
        lock.press(300);
        lock.drag(240);
        lock.drag(320);
        assert_eq!(lock.track().map(|t| t.delta()), Some(60), "Downward move leaves the track unchanged");
    }

    #[test]
    fn test_spring_back_after_short_swipe() {
        let mut lock = LockScreen::new();
        swipe(&mut lock, 300, 240);
        assert_eq!(lock.swipe_offset(), 60, "Spring starts at the release offset");

        lock.advance(Duration::from_millis(150));
        assert_eq!(lock.swipe_offset(), 30);

        lock.advance(Duration::from_millis(150));
        assert_eq!(lock.swipe_offset(), 0, "Handle back at rest");
    }

    #[test]
    fn test_hint_and_highlight() {
        let mut lock = LockScreen::new();
        lock.press(300);
        assert_eq!(lock.hint(), "Swipe up to unlock");
        lock.drag(240);
        assert!(lock.is_highlighted(), "60px is past the highlight distance");
        assert!(!lock.is_past_threshold());
        lock.drag(190);
        assert_eq!(lock.hint(), "Release to unlock");
    }

    #[test]
    fn test_reset_clears_gesture() {
        let mut lock = LockScreen::new();
        lock.press(300);
        lock.drag(200);
        lock.reset();
        assert_eq!(lock.release(), GestureOutcome::Ignored);
        assert_eq!(lock.swipe_offset(), 0);
    }
}
