//! Volume popup state with time-based expiration.
//!
//! Shown for `VOLUME_POPUP_DURATION` after every accepted volume key press;
//! another press restarts the timer.

use std::time::Duration;

use crate::config::{MAX_VOLUME, VOLUME_POPUP_DURATION, VOLUME_SEGMENTS};

/// Volume overlay timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct VolumePopup {
    remaining: Option<Duration>,
}

impl VolumePopup {
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Show (or re-arm) the popup.
    pub const fn show(&mut self) {
        self.remaining = Some(VOLUME_POPUP_DURATION);
    }

    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.remaining.is_some()
    }

    /// Count down. The popup hides itself once its time is used up.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(left) = self.remaining {
            self.remaining = left.checked_sub(dt).filter(|d| !d.is_zero());
        }
    }
}

/// Number of lit segments in the volume bar for `volume` (rounded up).
pub fn lit_segments(volume: u8) -> u32 {
    let volume = u32::from(volume.min(MAX_VOLUME));
    (volume * VOLUME_SEGMENTS).div_ceil(u32::from(MAX_VOLUME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_hidden_by_default() {
        assert!(!VolumePopup::new().is_visible());
    }

    #[test]
    fn test_popup_expires() {
        let mut popup = VolumePopup::new();
        popup.show();
        popup.advance(Duration::from_millis(1999));
        assert!(popup.is_visible(), "Still visible just before 2s");
        popup.advance(Duration::from_millis(1));
        assert!(!popup.is_visible(), "Hidden at exactly 2s");
    }

    #[test]
    fn test_popup_rearm_restarts_timer() {
        let mut popup = VolumePopup::new();
        popup.show();
        popup.advance(Duration::from_millis(1500));
        popup.show();
        popup.advance(Duration::from_millis(1500));
        assert!(popup.is_visible(), "Re-arming should restart the 2s window");
    }

    #[test]
    fn test_lit_segments() {
        assert_eq!(lit_segments(0), 0);
        assert_eq!(lit_segments(10), 2, "1.5 segments rounds up");
        assert_eq!(lit_segments(50), 8);
        assert_eq!(lit_segments(100), VOLUME_SEGMENTS);
    }
}
