//! Which full-screen view the phone shows.
//!
//! The view is derived from the controller state every frame rather than
//! stored, so it can never disagree with the power/lock state.
//!
//! # Screens
//!
//! - [`Screen::Blank`]: powered off, display dark
//! - [`Screen::Boot`]: boot progress bar, then logo
//! - [`Screen::Shutdown`]: shutdown message and bar
//! - [`Screen::Lock`]: clock, date and swipe handle
//! - [`Screen::Home`]: app grid or the open app

use crate::state::PhoneState;

/// Visible phone screen.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    #[default]
    Blank,
    Boot,
    Shutdown,
    Lock,
    Home,
}

impl Screen {
    /// Screen shown for a controller state.
    #[inline]
    pub const fn for_state(state: PhoneState) -> Self {
        match state {
            PhoneState::Off => Self::Blank,
            PhoneState::Booting => Self::Boot,
            PhoneState::ShuttingDown => Self::Shutdown,
            PhoneState::OnLocked => Self::Lock,
            PhoneState::OnUnlocked => Self::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_default() {
        assert_eq!(Screen::default(), Screen::Blank);
    }

    #[test]
    fn test_screen_for_state() {
        assert_eq!(Screen::for_state(PhoneState::Off), Screen::Blank);
        assert_eq!(Screen::for_state(PhoneState::Booting), Screen::Boot);
        assert_eq!(Screen::for_state(PhoneState::ShuttingDown), Screen::Shutdown);
        assert_eq!(Screen::for_state(PhoneState::OnLocked), Screen::Lock);
        assert_eq!(Screen::for_state(PhoneState::OnUnlocked), Screen::Home);
    }

    #[test]
    fn test_app_tree_only_when_unlocked() {
        for state in [PhoneState::Off, PhoneState::Booting, PhoneState::OnLocked, PhoneState::ShuttingDown] {
            assert_ne!(Screen::for_state(state), Screen::Home, "{state:?} must not show apps");
        }
    }
}
