//! Phone power/lock controller.
//!
//! Owns the power phase, lock state, volume, hardware switches and the two
//! child views (lock screen, home screen). Every command returns the list of
//! [`Signal`]s it caused, so the host sees state changes as explicit
//! messages instead of reading flags after the fact.
//!
//! # State Machine
//!
//! ```text
//!            long-press                boot done
//!   Off ──────────────────▶ Booting ───────────────▶ OnLocked
//!    ▲                                              │   ▲
//!    │ shutdown done                  unlock swipe  │   │ short-press /
//!    │                                or short-press│   │ lock gesture
//!    │              long-press                      ▼   │
//!  ShuttingDown ◀──────────────────────────────── OnUnlocked
//!    ▲
//!    └──── long-press from OnLocked as well
//!
//!  battery switched off: any state ──▶ Off (immediate, no animation)
//! ```
//!
//! # Guards
//!
//! - Commands during `Booting` / `ShuttingDown` are no-ops.
//! - Volume and app navigation only work in `OnUnlocked`.
//! - Power-on is refused while the battery switch is off.
//!
//! Invalid commands are silently ignored; there is no error path.

use core::fmt;
use std::time::Duration;

use embedded_graphics::prelude::Point;
use heapless::Vec;

use super::hardware::{DeviceConfig, HardwareToggle, HardwareToggles};
use super::home::{AppId, HOME_APPS, HomeAction, HomeScreen};
use super::lock::{GestureOutcome, LockScreen};
use crate::animations::{BootAnimation, ShutdownAnimation};
use crate::config::{DEFAULT_VOLUME, MAX_VOLUME, VOLUME_STEP};

// =============================================================================
// Public State Types
// =============================================================================

/// Top-level lifecycle phase of the simulated device.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PowerState {
    Off,
    Booting,
    On,
    ShuttingDown,
}

impl PowerState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Booting => "Booting",
            Self::On => "On",
            Self::ShuttingDown => "Shutting down",
        }
    }
}

/// Whether the lock screen or the app tree is shown while powered on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// The five observable controller states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PhoneState {
    Off,
    Booting,
    OnLocked,
    OnUnlocked,
    ShuttingDown,
}

impl PhoneState {
    pub const fn power(self) -> PowerState {
        match self {
            Self::Off => PowerState::Off,
            Self::Booting => PowerState::Booting,
            Self::OnLocked | Self::OnUnlocked => PowerState::On,
            Self::ShuttingDown => PowerState::ShuttingDown,
        }
    }

    #[inline]
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::OnUnlocked)
    }
}

// =============================================================================
// Signals
// =============================================================================

/// Outbound notification from the controller to its host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signal {
    PowerStateChanged(PowerState),
    UnlockChanged(bool),
    VolumeChanged(u8),
    ToggleChanged(HardwareToggle, bool),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PowerStateChanged(state) => write!(f, "Power: {}", state.label()),
            Self::UnlockChanged(true) => f.write_str("Unlocked"),
            Self::UnlockChanged(false) => f.write_str("Locked"),
            Self::VolumeChanged(level) => write!(f, "Volume: {level}%"),
            Self::ToggleChanged(toggle, on) => {
                write!(f, "{toggle}: {}", if *on { "ON" } else { "OFF" })
            }
        }
    }
}

/// Most signals a single command can produce.
pub const MAX_SIGNALS: usize = 4;

/// Signals produced by one command or tick.
pub type Signals = Vec<Signal, MAX_SIGNALS>;

// =============================================================================
// Controller
// =============================================================================

/// Power phase with the animation that belongs to it.
///
/// Animations live inside their phase, so leaving the phase (battery cut)
/// drops the pending timer with it.
#[derive(Clone, Debug)]
enum Phase {
    Off,
    Booting(BootAnimation),
    On(LockState),
    ShuttingDown(ShutdownAnimation),
}

/// Phone power/lock state machine.
#[derive(Clone, Debug)]
pub struct PowerController {
    phase: Phase,
    volume: u8,
    hardware: HardwareToggles,
    lock_screen: LockScreen,
    home: HomeScreen,
}

impl PowerController {
    /// Powered off, volume at default, every switch enabled.
    pub const fn new() -> Self {
        Self {
            phase: Phase::Off,
            volume: DEFAULT_VOLUME,
            hardware: HardwareToggles::new(),
            lock_screen: LockScreen::new(),
            home: HomeScreen::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub const fn state(&self) -> PhoneState {
        match self.phase {
            Phase::Off => PhoneState::Off,
            Phase::Booting(_) => PhoneState::Booting,
            Phase::On(LockState::Locked) => PhoneState::OnLocked,
            Phase::On(LockState::Unlocked) => PhoneState::OnUnlocked,
            Phase::ShuttingDown(_) => PhoneState::ShuttingDown,
        }
    }

    #[inline]
    pub const fn volume(&self) -> u8 {
        self.volume
    }

    #[inline]
    pub const fn hardware(&self) -> &HardwareToggles {
        &self.hardware
    }

    /// Read-only config for the app tree.
    pub const fn device_config(&self) -> DeviceConfig {
        DeviceConfig {
            volume: self.volume,
            hardware: self.hardware,
        }
    }

    /// Running boot animation, if booting.
    pub const fn boot_animation(&self) -> Option<&BootAnimation> {
        match &self.phase {
            Phase::Booting(anim) => Some(anim),
            _ => None,
        }
    }

    /// Running shutdown animation, if shutting down.
    pub const fn shutdown_animation(&self) -> Option<&ShutdownAnimation> {
        match &self.phase {
            Phase::ShuttingDown(anim) => Some(anim),
            _ => None,
        }
    }

    #[inline]
    pub const fn lock_screen(&self) -> &LockScreen {
        &self.lock_screen
    }

    #[inline]
    pub const fn home(&self) -> &HomeScreen {
        &self.home
    }

    // -------------------------------------------------------------------------
    // Power Button
    // -------------------------------------------------------------------------

    /// Short press: toggles the lock while powered on.
    pub fn power_short_press(&mut self) -> Signals {
        let mut signals = Signals::new();
        match self.phase {
            Phase::On(LockState::Unlocked) => self.set_lock(LockState::Locked, &mut signals),
            Phase::On(LockState::Locked) => self.set_lock(LockState::Unlocked, &mut signals),
            Phase::Off | Phase::Booting(_) | Phase::ShuttingDown(_) => {}
        }
        signals
    }

    /// Long press: boots from `Off`, shuts down from either `On` state.
    pub fn power_long_press(&mut self) -> Signals {
        let mut signals = Signals::new();
        match self.phase {
            Phase::Off if self.hardware.battery => {
                self.phase = Phase::Booting(BootAnimation::new());
                push(&mut signals, Signal::PowerStateChanged(PowerState::Booting));
            }
            Phase::On(lock) => {
                self.phase = Phase::ShuttingDown(ShutdownAnimation::new());
                push(&mut signals, Signal::PowerStateChanged(PowerState::ShuttingDown));
                if lock == LockState::Unlocked {
                    push(&mut signals, Signal::UnlockChanged(false));
                }
                self.reset_views();
            }
            Phase::Off | Phase::Booting(_) | Phase::ShuttingDown(_) => {}
        }
        signals
    }

    // -------------------------------------------------------------------------
    // Volume
    // -------------------------------------------------------------------------

    pub fn volume_up(&mut self) -> Signals {
        self.change_volume(self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME))
    }

    pub fn volume_down(&mut self) -> Signals {
        self.change_volume(self.volume.saturating_sub(VOLUME_STEP))
    }

    fn change_volume(&mut self, level: u8) -> Signals {
        let mut signals = Signals::new();
        if !self.state().is_unlocked() {
            return signals;
        }
        self.home.show_volume_popup();
        if level != self.volume {
            self.volume = level;
            push(&mut signals, Signal::VolumeChanged(level));
        }
        signals
    }

    // -------------------------------------------------------------------------
    // Hardware Switches
    // -------------------------------------------------------------------------

    /// Flip a privacy switch. Cutting the battery powers off immediately.
    pub fn set_hardware_toggle(&mut self, toggle: HardwareToggle, enabled: bool) -> Signals {
        let mut signals = Signals::new();
        if !self.hardware.set(toggle, enabled) {
            return signals;
        }
        push(&mut signals, Signal::ToggleChanged(toggle, enabled));

        if toggle == HardwareToggle::Battery && !enabled {
            self.force_off(&mut signals);
        }
        signals
    }

    /// Invert a switch (control panel key).
    pub fn toggle_hardware(&mut self, toggle: HardwareToggle) -> Signals {
        self.set_hardware_toggle(toggle, !self.hardware.get(toggle))
    }

    fn force_off(&mut self, signals: &mut Signals) {
        let was = self.state();
        if was == PhoneState::Off {
            return;
        }
        self.phase = Phase::Off;
        self.reset_views();
        push(signals, Signal::PowerStateChanged(PowerState::Off));
        if was.is_unlocked() {
            push(signals, Signal::UnlockChanged(false));
        }
    }

    // -------------------------------------------------------------------------
    // App Navigation
    // -------------------------------------------------------------------------

    /// Open an app. Only while unlocked. Returns `true` if accepted.
    pub const fn open_app(&mut self, app: AppId) -> bool {
        if !self.state().is_unlocked() {
            return false;
        }
        self.home.open_app(app);
        true
    }

    /// Open the app at home grid `index`. Out-of-range indices are ignored.
    pub fn open_app_at(&mut self, index: usize) -> bool {
        HOME_APPS.get(index).is_some_and(|&app| self.open_app(app))
    }

    /// Close the current app. Only while unlocked.
    pub const fn close_app(&mut self) -> bool {
        if !self.state().is_unlocked() || self.home.current_app().is_none() {
            return false;
        }
        self.home.close_app();
        true
    }

    /// Show the app drawer. Only while unlocked with no app open.
    pub const fn open_drawer(&mut self) -> bool {
        self.state().is_unlocked() && self.home.open_drawer()
    }

    /// Back from the drawer to the grid. Only while unlocked.
    pub const fn close_drawer(&mut self) -> bool {
        if !self.state().is_unlocked() || !self.home.is_drawer_open() {
            return false;
        }
        self.home.close_drawer();
        true
    }

    /// Back key: shade first, then the current app, then the drawer. Only
    /// while unlocked.
    pub const fn back(&mut self) -> bool {
        self.state().is_unlocked() && self.home.back()
    }

    /// Lock request from the app tree.
    pub fn request_lock(&mut self) -> Signals {
        let mut signals = Signals::new();
        if self.state() == PhoneState::OnUnlocked {
            self.set_lock(LockState::Locked, &mut signals);
        }
        signals
    }

    // -------------------------------------------------------------------------
    // Pointer Input (screen-local coordinates)
    // -------------------------------------------------------------------------

    pub fn pointer_down(&mut self, point: Point) {
        match self.state() {
            PhoneState::OnLocked => self.lock_screen.press(point.y),
            PhoneState::OnUnlocked => self.home.pointer_down(point),
            _ => {}
        }
    }

    pub fn pointer_move(&mut self, point: Point) -> Signals {
        match self.state() {
            PhoneState::OnLocked => {
                self.lock_screen.drag(point.y);
                Signals::new()
            }
            PhoneState::OnUnlocked => match self.home.pointer_move(point) {
                Some(action) => self.handle_home_action(action),
                None => Signals::new(),
            },
            _ => Signals::new(),
        }
    }

    pub fn pointer_up(&mut self) -> Signals {
        match self.state() {
            PhoneState::OnLocked => {
                let mut signals = Signals::new();
                let outcome = self.lock_screen.release();
                if outcome == GestureOutcome::Unlock {
                    self.set_lock(LockState::Unlocked, &mut signals);
                }
                signals
            }
            PhoneState::OnUnlocked => match self.home.pointer_up() {
                Some(action) => self.handle_home_action(action),
                None => Signals::new(),
            },
            _ => Signals::new(),
        }
    }

    fn handle_home_action(&mut self, action: HomeAction) -> Signals {
        match action {
            HomeAction::Lock => self.request_lock(),
            HomeAction::OpenApp(app) => {
                self.open_app(app);
                Signals::new()
            }
            HomeAction::CloseApp => {
                self.close_app();
                Signals::new()
            }
            HomeAction::OpenDrawer => {
                self.open_drawer();
                Signals::new()
            }
            HomeAction::CloseDrawer => {
                self.close_drawer();
                Signals::new()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Time
    // -------------------------------------------------------------------------

    /// Advance animations and timers by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Signals {
        let mut signals = Signals::new();
        match &mut self.phase {
            Phase::Booting(anim) => {
                if anim.advance(dt) {
                    self.phase = Phase::On(LockState::Locked);
                    self.reset_views();
                    push(&mut signals, Signal::PowerStateChanged(PowerState::On));
                }
            }
            Phase::ShuttingDown(anim) => {
                if anim.advance(dt) {
                    self.phase = Phase::Off;
                    push(&mut signals, Signal::PowerStateChanged(PowerState::Off));
                }
            }
            Phase::On(LockState::Locked) => self.lock_screen.advance(dt),
            Phase::On(LockState::Unlocked) => self.home.advance(dt),
            Phase::Off => {}
        }
        signals
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn set_lock(&mut self, lock: LockState, signals: &mut Signals) {
        self.phase = Phase::On(lock);
        match lock {
            LockState::Locked => {
                self.home.reset();
                self.lock_screen.reset();
            }
            LockState::Unlocked => self.lock_screen.reset(),
        }
        push(signals, Signal::UnlockChanged(lock == LockState::Unlocked));
    }

    const fn reset_views(&mut self) {
        self.lock_screen.reset();
        self.home.reset();
    }
}

impl Default for PowerController {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a signal. `MAX_SIGNALS` covers the longest command, so this never drops.
fn push(signals: &mut Signals, signal: Signal) {
    signals.push(signal).ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
