//! Timed splash sequences and the lock screen spring-back.
//!
//! Every animation here is an explicit stage machine advanced with the frame's
//! elapsed time (`advance(dt)`). Nothing reads a clock, so tests drive them with
//! virtual time and the simulator drives them with `Instant` deltas.
//!
//! # Boot Sequence
//!
//! ```text
//! Booting (2000ms, progress 0→100%) → Logo (1500ms) → Complete
//! ```
//!
//! # Shutdown Sequence
//!
//! ```text
//! ShuttingDown (2000ms, bar 0→100%) → Complete
//! ```
//!
//! Time left over after a stage ends carries into the next one, so one large
//! `advance` can cross several stages. Completion is reported exactly once.
//! An animation is owned by the power state it belongs to; dropping that state
//! discards the pending completion.

use std::time::Duration;

use crate::config::{
    BOOT_PROGRESS_INTERVAL,
    BOOT_PROGRESS_STEP,
    BOOT_STAGE_DURATION,
    LOGO_STAGE_DURATION,
    SHUTDOWN_DURATION,
    SPRING_BACK_DURATION,
};

// =============================================================================
// Stage Timer
// =============================================================================

/// Walks through a fixed list of stage durations.
#[derive(Clone, Debug)]
struct StageTimer {
    stages: &'static [Duration],
    index: usize,
    elapsed: Duration,
}

impl StageTimer {
    const fn new(stages: &'static [Duration]) -> Self {
        Self {
            stages,
            index: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt`. Returns `true` on the call that finishes the last stage.
    fn advance(&mut self, dt: Duration) -> bool {
        if self.is_complete() {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        while let Some(&duration) = self.stages.get(self.index) {
            if self.elapsed < duration {
                return false;
            }
            self.elapsed -= duration;
            self.index += 1;
        }

        self.elapsed = Duration::ZERO;
        true
    }

    const fn is_complete(&self) -> bool {
        self.index >= self.stages.len()
    }

    /// Fraction of the current stage elapsed, as a percentage (0-100).
    fn stage_percent(&self) -> u8 {
        match self.stages.get(self.index) {
            Some(duration) if !duration.is_zero() => {
                let pct = self.elapsed.as_millis() * 100 / duration.as_millis();
                pct.min(100) as u8
            }
            _ => 100,
        }
    }
}

// =============================================================================
// Boot Animation
// =============================================================================

const BOOT_STAGES: [Duration; 2] = [BOOT_STAGE_DURATION, LOGO_STAGE_DURATION];

/// Visible stage of the boot splash.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BootStage {
    /// "Booting..." with progress bar.
    Booting,
    /// Brand logo with pulsing dots.
    Logo,
    /// Sequence finished; the controller moves on to the lock screen.
    Complete,
}

/// Two-stage boot splash. Create a fresh one for every power cycle.
#[derive(Clone, Debug)]
pub struct BootAnimation {
    timer: StageTimer,
}

impl BootAnimation {
    pub const fn new() -> Self {
        Self {
            timer: StageTimer::new(&BOOT_STAGES),
        }
    }

    /// Advance the sequence. Returns `true` exactly once, when the logo stage ends.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.timer.advance(dt)
    }

    pub const fn stage(&self) -> BootStage {
        match self.timer.index {
            0 => BootStage::Booting,
            1 => BootStage::Logo,
            _ => BootStage::Complete,
        }
    }

    /// Progress bar value for the booting stage.
    ///
    /// Steps `BOOT_PROGRESS_STEP` percent every `BOOT_PROGRESS_INTERVAL`,
    /// capped at 100. Later stages report 100.
    pub fn progress(&self) -> u8 {
        if self.stage() != BootStage::Booting {
            return 100;
        }
        let ticks = self.timer.elapsed.as_millis() / BOOT_PROGRESS_INTERVAL.as_millis();
        let pct = ticks * u128::from(BOOT_PROGRESS_STEP);
        pct.min(100) as u8
    }

    /// Time spent in the current stage (drives the logo pulse).
    pub const fn stage_elapsed(&self) -> Duration {
        self.timer.elapsed
    }
}

impl Default for BootAnimation {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Shutdown Animation
// =============================================================================

const SHUTDOWN_STAGES: [Duration; 1] = [SHUTDOWN_DURATION];

/// Single-stage shutdown splash.
#[derive(Clone, Debug)]
pub struct ShutdownAnimation {
    timer: StageTimer,
}

impl ShutdownAnimation {
    pub const fn new() -> Self {
        Self {
            timer: StageTimer::new(&SHUTDOWN_STAGES),
        }
    }

    /// Advance the sequence. Returns `true` exactly once, when the splash ends.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.timer.advance(dt)
    }

    pub const fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }

    /// Shutdown bar fill (0-100).
    pub fn progress(&self) -> u8 {
        self.timer.stage_percent()
    }
}

impl Default for ShutdownAnimation {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Spring Back
// =============================================================================

/// Returns a released swipe handle to rest.
///
/// Linear decay from the release offset to 0 over `SPRING_BACK_DURATION`.
#[derive(Clone, Copy, Debug)]
pub struct SpringBack {
    from: i32,
    elapsed: Duration,
}

impl SpringBack {
    pub const fn new(from: i32) -> Self {
        Self {
            from,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the spring. Returns `true` once the handle is back at rest.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(SPRING_BACK_DURATION);
        self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= SPRING_BACK_DURATION
    }

    /// Current handle offset in pixels.
    pub fn offset(&self) -> i32 {
        let total = SPRING_BACK_DURATION.as_millis() as i64;
        let left = total - self.elapsed.as_millis() as i64;
        (i64::from(self.from) * left / total) as i32
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
