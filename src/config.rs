//! Application configuration constants.
//!
//! Layout positions are computed at compile time as `const` so drawing code
//! and hit-testing share the exact same geometry. Timing constants are plain
//! `Duration`s; nothing in the state machines reads a wall clock, the frame
//! loop feeds elapsed time in.
//!
//! ```text
//! ┌──────────────┬────────────┐
//! │ ┌──────────┐ │  Hardware  │
//! │ │  status  │ │  Controls  │
//! │ │          │ │            │
//! │ │  phone   │ │  power     │
//! │ │  screen  │ │  volume    │
//! │ │          │ │  switches  │
//! │ │          │ │            │
//! │ └──────────┘ │  log       │
//! └──────────────┴────────────┘
//!     200px          160px
//! ```

use std::time::Duration;

use embedded_graphics::prelude::Point;

// =============================================================================
// Window Configuration
// =============================================================================

/// Simulator display width in pixels (phone frame + control panel).
pub const SCREEN_WIDTH: u32 = PHONE_WIDTH + PANEL_WIDTH;

/// Simulator display height in pixels.
pub const SCREEN_HEIGHT: u32 = 400;

/// Window scale factor (each display pixel becomes 2x2 on the desktop).
pub const WINDOW_SCALE: u32 = 2;

// =============================================================================
// Phone Frame Layout
// =============================================================================

/// Outer width of the phone body.
pub const PHONE_WIDTH: u32 = 200;

/// Outer height of the phone body.
pub const PHONE_HEIGHT: u32 = SCREEN_HEIGHT;

/// Bezel thickness around the phone screen.
pub const BEZEL: u32 = 8;

/// Top-left X of the phone screen (display coordinates).
pub const PHONE_SCREEN_X: i32 = BEZEL as i32;

/// Top-left Y of the phone screen (display coordinates).
pub const PHONE_SCREEN_Y: i32 = BEZEL as i32;

/// Phone screen width in logical pixels.
pub const PHONE_SCREEN_WIDTH: u32 = PHONE_WIDTH - 2 * BEZEL;

/// Phone screen height in logical pixels.
pub const PHONE_SCREEN_HEIGHT: u32 = PHONE_HEIGHT - 2 * BEZEL;

/// Horizontal center of the phone screen (screen-local).
pub const PHONE_CENTER_X: i32 = (PHONE_SCREEN_WIDTH / 2) as i32;

/// Vertical center of the phone screen (screen-local).
pub const PHONE_CENTER_Y: i32 = (PHONE_SCREEN_HEIGHT / 2) as i32;

/// Status bar height at the top of every powered-on screen.
pub const STATUS_BAR_HEIGHT: u32 = 16;

/// Fixed charge level shown in the status bar.
pub const BATTERY_LEVEL: u8 = 87;

// =============================================================================
// Control Panel Layout
// =============================================================================

/// Width of the hardware control panel on the right of the phone.
pub const PANEL_WIDTH: u32 = 160;

/// Left edge of the control panel (display coordinates).
pub const PANEL_X: i32 = PHONE_WIDTH as i32;

// =============================================================================
// Home Screen Layout
// =============================================================================

/// App grid columns.
pub const GRID_COLUMNS: u32 = 4;

/// Width of one app grid cell.
pub const GRID_CELL_WIDTH: u32 = PHONE_SCREEN_WIDTH / GRID_COLUMNS;

/// Height of one app grid cell (icon + label).
pub const GRID_CELL_HEIGHT: u32 = 56;

/// Top of the app grid (screen-local).
pub const GRID_TOP: i32 = STATUS_BAR_HEIGHT as i32 + 40;

/// Side length of an app icon square.
pub const ICON_SIZE: u32 = 30;

/// Round button under the home grid that opens the app drawer.
pub const DRAWER_BUTTON_CENTER: Point = Point::new(PHONE_CENTER_X, GRID_TOP + 2 * GRID_CELL_HEIGHT as i32 + 24);

/// Diameter of the drawer button.
pub const DRAWER_BUTTON_SIZE: u32 = 28;

/// Top of the app grid inside the drawer, below its header row.
pub const DRAWER_GRID_TOP: i32 = STATUS_BAR_HEIGHT as i32 + APP_HEADER_HEIGHT as i32 + 8;

/// Height of the header row inside an open app (back arrow + title).
pub const APP_HEADER_HEIGHT: u32 = 24;

/// Width of the tappable back arrow area in the app header.
pub const BACK_BUTTON_WIDTH: u32 = 40;

// =============================================================================
// Power / Animation Timing
// =============================================================================

/// Boot stage 1: "Booting..." with progress bar.
pub const BOOT_STAGE_DURATION: Duration = Duration::from_millis(2000);

/// Boot stage 2: logo splash.
pub const LOGO_STAGE_DURATION: Duration = Duration::from_millis(1500);

/// Shutdown splash duration.
pub const SHUTDOWN_DURATION: Duration = Duration::from_millis(2000);

/// Boot progress advances by `BOOT_PROGRESS_STEP` percent every interval.
pub const BOOT_PROGRESS_INTERVAL: Duration = Duration::from_millis(40);

/// Percent added per progress interval.
pub const BOOT_PROGRESS_STEP: u32 = 2;

/// Holding the power key at least this long counts as a long press.
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(800);

// =============================================================================
// Gesture Thresholds (logical pixels)
// =============================================================================

/// Upward swipe on the lock screen needed to unlock.
pub const UNLOCK_THRESHOLD: i32 = 100;

/// Swipe distance at which the unlock handle lights up.
pub const UNLOCK_HIGHLIGHT: i32 = 50;

/// Maximum tracked swipe distance.
pub const MAX_SWIPE: i32 = 200;

/// Spring-back time for an unlock swipe released below threshold.
pub const SPRING_BACK_DURATION: Duration = Duration::from_millis(300);

/// Drags starting above this line can pull the notification shade.
pub const SHADE_ZONE: i32 = 100;

/// Downward pull needed to open the notification shade.
pub const SHADE_OPEN_THRESHOLD: i32 = 100;

/// Maximum tracked shade pull.
pub const MAX_SHADE_PULL: i32 = 300;

/// Drags starting this close to the bottom edge can re-lock the phone.
pub const RELOCK_ZONE: i32 = 100;

/// Upward swipe from the bottom zone needed to re-lock.
pub const RELOCK_THRESHOLD: i32 = 50;

/// Pointer travel below this is treated as a tap.
pub const TAP_SLOP: i32 = 6;

// =============================================================================
// Volume
// =============================================================================

/// Volume level after power-up of the simulator.
pub const DEFAULT_VOLUME: u8 = 50;

/// Upper volume bound.
pub const MAX_VOLUME: u8 = 100;

/// Change per volume key press.
pub const VOLUME_STEP: u8 = 10;

/// How long the volume popup stays on screen after a change.
pub const VOLUME_POPUP_DURATION: Duration = Duration::from_millis(2000);

/// Number of segments in the volume popup bar.
pub const VOLUME_SEGMENTS: u32 = 15;

// =============================================================================
// Frame Loop
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
