//! Color constants for the phone shell and control panel.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Powered-off screen, splash backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Primary text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Shutdown bar, low volume segments, disabled hardware.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Enabled toggle switches.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Mid volume segments, "Lock Screen" power label.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Spirit OS Palette
// =============================================================================

/// Brand accent (blue-violet). Boot progress, unlock highlight, app icons.
pub const PRIMARY: Rgb565 = Rgb565::new(12, 24, 31);

/// Dimmed accent for the unlock handle ring while dragging.
pub const PRIMARY_DIM: Rgb565 = Rgb565::new(6, 12, 16);

/// Lock screen / home wallpaper (slate).
pub const SLATE: Rgb565 = Rgb565::new(3, 7, 6);

/// Lighter slate for cards, shade background and the control panel.
pub const SLATE_LIGHT: Rgb565 = Rgb565::new(6, 13, 11);

/// Status bar background.
pub const STATUS_BG: Rgb565 = Rgb565::new(1, 3, 3);

/// Phone body and hardware buttons.
pub const FRAME_GRAY: Rgb565 = Rgb565::new(9, 18, 9);

/// Secondary text and unlit segments.
pub const MUTED: Rgb565 = Rgb565::new(16, 32, 16);

/// Disabled controls.
pub const DARK_GRAY: Rgb565 = Rgb565::new(6, 12, 6);
