//! Pre-computed static text and primitive styles.
//!
//! `MonoTextStyle::new`, `TextStyleBuilder::build` and `PrimitiveStyle::with_fill`
//! are const fn in embedded-graphics 0.8, so every fixed style lives here as a
//! `const` instead of being rebuilt each frame. Styles whose color depends on
//! state are built at the call site from the exposed font references.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_4X6, FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, MUTED, PRIMARY, RED, SLATE_LIGHT, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Text Styles
// =============================================================================

/// Small white text.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small muted text for hints and secondary lines.
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MUTED);

/// Small red text for blocked hardware.
pub const LABEL_STYLE_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, RED);

/// Small accent text for highlighted hints.
pub const LABEL_STYLE_PRIMARY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, PRIMARY);

/// Tiny white text for app names under grid icons (4x6 pixels).
pub const SMALL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_4X6, WHITE);

/// Small black text for labels on light fills.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Medium white text for titles (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white digits for the lock screen clock (`ProFont` 24pt).
pub const CLOCK_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Black fill (screen wipes).
pub const BLACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Card / track fill.
pub const CARD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE_LIGHT);
