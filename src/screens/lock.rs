//! Lock screen: clock, date, branding and the swipe handle.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────┐
//! │ 14:05 ▂▄▆ GPS 87 │  status bar
//! │      14:05       │  ProFont clock
//! │ Tuesday, March 5 │
//! │      [lock]      │
//! │    Spirit OS     │
//! │                  │
//! │       (^)        │  handle, lifted by the swipe offset
//! │ Swipe up to unl. │
//! │ No new notific.  │
//! └──────────────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder};
use embedded_graphics::text::Text;

use super::draw_brand_icon;
use crate::clock::ClockText;
use crate::colors::{MUTED, PRIMARY, PRIMARY_DIM, SLATE, WHITE};
use crate::config::PHONE_CENTER_X;
use crate::state::{HardwareToggles, LockScreen};
use crate::styles::{
    CENTERED,
    CLOCK_STYLE_WHITE,
    LABEL_STYLE_MUTED,
    LABEL_STYLE_PRIMARY,
    LABEL_STYLE_WHITE,
};
use crate::widgets::{draw_home_indicator, draw_status_bar};

// =============================================================================
// Layout Constants
// =============================================================================

const CLOCK_POS: Point = Point::new(PHONE_CENTER_X, 76);
const DATE_POS: Point = Point::new(PHONE_CENTER_X, 96);

const ICON_CENTER: Point = Point::new(PHONE_CENTER_X, 146);
const ICON_SIZE: u32 = 40;
const BRAND_POS: Point = Point::new(PHONE_CENTER_X, 186);

/// Handle center at rest.
pub const HANDLE_REST_Y: i32 = 290;
const HANDLE_DIAMETER: u32 = 36;

/// Hint baseline below the handle center.
const HINT_OFFSET: i32 = 32;

const NOTIFICATIONS_POS: Point = Point::new(PHONE_CENTER_X, 364);

const HANDLE_IDLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(SLATE)
    .stroke_color(MUTED)
    .stroke_width(2)
    .build();

const HANDLE_HIGHLIGHT: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(PRIMARY_DIM)
    .stroke_color(PRIMARY)
    .stroke_width(2)
    .build();

const CHEVRON_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the lock screen (screen-local).
pub fn draw_lock_screen<D>(
    display: &mut D,
    lock: &LockScreen,
    clock: &ClockText,
    hardware: &HardwareToggles,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(SLATE).ok();
    draw_status_bar(display, &clock.time, hardware);

    Text::with_text_style(&clock.time, CLOCK_POS, CLOCK_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(&clock.date, DATE_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_brand_icon(display, ICON_CENTER, ICON_SIZE);
    Text::with_text_style("Spirit OS", BRAND_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    draw_handle(display, lock);

    Text::with_text_style("No new notifications", NOTIFICATIONS_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    draw_home_indicator(display);
}

/// Handle center for the current swipe offset.
pub fn handle_center(lock: &LockScreen) -> Point {
    Point::new(PHONE_CENTER_X, HANDLE_REST_Y - lock.swipe_offset())
}

fn draw_handle<D>(display: &mut D, lock: &LockScreen)
where
    D: DrawTarget<Color = Rgb565>,
{
    let center = handle_center(lock);
    let highlighted = lock.is_highlighted();

    let style = if highlighted { HANDLE_HIGHLIGHT } else { HANDLE_IDLE };
    Circle::with_center(center, HANDLE_DIAMETER).into_styled(style).draw(display).ok();

    // Up chevron
    Line::new(center + Point::new(-7, 3), center + Point::new(0, -4))
        .into_styled(CHEVRON_STYLE)
        .draw(display)
        .ok();
    Line::new(center + Point::new(0, -4), center + Point::new(7, 3))
        .into_styled(CHEVRON_STYLE)
        .draw(display)
        .ok();

    let hint_style: MonoTextStyle<'static, Rgb565> =
        if highlighted { LABEL_STYLE_PRIMARY } else { LABEL_STYLE_MUTED };
    Text::with_text_style(lock.hint(), center + Point::new(0, HINT_OFFSET), hint_style, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH};
    use crate::test_display::FrameBuffer;

    fn render(lock: &LockScreen) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        let clock = ClockText::default();
        draw_lock_screen(&mut fb, lock, &clock, &HardwareToggles::new());
        fb
    }

    #[test]
    fn test_handle_follows_swipe() {
        let mut lock = LockScreen::new();
        assert_eq!(handle_center(&lock).y, HANDLE_REST_Y);

        lock.press(300);
        lock.drag(260);
        assert_eq!(handle_center(&lock).y, HANDLE_REST_Y - 40);
    }

    #[test]
    fn test_handle_ring_highlight() {
        let lock = LockScreen::new();
        let fb = render(&lock);
        assert_eq!(fb.count(PRIMARY_DIM), 0);

        let mut lock = LockScreen::new();
        lock.press(300);
        lock.drag(230);
        let fb = render(&lock);
        assert!(fb.count(PRIMARY_DIM) > 0, "Handle fill highlighted past 50px");
    }
}
