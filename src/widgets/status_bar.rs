//! Phone status bar: time on the left, signal, location and battery on the right.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ 14:05           ▂▄▆ GPS 87▭ │
//! └──────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{STATUS_BG, WHITE};
use crate::config::{BATTERY_LEVEL, PHONE_SCREEN_WIDTH, STATUS_BAR_HEIGHT};
use crate::state::HardwareToggles;
use crate::styles::{LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED};

// =============================================================================
// Layout Constants
// =============================================================================

const BAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(STATUS_BG);
const ICON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const ICON_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 1);

/// Text baseline.
const TEXT_Y: i32 = 12;

/// Time position (left margin).
const TIME_POS: Point = Point::new(6, TEXT_Y);

/// Battery icon body (right edge, leaves room for the terminal nub).
const BATTERY_POS: Point = Point::new(PHONE_SCREEN_WIDTH as i32 - 20, 4);
const BATTERY_SIZE: Size = Size::new(12, 8);

/// Charge level text, right-aligned against the battery icon.
const LEVEL_POS: Point = Point::new(BATTERY_POS.x - 2, TEXT_Y);

/// Right edge of the location indicator.
const GPS_POS: Point = Point::new(LEVEL_POS.x - 16, TEXT_Y);

/// Leftmost signal bar; three bars 3px wide, rising.
const SIGNAL_X: i32 = GPS_POS.x - 18 - 12;

// =============================================================================
// Drawing
// =============================================================================

/// Draw the status bar at the top of the phone screen (screen-local).
pub fn draw_status_bar<D>(
    display: &mut D,
    time: &str,
    hardware: &HardwareToggles,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(PHONE_SCREEN_WIDTH, STATUS_BAR_HEIGHT))
        .into_styled(BAR_FILL)
        .draw(display)
        .ok();

    Text::with_text_style(time, TIME_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    // Cellular bars
    for i in 0..3 {
        let height = 3 + i as u32 * 2;
        Rectangle::new(
            Point::new(SIGNAL_X + i * 4, 12 - height as i32),
            Size::new(3, height),
        )
        .into_styled(ICON_FILL)
        .draw(display)
        .ok();
    }

    // Location indicator, dimmed when the GPS switch is off
    let gps_style = if hardware.gps { LABEL_STYLE_WHITE } else { LABEL_STYLE_MUTED };
    Text::with_text_style("GPS", GPS_POS, gps_style, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    let mut level: String<4> = String::new();
    let _ = write!(level, "{BATTERY_LEVEL}");
    Text::with_text_style(&level, LEVEL_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    Rectangle::new(BATTERY_POS, BATTERY_SIZE)
        .into_styled(ICON_STROKE)
        .draw(display)
        .ok();
    let charge = (BATTERY_SIZE.width - 4) * u32::from(BATTERY_LEVEL) / 100;
    Rectangle::new(BATTERY_POS + Point::new(2, 2), Size::new(charge, BATTERY_SIZE.height - 4))
        .into_styled(ICON_FILL)
        .draw(display)
        .ok();
    Rectangle::new(
        BATTERY_POS + Point::new(BATTERY_SIZE.width as i32, 2),
        Size::new(2, BATTERY_SIZE.height - 4),
    )
    .into_styled(ICON_FILL)
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MUTED;
    use crate::test_display::FrameBuffer;

    fn bar_area() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(PHONE_SCREEN_WIDTH, STATUS_BAR_HEIGHT))
    }

    #[test]
    fn test_status_bar_fills_its_strip_only() {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, 40));
        draw_status_bar(&mut fb, "12:00", &HardwareToggles::new());
        assert!(fb.count_in(&bar_area(), STATUS_BG) > 0);
        assert_eq!(fb.pixel(5, STATUS_BAR_HEIGHT as i32 + 2), Some(crate::colors::BLACK));
    }

    #[test]
    fn test_gps_indicator_dims_when_disabled() {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, STATUS_BAR_HEIGHT));
        draw_status_bar(&mut fb, "12:00", &HardwareToggles::new());
        assert_eq!(fb.count(MUTED), 0);

        let mut hw = HardwareToggles::new();
        hw.gps = false;
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, STATUS_BAR_HEIGHT));
        draw_status_bar(&mut fb, "12:00", &hw);
        assert!(fb.count(MUTED) > 0, "GPS label drawn muted");
    }
}
