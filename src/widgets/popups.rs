//! Volume popup overlay.
//!
//! Centered card on the phone screen with a vertical 15-segment bar that
//! fills from the bottom and the level in percent underneath.
//!
//! ```text
//!   ┌────────┐
//!   │ Volume │
//!   │  ▭▭▭   │  unlit
//!   │  ███   │  lit: white > 66, yellow > 33, else red
//!   │  80%   │
//!   └────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, MUTED, RED, WHITE, YELLOW};
use crate::config::{PHONE_CENTER_X, PHONE_CENTER_Y, VOLUME_SEGMENTS};
use crate::state::popup::lit_segments;
use crate::styles::{CARD_FILL, CENTERED, LABEL_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

const POPUP_WIDTH: u32 = 64;
const POPUP_HEIGHT: u32 = 150;
const POPUP_POS: Point = Point::new(
    PHONE_CENTER_X - POPUP_WIDTH as i32 / 2,
    PHONE_CENTER_Y - POPUP_HEIGHT as i32 / 2,
);

const SEGMENT_WIDTH: u32 = 24;
const SEGMENT_HEIGHT: u32 = 5;
const SEGMENT_PITCH: i32 = SEGMENT_HEIGHT as i32 + 2;
const SEGMENT_X: i32 = PHONE_CENTER_X - SEGMENT_WIDTH as i32 / 2;

/// Top edge of the highest segment.
const SEGMENTS_TOP: i32 = POPUP_POS.y + 24;

const TITLE_POS: Point = Point::new(PHONE_CENTER_X, POPUP_POS.y + 14);
const PERCENT_POS: Point = Point::new(
    PHONE_CENTER_X,
    SEGMENTS_TOP + VOLUME_SEGMENTS as i32 * SEGMENT_PITCH + 12,
);

const CARD_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);
const BORDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(MUTED, 1);

/// Lit segment color for a volume level.
pub const fn volume_color(volume: u8) -> Rgb565 {
    if volume > 66 {
        WHITE
    } else if volume > 33 {
        YELLOW
    } else {
        RED
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the volume popup centered on the phone screen (screen-local).
pub fn draw_volume_popup<D>(
    display: &mut D,
    volume: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let card = RoundedRectangle::with_equal_corners(
        Rectangle::new(POPUP_POS, Size::new(POPUP_WIDTH, POPUP_HEIGHT)),
        Size::new(8, 8),
    );
    card.into_styled(CARD_STYLE).draw(display).ok();
    card.into_styled(BORDER_STYLE).draw(display).ok();

    let title = if volume == 0 { "Muted" } else { "Volume" };
    Text::with_text_style(title, TITLE_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let lit = lit_segments(volume);
    let lit_fill = PrimitiveStyle::with_fill(volume_color(volume));
    for i in 0..VOLUME_SEGMENTS {
        // Segment 0 is the bottom one
        let y = SEGMENTS_TOP + (VOLUME_SEGMENTS - 1 - i) as i32 * SEGMENT_PITCH;
        let fill = if i < lit { lit_fill } else { CARD_FILL };
        Rectangle::new(Point::new(SEGMENT_X, y), Size::new(SEGMENT_WIDTH, SEGMENT_HEIGHT))
            .into_styled(fill)
            .draw(display)
            .ok();
    }

    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{volume}%");
    Text::with_text_style(&percent, PERCENT_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::SLATE_LIGHT;
    use crate::config::{PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH};
    use crate::test_display::FrameBuffer;

    const fn segments_area() -> Rectangle {
        Rectangle::new(
            Point::new(SEGMENT_X, SEGMENTS_TOP),
            Size::new(SEGMENT_WIDTH, VOLUME_SEGMENTS * SEGMENT_PITCH as u32),
        )
    }

    fn render(volume: u8) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        draw_volume_popup(&mut fb, volume);
        fb
    }

    #[test]
    fn test_volume_color_bands() {
        assert_eq!(volume_color(100), WHITE);
        assert_eq!(volume_color(67), WHITE);
        assert_eq!(volume_color(66), YELLOW);
        assert_eq!(volume_color(34), YELLOW);
        assert_eq!(volume_color(33), RED);
        assert_eq!(volume_color(0), RED);
    }

    #[test]
    fn test_lit_segments_drawn() {
        let segment_px = (SEGMENT_WIDTH * SEGMENT_HEIGHT) as usize;
        let fb = render(50);
        assert_eq!(fb.count_in(&segments_area(), YELLOW), 8 * segment_px);
        assert_eq!(fb.count_in(&segments_area(), SLATE_LIGHT), 7 * segment_px);
    }

    #[test]
    fn test_bottom_segment_lit_first() {
        let fb = render(10);
        let bottom_y = SEGMENTS_TOP + (VOLUME_SEGMENTS as i32 - 1) * SEGMENT_PITCH;
        assert_eq!(fb.pixel(SEGMENT_X, bottom_y), Some(RED));
        assert_eq!(fb.pixel(SEGMENT_X, SEGMENTS_TOP), Some(SLATE_LIGHT));
    }

    #[test]
    fn test_muted_has_no_lit_segments() {
        let fb = render(0);
        assert_eq!(fb.count_in(&segments_area(), RED), 0);
    }
}
