//! Low-level drawing primitives shared across widgets and screens.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::{DARK_GRAY, GREEN, WHITE};
use crate::styles::CARD_FILL;

/// Draw a horizontal progress bar: track plus a fill proportional to `percent`.
///
/// `percent` is clamped to 100. A bar narrower than 1px draws nothing.
pub fn draw_progress_bar<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    percent: u8,
    fill: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if size.width == 0 || size.height == 0 {
        return;
    }

    Rectangle::new(top_left, size).into_styled(CARD_FILL).draw(display).ok();

    let filled = size.width * u32::from(percent.min(100)) / 100;
    if filled > 0 {
        Rectangle::new(top_left, Size::new(filled, size.height))
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)
            .ok();
    }
}

/// Width of a toggle pill.
pub const TOGGLE_WIDTH: u32 = 22;

/// Height of a toggle pill.
pub const TOGGLE_HEIGHT: u32 = 12;

/// Draw an on/off pill switch with its knob on the right when `on`.
pub fn draw_toggle<D>(
    display: &mut D,
    top_left: Point,
    on: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let track = if on { GREEN } else { DARK_GRAY };
    RoundedRectangle::with_equal_corners(
        Rectangle::new(top_left, Size::new(TOGGLE_WIDTH, TOGGLE_HEIGHT)),
        Size::new(TOGGLE_HEIGHT / 2, TOGGLE_HEIGHT / 2),
    )
    .into_styled(PrimitiveStyle::with_fill(track))
    .draw(display)
    .ok();

    let knob_diameter = TOGGLE_HEIGHT - 4;
    let knob_x = if on { TOGGLE_WIDTH - knob_diameter - 2 } else { 2 };
    Circle::new(top_left + Point::new(knob_x as i32, 2), knob_diameter)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

/// Draw a row of `total` equal segments, the first `lit` in `color`.
///
/// Segments are `segment_width` wide with a 1px gap.
pub fn draw_segments<D>(
    display: &mut D,
    top_left: Point,
    segment_width: u32,
    height: u32,
    lit: u32,
    total: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..total {
        let x = top_left.x + (i * (segment_width + 1)) as i32;
        let fill = if i < lit { PrimitiveStyle::with_fill(color) } else { CARD_FILL };
        Rectangle::new(Point::new(x, top_left.y), Size::new(segment_width, height))
            .into_styled(fill)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{PRIMARY, SLATE_LIGHT};
    use crate::test_display::FrameBuffer;

    #[test]
    fn test_progress_bar_fill_width() {
        let mut fb = FrameBuffer::new(Size::new(100, 4));
        draw_progress_bar(&mut fb, Point::zero(), Size::new(100, 4), 40, PRIMARY);
        assert_eq!(fb.pixel(39, 1), Some(PRIMARY));
        assert_eq!(fb.pixel(40, 1), Some(SLATE_LIGHT), "Track beyond the fill");
    }

    #[test]
    fn test_progress_bar_clamps_percent() {
        let mut fb = FrameBuffer::new(Size::new(50, 2));
        draw_progress_bar(&mut fb, Point::zero(), Size::new(50, 2), 250, PRIMARY);
        assert_eq!(fb.count(PRIMARY), 100);
    }

    #[test]
    fn test_toggle_colors() {
        let mut fb = FrameBuffer::new(Size::new(TOGGLE_WIDTH, TOGGLE_HEIGHT));
        draw_toggle(&mut fb, Point::zero(), true);
        assert!(fb.count(GREEN) > 0);

        let mut fb = FrameBuffer::new(Size::new(TOGGLE_WIDTH, TOGGLE_HEIGHT));
        draw_toggle(&mut fb, Point::zero(), false);
        assert_eq!(fb.count(GREEN), 0);
        assert!(fb.count(DARK_GRAY) > 0);
    }

    #[test]
    fn test_segments_lit_count() {
        let mut fb = FrameBuffer::new(Size::new(40, 2));
        draw_segments(&mut fb, Point::zero(), 3, 2, 4, 10, WHITE);
        assert_eq!(fb.count(WHITE), 4 * 3 * 2);
    }
}
