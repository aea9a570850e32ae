//! Phone body: rounded bezel and the three side keys.
//!
//! Keys are drawn inside the bezel so the body stays within `PHONE_WIDTH`.
//! A held key is drawn in the accent color.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::{FRAME_GRAY, MUTED, PRIMARY, SLATE_LIGHT};
use crate::config::{PHONE_HEIGHT, PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH, PHONE_SCREEN_X, PHONE_SCREEN_Y, PHONE_WIDTH};
use crate::styles::BLACK_FILL;

// =============================================================================
// Layout Constants
// =============================================================================

const BODY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(FRAME_GRAY);
const KEY_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE_LIGHT);
const KEY_HELD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);
const INDICATOR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(MUTED);

const BODY_RADIUS: Size = Size::new(16, 16);

/// Key thickness.
const KEY_WIDTH: u32 = 3;

/// Power key on the right edge.
const POWER_KEY_POS: Point = Point::new((PHONE_WIDTH - KEY_WIDTH) as i32, 110);
const POWER_KEY_SIZE: Size = Size::new(KEY_WIDTH, 40);

/// Volume keys on the left edge.
const VOLUME_UP_POS: Point = Point::new(0, 90);
const VOLUME_DOWN_POS: Point = Point::new(0, 130);
const VOLUME_KEY_SIZE: Size = Size::new(KEY_WIDTH, 32);

/// Screen area inside the bezel.
pub const SCREEN_AREA: Rectangle = Rectangle::new(
    Point::new(PHONE_SCREEN_X, PHONE_SCREEN_Y),
    Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT),
);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the phone body with a black screen and the side keys.
pub fn draw_phone_frame<D>(
    display: &mut D,
    power_held: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::zero(), Size::new(PHONE_WIDTH, PHONE_HEIGHT)),
        BODY_RADIUS,
    )
    .into_styled(BODY_FILL)
    .draw(display)
    .ok();

    SCREEN_AREA.into_styled(BLACK_FILL).draw(display).ok();

    let power_fill = if power_held { KEY_HELD_FILL } else { KEY_FILL };
    Rectangle::new(POWER_KEY_POS, POWER_KEY_SIZE)
        .into_styled(power_fill)
        .draw(display)
        .ok();
    Rectangle::new(VOLUME_UP_POS, VOLUME_KEY_SIZE)
        .into_styled(KEY_FILL)
        .draw(display)
        .ok();
    Rectangle::new(VOLUME_DOWN_POS, VOLUME_KEY_SIZE)
        .into_styled(KEY_FILL)
        .draw(display)
        .ok();
}

/// Draw the home indicator bar at the bottom of the screen (screen-local).
pub fn draw_home_indicator<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = PHONE_SCREEN_WIDTH / 3;
    RoundedRectangle::with_equal_corners(
        Rectangle::new(
            Point::new(((PHONE_SCREEN_WIDTH - width) / 2) as i32, PHONE_SCREEN_HEIGHT as i32 - 6),
            Size::new(width, 3),
        ),
        Size::new(1, 1),
    )
    .into_styled(INDICATOR_FILL)
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::test_display::FrameBuffer;

    #[test]
    fn test_screen_area_is_black_inside_bezel() {
        let mut fb = FrameBuffer::new(Size::new(PHONE_WIDTH, PHONE_HEIGHT));
        draw_phone_frame(&mut fb, false);
        assert_eq!(fb.pixel(PHONE_SCREEN_X, PHONE_SCREEN_Y), Some(BLACK));
        assert_eq!(fb.pixel(PHONE_SCREEN_X - 1, 200), Some(FRAME_GRAY), "Bezel");
        assert_eq!(fb.count(PRIMARY), 0);
    }

    #[test]
    fn test_held_power_key_highlighted() {
        let mut fb = FrameBuffer::new(Size::new(PHONE_WIDTH, PHONE_HEIGHT));
        draw_phone_frame(&mut fb, true);
        assert_eq!(fb.count(PRIMARY), (POWER_KEY_SIZE.width * POWER_KEY_SIZE.height) as usize);
    }
}
