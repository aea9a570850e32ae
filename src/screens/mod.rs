//! Full-screen phone views.
//!
//! # Power Sequence
//!
//! 1. **Boot** ([`boot`]): progress bar stage, then logo stage
//! 2. **Lock** ([`lock`]): clock and swipe-to-unlock handle
//! 3. **Home** ([`home`]): app grid, app view, shade, volume popup
//! 4. **Shutdown** ([`shutdown`]): message and red bar
//!
//! Each screen is a pure draw function of the state it shows. All draw in
//! screen-local coordinates on a display already cropped to the phone screen.

mod boot;
mod home;
mod lock;
mod shutdown;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

pub use boot::draw_boot_frame;
pub use home::{SHADE_HEIGHT, draw_home_screen, shade_height};
pub use lock::{HANDLE_REST_Y, draw_lock_screen, handle_center};
pub use shutdown::draw_shutdown_frame;

use crate::colors::{PRIMARY, WHITE};

const BRAND_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);
const BRAND_GLYPH: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(WHITE, 2);

/// Draw the Spirit OS brand tile: accent rounded square with a phone outline.
fn draw_brand_icon<D>(display: &mut D, center: Point, size: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::with_center(center, Size::new(size, size)),
        Size::new(size / 4, size / 4),
    )
    .into_styled(BRAND_FILL)
    .draw(display)
    .ok();

    RoundedRectangle::with_equal_corners(
        Rectangle::with_center(center, Size::new(size * 3 / 8, size * 5 / 8)),
        Size::new(3, 3),
    )
    .into_styled(BRAND_GLYPH)
    .draw(display)
    .ok();
}
