//! Shutdown splash: message and a red bar filling over the shutdown duration.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::animations::ShutdownAnimation;
use crate::colors::{BLACK, RED};
use crate::config::PHONE_CENTER_X;
use crate::styles::{CENTERED, LABEL_STYLE_MUTED, TITLE_STYLE_WHITE};
use crate::widgets::draw_progress_bar;

const TITLE_POS: Point = Point::new(PHONE_CENTER_X, 180);
const SUBTITLE_POS: Point = Point::new(PHONE_CENTER_X, 200);

const BAR_WIDTH: u32 = 120;
const BAR_POS: Point = Point::new(PHONE_CENTER_X - BAR_WIDTH as i32 / 2, 220);
const BAR_SIZE: Size = Size::new(BAR_WIDTH, 4);

/// Draw the current shutdown frame (screen-local).
pub fn draw_shutdown_frame<D>(
    display: &mut D,
    shutdown: &ShutdownAnimation,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style("Shutting down...", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Spirit OS", SUBTITLE_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    draw_progress_bar(display, BAR_POS, BAR_SIZE, shutdown.progress(), RED);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::config::{PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH};
    use crate::test_display::FrameBuffer;

    #[test]
    fn test_red_bar_grows() {
        let area = Rectangle::new(BAR_POS, BAR_SIZE);
        let mut shutdown = ShutdownAnimation::new();

        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        draw_shutdown_frame(&mut fb, &shutdown);
        assert_eq!(fb.count_in(&area, RED), 0);

        shutdown.advance(Duration::from_millis(1500));
        draw_shutdown_frame(&mut fb, &shutdown);
        assert_eq!(fb.count_in(&area, RED), (90 * BAR_SIZE.height) as usize, "75% of 120px");
    }
}
