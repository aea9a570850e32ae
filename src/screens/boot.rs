//! Boot splash frames.
//!
//! # Stages
//!
//! ```text
//!  Booting (2000 ms)            Logo (1500 ms)
//! ┌──────────────────┐        ┌──────────────────┐
//! │      [icon]      │        │     [ icon ]     │
//! │    Spirit OS     │        │    Spirit OS     │
//! │    Booting...    │        │ Privacy-First    │
//! │   ▓▓▓▓▓░░░░░░    │        │     Android      │
//! │       42%        │        │      ● ○ ○       │
//! └──────────────────┘        └──────────────────┘
//! ```
//!
//! The frame is a pure function of the [`BootAnimation`] value.

use core::fmt::Write;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;

use super::draw_brand_icon;
use crate::animations::{BootAnimation, BootStage};
use crate::colors::{BLACK, PRIMARY, PRIMARY_DIM};
use crate::config::PHONE_CENTER_X;
use crate::styles::{CENTERED, LABEL_STYLE_MUTED, TITLE_STYLE_WHITE};
use crate::widgets::draw_progress_bar;

// =============================================================================
// Layout Constants
// =============================================================================

const SMALL_ICON_SIZE: u32 = 40;
const LARGE_ICON_SIZE: u32 = 60;
const ICON_Y: i32 = 110;

const TITLE_POS: Point = Point::new(PHONE_CENTER_X, 196);
const SUBTITLE_POS: Point = Point::new(PHONE_CENTER_X, 214);

const BAR_WIDTH: u32 = 120;
const BAR_POS: Point = Point::new(PHONE_CENTER_X - BAR_WIDTH as i32 / 2, 232);
const BAR_SIZE: Size = Size::new(BAR_WIDTH, 4);
const PERCENT_POS: Point = Point::new(PHONE_CENTER_X, 254);

/// Logo stage pulsing dots.
const DOT_DIAMETER: u32 = 6;
const DOT_SPACING: i32 = 12;
const DOTS_Y: i32 = 246;
const DOT_PERIOD: Duration = Duration::from_millis(250);

const DOT_LIT: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);
const DOT_DIM: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY_DIM);

// =============================================================================
// Drawing
// =============================================================================

/// Draw the current boot frame (screen-local).
pub fn draw_boot_frame<D>(
    display: &mut D,
    boot: &BootAnimation,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    match boot.stage() {
        BootStage::Booting => draw_booting_stage(display, boot.progress()),
        BootStage::Logo => draw_logo_stage(display, boot.stage_elapsed()),
        BootStage::Complete => {}
    }
}

fn draw_booting_stage<D>(display: &mut D, progress: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_brand_icon(display, Point::new(PHONE_CENTER_X, ICON_Y + SMALL_ICON_SIZE as i32 / 2), SMALL_ICON_SIZE);

    Text::with_text_style("Spirit OS", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Booting...", SUBTITLE_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    draw_progress_bar(display, BAR_POS, BAR_SIZE, progress, PRIMARY);

    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{progress}%");
    Text::with_text_style(&percent, PERCENT_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();
}

fn draw_logo_stage<D>(display: &mut D, elapsed: Duration)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_brand_icon(display, Point::new(PHONE_CENTER_X, ICON_Y + LARGE_ICON_SIZE as i32 / 2 - 10), LARGE_ICON_SIZE);

    Text::with_text_style("Spirit OS", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Privacy-First Android", SUBTITLE_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    let lit = lit_dot(elapsed);
    for i in 0..3 {
        let center = Point::new(PHONE_CENTER_X + (i - 1) * DOT_SPACING, DOTS_Y);
        let style = if i as usize == lit { DOT_LIT } else { DOT_DIM };
        Circle::with_center(center, DOT_DIAMETER).into_styled(style).draw(display).ok();
    }
}

/// Index of the highlighted logo dot.
fn lit_dot(elapsed: Duration) -> usize {
    ((elapsed.as_millis() / DOT_PERIOD.as_millis()) % 3) as usize
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::colors::SLATE_LIGHT;
    use crate::config::{PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH};
    use crate::test_display::FrameBuffer;

    const BAR_AREA: Rectangle = Rectangle::new(BAR_POS, BAR_SIZE);

    fn render(boot: &BootAnimation) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        draw_boot_frame(&mut fb, boot);
        fb
    }

    #[test]
    fn test_progress_bar_tracks_animation() {
        let mut boot = BootAnimation::new();
        boot.advance(Duration::from_millis(1000));
        assert_eq!(boot.progress(), 50);

        let fb = render(&boot);
        let filled = (BAR_WIDTH / 2 * BAR_SIZE.height) as usize;
        assert_eq!(fb.count_in(&BAR_AREA, PRIMARY), filled);
        assert_eq!(fb.count_in(&BAR_AREA, SLATE_LIGHT), filled);
    }

    #[test]
    fn test_logo_stage_has_no_bar() {
        let mut boot = BootAnimation::new();
        boot.advance(Duration::from_millis(2100));
        assert_eq!(boot.stage(), BootStage::Logo);

        let fb = render(&boot);
        assert_eq!(fb.count_in(&BAR_AREA, SLATE_LIGHT), 0);
    }

    #[test]
    fn test_lit_dot_cycles() {
        assert_eq!(lit_dot(Duration::ZERO), 0);
        assert_eq!(lit_dot(Duration::from_millis(260)), 1);
        assert_eq!(lit_dot(Duration::from_millis(510)), 2);
        assert_eq!(lit_dot(Duration::from_millis(760)), 0);
    }
}
