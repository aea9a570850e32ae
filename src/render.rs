//! Frame composition for the simulator window.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┬──────────┐
//! │ ┌──────────┐ │ control  │
//! │ │  phone   │ │  panel   │
//! │ │  screen  │ │          │
//! │ └──────────┘ │          │
//! └──────────────┴──────────┘
//!   PHONE_WIDTH    PANEL_WIDTH
//! ```
//!
//! The whole window is redrawn every frame. The phone screen is drawn through
//! a cropped view, so screens use screen-local coordinates and cannot paint
//! over the bezel. The visible screen is derived from the controller state
//! via [`Screen::for_state`].

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::clock::ClockText;
use crate::colors::BLACK;
use crate::config::{PANEL_X, PHONE_SCREEN_X, PHONE_SCREEN_Y};
use crate::pages::Screen;
use crate::profiling::{EventLog, FrameStats};
use crate::screens::{draw_boot_frame, draw_home_screen, draw_lock_screen, draw_shutdown_frame};
use crate::state::PowerController;
use crate::widgets::{SCREEN_AREA, draw_control_panel, draw_phone_frame};

/// Everything the frame shows that does not live in the controller.
pub struct FrameContext<'a> {
    pub clock: &'a ClockText,
    pub power_held: bool,
    pub log: &'a EventLog,
    pub stats: &'a FrameStats,
}

/// Draw the complete window: phone body, phone screen and control panel.
pub fn draw_frame<D>(
    display: &mut D,
    phone: &PowerController,
    ctx: &FrameContext<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_phone_frame(display, ctx.power_held);

    {
        let mut screen = display.cropped(&SCREEN_AREA);
        draw_phone_screen(&mut screen, phone, ctx.clock);
    }

    let mut panel = display.translated(Point::new(PANEL_X, 0));
    draw_control_panel(&mut panel, phone, ctx.power_held, ctx.log, ctx.stats);
}

/// Draw whichever screen the controller state selects (screen-local).
pub fn draw_phone_screen<D>(
    display: &mut D,
    phone: &PowerController,
    clock: &ClockText,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match Screen::for_state(phone.state()) {
        Screen::Blank => {
            display.clear(BLACK).ok();
        }
        Screen::Boot => {
            if let Some(boot) = phone.boot_animation() {
                draw_boot_frame(display, boot);
            }
        }
        Screen::Shutdown => {
            if let Some(shutdown) = phone.shutdown_animation() {
                draw_shutdown_frame(display, shutdown);
            }
        }
        Screen::Lock => draw_lock_screen(display, phone.lock_screen(), clock, phone.hardware()),
        Screen::Home => draw_home_screen(display, phone.home(), clock, &phone.device_config()),
    }
}

/// Convert a window point to phone-screen coordinates, if it lies on the screen.
pub fn to_screen_local(point: Point) -> Option<Point> {
    SCREEN_AREA
        .contains(point)
        .then(|| point - Point::new(PHONE_SCREEN_X, PHONE_SCREEN_Y))
}

/// Window point to phone-screen coordinates without the bounds check (drags
/// may leave the screen).
pub fn to_screen_local_unclamped(point: Point) -> Point {
    point - Point::new(PHONE_SCREEN_X, PHONE_SCREEN_Y)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::colors::{PRIMARY, SLATE};
    use crate::config::{PHONE_SCREEN_HEIGHT, PHONE_SCREEN_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::test_display::FrameBuffer;

    fn render_screen(phone: &PowerController) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size::new(PHONE_SCREEN_WIDTH, PHONE_SCREEN_HEIGHT));
        draw_phone_screen(&mut fb, phone, &ClockText::default());
        fb
    }

    #[test]
    fn test_off_screen_is_black() {
        let fb = render_screen(&PowerController::new());
        assert_eq!(fb.count(BLACK), (PHONE_SCREEN_WIDTH * PHONE_SCREEN_HEIGHT) as usize);
    }

    #[test]
    fn test_screen_follows_power_state() {
        let mut phone = PowerController::new();
        phone.power_long_press();
        assert!(render_screen(&phone).count(PRIMARY) > 0, "Boot splash");

        phone.tick(Duration::from_millis(3500));
        assert!(render_screen(&phone).count(SLATE) > 0, "Lock screen wallpaper");

        phone.set_hardware_toggle(crate::state::HardwareToggle::Battery, false);
        let fb = render_screen(&phone);
        assert_eq!(fb.count(SLATE), 0, "Battery cut blanks the screen");
    }

    #[test]
    fn test_full_frame_keeps_screen_inside_bezel() {
        let mut phone = PowerController::new();
        phone.power_long_press();
        phone.tick(Duration::from_millis(3500));

        let log = EventLog::new();
        let stats = FrameStats::new();
        let clock = ClockText::default();
        let ctx = FrameContext {
            clock: &clock,
            power_held: false,
            log: &log,
            stats: &stats,
        };

        let mut fb = FrameBuffer::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_frame(&mut fb, &phone, &ctx);
        assert_eq!(fb.pixel(PHONE_SCREEN_X, 200), Some(SLATE), "Screen edge");
        assert_ne!(fb.pixel(PHONE_SCREEN_X - 1, 200), Some(SLATE), "Bezel untouched");
    }

    #[test]
    fn test_to_screen_local() {
        assert_eq!(to_screen_local(Point::new(8, 8)), Some(Point::zero()));
        assert_eq!(to_screen_local(Point::new(3, 100)), None, "Bezel");
        assert_eq!(to_screen_local(Point::new(250, 100)), None, "Control panel");
        assert_eq!(to_screen_local_unclamped(Point::new(3, 100)), Point::new(-5, 92));
    }
}
