//! Hardware control panel to the right of the phone.
//!
//! Mirrors the keyboard controls: power key actions with state-dependent
//! labels, the volume level, the four privacy switches, a key reference, the
//! event log and frame timing.
//!
//! # Layout (panel-local)
//!
//! ```text
//! ┌──────────────────────┐
//! │ SPIRIT OS SIM        │
//! │ POWER BUTTON         │
//! │ [ S  Unlock Screen ] │  short press
//! │ [ L  Power Off     ] │  long press
//! │ VOLUME          50%  │
//! │ ██████████░░░░░░░░░  │
//! │ Screen is locked     │
//! │ PRIVACY SWITCHES     │
//! │ (o ) Battery     [1] │
//! │ ...                  │
//! │ KEYS                 │
//! │ LOG                  │
//! │ > Power: On          │
//! │ avg 20.1 min 19 ...  │
//! │ 50fps 12%    0:01:23 │
//! └──────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::{draw_progress_bar, draw_toggle};
use crate::colors::{DARK_GRAY, GREEN, MUTED, PRIMARY, RED, SLATE, YELLOW};
use crate::config::{PANEL_WIDTH, SCREEN_HEIGHT};
use crate::profiling::{EventLog, FrameStats, clock_hms};
use crate::state::{HardwareToggle, PhoneState, PowerController};
use crate::styles::{
    CENTERED,
    LABEL_FONT,
    LABEL_STYLE_BLACK,
    LABEL_STYLE_MUTED,
    LABEL_STYLE_WHITE,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
};

// =============================================================================
// Layout Constants
// =============================================================================

const MARGIN: i32 = 8;
const INNER_WIDTH: u32 = PANEL_WIDTH - 2 * MARGIN as u32;
const CENTER_X: i32 = PANEL_WIDTH as i32 / 2;
const RIGHT_X: i32 = PANEL_WIDTH as i32 - MARGIN;

const TITLE_Y: i32 = 12;

const POWER_HEADER_Y: i32 = 30;
const SHORT_BUTTON_Y: i32 = 36;
const LONG_BUTTON_Y: i32 = 58;
const BUTTON_HEIGHT: u32 = 18;

const VOLUME_HEADER_Y: i32 = 94;
const VOLUME_BAR_Y: i32 = 100;
const VOLUME_HINT_Y: i32 = 118;

const SWITCHES_HEADER_Y: i32 = 140;
const SWITCH_ROW_Y: i32 = 148;
const SWITCH_ROW_HEIGHT: i32 = 18;

const KEYS_HEADER_Y: i32 = 232;
const KEYS_Y: i32 = 244;

const LOG_HEADER_Y: i32 = 306;
const LOG_Y: i32 = 318;

const LINE_HEIGHT: i32 = 10;

const FOOTER_Y: i32 = SCREEN_HEIGHT as i32 - 6;
const TIMINGS_Y: i32 = FOOTER_Y - 12;

const PANEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE);
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(DARK_GRAY, 1);
const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, PRIMARY);

/// Key reference lines.
const KEY_HELP: [&str; 5] = [
    "P hold  power button",
    "S / L   short / long",
    "Up/Dn   volume (+/-)",
    "1-4     switches",
    "Esc/Bksp back",
];

// =============================================================================
// Labels
// =============================================================================

/// Short-press action label and button color.
pub const fn short_press_label(state: PhoneState) -> (&'static str, Rgb565) {
    match state {
        PhoneState::Off => ("Power On", DARK_GRAY),
        PhoneState::Booting => ("Booting...", DARK_GRAY),
        PhoneState::ShuttingDown => ("Shutting Down...", DARK_GRAY),
        PhoneState::OnLocked => ("Unlock Screen", GREEN),
        PhoneState::OnUnlocked => ("Lock Screen", YELLOW),
    }
}

/// Long-press action label and button color.
pub const fn long_press_label(state: PhoneState, battery: bool) -> (&'static str, Rgb565) {
    match state {
        PhoneState::Off if battery => ("Boot Up", GREEN),
        PhoneState::Off => ("Boot Up", DARK_GRAY),
        PhoneState::Booting => ("Power Off", DARK_GRAY),
        PhoneState::ShuttingDown => ("Shutting Down...", DARK_GRAY),
        PhoneState::OnLocked | PhoneState::OnUnlocked => ("Power Off", RED),
    }
}

/// Why the volume keys are inactive, if they are.
pub const fn volume_hint(state: PhoneState) -> Option<&'static str> {
    match state {
        PhoneState::Off | PhoneState::ShuttingDown => Some("Phone is off"),
        PhoneState::Booting => Some("Phone is booting"),
        PhoneState::OnLocked => Some("Screen is locked"),
        PhoneState::OnUnlocked => None,
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the control panel (panel-local coordinates).
pub fn draw_control_panel<D>(
    display: &mut D,
    phone: &PowerController,
    power_held: bool,
    log: &EventLog,
    stats: &FrameStats,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(PANEL_WIDTH, SCREEN_HEIGHT))
        .into_styled(PANEL_FILL)
        .draw(display)
        .ok();
    Line::new(Point::zero(), Point::new(0, SCREEN_HEIGHT as i32 - 1))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("SPIRIT OS SIM", Point::new(MARGIN, TITLE_Y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let state = phone.state();
    draw_power_section(display, state, phone.hardware().battery, power_held);
    draw_volume_section(display, state, phone.volume());
    draw_switches_section(display, phone);
    draw_keys_section(display);
    draw_log_section(display, log);
    draw_footer(display, stats);
}

fn draw_header<D>(display: &mut D, text: &str, y: i32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(MARGIN, y), HEADER_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
}

fn draw_button<D>(display: &mut D, y: i32, key: &str, label: &str, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::new(Point::new(MARGIN, y), Size::new(INNER_WIDTH, BUTTON_HEIGHT)),
        Size::new(4, 4),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(display)
    .ok();

    let baseline = y + BUTTON_HEIGHT as i32 / 2 + 3;
    let text_style = if color == DARK_GRAY { LABEL_STYLE_MUTED } else { LABEL_STYLE_BLACK };
    Text::with_text_style(key, Point::new(MARGIN + 6, baseline), text_style, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(label, Point::new(CENTER_X + 6, baseline), text_style, CENTERED)
        .draw(display)
        .ok();
}

fn draw_power_section<D>(display: &mut D, state: PhoneState, battery: bool, power_held: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, if power_held { "POWER BUTTON (held)" } else { "POWER BUTTON" }, POWER_HEADER_Y);

    let (label, color) = short_press_label(state);
    draw_button(display, SHORT_BUTTON_Y, "S", label, color);

    let (label, color) = long_press_label(state, battery);
    draw_button(display, LONG_BUTTON_Y, "L", label, color);
}

fn draw_volume_section<D>(display: &mut D, state: PhoneState, volume: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, "VOLUME", VOLUME_HEADER_Y);

    let mut percent: String<8> = String::new();
    let _ = write!(percent, "{volume}%");
    Text::with_text_style(&percent, Point::new(RIGHT_X, VOLUME_HEADER_Y), LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    let hint = volume_hint(state);
    let fill = if hint.is_none() { PRIMARY } else { MUTED };
    draw_progress_bar(display, Point::new(MARGIN, VOLUME_BAR_Y), Size::new(INNER_WIDTH, 6), volume, fill);

    if let Some(hint) = hint {
        Text::with_text_style(hint, Point::new(CENTER_X, VOLUME_HINT_Y), LABEL_STYLE_MUTED, CENTERED)
            .draw(display)
            .ok();
    }
}

fn draw_switches_section<D>(display: &mut D, phone: &PowerController)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, "PRIVACY SWITCHES", SWITCHES_HEADER_Y);

    for (i, toggle) in HardwareToggle::ALL.iter().enumerate() {
        let y = SWITCH_ROW_Y + i as i32 * SWITCH_ROW_HEIGHT;
        let on = phone.hardware().get(*toggle);
        draw_toggle(display, Point::new(MARGIN, y), on);

        let label_style = if on { LABEL_STYLE_WHITE } else { LABEL_STYLE_MUTED };
        Text::with_text_style(toggle.label(), Point::new(MARGIN + 28, y + 9), label_style, LEFT_ALIGNED)
            .draw(display)
            .ok();

        let mut key: String<4> = String::new();
        let _ = write!(key, "[{}]", i + 1);
        Text::with_text_style(&key, Point::new(RIGHT_X, y + 9), LABEL_STYLE_MUTED, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_keys_section<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, "KEYS", KEYS_HEADER_Y);
    for (i, line) in KEY_HELP.iter().enumerate() {
        let y = KEYS_Y + i as i32 * LINE_HEIGHT;
        Text::with_text_style(line, Point::new(MARGIN, y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_log_section<D>(display: &mut D, log: &EventLog)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_header(display, "LOG", LOG_HEADER_Y);
    for (i, line) in log.lines().enumerate() {
        let y = LOG_Y + i as i32 * LINE_HEIGHT;
        let mut text: String<32> = String::new();
        let _ = write!(text, "> {line}");
        Text::with_text_style(&text, Point::new(MARGIN, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_footer<D>(display: &mut D, stats: &FrameStats)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(&stats.timings(), Point::new(MARGIN, TIMINGS_Y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(&stats.summary(), Point::new(MARGIN, FOOTER_Y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let uptime = clock_hms(stats.uptime());
    Text::with_text_style(&uptime, Point::new(RIGHT_X, FOOTER_Y), LABEL_STYLE_MUTED, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_short_press_labels() {
        assert_eq!(short_press_label(PhoneState::Off).0, "Power On");
        assert_eq!(short_press_label(PhoneState::Booting).0, "Booting...");
        assert_eq!(short_press_label(PhoneState::OnLocked).0, "Unlock Screen");
        assert_eq!(short_press_label(PhoneState::OnUnlocked).0, "Lock Screen");
    }

    #[test]
    fn test_long_press_labels() {
        assert_eq!(long_press_label(PhoneState::Off, true), ("Boot Up", GREEN));
        assert_eq!(long_press_label(PhoneState::Off, false).1, DARK_GRAY, "No battery, no boot");
        assert_eq!(long_press_label(PhoneState::OnLocked, true), ("Power Off", RED));
        assert_eq!(long_press_label(PhoneState::ShuttingDown, true).0, "Shutting Down...");
    }

    #[test]
    fn test_volume_hint() {
        assert_eq!(volume_hint(PhoneState::Off), Some("Phone is off"));
        assert_eq!(volume_hint(PhoneState::Booting), Some("Phone is booting"));
        assert_eq!(volume_hint(PhoneState::OnLocked), Some("Screen is locked"));
        assert_eq!(volume_hint(PhoneState::OnUnlocked), None);
    }

    #[test]
    fn test_panel_renders_state() {
        use crate::test_display::FrameBuffer;

        let mut phone = PowerController::new();
        let mut log = EventLog::new();
        for signal in phone.power_long_press().iter() {
            log.record(signal);
        }
        let stats = FrameStats::new();

        let mut fb = FrameBuffer::new(Size::new(PANEL_WIDTH, SCREEN_HEIGHT));
        draw_control_panel(&mut fb, &phone, false, &log, &stats);
        assert!(fb.count(SLATE) > 0);
        assert_eq!(fb.count(RED), 0, "No power-off button while booting");
        assert!(fb.count(GREEN) > 0, "Switch pills on");
    }

    #[test]
    fn test_footer_shows_frame_times() {
        use crate::test_display::FrameBuffer;

        let footer = Rectangle::new(Point::new(0, TIMINGS_Y - 10), Size::new(PANEL_WIDTH, 12));
        let phone = PowerController::new();
        let log = EventLog::new();
        let mut stats = FrameStats::new();

        let mut fb = FrameBuffer::new(Size::new(PANEL_WIDTH, SCREEN_HEIGHT));
        draw_control_panel(&mut fb, &phone, false, &log, &stats);
        let placeholder = fb.count_in(&footer, MUTED);
        assert!(placeholder > 0, "Placeholder before the first frame");

        stats.record(Duration::from_millis(20), Duration::from_millis(4));
        let mut fb = FrameBuffer::new(Size::new(PANEL_WIDTH, SCREEN_HEIGHT));
        draw_control_panel(&mut fb, &phone, false, &log, &stats);
        assert_ne!(fb.count_in(&footer, MUTED), placeholder, "Measured times replace the dashes");
    }
}
