//! Home screen: app grid, app drawer, open app view, notification shade and
//! volume popup.
//!
//! # Layers (bottom to top)
//!
//! 1. Wallpaper and status bar
//! 2. Open app (header and status line), else the drawer, else the home grid
//! 3. Notification shade (partial while being pulled)
//! 4. Volume popup
//! 5. Home indicator

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::clock::ClockText;
use crate::colors::{MUTED, PRIMARY, SLATE, SLATE_LIGHT, STATUS_BG};
use crate::config::{
    APP_HEADER_HEIGHT,
    DRAWER_BUTTON_CENTER,
    DRAWER_BUTTON_SIZE,
    GRID_CELL_WIDTH,
    ICON_SIZE,
    PHONE_CENTER_X,
    PHONE_SCREEN_WIDTH,
    STATUS_BAR_HEIGHT,
    VOLUME_SEGMENTS,
};
use crate::state::home::{AppGrid, DRAWER_GRID, HOME_GRID};
use crate::state::popup::lit_segments;
use crate::state::{AppId, DeviceConfig, HardwareToggle, HomeScreen};
use crate::styles::{
    CENTERED,
    LABEL_STYLE_MUTED,
    LABEL_STYLE_RED,
    LABEL_STYLE_WHITE,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
    SMALL_STYLE_WHITE,
    TITLE_STYLE_WHITE,
};
use crate::widgets::{draw_home_indicator, draw_segments, draw_status_bar, draw_toggle, draw_volume_popup, volume_color};

// =============================================================================
// Layout Constants
// =============================================================================

const TOP: i32 = STATUS_BAR_HEIGHT as i32;

/// Greeting line above the grid.
const GREETING_POS: Point = Point::new(PHONE_CENTER_X, TOP + 24);

const ICON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PRIMARY);
const ICON_RADIUS: Size = Size::new(8, 8);

/// Drawer button: four dots in a 2x2 block.
const DRAWER_BUTTON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE_LIGHT);
const DRAWER_DOT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(MUTED);
const DRAWER_DOT_SIZE: u32 = 3;
const DRAWER_DOT_OFFSET: i32 = 3;

/// App and drawer views.
const HEADER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(STATUS_BG);
const HEADER_TEXT_Y: i32 = TOP + APP_HEADER_HEIGHT as i32 / 2 + 4;
const BACK_POS: Point = Point::new(8, HEADER_TEXT_Y);
const APP_ICON_CENTER: Point = Point::new(PHONE_CENTER_X, 150);
const APP_ICON_SIZE: u32 = 56;
const APP_NAME_POS: Point = Point::new(PHONE_CENTER_X, 210);
const APP_STATUS_POS: Point = Point::new(PHONE_CENTER_X, 232);

/// Shade.
pub const SHADE_HEIGHT: u32 = 170;
const SHADE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SLATE_LIGHT);
const SHADE_MARGIN: i32 = 10;
const SHADE_SEGMENT_WIDTH: u32 = 9;

// =============================================================================
// Drawing
// =============================================================================

/// Draw the unlocked home screen (screen-local).
pub fn draw_home_screen<D>(
    display: &mut D,
    home: &HomeScreen,
    clock: &ClockText,
    config: &DeviceConfig,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(SLATE).ok();
    draw_status_bar(display, &clock.time, &config.hardware);

    match home.current_app() {
        Some(app) => draw_app_view(display, app, config),
        None if home.is_drawer_open() => draw_drawer(display),
        None => draw_grid(display, clock),
    }

    let shade = shade_height(home);
    if shade > 0 {
        draw_shade(display, shade, config);
    }

    if home.is_volume_popup_visible() {
        draw_volume_popup(display, config.volume);
    }

    draw_home_indicator(display);
}

/// Visible shade height: full when open, otherwise follows the pull.
pub fn shade_height(home: &HomeScreen) -> u32 {
    if home.is_shade_open() {
        SHADE_HEIGHT
    } else {
        home.shade_pull().clamp(0, SHADE_HEIGHT as i32) as u32
    }
}

fn draw_grid<D>(display: &mut D, clock: &ClockText)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(&clock.date, GREETING_POS, LABEL_STYLE_MUTED, CENTERED)
        .draw(display)
        .ok();

    draw_app_grid(display, &HOME_GRID);

    Circle::with_center(DRAWER_BUTTON_CENTER, DRAWER_BUTTON_SIZE)
        .into_styled(DRAWER_BUTTON_FILL)
        .draw(display)
        .ok();
    for (dx, dy) in [(-1, -1), (1, -1), (-1, 1), (1, 1)] {
        let dot = DRAWER_BUTTON_CENTER + Point::new(dx * DRAWER_DOT_OFFSET, dy * DRAWER_DOT_OFFSET);
        Rectangle::with_center(dot, Size::new(DRAWER_DOT_SIZE, DRAWER_DOT_SIZE))
            .into_styled(DRAWER_DOT_FILL)
            .draw(display)
            .ok();
    }
}

fn draw_drawer<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_view_header(display, "All Apps");
    draw_app_grid(display, &DRAWER_GRID);
}

fn draw_app_grid<D>(display: &mut D, grid: &AppGrid)
where
    D: DrawTarget<Color = Rgb565>,
{
    for (i, app) in grid.apps.iter().enumerate() {
        let origin = grid.cell_origin(i);
        let icon_center = origin + Point::new(GRID_CELL_WIDTH as i32 / 2, 4 + ICON_SIZE as i32 / 2);
        draw_app_icon(display, *app, icon_center, ICON_SIZE);

        let name_pos = Point::new(icon_center.x, origin.y + ICON_SIZE as i32 + 12);
        Text::with_text_style(app.short_name(), name_pos, SMALL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
    }
}

fn draw_app_icon<D>(display: &mut D, app: AppId, center: Point, size: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(
        Rectangle::with_center(center, Size::new(size, size)),
        ICON_RADIUS,
    )
    .into_styled(ICON_FILL)
    .draw(display)
    .ok();

    let mut glyph: String<4> = String::new();
    glyph.push(app.initial()).ok();
    Text::with_text_style(&glyph, center + Point::new(0, 4), LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Header row with the back arrow and a right-aligned title.
fn draw_view_header<D>(display: &mut D, title: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(0, TOP), Size::new(PHONE_SCREEN_WIDTH, APP_HEADER_HEIGHT))
        .into_styled(HEADER_FILL)
        .draw(display)
        .ok();
    Text::with_text_style("< Back", BACK_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(
        title,
        Point::new(PHONE_SCREEN_WIDTH as i32 - 8, HEADER_TEXT_Y),
        LABEL_STYLE_MUTED,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();
}

fn draw_app_view<D>(display: &mut D, app: AppId, config: &DeviceConfig)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_view_header(display, app.short_name());

    draw_app_icon(display, app, APP_ICON_CENTER, APP_ICON_SIZE);
    Text::with_text_style(app.name(), APP_NAME_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let (status, blocked) = app.status_line(&config.hardware);
    let style = if blocked { LABEL_STYLE_RED } else { LABEL_STYLE_WHITE };
    Text::with_text_style(status, APP_STATUS_POS, style, CENTERED)
        .draw(display)
        .ok();
}

fn draw_shade<D>(display: &mut D, height: u32, config: &DeviceConfig)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(0, TOP), Size::new(PHONE_SCREEN_WIDTH, height))
        .into_styled(SHADE_FILL)
        .draw(display)
        .ok();

    // Contents only once the shade is fully out
    if height < SHADE_HEIGHT {
        return;
    }

    Text::with_text_style("Quick Settings", Point::new(SHADE_MARGIN, TOP + 16), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut volume: String<16> = String::new();
    let _ = write!(volume, "Volume {}%", config.volume);
    Text::with_text_style(&volume, Point::new(SHADE_MARGIN, TOP + 34), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_segments(
        display,
        Point::new(SHADE_MARGIN, TOP + 40),
        SHADE_SEGMENT_WIDTH,
        4,
        lit_segments(config.volume),
        VOLUME_SEGMENTS,
        volume_color(config.volume),
    );

    for (i, toggle) in HardwareToggle::ALL.iter().enumerate() {
        let y = TOP + 56 + i as i32 * 18;
        let on = config.hardware.get(*toggle);
        draw_toggle(display, Point::new(SHADE_MARGIN, y), on);
        Text::with_text_style(toggle.label(), Point::new(SHADE_MARGIN + 30, y + 9), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    Text::with_text_style(
        "No notifications",
        Point::new(PHONE_CENTER_X, TOP + SHADE_HEIGHT as i32 - 12),
        LABEL_STYLE_MUTED,
        CENTERED,
    )
    .draw(display)
    .ok();
}
