//! Widget components shared by the phone screens and the simulator window.
//!
//! - [`control_panel`]: hardware control panel next to the phone
//! - [`frame`]: phone body, side keys and home indicator
//! - [`popups`]: volume popup overlay
//! - [`primitives`]: progress bars, toggle pills, segment rows
//! - [`status_bar`]: time, signal, GPS and battery strip
//!
//! Every draw function is generic over `DrawTarget<Color = Rgb565>` and uses
//! the const styles from [`styles`](crate::styles). Formatted text goes through
//! `heapless::String` with `core::fmt::Write`.
//!
//! Phone widgets draw in screen-local coordinates; the caller crops the
//! display to the phone screen first.

mod control_panel;
mod frame;
mod popups;
mod primitives;
mod status_bar;

pub use control_panel::{draw_control_panel, long_press_label, short_press_label, volume_hint};
pub use frame::{SCREEN_AREA, draw_home_indicator, draw_phone_frame};
pub use popups::{draw_volume_popup, volume_color};
pub use primitives::{TOGGLE_HEIGHT, TOGGLE_WIDTH, draw_progress_bar, draw_segments, draw_toggle};
pub use status_bar::draw_status_bar;
