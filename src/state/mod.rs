//! Phone state machines.
//!
//! Everything here is pure: no drawing, no clocks, no SDL. Time is passed in
//! through `advance`/`tick`, and input arrives as explicit commands.
//!
//! - [`power`]: top-level power/lock controller
//! - [`lock`]: swipe-to-unlock recognizer
//! - [`home`]: app grid, drawer, shade and app navigation
//! - [`hardware`]: privacy kill switches and device config
//! - [`popup`]: volume overlay timer
//! - [`button`]: power key short/long press classification

pub mod button;
pub mod hardware;
pub mod home;
pub mod lock;
pub mod popup;
pub mod power;

pub use button::{PowerButton, PressKind};
pub use hardware::{DeviceConfig, HardwareToggle, HardwareToggles};
pub use home::{AppId, HomeAction, HomeScreen};
pub use lock::{GestureOutcome, LockScreen};
pub use popup::VolumePopup;
pub use power::{LockState, PhoneState, PowerController, PowerState, Signal, Signals};
