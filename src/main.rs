// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u128->u32 casts for timing values
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Spirit OS phone simulator.
//!
//! Opens an SDL window with a phone on the left and a hardware control panel
//! on the right. The phone runs the power/lock state machine from the
//! [`spirit_os`] library: boot and shutdown animations, a swipe-to-unlock
//! lock screen and a home screen with an app grid and notification shade.
//!
//! # Controls
//!
//! | Input                 | Action                                        |
//! |-----------------------|-----------------------------------------------|
//! | `P` (hold)            | Power key: short press, or long press at 800ms |
//! | `S` / `L`             | Direct short / long press                     |
//! | `Up` / `Down`, `+`/`-`| Volume up / down                              |
//! | `1` - `4`             | Toggle battery / GPS / microphone / camera    |
//! | `Backspace` / `Esc`   | Back (close shade, app or drawer)             |
//! | Mouse drag on screen  | Touch gestures                                |
//!
//! # Frame Loop
//!
//! 1. Drain window events into controller commands
//! 2. Poll the power key for a long press while held
//! 3. Advance animations by the measured frame delta
//! 4. Redraw the whole window and sleep out the rest of `FRAME_TIME`
//!
//! Every signal the controller emits is appended to the on-screen log.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use spirit_os::clock::ClockText;
use spirit_os::colors::BLACK;
use spirit_os::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE};
use spirit_os::profiling::{EventLog, FrameStats};
use spirit_os::render::{FrameContext, draw_frame, to_screen_local, to_screen_local_unclamped};
use spirit_os::state::{HardwareToggle, PowerButton, PowerController, PressKind, Signals};

fn main() {
    // Initialize display and window
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Spirit OS Simulator", &output_settings);

    // Window must be shown once before events can be polled
    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut phone = PowerController::new();
    let mut power_button = PowerButton::new();

    // Pointer is captured by the phone screen from press until release
    let mut dragging = false;

    let mut stats = FrameStats::new();
    let mut events = EventLog::new();
    events.push("Simulator started");

    // Phone starts booting as soon as the window opens
    log_signals(&mut events, &phone.power_long_press());

    let start = Instant::now();
    let mut last_frame = start;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame);
        last_frame = frame_start;
        let now = frame_start.duration_since(start);

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so a held key is one press
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::P {
                        power_button.press(now);
                    } else {
                        let signals = handle_key(&mut phone, &mut events, keycode);
                        log_signals(&mut events, &signals);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } if keycode == Keycode::P => {
                    if let Some(kind) = power_button.release(now) {
                        log_signals(&mut events, &press_power(&mut phone, kind));
                    }
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    if let Some(local) = to_screen_local(point) {
                        phone.pointer_down(local);
                        dragging = true;
                    }
                }
                SimulatorEvent::MouseMove { point } if dragging => {
                    let signals = phone.pointer_move(to_screen_local_unclamped(point));
                    log_signals(&mut events, &signals);
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } if dragging => {
                    dragging = false;
                    log_signals(&mut events, &phone.pointer_up());
                }
                _ => {}
            }
        }

        // Long press fires while the key is still held
        if let Some(kind) = power_button.update(now) {
            log_signals(&mut events, &press_power(&mut phone, kind));
        }

        log_signals(&mut events, &phone.tick(dt));

        // ======================================================================
        // Rendering
        // ======================================================================

        let clock = ClockText::now();
        let ctx = FrameContext {
            clock: &clock,
            power_held: power_button.is_held(),
            log: &events,
            stats: &stats,
        };
        draw_frame(&mut display, &phone, &ctx);
        let render_time = frame_start.elapsed();

        window.update(&display);

        // Frame rate limiting
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }

        stats.record(frame_start.elapsed(), render_time);
    }
}

/// Dispatch a classified power key press.
fn press_power(phone: &mut PowerController, kind: PressKind) -> Signals {
    match kind {
        PressKind::Short => phone.power_short_press(),
        PressKind::Long => phone.power_long_press(),
    }
}

/// Map a key to a controller command. Unmapped keys do nothing.
fn handle_key(phone: &mut PowerController, log: &mut EventLog, keycode: Keycode) -> Signals {
    match keycode {
        Keycode::S => phone.power_short_press(),
        Keycode::L => phone.power_long_press(),
        Keycode::Up | Keycode::Plus | Keycode::Equals | Keycode::KpPlus => phone.volume_up(),
        Keycode::Down | Keycode::Minus | Keycode::KpMinus => phone.volume_down(),
        Keycode::Num1 => phone.toggle_hardware(HardwareToggle::Battery),
        Keycode::Num2 => phone.toggle_hardware(HardwareToggle::Gps),
        Keycode::Num3 => phone.toggle_hardware(HardwareToggle::Microphone),
        Keycode::Num4 => phone.toggle_hardware(HardwareToggle::Camera),
        Keycode::Backspace | Keycode::Escape => {
            if phone.back() {
                log.push("Back");
            }
            Signals::new()
        }
        _ => Signals::new(),
    }
}

fn log_signals(log: &mut EventLog, signals: &Signals) {
    for signal in signals.iter() {
        log.record(signal);
    }
}
