//! Home screen view state: app grid, app drawer, open app, notification
//! shade and the swipe-up re-lock gesture.
//!
//! Pointer input comes in screen-local coordinates. The home screen never
//! changes power or lock state itself; anything the parent has to act on is
//! returned as a [`HomeAction`].
//!
//! # Views
//!
//! An open app covers the drawer, and the drawer covers the grid. Closing an
//! app opened from the drawer goes back to the drawer. The shade only opens
//! over the bare grid.
//!
//! # Gestures (grid only)
//!
//! | Start | Movement | Result |
//! |-------|----------|--------|
//! | top `SHADE_ZONE` px | down > `SHADE_OPEN_THRESHOLD` | shade opens |
//! | bottom `RELOCK_ZONE` px | up > `RELOCK_THRESHOLD` | [`HomeAction::Lock`] |
//! | anywhere | < `TAP_SLOP` | tap (icon, drawer button, back arrow, close shade) |

use std::time::Duration;

use embedded_graphics::prelude::Point;

use super::hardware::HardwareToggles;
use super::popup::VolumePopup;
use crate::config::{
    APP_HEADER_HEIGHT,
    BACK_BUTTON_WIDTH,
    DRAWER_BUTTON_CENTER,
    DRAWER_BUTTON_SIZE,
    DRAWER_GRID_TOP,
    GRID_CELL_HEIGHT,
    GRID_CELL_WIDTH,
    GRID_COLUMNS,
    GRID_TOP,
    MAX_SHADE_PULL,
    PHONE_SCREEN_HEIGHT,
    RELOCK_THRESHOLD,
    RELOCK_ZONE,
    SHADE_OPEN_THRESHOLD,
    SHADE_ZONE,
    STATUS_BAR_HEIGHT,
    TAP_SLOP,
};

// =============================================================================
// Apps
// =============================================================================

/// Placeholder apps reachable from the grid or the drawer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppId {
    Phone,
    Messages,
    Camera,
    Browser,
    Settings,
    Calculator,
    Calendar,
    Music,
    Files,
    AuroraStore,
    Weather,
    Notes,
    Terminal,
    FDroid,
    Contacts,
    Health,
    RetroArch,
    Maps,
    Gallery,
    Clock,
    Privacy,
}

/// Home grid order: the main row, then the dock row.
pub const HOME_APPS: [AppId; 8] = [
    AppId::Phone,
    AppId::Messages,
    AppId::Camera,
    AppId::Browser,
    AppId::Settings,
    AppId::Calculator,
    AppId::Calendar,
    AppId::Music,
];

/// Drawer order, row by row.
pub const DRAWER_APPS: [AppId; 13] = [
    AppId::Files,
    AppId::AuroraStore,
    AppId::Weather,
    AppId::Notes,
    AppId::Terminal,
    AppId::FDroid,
    AppId::Contacts,
    AppId::Health,
    AppId::RetroArch,
    AppId::Maps,
    AppId::Gallery,
    AppId::Clock,
    AppId::Privacy,
];

impl AppId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Messages => "Messages",
            Self::Camera => "Camera",
            Self::Browser => "Browser",
            Self::Settings => "Settings",
            Self::Calculator => "Calculator",
            Self::Calendar => "Calendar",
            Self::Music => "Music",
            Self::Files => "Files",
            Self::AuroraStore => "Aurora Store",
            Self::Weather => "Weather",
            Self::Notes => "Notes",
            Self::Terminal => "Terminal",
            Self::FDroid => "F-Droid",
            Self::Contacts => "Contacts",
            Self::Health => "Health",
            Self::RetroArch => "RetroArch",
            Self::Maps => "Maps",
            Self::Gallery => "Gallery",
            Self::Clock => "Clock",
            Self::Privacy => "Privacy Central",
        }
    }

    /// Label under the grid icon (fits one cell).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::AuroraStore => "Aurora",
            Self::Privacy => "Privacy",
            _ => self.name(),
        }
    }

    /// The app's one line of hardware-dependent text.
    ///
    /// Returns the text and whether it describes blocked hardware.
    pub const fn status_line(self, hw: &HardwareToggles) -> (&'static str, bool) {
        match self {
            Self::Camera if !hw.camera => ("Camera has crashed", true),
            Self::Camera => ("Viewfinder ready", false),
            Self::Phone | Self::Messages if !hw.microphone => ("Microphone is off", true),
            Self::Weather if !hw.gps => ("No weather data", true),
            Self::Weather => ("Using current location", false),
            Self::Maps if !hw.gps => ("Location unavailable", true),
            Self::Maps => ("Accuracy: 5 meters", false),
            Self::Settings if hw.battery => ("Battery 87%", false),
            Self::Settings => ("Battery disconnected", true),
            Self::Privacy => match (hw.gps, hw.microphone, hw.camera) {
                (true, true, true) => ("All sensors enabled", false),
                (false, false, false) => ("All sensors blocked", false),
                _ => ("Some sensors blocked", false),
            },
            _ => ("Ready", false),
        }
    }

    /// First letter, used as the icon glyph.
    pub fn initial(self) -> char {
        self.name().chars().next().unwrap_or('?')
    }
}

/// A four-column icon grid starting at `top` (screen-local).
#[derive(Clone, Copy, Debug)]
pub struct AppGrid {
    pub top: i32,
    pub apps: &'static [AppId],
}

/// The eight apps on the home screen.
pub const HOME_GRID: AppGrid = AppGrid {
    top: GRID_TOP,
    apps: &HOME_APPS,
};

/// Every other app, listed in the drawer.
pub const DRAWER_GRID: AppGrid = AppGrid {
    top: DRAWER_GRID_TOP,
    apps: &DRAWER_APPS,
};

impl AppGrid {
    /// Top-left corner of the cell for app `index`.
    pub const fn cell_origin(&self, index: usize) -> Point {
        let col = (index as u32) % GRID_COLUMNS;
        let row = (index as u32) / GRID_COLUMNS;
        Point::new(
            (col * GRID_CELL_WIDTH) as i32,
            self.top + (row * GRID_CELL_HEIGHT) as i32,
        )
    }

    /// Center of the cell for app `index`.
    pub const fn cell_center(&self, index: usize) -> Point {
        let origin = self.cell_origin(index);
        Point::new(
            origin.x + GRID_CELL_WIDTH as i32 / 2,
            origin.y + GRID_CELL_HEIGHT as i32 / 2,
        )
    }

    /// App under a point, if any.
    pub fn app_at(&self, point: Point) -> Option<AppId> {
        if point.x < 0 || point.y < self.top {
            return None;
        }
        let col = point.x as u32 / GRID_CELL_WIDTH;
        let row = (point.y - self.top) as u32 / GRID_CELL_HEIGHT;
        if col >= GRID_COLUMNS {
            return None;
        }
        self.apps.get((row * GRID_COLUMNS + col) as usize).copied()
    }
}

/// Whether a screen-local point hits the back arrow of an app or the drawer.
pub const fn is_back_button(point: Point) -> bool {
    let top = STATUS_BAR_HEIGHT as i32;
    point.x >= 0
        && point.x < BACK_BUTTON_WIDTH as i32
        && point.y >= top
        && point.y < top + APP_HEADER_HEIGHT as i32
}

/// Whether a screen-local point hits the drawer button under the home grid.
pub const fn is_drawer_button(point: Point) -> bool {
    let half = DRAWER_BUTTON_SIZE as i32 / 2;
    (point.x - DRAWER_BUTTON_CENTER.x).abs() <= half && (point.y - DRAWER_BUTTON_CENTER.y).abs() <= half
}

// =============================================================================
// Home Screen
// =============================================================================

/// Request from the home screen to its parent controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HomeAction {
    /// Re-lock the phone (swipe up from the bottom edge).
    Lock,
    /// Open an app (tap on a grid or drawer icon).
    OpenApp(AppId),
    /// Leave the current app (tap on the back arrow).
    CloseApp,
    /// Show the app drawer (tap on the drawer button).
    OpenDrawer,
    /// Back from the drawer to the grid.
    CloseDrawer,
}

#[derive(Clone, Copy, Debug)]
struct HomeDrag {
    start: Point,
    current: Point,
}

impl HomeDrag {
    const fn dy(&self) -> i32 {
        self.current.y - self.start.y
    }

    const fn travel(&self) -> i32 {
        (self.current.x - self.start.x).abs() + (self.current.y - self.start.y).abs()
    }
}

/// Home screen view state.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeScreen {
    current_app: Option<AppId>,
    drawer_open: bool,
    shade_open: bool,
    shade_pull: i32,
    drag: Option<HomeDrag>,
    volume_popup: VolumePopup,
}

impl HomeScreen {
    pub const fn new() -> Self {
        Self {
            current_app: None,
            drawer_open: false,
            shade_open: false,
            shade_pull: 0,
            drag: None,
            volume_popup: VolumePopup::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Open an app over whatever is shown. The drawer stays underneath.
    pub const fn open_app(&mut self, app: AppId) {
        self.current_app = Some(app);
        self.shade_open = false;
        self.shade_pull = 0;
    }

    pub const fn close_app(&mut self) {
        self.current_app = None;
    }

    /// Show the drawer. Ignored while an app is open.
    pub const fn open_drawer(&mut self) -> bool {
        if self.current_app.is_some() {
            return false;
        }
        self.drawer_open = true;
        self.shade_open = false;
        self.shade_pull = 0;
        true
    }

    pub const fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Close the topmost layer: shade, then app, then drawer.
    /// Returns `true` if anything closed.
    pub const fn back(&mut self) -> bool {
        if self.shade_open {
            self.shade_open = false;
        } else if self.current_app.is_some() {
            self.current_app = None;
        } else if self.drawer_open {
            self.drawer_open = false;
        } else {
            return false;
        }
        true
    }

    #[inline]
    pub const fn current_app(&self) -> Option<AppId> {
        self.current_app
    }

    #[inline]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[inline]
    pub const fn is_shade_open(&self) -> bool {
        self.shade_open
    }

    /// Neither an app nor the drawer covers the grid.
    #[inline]
    pub const fn is_grid_visible(&self) -> bool {
        self.current_app.is_none() && !self.drawer_open
    }

    /// Partial shade pull while dragging down from the top.
    #[inline]
    pub const fn shade_pull(&self) -> i32 {
        self.shade_pull
    }

    /// Back to the grid with nothing open (on lock / power loss).
    pub const fn reset(&mut self) {
        *self = Self::new();
    }

    // -------------------------------------------------------------------------
    // Volume Popup
    // -------------------------------------------------------------------------

    pub const fn show_volume_popup(&mut self) {
        self.volume_popup.show();
    }

    #[inline]
    pub const fn is_volume_popup_visible(&self) -> bool {
        self.volume_popup.is_visible()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.volume_popup.advance(dt);
    }

    // -------------------------------------------------------------------------
    // Pointer Input
    // -------------------------------------------------------------------------

    pub const fn pointer_down(&mut self, point: Point) {
        self.drag = Some(HomeDrag { start: point, current: point });
        self.shade_pull = 0;
    }

    /// Track a drag. On the grid this may end the gesture early with
    /// [`HomeAction::Lock`].
    pub fn pointer_move(&mut self, point: Point) -> Option<HomeAction> {
        let drag = self.drag.as_mut()?;
        drag.current = point;
        let drag = *drag;
        if !self.is_grid_visible() {
            return None;
        }
        let dy = drag.dy();

        if drag.start.y < SHADE_ZONE && dy > 0 && !self.shade_open {
            self.shade_pull = dy.min(MAX_SHADE_PULL);
            if dy > SHADE_OPEN_THRESHOLD {
                self.shade_open = true;
                self.shade_pull = 0;
            }
        }

        if drag.start.y > PHONE_SCREEN_HEIGHT as i32 - RELOCK_ZONE && dy < -RELOCK_THRESHOLD {
            self.drag = None;
            self.shade_pull = 0;
            return Some(HomeAction::Lock);
        }

        None
    }

    /// Finish the gesture. Short drags count as taps; a tap or an upward
    /// swipe closes an open shade.
    pub fn pointer_up(&mut self) -> Option<HomeAction> {
        let drag = self.drag.take()?;
        self.shade_pull = 0;

        let is_tap = drag.travel() < TAP_SLOP;
        if self.shade_open && (is_tap || drag.dy() < 0) {
            self.shade_open = false;
            return None;
        }
        if !is_tap {
            return None;
        }

        let point = drag.start;
        if self.current_app.is_some() {
            is_back_button(point).then_some(HomeAction::CloseApp)
        } else if self.drawer_open {
            if is_back_button(point) {
                Some(HomeAction::CloseDrawer)
            } else {
                DRAWER_GRID.app_at(point).map(HomeAction::OpenApp)
            }
        } else if is_drawer_button(point) {
            Some(HomeAction::OpenDrawer)
        } else {
            HOME_GRID.app_at(point).map(HomeAction::OpenApp)
        }
    }
}
