//! Simulated hardware privacy switches and the read-only device config
//! handed to the app tree.

use core::fmt;

/// A switchable device capability on the control panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HardwareToggle {
    Battery,
    Gps,
    Microphone,
    Camera,
}

impl HardwareToggle {
    /// All switches in control panel order.
    pub const ALL: [Self; 4] = [Self::Battery, Self::Gps, Self::Microphone, Self::Camera];

    /// Short label used on the control panel and notification shade.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Battery => "Battery",
            Self::Gps => "GPS/GSM",
            Self::Microphone => "Microphone",
            Self::Camera => "Camera",
        }
    }
}

impl fmt::Display for HardwareToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current position of every privacy switch. All enabled by default.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HardwareToggles {
    pub battery: bool,
    pub gps: bool,
    pub microphone: bool,
    pub camera: bool,
}

impl HardwareToggles {
    pub const fn new() -> Self {
        Self {
            battery: true,
            gps: true,
            microphone: true,
            camera: true,
        }
    }

    pub const fn get(&self, toggle: HardwareToggle) -> bool {
        match toggle {
            HardwareToggle::Battery => self.battery,
            HardwareToggle::Gps => self.gps,
            HardwareToggle::Microphone => self.microphone,
            HardwareToggle::Camera => self.camera,
        }
    }

    /// Set a switch. Returns `true` if the position changed.
    pub const fn set(&mut self, toggle: HardwareToggle, enabled: bool) -> bool {
        let slot = match toggle {
            HardwareToggle::Battery => &mut self.battery,
            HardwareToggle::Gps => &mut self.gps,
            HardwareToggle::Microphone => &mut self.microphone,
            HardwareToggle::Camera => &mut self.camera,
        };
        let changed = *slot != enabled;
        *slot = enabled;
        changed
    }
}

impl Default for HardwareToggles {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only configuration for the rendered app tree.
///
/// Apps only use it to branch their display text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DeviceConfig {
    pub volume: u8,
    pub hardware: HardwareToggles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_default_enabled() {
        let toggles = HardwareToggles::default();
        for toggle in HardwareToggle::ALL {
            assert!(toggles.get(toggle), "{toggle} should start enabled");
        }
    }

    #[test]
    fn test_set_reports_change() {
        let mut toggles = HardwareToggles::new();
        assert!(toggles.set(HardwareToggle::Gps, false), "Disabling GPS is a change");
        assert!(!toggles.set(HardwareToggle::Gps, false), "Second disable is not a change");
        assert!(!toggles.get(HardwareToggle::Gps));
        assert!(toggles.get(HardwareToggle::Camera), "Other switches are untouched");
    }

    #[test]
    fn test_labels() {
        assert_eq!(HardwareToggle::Gps.label(), "GPS/GSM");
        assert_eq!(HardwareToggle::Microphone.to_string(), "Microphone");
    }
}
