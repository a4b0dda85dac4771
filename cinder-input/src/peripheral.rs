//! Peripheral availability queries and the device-orientation mapping.

use crate::sensor::{SensorAdapter, SensorKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peripheral {
    Accelerometer,
    Gyroscope,
    Compass,
    HardwareKeyboard,
    MultitouchScreen,
    OnscreenKeyboard,
    Vibrator,
}

/// Device orientation as game code sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Environment facts the adapter discovers once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformCaps {
    pub touch_screen: bool,
    pub mobile_device: bool,
}

/// Answer a peripheral availability query. Anything this backend cannot
/// provide reports unavailable rather than failing.
pub fn is_available(peripheral: Peripheral, sensors: &SensorAdapter, caps: &PlatformCaps) -> bool {
    match peripheral {
        Peripheral::Accelerometer => {
            sensors.supported(SensorKind::Accelerometer) && sensors.present(SensorKind::Accelerometer)
        }
        Peripheral::Gyroscope => {
            sensors.supported(SensorKind::Gyroscope) && sensors.present(SensorKind::Gyroscope)
        }
        Peripheral::Compass => false,
        Peripheral::HardwareKeyboard => !caps.mobile_device,
        Peripheral::MultitouchScreen => caps.touch_screen,
        Peripheral::OnscreenKeyboard => caps.mobile_device,
        Peripheral::Vibrator => false,
    }
}

/// Combine the screen rotation angle with the reported orientation type.
///
/// The pairing looks inverted for 90/270 on purpose: a device whose natural
/// orientation is landscape reports `landscape-primary` at rotation 90 when
/// held portrait-style.
pub fn orientation_from(rotation: i32, orientation_type: &str) -> Orientation {
    let portrait = match rotation {
        0 => orientation_type == "portrait-primary",
        180 => orientation_type == "portrait-secondary",
        90 => orientation_type == "landscape-primary",
        270 => orientation_type == "landscape-secondary",
        _ => false,
    };
    if portrait {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_queries_follow_mobile_flag() {
        let sensors = SensorAdapter::new();
        let desktop = PlatformCaps {
            touch_screen: false,
            mobile_device: false,
        };
        assert!(is_available(Peripheral::HardwareKeyboard, &sensors, &desktop));
        assert!(!is_available(Peripheral::OnscreenKeyboard, &sensors, &desktop));

        let phone = PlatformCaps {
            touch_screen: true,
            mobile_device: true,
        };
        assert!(!is_available(Peripheral::HardwareKeyboard, &sensors, &phone));
        assert!(is_available(Peripheral::OnscreenKeyboard, &sensors, &phone));
        assert!(is_available(Peripheral::MultitouchScreen, &sensors, &phone));
    }

    #[test]
    fn test_compass_and_vibrator_unavailable() {
        let sensors = SensorAdapter::new();
        let caps = PlatformCaps::default();
        assert!(!is_available(Peripheral::Compass, &sensors, &caps));
        assert!(!is_available(Peripheral::Vibrator, &sensors, &caps));
    }

    #[test]
    fn test_sensors_unavailable_without_driver() {
        let sensors = SensorAdapter::new();
        let caps = PlatformCaps::default();
        assert!(!is_available(Peripheral::Accelerometer, &sensors, &caps));
        assert!(!is_available(Peripheral::Gyroscope, &sensors, &caps));
    }

    #[test]
    fn test_orientation_pairing() {
        assert_eq!(orientation_from(0, "portrait-primary"), Orientation::Portrait);
        assert_eq!(orientation_from(0, "landscape-primary"), Orientation::Landscape);
        assert_eq!(orientation_from(180, "portrait-secondary"), Orientation::Portrait);
        assert_eq!(orientation_from(90, "landscape-primary"), Orientation::Portrait);
        assert_eq!(orientation_from(270, "landscape-secondary"), Orientation::Portrait);
        assert_eq!(orientation_from(270, "landscape-primary"), Orientation::Landscape);
        assert_eq!(orientation_from(45, "portrait-primary"), Orientation::Landscape);
    }
}
