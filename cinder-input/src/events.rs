//! Raw platform events, one variant per DOM event category.
//!
//! The adapter for each target builds these from its own windowing binding;
//! the normalizer never sees a platform type. Coordinates are client-space
//! (viewport) pixels; the shared [`crate::surface`] routine converts them
//! into surface space.

/// Where on the keyboard a key event originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyLocation {
    Standard,
    Left,
    Right,
    Numpad,
}

impl KeyLocation {
    /// From the DOM `KeyboardEvent.location` value.
    pub fn from_dom(location: u32) -> Self {
        match location {
            1 => KeyLocation::Left,
            2 => KeyLocation::Right,
            3 => KeyLocation::Numpad,
            _ => KeyLocation::Standard,
        }
    }
}

/// One changed contact in a touch event, keyed by the platform's opaque
/// identifier. The identifier is unique only while the contact is live.
#[derive(Clone, Copy, Debug)]
pub struct TouchPoint {
    pub id: i32,
    pub client_x: f64,
    pub client_y: f64,
}

/// A raw input event as delivered by the platform event loop.
#[derive(Clone, Debug)]
pub enum RawEvent {
    MouseDown {
        /// Whether the event targeted the capture surface itself.
        on_surface: bool,
        button: usize,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
    },
    MouseMove {
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
    },
    MouseUp {
        button: usize,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
    },
    /// Raw wheel readings; which field carries the real value depends on the
    /// browser (`detail` on Firefox, `wheel_delta` elsewhere).
    Wheel { detail: f64, wheel_delta: f64 },
    KeyDown { key_code: u32, location: KeyLocation },
    /// Character-producing key press.
    KeyPress { character: char },
    KeyUp { key_code: u32, location: KeyLocation },
    /// The window or canvas lost keyboard focus.
    FocusLost,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchCancel { touches: Vec<TouchPoint> },
    TouchEnd { touches: Vec<TouchPoint> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_location_from_dom() {
        assert_eq!(KeyLocation::from_dom(0), KeyLocation::Standard);
        assert_eq!(KeyLocation::from_dom(1), KeyLocation::Left);
        assert_eq!(KeyLocation::from_dom(2), KeyLocation::Right);
        assert_eq!(KeyLocation::from_dom(3), KeyLocation::Numpad);
        assert_eq!(KeyLocation::from_dom(9), KeyLocation::Standard);
    }
}
