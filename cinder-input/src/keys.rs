//! Canonical key codes and the DOM keycode translation table.
//!
//! Canonical codes are small dense integers so the state store can index
//! plain arrays with them. `ANY_KEY` is accepted by the polling accessors
//! and means "any key at all".

use crate::events::KeyLocation;

pub const ANY_KEY: i32 = -1;
pub const UNKNOWN: i32 = 0;

pub const A: i32 = 1;
pub const B: i32 = 2;
pub const C: i32 = 3;
pub const D: i32 = 4;
pub const E: i32 = 5;
pub const F: i32 = 6;
pub const G: i32 = 7;
pub const H: i32 = 8;
pub const I: i32 = 9;
pub const J: i32 = 10;
pub const K: i32 = 11;
pub const L: i32 = 12;
pub const M: i32 = 13;
pub const N: i32 = 14;
pub const O: i32 = 15;
pub const P: i32 = 16;
pub const Q: i32 = 17;
pub const R: i32 = 18;
pub const S: i32 = 19;
pub const T: i32 = 20;
pub const U: i32 = 21;
pub const V: i32 = 22;
pub const W: i32 = 23;
pub const X: i32 = 24;
pub const Y: i32 = 25;
pub const Z: i32 = 26;

pub const NUM_0: i32 = 27;
pub const NUM_1: i32 = 28;
pub const NUM_2: i32 = 29;
pub const NUM_3: i32 = 30;
pub const NUM_4: i32 = 31;
pub const NUM_5: i32 = 32;
pub const NUM_6: i32 = 33;
pub const NUM_7: i32 = 34;
pub const NUM_8: i32 = 35;
pub const NUM_9: i32 = 36;

pub const NUMPAD_0: i32 = 37;
pub const NUMPAD_1: i32 = 38;
pub const NUMPAD_2: i32 = 39;
pub const NUMPAD_3: i32 = 40;
pub const NUMPAD_4: i32 = 41;
pub const NUMPAD_5: i32 = 42;
pub const NUMPAD_6: i32 = 43;
pub const NUMPAD_7: i32 = 44;
pub const NUMPAD_8: i32 = 45;
pub const NUMPAD_9: i32 = 46;
pub const NUMPAD_DIVIDE: i32 = 47;
pub const NUMPAD_MULTIPLY: i32 = 48;
pub const NUMPAD_SUBTRACT: i32 = 49;
pub const NUMPAD_ADD: i32 = 50;
pub const NUMPAD_DOT: i32 = 51;
pub const NUMPAD_ENTER: i32 = 52;

pub const F1: i32 = 53;
pub const F2: i32 = 54;
pub const F3: i32 = 55;
pub const F4: i32 = 56;
pub const F5: i32 = 57;
pub const F6: i32 = 58;
pub const F7: i32 = 59;
pub const F8: i32 = 60;
pub const F9: i32 = 61;
pub const F10: i32 = 62;
pub const F11: i32 = 63;
pub const F12: i32 = 64;
pub const F13: i32 = 65;
pub const F14: i32 = 66;
pub const F15: i32 = 67;
pub const F16: i32 = 68;
pub const F17: i32 = 69;
pub const F18: i32 = 70;
pub const F19: i32 = 71;
pub const F20: i32 = 72;
pub const F21: i32 = 73;
pub const F22: i32 = 74;
pub const F23: i32 = 75;
pub const F24: i32 = 76;

pub const ENTER: i32 = 77;
pub const TAB: i32 = 78;
pub const BACKSPACE: i32 = 79;
pub const SPACE: i32 = 80;
pub const ESCAPE: i32 = 81;

pub const SHIFT_LEFT: i32 = 82;
pub const SHIFT_RIGHT: i32 = 83;
pub const CONTROL_LEFT: i32 = 84;
pub const CONTROL_RIGHT: i32 = 85;
pub const ALT_LEFT: i32 = 86;
pub const ALT_RIGHT: i32 = 87;

pub const UP: i32 = 88;
pub const DOWN: i32 = 89;
pub const LEFT: i32 = 90;
pub const RIGHT: i32 = 91;
pub const HOME: i32 = 92;
pub const END: i32 = 93;
pub const PAGE_UP: i32 = 94;
pub const PAGE_DOWN: i32 = 95;
pub const INSERT: i32 = 96;
pub const FORWARD_DEL: i32 = 97;

pub const PAUSE: i32 = 98;
pub const CAPS_LOCK: i32 = 99;
pub const NUM_LOCK: i32 = 100;
pub const SCROLL_LOCK: i32 = 101;
pub const PRINT_SCREEN: i32 = 102;

pub const VOLUME_UP: i32 = 103;
pub const VOLUME_DOWN: i32 = 104;
pub const MEDIA_NEXT: i32 = 105;
pub const MEDIA_PREVIOUS: i32 = 106;
pub const MEDIA_STOP: i32 = 107;
pub const MEDIA_PLAY_PAUSE: i32 = 108;

pub const SEMICOLON: i32 = 109;
pub const EQUALS: i32 = 110;
pub const COMMA: i32 = 111;
pub const MINUS: i32 = 112;
pub const PERIOD: i32 = 113;
pub const SLASH: i32 = 114;
pub const APOSTROPHE: i32 = 115;
pub const LEFT_BRACKET: i32 = 116;
pub const RIGHT_BRACKET: i32 = 117;
pub const BACKSLASH: i32 = 118;

pub const MAX_KEYCODE: i32 = BACKSLASH;

/// Array size for key-indexed state (`0..=MAX_KEYCODE`).
pub const CODE_COUNT: usize = (MAX_KEYCODE + 1) as usize;

/// Returns true for codes the state arrays can index.
pub fn is_valid(code: i32) -> bool {
    (0..=MAX_KEYCODE).contains(&code)
}

/// Translate a raw DOM `keyCode` plus key location into a canonical code.
///
/// The location disambiguates left/right modifiers and the numpad Enter;
/// everything unrecognized maps to [`UNKNOWN`].
pub fn from_dom(key_code: u32, location: KeyLocation) -> i32 {
    match key_code {
        8 => BACKSPACE,
        9 => TAB,
        13 => {
            if location == KeyLocation::Numpad {
                NUMPAD_ENTER
            } else {
                ENTER
            }
        }
        16 => {
            if location == KeyLocation::Right {
                SHIFT_RIGHT
            } else {
                SHIFT_LEFT
            }
        }
        17 => {
            if location == KeyLocation::Right {
                CONTROL_RIGHT
            } else {
                CONTROL_LEFT
            }
        }
        18 => {
            if location == KeyLocation::Right {
                ALT_RIGHT
            } else {
                ALT_LEFT
            }
        }
        19 => PAUSE,
        20 => CAPS_LOCK,
        27 => ESCAPE,
        32 => SPACE,
        33 => PAGE_UP,
        34 => PAGE_DOWN,
        35 => END,
        36 => HOME,
        37 => LEFT,
        38 => UP,
        39 => RIGHT,
        40 => DOWN,
        44 => PRINT_SCREEN,
        45 => INSERT,
        46 => FORWARD_DEL,
        48..=57 => NUM_0 + (key_code as i32 - 48),
        65..=90 => A + (key_code as i32 - 65),
        // left/right OS keys have no canonical counterpart
        91 | 92 => UNKNOWN,
        96..=105 => NUMPAD_0 + (key_code as i32 - 96),
        106 => NUMPAD_MULTIPLY,
        107 => NUMPAD_ADD,
        109 => NUMPAD_SUBTRACT,
        110 => NUMPAD_DOT,
        111 => NUMPAD_DIVIDE,
        112..=135 => F1 + (key_code as i32 - 112),
        144 => NUM_LOCK,
        145 => SCROLL_LOCK,
        // 182/183 are what Firefox reports for the volume keys
        174 | 182 => VOLUME_DOWN,
        175 | 183 => VOLUME_UP,
        176 => MEDIA_NEXT,
        177 => MEDIA_PREVIOUS,
        178 => MEDIA_STOP,
        179 => MEDIA_PLAY_PAUSE,
        186 => SEMICOLON,
        187 => EQUALS,
        188 => COMMA,
        189 => MINUS,
        190 => PERIOD,
        191 => SLASH,
        219 => LEFT_BRACKET,
        220 => BACKSLASH,
        221 => RIGHT_BRACKET,
        222 => APOSTROPHE,
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_dom ──

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(from_dom(65, KeyLocation::Standard), A);
        assert_eq!(from_dom(90, KeyLocation::Standard), Z);
        assert_eq!(from_dom(48, KeyLocation::Standard), NUM_0);
        assert_eq!(from_dom(57, KeyLocation::Standard), NUM_9);
    }

    #[test]
    fn test_location_disambiguation() {
        assert_eq!(from_dom(16, KeyLocation::Left), SHIFT_LEFT);
        assert_eq!(from_dom(16, KeyLocation::Right), SHIFT_RIGHT);
        assert_eq!(from_dom(17, KeyLocation::Standard), CONTROL_LEFT);
        assert_eq!(from_dom(18, KeyLocation::Right), ALT_RIGHT);
        assert_eq!(from_dom(13, KeyLocation::Standard), ENTER);
        assert_eq!(from_dom(13, KeyLocation::Numpad), NUMPAD_ENTER);
    }

    #[test]
    fn test_numpad_range() {
        assert_eq!(from_dom(96, KeyLocation::Numpad), NUMPAD_0);
        assert_eq!(from_dom(105, KeyLocation::Numpad), NUMPAD_9);
        assert_eq!(from_dom(111, KeyLocation::Numpad), NUMPAD_DIVIDE);
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(from_dom(112, KeyLocation::Standard), F1);
        assert_eq!(from_dom(135, KeyLocation::Standard), F24);
    }

    #[test]
    fn test_unmapped_is_unknown() {
        assert_eq!(from_dom(255, KeyLocation::Standard), UNKNOWN);
        assert_eq!(from_dom(91, KeyLocation::Standard), UNKNOWN);
        // grave accent is deliberately unmapped
        assert_eq!(from_dom(192, KeyLocation::Standard), UNKNOWN);
    }

    // ── is_valid ──

    #[test]
    fn test_valid_range() {
        assert!(is_valid(UNKNOWN));
        assert!(is_valid(MAX_KEYCODE));
        assert!(!is_valid(ANY_KEY));
        assert!(!is_valid(MAX_KEYCODE + 1));
    }
}
