//! The input state store: current and just-changed keyboard, mouse-button
//! and multi-touch state, plus the polling accessors game code reads every
//! frame.
//!
//! All mutation flows through the normalizer; polling reads are pure and
//! never fail. Out-of-range pointer or button queries return their default
//! instead of panicking, because this layer feeds a real-time loop that
//! cannot afford to halt.

use crate::buttons;
use crate::keys;

/// Maximum number of simultaneously tracked pointers.
pub const MAX_TOUCHES: usize = 20;

/// One tracked pointer: slot 0 doubles as the mouse pointer, the rest are
/// touch contacts. `touched` is true iff the slot currently represents an
/// active button-down or live touch contact.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSlot {
    pub touched: bool,
    pub x: i32,
    pub y: i32,
    pub delta_x: i32,
    pub delta_y: i32,
}

/// Current input state. One instance per canvas; never shared.
pub struct InputState {
    pointers: [PointerSlot; MAX_TOUCHES],
    pressed_buttons: [bool; buttons::COUNT],
    just_pressed_buttons: [bool; buttons::COUNT],
    pressed_keys: [bool; keys::CODE_COUNT],
    just_pressed_keys: [bool; keys::CODE_COUNT],
    /// Mirror of `pressed_keys` for iteration when draining on focus loss.
    pressed_key_set: Vec<i32>,
    key_just_pressed: bool,
    just_touched: bool,
    has_focus: bool,
    cursor_captured: bool,
    event_time_ns: u64,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            pointers: [PointerSlot::default(); MAX_TOUCHES],
            pressed_buttons: [false; buttons::COUNT],
            just_pressed_buttons: [false; buttons::COUNT],
            pressed_keys: [false; keys::CODE_COUNT],
            just_pressed_keys: [false; keys::CODE_COUNT],
            pressed_key_set: Vec::new(),
            key_just_pressed: false,
            just_touched: false,
            has_focus: true,
            cursor_captured: false,
            event_time_ns: 0,
        }
    }

    /// Clear the one-cycle "just" flags. Must run exactly once per poll
    /// cycle, before that cycle's event batch is processed.
    pub fn reset(&mut self) {
        if self.just_touched {
            self.just_touched = false;
            self.just_pressed_buttons = [false; buttons::COUNT];
        }
        if self.key_just_pressed {
            self.key_just_pressed = false;
            self.just_pressed_keys = [false; keys::CODE_COUNT];
        }
    }

    // ── polling reads ──

    pub fn x(&self, pointer: usize) -> i32 {
        self.pointers.get(pointer).map_or(0, |p| p.x)
    }

    pub fn y(&self, pointer: usize) -> i32 {
        self.pointers.get(pointer).map_or(0, |p| p.y)
    }

    pub fn delta_x(&self, pointer: usize) -> i32 {
        self.pointers.get(pointer).map_or(0, |p| p.delta_x)
    }

    pub fn delta_y(&self, pointer: usize) -> i32 {
        self.pointers.get(pointer).map_or(0, |p| p.delta_y)
    }

    pub fn is_touched(&self, pointer: usize) -> bool {
        self.pointers.get(pointer).map_or(false, |p| p.touched)
    }

    /// True if any pointer is down.
    pub fn any_touched(&self) -> bool {
        self.pointers.iter().any(|p| p.touched)
    }

    pub fn just_touched(&self) -> bool {
        self.just_touched
    }

    /// 1.0 while touched, 0.0 otherwise; the web platform reports no real
    /// pressure.
    pub fn pressure(&self, pointer: usize) -> f32 {
        if self.is_touched(pointer) {
            1.0
        } else {
            0.0
        }
    }

    pub fn is_button_pressed(&self, button: usize) -> bool {
        button < buttons::COUNT && self.pressed_buttons[button] && self.pointers[0].touched
    }

    pub fn is_button_just_pressed(&self, button: usize) -> bool {
        button < buttons::COUNT && self.just_pressed_buttons[button]
    }

    pub fn is_key_pressed(&self, code: i32) -> bool {
        if code == keys::ANY_KEY {
            return !self.pressed_key_set.is_empty();
        }
        keys::is_valid(code) && self.pressed_keys[code as usize]
    }

    pub fn is_key_just_pressed(&self, code: i32) -> bool {
        if code == keys::ANY_KEY {
            return self.key_just_pressed;
        }
        keys::is_valid(code) && self.just_pressed_keys[code as usize]
    }

    pub fn pressed_key_count(&self) -> usize {
        self.pressed_key_set.len()
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Timestamp of the most recent pointer/touch/wheel event, in
    /// nanoseconds on the platform's monotonic clock.
    pub fn event_time_ns(&self) -> u64 {
        self.event_time_ns
    }

    // ── mutators (normalizer and adapter only) ──

    /// Mirror of the platform's pointer-lock status, maintained by the
    /// adapter on lock-change notifications.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
    }

    pub(crate) fn set_focus(&mut self, focus: bool) {
        self.has_focus = focus;
    }

    pub(crate) fn set_event_time_ns(&mut self, time_ns: u64) {
        self.event_time_ns = time_ns;
    }

    pub(crate) fn mark_just_touched(&mut self) {
        self.just_touched = true;
    }

    pub(crate) fn pointer_mut(&mut self, pointer: usize) -> &mut PointerSlot {
        &mut self.pointers[pointer]
    }

    pub(crate) fn press_button(&mut self, button: usize) {
        if button < buttons::COUNT {
            self.pressed_buttons[button] = true;
            self.just_pressed_buttons[button] = true;
        }
    }

    pub(crate) fn release_button(&mut self, button: usize) {
        if button < buttons::COUNT {
            self.pressed_buttons[button] = false;
        }
    }

    pub(crate) fn is_button_down(&self, button: usize) -> bool {
        button < buttons::COUNT && self.pressed_buttons[button]
    }

    /// Track a key transition to pressed. Returns false if the key was
    /// already down (repeat events must not re-fire `keyDown`).
    pub(crate) fn press_key(&mut self, code: i32) -> bool {
        if !keys::is_valid(code) || self.pressed_keys[code as usize] {
            return false;
        }
        self.pressed_keys[code as usize] = true;
        self.pressed_key_set.push(code);
        self.key_just_pressed = true;
        self.just_pressed_keys[code as usize] = true;
        true
    }

    /// Clear a pressed key. Returns false if it was not tracked; the caller
    /// still emits `keyUp` in that case, but the count never goes negative.
    pub(crate) fn release_key(&mut self, code: i32) -> bool {
        if !keys::is_valid(code) || !self.pressed_keys[code as usize] {
            return false;
        }
        self.pressed_keys[code as usize] = false;
        self.pressed_key_set.retain(|&c| c != code);
        true
    }

    /// Force-release every pressed key, returning the drained codes so the
    /// normalizer can emit one `keyUp` each. Used on focus loss to avoid
    /// stuck keys.
    pub(crate) fn drain_pressed_keys(&mut self) -> Vec<i32> {
        let drained = std::mem::take(&mut self.pressed_key_set);
        for &code in &drained {
            self.pressed_keys[code as usize] = false;
        }
        drained
    }
}
