//! The event normalizer: classifies raw platform events, applies the
//! pointer-lock and focus rules, mutates the state store, and invokes the
//! registered listener.
//!
//! `handle` returns whether the platform's default action for the event must
//! be suppressed, so the adapter can call `preventDefault` without this
//! module knowing anything about the DOM.

use log::warn;

use crate::agent::AgentInfo;
use crate::buttons;
use crate::events::{RawEvent, TouchPoint};
use crate::keys;
use crate::listener::InputListener;
use crate::state::InputState;
use crate::surface::SurfaceGeometry;
use crate::touchmap::TouchMap;
use crate::wheel;

pub struct EventNormalizer {
    state: InputState,
    touch_map: TouchMap,
    listener: Option<Box<dyn InputListener>>,
    caught_keys: [bool; keys::CODE_COUNT],
    agent: AgentInfo,
}

impl EventNormalizer {
    pub fn new(agent: AgentInfo) -> Self {
        let mut normalizer = EventNormalizer {
            state: InputState::new(),
            touch_map: TouchMap::new(),
            listener: None,
            caught_keys: [false; keys::CODE_COUNT],
            agent,
        };
        // backwards compatibility: backspace was always caught
        normalizer.set_catch_key(keys::BACKSPACE, true);
        normalizer
    }

    /// Register the listener, replacing any prior one.
    pub fn set_listener(&mut self, listener: Option<Box<dyn InputListener>>) {
        self.listener = listener;
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InputState {
        &mut self.state
    }

    /// Suppress the platform default action for a key (e.g. browser back
    /// navigation on backspace).
    pub fn set_catch_key(&mut self, code: i32, catch: bool) {
        if keys::is_valid(code) {
            self.caught_keys[code as usize] = catch;
        }
    }

    pub fn is_catch_key(&self, code: i32) -> bool {
        keys::is_valid(code) && self.caught_keys[code as usize]
    }

    /// Per-cycle reset, forwarded to the store.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Process one raw event. Returns true if the platform's default action
    /// must be suppressed.
    pub fn handle(&mut self, geometry: &SurfaceGeometry, event: RawEvent, timestamp_ns: u64) -> bool {
        match event {
            RawEvent::MouseDown {
                on_surface,
                button,
                client_x,
                client_y,
                movement_x,
                movement_y,
            } => {
                self.mouse_down(
                    geometry, on_surface, button, client_x, client_y, movement_x, movement_y,
                    timestamp_ns,
                );
                false
            }
            RawEvent::MouseMove {
                client_x,
                client_y,
                movement_x,
                movement_y,
            } => {
                self.mouse_move(geometry, client_x, client_y, movement_x, movement_y, timestamp_ns);
                false
            }
            RawEvent::MouseUp {
                button,
                client_x,
                client_y,
                movement_x,
                movement_y,
            } => {
                self.mouse_up(
                    geometry, button, client_x, client_y, movement_x, movement_y, timestamp_ns,
                );
                false
            }
            RawEvent::Wheel { detail, wheel_delta } => {
                let ticks = wheel::scroll_ticks(&self.agent, detail, wheel_delta);
                self.state.set_event_time_ns(timestamp_ns);
                if let Some(listener) = self.listener.as_mut() {
                    listener.scrolled(ticks);
                }
                true
            }
            RawEvent::KeyDown { key_code, location } => {
                if !self.state.has_focus() {
                    self.drain_keys();
                    return false;
                }
                self.key_down(keys::from_dom(key_code, location))
            }
            RawEvent::KeyPress { character } => {
                if !self.state.has_focus() {
                    self.drain_keys();
                    return false;
                }
                // browsers usually send no keypress for tab; it is
                // synthesized on keyup instead, so drop it here to avoid a
                // double emit if one shows up anyway
                if character != '\t' {
                    if let Some(listener) = self.listener.as_mut() {
                        listener.key_typed(character);
                    }
                }
                false
            }
            RawEvent::KeyUp { key_code, location } => {
                if !self.state.has_focus() {
                    self.drain_keys();
                    return false;
                }
                self.key_up(keys::from_dom(key_code, location))
            }
            RawEvent::FocusLost => {
                self.state.set_focus(false);
                self.drain_keys();
                false
            }
            RawEvent::TouchStart { touches } => {
                self.touch_start(geometry, &touches, timestamp_ns);
                true
            }
            RawEvent::TouchMove { touches } => {
                self.touch_move(geometry, &touches, timestamp_ns);
                true
            }
            RawEvent::TouchCancel { touches } | RawEvent::TouchEnd { touches } => {
                self.touch_end(geometry, &touches, timestamp_ns);
                true
            }
        }
    }

    // ── mouse ──

    #[allow(clippy::too_many_arguments)]
    fn mouse_down(
        &mut self,
        geometry: &SurfaceGeometry,
        on_surface: bool,
        button: usize,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
        timestamp_ns: u64,
    ) {
        if !on_surface || self.state.is_button_down(button) {
            let x = geometry.relative_x(client_x);
            let y = geometry.relative_y(client_y);
            if !geometry.contains(x, y) {
                self.state.set_focus(false);
            }
            return;
        }
        self.state.set_focus(true);
        self.state.mark_just_touched();
        self.state.press_button(button);
        {
            let slot = self.state.pointer_mut(0);
            slot.touched = true;
            slot.delta_x = 0;
            slot.delta_y = 0;
        }
        if self.state.is_cursor_captured() {
            let slot = self.state.pointer_mut(0);
            slot.x += movement_x as i32;
            slot.y += movement_y as i32;
        } else {
            let x = geometry.relative_x(client_x);
            let y = geometry.relative_y(client_y);
            let slot = self.state.pointer_mut(0);
            slot.x = x;
            slot.y = y;
        }
        self.state.set_event_time_ns(timestamp_ns);
        let (x, y) = (self.state.x(0), self.state.y(0));
        if let Some(listener) = self.listener.as_mut() {
            listener.touch_down(x, y, 0, button);
        }
    }

    fn update_mouse_position(
        &mut self,
        geometry: &SurfaceGeometry,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
    ) {
        if self.state.is_cursor_captured() {
            let slot = self.state.pointer_mut(0);
            slot.delta_x = movement_x as i32;
            slot.delta_y = movement_y as i32;
            slot.x += movement_x as i32;
            slot.y += movement_y as i32;
        } else {
            let x = geometry.relative_x(client_x);
            let y = geometry.relative_y(client_y);
            let slot = self.state.pointer_mut(0);
            slot.delta_x = x - slot.x;
            slot.delta_y = y - slot.y;
            slot.x = x;
            slot.y = y;
        }
    }

    fn mouse_move(
        &mut self,
        geometry: &SurfaceGeometry,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
        timestamp_ns: u64,
    ) {
        self.update_mouse_position(geometry, client_x, client_y, movement_x, movement_y);
        self.state.set_event_time_ns(timestamp_ns);
        let (x, y) = (self.state.x(0), self.state.y(0));
        let touched = self.state.is_touched(0);
        if let Some(listener) = self.listener.as_mut() {
            if touched {
                listener.touch_dragged(x, y, 0);
            } else {
                listener.mouse_moved(x, y);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn mouse_up(
        &mut self,
        geometry: &SurfaceGeometry,
        button: usize,
        client_x: f64,
        client_y: f64,
        movement_x: f64,
        movement_y: f64,
        timestamp_ns: u64,
    ) {
        if !self.state.is_button_down(button) {
            return;
        }
        self.state.release_button(button);
        self.update_mouse_position(geometry, client_x, client_y, movement_x, movement_y);
        self.state.set_event_time_ns(timestamp_ns);
        // single-button semantics for the mouse slot: any button release
        // ends the touch, chording is not tracked per-button here
        self.state.pointer_mut(0).touched = false;
        let (x, y) = (self.state.x(0), self.state.y(0));
        if let Some(listener) = self.listener.as_mut() {
            listener.touch_up(x, y, 0, button);
        }
    }

    // ── keyboard ──

    fn key_down(&mut self, code: i32) -> bool {
        let suppress = self.is_catch_key(code);
        if code == keys::BACKSPACE {
            // always emit both, even on repeats: legacy text-field behavior
            if let Some(listener) = self.listener.as_mut() {
                listener.key_down(code);
                listener.key_typed('\u{8}');
            }
        } else if self.state.press_key(code) {
            if let Some(listener) = self.listener.as_mut() {
                listener.key_down(code);
            }
        }
        suppress
    }

    fn key_up(&mut self, code: i32) -> bool {
        let suppress = self.is_catch_key(code);
        if code == keys::TAB {
            // no keypress event is raised for tab; synthesize the typed
            // character here for platform-independent behavior
            if let Some(listener) = self.listener.as_mut() {
                listener.key_typed('\t');
            }
        }
        self.state.release_key(code);
        // emit even for untracked keys
        if let Some(listener) = self.listener.as_mut() {
            listener.key_up(code);
        }
        suppress
    }

    fn drain_keys(&mut self) {
        for code in self.state.drain_pressed_keys() {
            if let Some(listener) = self.listener.as_mut() {
                listener.key_up(code);
            }
        }
    }

    // ── touch ──

    fn touch_start(&mut self, geometry: &SurfaceGeometry, touches: &[TouchPoint], timestamp_ns: u64) {
        self.state.mark_just_touched();
        for touch in touches {
            let Some(slot_index) = self.touch_map.allocate(touch.id) else {
                warn!("touch contact dropped, all {} slots in use", crate::state::MAX_TOUCHES);
                continue;
            };
            let x = geometry.relative_x(touch.client_x);
            let y = geometry.relative_y(touch.client_y);
            let slot = self.state.pointer_mut(slot_index);
            slot.touched = true;
            slot.x = x;
            slot.y = y;
            slot.delta_x = 0;
            slot.delta_y = 0;
            if let Some(listener) = self.listener.as_mut() {
                listener.touch_down(x, y, slot_index, buttons::LEFT);
            }
        }
        self.state.set_event_time_ns(timestamp_ns);
    }

    fn touch_move(&mut self, geometry: &SurfaceGeometry, touches: &[TouchPoint], timestamp_ns: u64) {
        for touch in touches {
            // contacts dropped at start have no slot
            let Some(slot_index) = self.touch_map.lookup(touch.id) else {
                continue;
            };
            let x = geometry.relative_x(touch.client_x);
            let y = geometry.relative_y(touch.client_y);
            let slot = self.state.pointer_mut(slot_index);
            slot.delta_x = x - slot.x;
            slot.delta_y = y - slot.y;
            slot.x = x;
            slot.y = y;
            if let Some(listener) = self.listener.as_mut() {
                listener.touch_dragged(x, y, slot_index);
            }
        }
        self.state.set_event_time_ns(timestamp_ns);
    }

    fn touch_end(&mut self, geometry: &SurfaceGeometry, touches: &[TouchPoint], timestamp_ns: u64) {
        for touch in touches {
            let Some(slot_index) = self.touch_map.release(touch.id) else {
                continue;
            };
            let x = geometry.relative_x(touch.client_x);
            let y = geometry.relative_y(touch.client_y);
            let slot = self.state.pointer_mut(slot_index);
            slot.touched = false;
            slot.delta_x = x - slot.x;
            slot.delta_y = y - slot.y;
            slot.x = x;
            slot.y = y;
            if let Some(listener) = self.listener.as_mut() {
                listener.touch_up(x, y, slot_index, buttons::LEFT);
            }
        }
        self.state.set_event_time_ns(timestamp_ns);
    }
}
