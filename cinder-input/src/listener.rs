//! Semantic input callbacks.

/// Receiver for normalized input events. At most one listener is registered
/// at a time; callbacks run synchronously on the event-dispatch stack, in
/// arrival order, with no batching.
///
/// All methods default to no-ops so listeners implement only what they use.
pub trait InputListener {
    fn touch_down(&mut self, _x: i32, _y: i32, _pointer: usize, _button: usize) {}
    fn touch_up(&mut self, _x: i32, _y: i32, _pointer: usize, _button: usize) {}
    fn touch_dragged(&mut self, _x: i32, _y: i32, _pointer: usize) {}
    fn mouse_moved(&mut self, _x: i32, _y: i32) {}
    fn scrolled(&mut self, _ticks: i32) {}
    fn key_down(&mut self, _code: i32) {}
    fn key_up(&mut self, _code: i32) {}
    fn key_typed(&mut self, _character: char) {}
}
