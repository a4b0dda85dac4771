//! The DOM-facing input backend.
//!
//! `WebInput` owns one input engine per canvas, registers the browser event
//! listeners, and translates every `web_sys` event into a [`RawEvent`]
//! before handing it to the normalizer. All listener closures stay alive for
//! the lifetime of the backend.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Performance,
    TouchEvent,
};

use cinder_input::agent::{AgentInfo, Browser};
use cinder_input::events::{KeyLocation, RawEvent, TouchPoint};
use cinder_input::listener::InputListener;
use cinder_input::normalizer::EventNormalizer;
use cinder_input::peripheral::{self, Orientation, Peripheral, PlatformCaps};
use cinder_input::sensor::{PermissionState, SensorAdapter, SensorKind};
use cinder_input::surface::SurfaceGeometry;
use cinder_input::{buttons, MAX_TOUCHES};

use crate::pointer_lock;
use crate::sensors::{self, GenericMotionSensor};

/// Backend configuration, supplied by the application bootstrap.
#[derive(Clone, Copy, Debug)]
pub struct InputConfig {
    pub use_accelerometer: bool,
    pub use_gyroscope: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            use_accelerometer: true,
            use_gyroscope: true,
        }
    }
}

struct Core {
    normalizer: EventNormalizer,
    sensors: SensorAdapter,
    caps: PlatformCaps,
    performance: Option<Performance>,
}

impl Core {
    fn now_ns(&self) -> u64 {
        self.performance
            .as_ref()
            .map_or(0, |p| (p.now() * 1_000_000.0) as u64)
    }
}

/// Browser input backend bound to one canvas.
pub struct WebInput {
    canvas: HtmlCanvasElement,
    document: Document,
    core: Rc<RefCell<Core>>,
    // listener closures must outlive the DOM registrations
    _hooks: Vec<Closure<dyn FnMut(Event)>>,
}

impl WebInput {
    /// Look the canvas up by element id and bind to it.
    pub fn from_canvas_id(canvas_id: &str, config: InputConfig) -> Result<WebInput, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;
        WebInput::new(canvas, config)
    }

    pub fn new(canvas: HtmlCanvasElement, config: InputConfig) -> Result<WebInput, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let agent = AgentInfo::from_user_agent(&user_agent);
        let caps = PlatformCaps {
            touch_screen: has_touch_screen(&window),
            mobile_device: is_mobile_device(&user_agent),
        };

        let core = Rc::new(RefCell::new(Core {
            normalizer: EventNormalizer::new(agent),
            sensors: SensorAdapter::new(),
            caps,
            performance: window.performance(),
        }));

        let mut hooks = Vec::new();
        let document_target: &EventTarget = document.as_ref();
        let canvas_target: &EventTarget = canvas.as_ref();
        let window_target: &EventTarget = window.as_ref();

        // mouse events hook the document so releases outside the canvas are
        // still seen; the target check decides whether a press counts
        for name in ["mousedown", "mouseup", "mousemove"] {
            hook(document_target, name, true, &core, &canvas, &document, &mut hooks)?;
        }
        hook(
            canvas_target,
            wheel_event_name(agent.browser),
            true,
            &core,
            &canvas,
            &document,
            &mut hooks,
        )?;
        for name in ["keydown", "keyup", "keypress"] {
            hook(document_target, name, false, &core, &canvas, &document, &mut hooks)?;
        }
        hook(window_target, "blur", false, &core, &canvas, &document, &mut hooks)?;
        for name in ["touchstart", "touchmove", "touchcancel", "touchend"] {
            hook(canvas_target, name, true, &core, &canvas, &document, &mut hooks)?;
        }
        hook(
            document_target,
            "pointerlockchange",
            false,
            &core,
            &canvas,
            &document,
            &mut hooks,
        )?;

        if config.use_accelerometer && sensors::feature_allowed(&document, "accelerometer") {
            setup_sensor(&core, SensorKind::Accelerometer, agent.browser);
        }
        if config.use_gyroscope && sensors::feature_allowed(&document, "gyroscope") {
            setup_sensor(&core, SensorKind::Gyroscope, agent.browser);
        }

        info!("input backend ready: {agent:?}, touch_screen={}", caps.touch_screen);

        Ok(WebInput {
            canvas,
            document,
            core,
            _hooks: hooks,
        })
    }

    // ── per-cycle ──

    /// Clear the one-cycle flags. The application loop calls this once per
    /// frame, before the browser delivers the next batch of events.
    pub fn reset(&self) {
        self.core.borrow_mut().normalizer.reset();
    }

    /// Register the semantic-event listener, replacing any prior one.
    pub fn set_listener(&self, listener: Option<Box<dyn InputListener>>) {
        self.core.borrow_mut().normalizer.set_listener(listener);
    }

    // ── polling ──

    pub fn max_pointers(&self) -> usize {
        MAX_TOUCHES
    }

    pub fn x(&self, pointer: usize) -> i32 {
        self.core.borrow().normalizer.state().x(pointer)
    }

    pub fn y(&self, pointer: usize) -> i32 {
        self.core.borrow().normalizer.state().y(pointer)
    }

    pub fn delta_x(&self, pointer: usize) -> i32 {
        self.core.borrow().normalizer.state().delta_x(pointer)
    }

    pub fn delta_y(&self, pointer: usize) -> i32 {
        self.core.borrow().normalizer.state().delta_y(pointer)
    }

    pub fn is_touched(&self, pointer: usize) -> bool {
        self.core.borrow().normalizer.state().is_touched(pointer)
    }

    pub fn any_touched(&self) -> bool {
        self.core.borrow().normalizer.state().any_touched()
    }

    pub fn just_touched(&self) -> bool {
        self.core.borrow().normalizer.state().just_touched()
    }

    pub fn pressure(&self, pointer: usize) -> f32 {
        self.core.borrow().normalizer.state().pressure(pointer)
    }

    pub fn is_button_pressed(&self, button: usize) -> bool {
        self.core.borrow().normalizer.state().is_button_pressed(button)
    }

    pub fn is_button_just_pressed(&self, button: usize) -> bool {
        self.core.borrow().normalizer.state().is_button_just_pressed(button)
    }

    pub fn is_key_pressed(&self, code: i32) -> bool {
        self.core.borrow().normalizer.state().is_key_pressed(code)
    }

    pub fn is_key_just_pressed(&self, code: i32) -> bool {
        self.core.borrow().normalizer.state().is_key_just_pressed(code)
    }

    pub fn set_catch_key(&self, code: i32, catch: bool) {
        self.core.borrow_mut().normalizer.set_catch_key(code, catch);
    }

    pub fn is_catch_key(&self, code: i32) -> bool {
        self.core.borrow().normalizer.is_catch_key(code)
    }

    /// Timestamp of the most recent input event, monotonic nanoseconds.
    pub fn current_event_time(&self) -> u64 {
        self.core.borrow().normalizer.state().event_time_ns()
    }

    // ── cursor ──

    pub fn set_cursor_captured(&self, captured: bool) {
        if captured {
            pointer_lock::request(&self.canvas);
        } else {
            pointer_lock::exit(&self.document);
        }
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.core.borrow().normalizer.state().is_cursor_captured()
    }

    /// Browsers cannot warp the cursor.
    pub fn set_cursor_position(&self, _x: i32, _y: i32) {}

    // ── peripherals ──

    pub fn is_peripheral_available(&self, peripheral: Peripheral) -> bool {
        let core = self.core.borrow();
        peripheral::is_available(peripheral, &core.sensors, &core.caps)
    }

    pub fn accelerometer_x(&self) -> f32 {
        self.core.borrow().sensors.x(SensorKind::Accelerometer)
    }

    pub fn accelerometer_y(&self) -> f32 {
        self.core.borrow().sensors.y(SensorKind::Accelerometer)
    }

    pub fn accelerometer_z(&self) -> f32 {
        self.core.borrow().sensors.z(SensorKind::Accelerometer)
    }

    pub fn gyroscope_x(&self) -> f32 {
        self.core.borrow().sensors.x(SensorKind::Gyroscope)
    }

    pub fn gyroscope_y(&self) -> f32 {
        self.core.borrow().sensors.y(SensorKind::Gyroscope)
    }

    pub fn gyroscope_z(&self) -> f32 {
        self.core.borrow().sensors.z(SensorKind::Gyroscope)
    }

    /// No vibration hardware is reachable from this backend.
    pub fn vibrate(&self, _milliseconds: u32) {}

    /// Screen rotation angle in degrees, 0 when unavailable.
    pub fn rotation(&self) -> i32 {
        screen_orientation_field("angle")
            .and_then(|v| v.as_f64())
            .map_or(0, |angle| angle as i32)
    }

    pub fn native_orientation(&self) -> Orientation {
        let orientation_type = screen_orientation_field("type")
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        peripheral::orientation_from(self.rotation(), &orientation_type)
    }

    /// Stop sensor subscriptions. Event listeners die with the closures.
    pub fn dispose(&self) {
        self.core.borrow_mut().sensors.dispose();
    }
}

// ── DOM plumbing ──

#[allow(clippy::too_many_arguments)]
fn hook(
    target: &EventTarget,
    name: &str,
    capture: bool,
    core: &Rc<RefCell<Core>>,
    canvas: &HtmlCanvasElement,
    document: &Document,
    hooks: &mut Vec<Closure<dyn FnMut(Event)>>,
) -> Result<(), JsValue> {
    let core = core.clone();
    let canvas = canvas.clone();
    let document = document.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        dispatch(&core, &canvas, &document, &event);
    });
    target.add_event_listener_with_callback_and_bool(name, closure.as_ref().unchecked_ref(), capture)?;
    hooks.push(closure);
    Ok(())
}

fn dispatch(core: &Rc<RefCell<Core>>, canvas: &HtmlCanvasElement, document: &Document, event: &Event) {
    if event.type_() == "pointerlockchange" {
        let locked = pointer_lock::is_locked(document, canvas);
        core.borrow_mut().normalizer.state_mut().set_cursor_captured(locked);
        return;
    }
    let Some(raw) = build_event(event, canvas) else {
        return;
    };
    let geometry = surface_geometry(canvas);
    let mut core = core.borrow_mut();
    let timestamp_ns = core.now_ns();
    let suppress = core.normalizer.handle(&geometry, raw, timestamp_ns);
    if suppress {
        event.prevent_default();
    }
}

/// Convert a DOM event into the engine's raw representation.
fn build_event(event: &Event, canvas: &HtmlCanvasElement) -> Option<RawEvent> {
    match event.type_().as_str() {
        "mousedown" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(RawEvent::MouseDown {
                on_surface: targets_canvas(event, canvas),
                button: buttons::from_dom(mouse.button()),
                client_x: mouse.client_x() as f64,
                client_y: mouse.client_y() as f64,
                movement_x: mouse.movement_x() as f64,
                movement_y: mouse.movement_y() as f64,
            })
        }
        "mousemove" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(RawEvent::MouseMove {
                client_x: mouse.client_x() as f64,
                client_y: mouse.client_y() as f64,
                movement_x: mouse.movement_x() as f64,
                movement_y: mouse.movement_y() as f64,
            })
        }
        "mouseup" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(RawEvent::MouseUp {
                button: buttons::from_dom(mouse.button()),
                client_x: mouse.client_x() as f64,
                client_y: mouse.client_y() as f64,
                movement_x: mouse.movement_x() as f64,
                movement_y: mouse.movement_y() as f64,
            })
        }
        "mousewheel" | "DOMMouseScroll" => {
            let detail = event.dyn_ref::<web_sys::UiEvent>().map_or(0.0, |ui| ui.detail() as f64);
            let wheel_delta = Reflect::get(event.as_ref(), &JsValue::from_str("wheelDelta"))
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            Some(RawEvent::Wheel { detail, wheel_delta })
        }
        "keydown" => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            Some(RawEvent::KeyDown {
                key_code: key.key_code(),
                location: KeyLocation::from_dom(key.location()),
            })
        }
        "keypress" => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            let character = char::from_u32(key.char_code())?;
            Some(RawEvent::KeyPress { character })
        }
        "keyup" => {
            let key = event.dyn_ref::<KeyboardEvent>()?;
            Some(RawEvent::KeyUp {
                key_code: key.key_code(),
                location: KeyLocation::from_dom(key.location()),
            })
        }
        "blur" => Some(RawEvent::FocusLost),
        "touchstart" => Some(RawEvent::TouchStart {
            touches: changed_touches(event)?,
        }),
        "touchmove" => Some(RawEvent::TouchMove {
            touches: changed_touches(event)?,
        }),
        "touchcancel" => Some(RawEvent::TouchCancel {
            touches: changed_touches(event)?,
        }),
        "touchend" => Some(RawEvent::TouchEnd {
            touches: changed_touches(event)?,
        }),
        _ => None,
    }
}

fn changed_touches(event: &Event) -> Option<Vec<TouchPoint>> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let list = touch_event.changed_touches();
    let mut touches = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(touch) = list.get(i) {
            touches.push(TouchPoint {
                id: touch.identifier(),
                client_x: touch.client_x() as f64,
                client_y: touch.client_y() as f64,
            });
        }
    }
    Some(touches)
}

fn targets_canvas(event: &Event, canvas: &HtmlCanvasElement) -> bool {
    let canvas_target: &EventTarget = canvas.as_ref();
    event.target().as_ref() == Some(canvas_target)
}

/// Surface geometry is re-read per event: layout, scroll and backing size
/// all change freely at runtime.
fn surface_geometry(canvas: &HtmlCanvasElement) -> SurfaceGeometry {
    let rect = canvas.get_bounding_client_rect();
    SurfaceGeometry {
        backing_width: canvas.width() as f64,
        backing_height: canvas.height() as f64,
        client_width: canvas.client_width() as f64,
        client_height: canvas.client_height() as f64,
        left: rect.left(),
        top: rect.top(),
        scroll_left: canvas.scroll_left() as f64,
        scroll_top: canvas.scroll_top() as f64,
    }
}

/// Firefox still delivers legacy wheel input as `DOMMouseScroll`.
fn wheel_event_name(browser: Browser) -> &'static str {
    if browser == Browser::Firefox {
        "DOMMouseScroll"
    } else {
        "mousewheel"
    }
}

fn has_touch_screen(window: &web_sys::Window) -> bool {
    if Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false) {
        return true;
    }
    window.navigator().max_touch_points() > 0
}

fn is_mobile_device(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    ["mobi", "android", "iphone", "ipad"].iter().any(|tag| ua.contains(tag))
}

/// Start a sensor once its permission is known. Firefox has no sensor
/// permission entries, so it skips the query entirely; elsewhere the query
/// is asynchronous and the sensor is installed from the resolution callback.
fn setup_sensor(core: &Rc<RefCell<Core>>, kind: SensorKind, browser: Browser) {
    let driver = match kind {
        SensorKind::Accelerometer => GenericMotionSensor::accelerometer(),
        SensorKind::Gyroscope => GenericMotionSensor::gyroscope(),
    };
    if browser == Browser::Firefox {
        core.borrow_mut()
            .sensors
            .install(kind, Box::new(driver), PermissionState::Unavailable);
        return;
    }
    let permission_name = match kind {
        SensorKind::Accelerometer => "accelerometer",
        SensorKind::Gyroscope => "gyroscope",
    };
    let core = core.clone();
    spawn_local(async move {
        let permission = sensors::query_permission(permission_name).await;
        core.borrow_mut().sensors.install(kind, Box::new(driver), permission);
    });
}

fn screen_orientation_field(field: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let screen = Reflect::get(window.as_ref(), &JsValue::from_str("screen")).ok()?;
    if screen.is_undefined() || screen.is_null() {
        return None;
    }
    let orientation = Reflect::get(&screen, &JsValue::from_str("orientation")).ok()?;
    if orientation.is_undefined() || orientation.is_null() {
        return None;
    }
    Reflect::get(&orientation, &JsValue::from_str(field)).ok()
}
