//! Pointer-lock plumbing with legacy vendor fallbacks.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

/// Ask the browser to capture the cursor on the canvas.
pub fn request(canvas: &HtmlCanvasElement) {
    if Reflect::has(canvas.as_ref(), &JsValue::from_str("requestPointerLock")).unwrap_or(false) {
        canvas.request_pointer_lock();
        return;
    }
    // older builds shipped prefixed variants only
    for name in ["mozRequestPointerLock", "webkitRequestPointerLock"] {
        if call_method(canvas.as_ref(), name) {
            return;
        }
    }
}

/// Release a captured cursor.
pub fn exit(document: &Document) {
    if Reflect::has(document.as_ref(), &JsValue::from_str("exitPointerLock")).unwrap_or(false) {
        document.exit_pointer_lock();
        return;
    }
    for name in ["mozExitPointerLock", "webkitExitPointerLock"] {
        if call_method(document.as_ref(), name) {
            return;
        }
    }
}

/// Whether the canvas currently holds the pointer lock.
pub fn is_locked(document: &Document, canvas: &HtmlCanvasElement) -> bool {
    let canvas_element: &Element = canvas.as_ref();
    document.pointer_lock_element().as_ref() == Some(canvas_element)
}

fn call_method(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .map(|f| f.call0(target).is_ok())
        .unwrap_or(false)
}
