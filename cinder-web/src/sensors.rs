//! Generic Sensor API drivers and the permission/feature-policy plumbing.
//!
//! The sensor constructors are resolved dynamically through `js_sys` because
//! the API surface is still vendor-inconsistent; a missing global simply
//! reports the sensor as unsupported.

use cinder_input::sensor::{MotionSensor, PermissionState};
use js_sys::{Function, Object, Reflect};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Document;

/// Accelerometer or gyroscope backed by the Generic Sensor API.
pub struct GenericMotionSensor {
    global_name: &'static str,
    instance: Option<Object>,
    started: bool,
}

impl GenericMotionSensor {
    pub fn accelerometer() -> Self {
        GenericMotionSensor {
            global_name: "Accelerometer",
            instance: None,
            started: false,
        }
    }

    pub fn gyroscope() -> Self {
        GenericMotionSensor {
            global_name: "Gyroscope",
            instance: None,
            started: false,
        }
    }

    fn constructor(&self) -> Option<Function> {
        let window = web_sys::window()?;
        Reflect::get(window.as_ref(), &JsValue::from_str(self.global_name))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn axis(&self, name: &str) -> f64 {
        self.instance
            .as_ref()
            .and_then(|instance| Reflect::get(instance, &JsValue::from_str(name)).ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn call(&self, method: &str) {
        let Some(instance) = self.instance.as_ref() else {
            return;
        };
        if let Ok(function) =
            Reflect::get(instance, &JsValue::from_str(method)).and_then(|f| f.dyn_into::<Function>())
        {
            let _ = function.call0(instance);
        }
    }
}

impl MotionSensor for GenericMotionSensor {
    fn supported(&self) -> bool {
        self.constructor().is_some()
    }

    fn start(&mut self) {
        if self.instance.is_none() {
            let Some(constructor) = self.constructor() else {
                return;
            };
            let options = Object::new();
            let _ = Reflect::set(
                &options,
                &JsValue::from_str("frequency"),
                &JsValue::from_f64(60.0),
            );
            let args = js_sys::Array::of1(&options);
            match Reflect::construct(&constructor, &args) {
                Ok(instance) => self.instance = Some(instance),
                Err(err) => {
                    debug!("{} construction failed: {err:?}", self.global_name);
                    return;
                }
            }
        }
        self.call("start");
        self.started = true;
    }

    fn stop(&mut self) {
        self.call("stop");
        self.started = false;
    }

    fn active(&self) -> bool {
        self.started
    }

    fn x(&self) -> f64 {
        self.axis("x")
    }

    fn y(&self) -> f64 {
        self.axis("y")
    }

    fn z(&self) -> f64 {
        self.axis("z")
    }
}

/// Feature-policy check. Browsers without a feature-policy object allow
/// everything, so absence means allowed.
pub fn feature_allowed(document: &Document, feature: &str) -> bool {
    let policy = match Reflect::get(document.as_ref(), &JsValue::from_str("featurePolicy")) {
        Ok(policy) if !policy.is_undefined() && !policy.is_null() => policy,
        _ => return true,
    };
    let Some(allows) = Reflect::get(&policy, &JsValue::from_str("allowsFeature"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    else {
        return true;
    };
    allows
        .call1(&policy, &JsValue::from_str(feature))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(true)
}

/// Query the Permissions API for a sensor permission.
///
/// Resolves to [`PermissionState::Unavailable`] when the API is missing or
/// the query itself fails, which makes the caller start the sensor
/// unconditionally.
pub async fn query_permission(name: &str) -> PermissionState {
    let Some(window) = web_sys::window() else {
        return PermissionState::Unavailable;
    };
    let Ok(permissions) = window.navigator().permissions() else {
        return PermissionState::Unavailable;
    };
    let descriptor = Object::new();
    if Reflect::set(
        &descriptor,
        &JsValue::from_str("name"),
        &JsValue::from_str(name),
    )
    .is_err()
    {
        return PermissionState::Unavailable;
    }
    let Ok(promise) = permissions.query(&descriptor) else {
        return PermissionState::Unavailable;
    };
    match JsFuture::from(promise).await {
        Ok(status) => {
            let Ok(status) = status.dyn_into::<web_sys::PermissionStatus>() else {
                return PermissionState::Unavailable;
            };
            match status.state() {
                web_sys::PermissionState::Granted => PermissionState::Granted,
                web_sys::PermissionState::Denied => PermissionState::Denied,
                web_sys::PermissionState::Prompt => PermissionState::Prompt,
                _ => PermissionState::Prompt,
            }
        }
        Err(_) => PermissionState::Unavailable,
    }
}
