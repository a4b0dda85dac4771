//! Cinder Input Engine
//!
//! Translates raw browser input events (mouse, keyboard, touch, motion
//! sensors) into a normalized, polling-friendly input state. This crate is
//! platform-independent: the DOM surface is abstracted as [`RawEvent`]
//! values, so the whole engine runs and tests on the host. The wasm adapter
//! in `cinder-web` feeds it real events.

pub mod agent;
pub mod buttons;
pub mod events;
pub mod keys;
pub mod listener;
pub mod normalizer;
pub mod peripheral;
pub mod sensor;
pub mod state;
pub mod surface;
pub mod touchmap;
pub mod wheel;

pub use agent::{AgentInfo, Browser, Os};
pub use events::{KeyLocation, RawEvent, TouchPoint};
pub use listener::InputListener;
pub use normalizer::EventNormalizer;
pub use peripheral::{Orientation, Peripheral, PlatformCaps};
pub use sensor::{MotionSensor, PermissionState, SensorAdapter, SensorKind};
pub use state::{InputState, PointerSlot, MAX_TOUCHES};
pub use surface::SurfaceGeometry;
pub use touchmap::TouchMap;
