//! Motion sensor adapter.
//!
//! The accelerometer and gyroscope are capability objects owned by the
//! platform adapter; this module only decides when to start them and
//! degrades to constant-zero readings when they are missing, disallowed or
//! denied. "Presence" is inferred as "has it ever reported a nonzero
//! reading" — the platform offers no real hardware-presence flag.

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
}

/// Result of a motion-sensor permission query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
    /// The platform has no permission-query capability at all; the sensor
    /// starts unconditionally.
    Unavailable,
}

/// A platform motion-sensor driver.
pub trait MotionSensor {
    /// Whether the platform exposes this sensor API at all.
    fn supported(&self) -> bool;
    fn start(&mut self);
    fn stop(&mut self);
    fn active(&self) -> bool;
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

/// Owns the optional sensor drivers and answers all axis reads.
#[derive(Default)]
pub struct SensorAdapter {
    accelerometer: Option<Box<dyn MotionSensor>>,
    gyroscope: Option<Box<dyn MotionSensor>>,
}

impl SensorAdapter {
    pub fn new() -> Self {
        SensorAdapter::default()
    }

    /// Install a sensor driver and start it according to the permission
    /// result: anything other than an explicit denial starts the sensor.
    /// No-op if the driver reports unsupported or is already active.
    pub fn install(
        &mut self,
        kind: SensorKind,
        sensor: Box<dyn MotionSensor>,
        permission: PermissionState,
    ) {
        let slot = match kind {
            SensorKind::Accelerometer => &mut self.accelerometer,
            SensorKind::Gyroscope => &mut self.gyroscope,
        };
        let sensor = slot.get_or_insert(sensor);
        if permission == PermissionState::Denied {
            debug!("{kind:?} permission denied, staying inactive");
            return;
        }
        if sensor.supported() && !sensor.active() {
            debug!("starting {kind:?}");
            sensor.start();
        }
    }

    fn sensor(&self, kind: SensorKind) -> Option<&dyn MotionSensor> {
        match kind {
            SensorKind::Accelerometer => self.accelerometer.as_deref(),
            SensorKind::Gyroscope => self.gyroscope.as_deref(),
        }
    }

    pub fn x(&self, kind: SensorKind) -> f32 {
        self.sensor(kind).map_or(0.0, |s| s.x() as f32)
    }

    pub fn y(&self, kind: SensorKind) -> f32 {
        self.sensor(kind).map_or(0.0, |s| s.y() as f32)
    }

    pub fn z(&self, kind: SensorKind) -> f32 {
        self.sensor(kind).map_or(0.0, |s| s.z() as f32)
    }

    /// Presence heuristic: a sensor that never reported a nonzero value is
    /// indistinguishable from absent hardware, an accepted approximation.
    pub fn present(&self, kind: SensorKind) -> bool {
        self.x(kind) != 0.0 || self.y(kind) != 0.0 || self.z(kind) != 0.0
    }

    pub fn supported(&self, kind: SensorKind) -> bool {
        self.sensor(kind).is_some_and(|s| s.supported())
    }

    /// Stop any active sensors; the only teardown this layer owns.
    pub fn dispose(&mut self) {
        for sensor in [self.accelerometer.as_mut(), self.gyroscope.as_mut()]
            .into_iter()
            .flatten()
        {
            if sensor.active() {
                sensor.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeSensor {
        supported: bool,
        active: Rc<Cell<bool>>,
        reading: (f64, f64, f64),
    }

    impl FakeSensor {
        fn new(supported: bool, reading: (f64, f64, f64)) -> (Self, Rc<Cell<bool>>) {
            let active = Rc::new(Cell::new(false));
            (
                FakeSensor {
                    supported,
                    active: active.clone(),
                    reading,
                },
                active,
            )
        }
    }

    impl MotionSensor for FakeSensor {
        fn supported(&self) -> bool {
            self.supported
        }
        fn start(&mut self) {
            self.active.set(true);
        }
        fn stop(&mut self) {
            self.active.set(false);
        }
        fn active(&self) -> bool {
            self.active.get()
        }
        fn x(&self) -> f64 {
            self.reading.0
        }
        fn y(&self) -> f64 {
            self.reading.1
        }
        fn z(&self) -> f64 {
            self.reading.2
        }
    }

    #[test]
    fn test_reads_default_to_zero_without_driver() {
        let adapter = SensorAdapter::new();
        assert_eq!(adapter.x(SensorKind::Accelerometer), 0.0);
        assert_eq!(adapter.z(SensorKind::Gyroscope), 0.0);
        assert!(!adapter.present(SensorKind::Accelerometer));
        assert!(!adapter.supported(SensorKind::Gyroscope));
    }

    #[test]
    fn test_granted_and_prompt_start_the_sensor() {
        for permission in [
            PermissionState::Granted,
            PermissionState::Prompt,
            PermissionState::Unavailable,
        ] {
            let mut adapter = SensorAdapter::new();
            let (sensor, active) = FakeSensor::new(true, (0.0, 9.8, 0.0));
            adapter.install(SensorKind::Accelerometer, Box::new(sensor), permission);
            assert!(active.get(), "{permission:?} should start the sensor");
            assert_eq!(adapter.y(SensorKind::Accelerometer), 9.8);
            assert!(adapter.present(SensorKind::Accelerometer));
        }
    }

    #[test]
    fn test_denied_stays_inactive() {
        let mut adapter = SensorAdapter::new();
        let (sensor, active) = FakeSensor::new(true, (1.0, 0.0, 0.0));
        adapter.install(SensorKind::Gyroscope, Box::new(sensor), PermissionState::Denied);
        assert!(!active.get());
    }

    #[test]
    fn test_unsupported_never_starts() {
        let mut adapter = SensorAdapter::new();
        let (sensor, active) = FakeSensor::new(false, (0.0, 0.0, 0.0));
        adapter.install(
            SensorKind::Accelerometer,
            Box::new(sensor),
            PermissionState::Granted,
        );
        assert!(!active.get());
        assert_eq!(adapter.x(SensorKind::Accelerometer), 0.0);
    }

    #[test]
    fn test_zero_reading_means_absent() {
        let mut adapter = SensorAdapter::new();
        let (sensor, _) = FakeSensor::new(true, (0.0, 0.0, 0.0));
        adapter.install(SensorKind::Gyroscope, Box::new(sensor), PermissionState::Granted);
        assert!(!adapter.present(SensorKind::Gyroscope));
    }

    #[test]
    fn test_dispose_stops_active_sensors() {
        let mut adapter = SensorAdapter::new();
        let (accel, accel_active) = FakeSensor::new(true, (1.0, 0.0, 0.0));
        let (gyro, gyro_active) = FakeSensor::new(true, (0.0, 1.0, 0.0));
        adapter.install(SensorKind::Accelerometer, Box::new(accel), PermissionState::Granted);
        adapter.install(SensorKind::Gyroscope, Box::new(gyro), PermissionState::Granted);
        adapter.dispose();
        assert!(!accel_active.get());
        assert!(!gyro_active.get());
        // disposing twice is a no-op
        adapter.dispose();
    }
}
