// Not every test binary uses every double.
#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use switchyard::{BoxError, CapabilityHandler, SwitchOp, Switchable};

// ============================================================================
// Device Doubles
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

/// A light with a shared, inspectable power state.
#[derive(Clone)]
pub struct Light {
    pub name: String,
    state: Arc<Mutex<Power>>,
}

impl Light {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(Power::Off)),
        }
    }

    pub fn power(&self) -> Power {
        *self.state.lock().unwrap()
    }
}

impl CapabilityHandler<Switchable> for Light {
    fn perform(&self, op: SwitchOp, _input: &()) -> Result<(), BoxError> {
        let mut state = self.state.lock().unwrap();
        *state = match op {
            SwitchOp::Activate => Power::On,
            SwitchOp::Deactivate => Power::Off,
        };
        Ok(())
    }
}

/// A heater with a different internal representation than `Light`.
#[derive(Clone)]
pub struct Heating {
    active: Arc<AtomicBool>,
}

impl Heating {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl CapabilityHandler<Switchable> for Heating {
    fn perform(&self, op: SwitchOp, _input: &()) -> Result<(), BoxError> {
        match op {
            SwitchOp::Activate => self.active.store(true, Ordering::SeqCst),
            SwitchOp::Deactivate => self.active.store(false, Ordering::SeqCst),
        }
        Ok(())
    }
}

/// Registry slot type used across the device tests.
pub type DeviceSlot = Arc<dyn CapabilityHandler<Switchable>>;

pub fn slot<H: CapabilityHandler<Switchable>>(handler: H) -> DeviceSlot {
    Arc::new(handler)
}
