//! Name-keyed device registry and fan-out

use std::collections::HashMap;

use crate::color::Color;
use crate::dmx::device::Device;
use crate::dmx::transport::Transport;
use crate::error::ControlError;

/// Owns a set of named devices and broadcasts strip updates to all of them.
///
/// Fan-out operations attempt every device and collect per-device
/// failures; one device rejecting an update does not stop the others, and
/// there is no rollback across devices.
pub struct Registry<T> {
    devices: HashMap<String, Device<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            devices: HashMap::new(),
        }
    }
}

impl<T: Transport> Registry<T> {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device under `name`.
    ///
    /// Returns the device previously registered under that name, if any;
    /// ownership of the displaced device passes back to the caller.
    pub fn add(&mut self, name: impl Into<String>, device: Device<T>) -> Option<Device<T>> {
        self.devices.insert(name.into(), device)
    }

    /// Remove and return the device registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Device<T>> {
        self.devices.remove(name)
    }

    /// Look up a device by name.
    pub fn get(&self, name: &str) -> Option<&Device<T>> {
        self.devices.get(name)
    }

    /// Look up a device by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Device<T>> {
        self.devices.get_mut(name)
    }

    /// Queue the same colors on every registered device.
    ///
    /// Each device validates the update against its own light count, so a
    /// length mismatch fails only that device. Returns the per-device
    /// failures; an empty vec means every device queued the update.
    pub fn broadcast_queue(&mut self, colors: &[Color]) -> Vec<(String, ControlError)> {
        self.for_each_device(|device| device.add_to_queue(colors))
    }

    /// Queue and transmit the same colors on every registered device.
    pub fn broadcast_send(&mut self, colors: &[Color]) -> Vec<(String, ControlError)> {
        self.for_each_device(|device| device.send_colors(colors))
    }

    /// Transmit every device's queued frame.
    pub fn send_all(&mut self) -> Vec<(String, ControlError)> {
        self.for_each_device(Device::send)
    }

    fn for_each_device<F>(&mut self, mut op: F) -> Vec<(String, ControlError)>
    where
        F: FnMut(&mut Device<T>) -> crate::error::Result<()>,
    {
        let mut failures = Vec::new();
        for (name, device) in &mut self.devices {
            if let Err(err) = op(device) {
                tracing::warn!(device = %name, error = %err, "broadcast operation failed");
                failures.push((name.clone(), err));
            }
        }
        failures
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry holds no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Names of all registered devices, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }
}
