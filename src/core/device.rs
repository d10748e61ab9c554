//! Smart device capabilities - one base on/off trait, one narrow trait per device kind.
//!
//! A consumer that only switches power takes `SmartDevice`; one that sets a
//! temperature takes `SmartThermostat`. No device is forced to implement an
//! operation it has no use for.

use tracing::debug;

/// Base capability shared by every device.
pub trait SmartDevice {
    /// Switches the device on.
    fn turn_on(&mut self);
    /// Switches the device off.
    fn turn_off(&mut self);
    /// Whether the device is currently on.
    fn is_on(&self) -> bool;
}

/// A light needs nothing beyond power control.
pub trait SmartLight: SmartDevice {}

/// Power control plus a temperature setpoint.
pub trait SmartThermostat: SmartDevice {
    /// Sets the target temperature.
    fn set_temperature(&mut self, temp: f64);
    /// Current target temperature.
    fn temperature(&self) -> f64;
}

/// Power control plus a video stream.
pub trait SmartSecurityCamera: SmartDevice {
    /// Returns the current video stream payload.
    fn stream_video(&self) -> Vec<u8>;
}

/// Power control plus audio playback.
pub trait SmartSpeaker: SmartDevice {
    /// Returns the current music stream payload.
    fn play_music(&self) -> Vec<u8>;
}

/// Switches every given device off, whatever its kind.
pub fn switch_all_off(devices: &mut [&mut dyn SmartDevice]) {
    for device in devices.iter_mut() {
        device.turn_off();
    }
}

/// Generates the on/off flag handling shared by every device struct.
macro_rules! impl_smart_device {
    ($ty:ty, $label:literal) => {
        impl SmartDevice for $ty {
            fn turn_on(&mut self) {
                self.is_on = true;
                debug!(device = $label, "turned on");
            }

            fn turn_off(&mut self) {
                self.is_on = false;
                debug!(device = $label, "turned off");
            }

            fn is_on(&self) -> bool {
                self.is_on
            }
        }
    };
}

/// Smart light.
#[derive(Debug, Default, Clone)]
pub struct Light {
    is_on: bool,
}

impl Light {
    /// Creates a light that starts off.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_on: false }
    }
}

impl_smart_device!(Light, "light");
impl SmartLight for Light {}

/// Smart thermostat.
#[derive(Debug, Default, Clone)]
pub struct Thermostat {
    is_on: bool,
    temperature: f64,
}

impl Thermostat {
    /// Creates a thermostat that starts off with a zero setpoint.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_on: false,
            temperature: 0.0,
        }
    }
}

impl_smart_device!(Thermostat, "thermostat");

impl SmartThermostat for Thermostat {
    fn set_temperature(&mut self, temp: f64) {
        self.temperature = temp;
        debug!(temp, "thermostat setpoint changed");
    }

    fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Smart security camera.
#[derive(Debug, Default, Clone)]
pub struct SecurityCamera {
    is_on: bool,
}

impl SecurityCamera {
    /// Creates a camera that starts off.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_on: false }
    }
}

impl_smart_device!(SecurityCamera, "camera");

impl SmartSecurityCamera for SecurityCamera {
    fn stream_video(&self) -> Vec<u8> {
        b"video stream".to_vec()
    }
}

/// Smart speaker.
#[derive(Debug, Default, Clone)]
pub struct Speaker {
    is_on: bool,
}

impl Speaker {
    /// Creates a speaker that starts off.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_on: false }
    }
}

impl_smart_device!(Speaker, "speaker");

impl SmartSpeaker for Speaker {
    fn play_music(&self) -> Vec<u8> {
        b"music stream".to_vec()
    }
}
