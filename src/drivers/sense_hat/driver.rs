use std::fmt::Display;

use rand::Rng;

use super::{joystick::Joystick, DISPLAY_PREFIX};

/// Raw accelerometer state (x, y, z) values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccelerationReading {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Orientation state (roll, pitch, yaw) values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientationReading {
    pub roll: i32,
    pub pitch: i32,
    pub yaw: i32,
}

/// Dummy driver standing in for the SenseHat sensor board. Every read
/// returns a fresh plausible value from a fixed range; the display
/// operations print or do nothing. Calls are independent and stateless.
pub struct Driver {
    /// Joystick attached to the board.
    pub stick: Joystick,
}

impl Driver {
    pub fn new() -> Self {
        log::debug!("Creating dummy SenseHat driver instance");
        Self {
            stick: Joystick::new(),
        }
    }

    /// Temperature in degrees Celsius, uniform in [-20, 130).
    pub fn get_temperature(&self) -> i32 {
        rand::rng().random_range(-20..130)
    }

    /// Relative humidity in percent, uniform in [0, 98).
    pub fn get_humidity(&self) -> i32 {
        rand::rng().random_range(0..98)
    }

    /// Pressure in kilopascals, uniform in [100, 200).
    pub fn get_pressure(&self) -> i32 {
        rand::rng().random_range(100..200)
    }

    /// Raw accelerometer values, each axis sampled independently from [-9, 9).
    pub fn get_accelerometer_raw(&self) -> AccelerationReading {
        let mut rng = rand::rng();
        AccelerationReading {
            x: rng.random_range(-9..9),
            y: rng.random_range(-9..9),
            z: rng.random_range(-9..9),
        }
    }

    /// Orientation values, each axis sampled independently from [-9, 9).
    pub fn get_orientation(&self) -> OrientationReading {
        let mut rng = rand::rng();
        OrientationReading {
            roll: rng.random_range(-9..9),
            pitch: rng.random_range(-9..9),
            yaw: rng.random_range(-9..9),
        }
    }

    /// Writes the message to stdout instead of scrolling it across the
    /// LED matrix.
    pub fn show_message(&self, msg: impl Display) {
        println!("{}", format_message(msg));
    }

    /// Clearing the LED matrix is a no-op on the dummy board.
    pub fn clear(&self) {
        log::trace!("Clearing dummy display");
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats one display line as written to stdout by [`Driver::show_message`].
fn format_message(msg: impl Display) -> String {
    format!("{DISPLAY_PREFIX} {msg}")
}
