pub mod driver;
pub mod event;
pub mod joystick;

/// Prefix written before every message shown on the dummy LED display.
pub const DISPLAY_PREFIX: &str = "SenseHat shows";
