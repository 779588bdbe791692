//! Dummy in-memory SenseHat sensor board.
//!
//! Returns randomized plausible sensor readings and a canned joystick
//! event instead of talking to real hardware, so code written against
//! the board can run on machines without the device attached.

pub mod drivers;

pub use drivers::sense_hat::driver::{AccelerationReading, Driver, OrientationReading};
pub use drivers::sense_hat::event::Event;
pub use drivers::sense_hat::joystick::Joystick;
