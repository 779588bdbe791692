use super::event::Event;

/// Action and direction of the single canned event the dummy reports.
pub const EVENT_ACTION: &str = "up";
pub const EVENT_DIRECTION: &str = "left";

/// Dummy stand-in for the SenseHat joystick
pub struct Joystick;

impl Joystick {
    pub fn new() -> Self {
        log::debug!("Creating dummy joystick instance");
        Self
    }

    /// Returns the pending joystick events. The dummy yields a single
    /// "up"/"left" event and then the stream ends. Calling this again
    /// produces a fresh, identical one-event stream.
    pub fn get_events(&self) -> impl Iterator<Item = Event> {
        log::trace!("Polling dummy joystick for events");
        std::iter::once(Event::new(EVENT_ACTION, EVENT_DIRECTION))
    }
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new()
    }
}
