/// Events that can be emitted by the dummy joystick.
///
/// A real joystick reports which action occurred and which direction the
/// stick was moved in. The dummy only ever reports one fixed combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub action: String,
    pub direction: String,
}

impl Event {
    pub fn new(action: &str, direction: &str) -> Self {
        Self {
            action: action.to_string(),
            direction: direction.to_string(),
        }
    }
}
