/// Keys the demos react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    W,
    A,
    S,
    D,
    Space,
    LeftControl,
    Up,
    Down,
    Left,
    Right,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    H,
    R,
    F1,
}

impl Key {
    pub fn digit(&self) -> Option<u8> {
        match self {
            Key::Digit1 => Some(1),
            Key::Digit2 => Some(2),
            Key::Digit3 => Some(3),
            Key::Digit4 => Some(4),
            Key::Digit5 => Some(5),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    ButtonPressed(MouseButton),
    ButtonReleased(MouseButton),
    /// Pointer motion in pixels, positive `dy` pointing up.
    MouseMoved { dx: f32, dy: f32 },
    /// Wheel movement in notches.
    Scrolled(f32),
}

/// An input event delivered at the start of a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedInput {
    pub frame: u64,
    pub event: InputEvent,
}

impl ScriptedInput {
    pub fn new(frame: u64, event: InputEvent) -> Self {
        Self { frame, event }
    }

    /// Press on `frame`, release on the next one.
    pub fn tap(frame: u64, key: Key) -> [ScriptedInput; 2] {
        [
            Self::new(frame, InputEvent::KeyPressed(key)),
            Self::new(frame + 1, InputEvent::KeyReleased(key)),
        ]
    }

    /// Left-button drag: press on `from`, move by `(dx, dy)` on each frame
    /// up to `to`, release on `to`.
    pub fn drag(from: u64, to: u64, dx: f32, dy: f32) -> Vec<ScriptedInput> {
        let mut script = vec![Self::new(from, InputEvent::ButtonPressed(MouseButton::Left))];
        script.extend((from..to).map(|frame| Self::new(frame, InputEvent::MouseMoved { dx, dy })));
        script.push(Self::new(to, InputEvent::ButtonReleased(MouseButton::Left)));
        script
    }

    /// Press on `from`, release on `to`.
    pub fn hold(from: u64, to: u64, key: Key) -> [ScriptedInput; 2] {
        [
            Self::new(from, InputEvent::KeyPressed(key)),
            Self::new(to, InputEvent::KeyReleased(key)),
        ]
    }
}
