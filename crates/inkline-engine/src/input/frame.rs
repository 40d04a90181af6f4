use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, MouseWheelDelta};

/// Pixel deltas are folded into line units for consumers that only care
/// about "how far did the wheel move".
const WHEEL_PIXELS_PER_LINE: f32 = 40.0;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer
/// position); `InputFrame` provides events and transition sets for the
/// current frame, cleared after each frame is consumed.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,

    /// Accumulated vertical scroll this frame, in line units.
    pub wheel_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.wheel_lines = 0.0;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        if let InputEvent::MouseWheel { delta } = &ev {
            self.wheel_lines += match delta {
                MouseWheelDelta::Line { y, .. } => *y,
                MouseWheelDelta::Pixel { y, .. } => *y / WHEEL_PIXELS_PER_LINE,
            };
        }
        self.events.push(ev);
    }
}
