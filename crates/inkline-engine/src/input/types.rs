/// Keyboard key identifier.
///
/// Intentionally minimal: the demos only act on a handful of keys. The
/// runtime maps platform keycodes into these variants and preserves anything
/// else as `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Unknown(u32),
}

/// Key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Mouse button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Scroll delta, preserving the platform's unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    /// Discrete scroll lines (typical mouse wheels).
    Line { x: f32, y: f32 },
    /// Continuous scroll in logical pixels (trackpads).
    Pixel { x: f32, y: f32 },
}

/// Pointer movement in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button transition, with the pointer position at the transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),
    PointerMoved(PointerMoveEvent),
    PointerLeft,
    PointerButton(PointerButtonEvent),
    MouseWheel { delta: MouseWheelDelta },
    Key { key: Key, state: KeyState, repeat: bool },
}
