/// Which kind of device produced a pointer event. Mouse and touch commit to a
/// drag under different rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Button presses from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    Submit,
    Clear,
    Shuffle,
    /// Throw the finished session away and start over.
    Restart,
}

impl Command {
    /// Decode the numeric command ids used by the JS side.
    pub fn from_kind(kind: u32) -> Option<Self> {
        match kind {
            1 => Some(Command::Start),
            2 => Some(Command::TogglePause),
            3 => Some(Command::Submit),
            4 => Some(Command::Clear),
            5 => Some(Command::Shuffle),
            6 => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Raw input, in world coordinates, before it is resolved to grid cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32, kind: PointerKind },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// The touch/click ended.
    PointerUp,
    /// The platform aborted the touch.
    PointerCancel,
    /// A UI button.
    Command(Command),
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them each frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
