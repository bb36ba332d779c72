/// The state of the primary pointer button as observed during a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// The button went down during this frame.
    pub just_pressed: bool,
    /// The button is down at the end of this frame.
    pub held: bool,
    /// The button went up during this frame.
    pub just_released: bool,
}

/// A snapshot of the pointer taken once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub button: ButtonState,
}

impl PointerState {
    /// A pointer at the given position with no button activity.
    pub fn idle(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: ButtonState::default(),
        }
    }

    pub fn pressed(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: ButtonState {
                just_pressed: true,
                held: true,
                just_released: false,
            },
        }
    }

    pub fn held(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: ButtonState {
                just_pressed: false,
                held: true,
                just_released: false,
            },
        }
    }

    pub fn released(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            button: ButtonState {
                just_pressed: false,
                held: false,
                just_released: true,
            },
        }
    }
}

/// Accumulates raw window events and turns them into per-frame pointer snapshots. Edge flags
/// (just pressed/released) are cleared at the start of each frame, while the held flag and the
/// pointer position persist until another event changes them.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: PointerState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call before draining the events for a new frame.
    pub fn start_frame(&mut self) {
        self.pointer.button.just_pressed = false;
        self.pointer.button.just_released = false;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.pointer.x = x;
        self.pointer.y = y;
    }

    pub fn set_button(&mut self, down: bool) {
        let button = &mut self.pointer.button;
        if down {
            if !button.held {
                button.just_pressed = true;
            }
        } else if button.held {
            button.just_released = true;
        }
        button.held = down;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }
}
