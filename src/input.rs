//! Edge-detected input state for the update tick.

use glam::Vec2;

/// Raw input sampled by the platform layer for a single frame.
///
/// The core never polls hardware, the driver fills this in from whatever
/// windowing layer it uses and passes it to [`crate::Game::update`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in window coordinates, `None` when the pointer is off-screen.
    pub pointer: Option<Vec2>,
    /// Whether the primary mouse button is down this frame.
    pub primary_held: bool,
    /// Whether the start key is down this frame.
    pub start_held: bool,
    /// Whether the exit key is down this frame.
    pub exit_held: bool,
}

/// Debounced state of a single logical button.
#[derive(Debug, Default, Clone, Copy)]
struct ButtonState {
    /// Whether the button is down this update tick.
    is_down: bool,
    /// Whether the button was down the previous update tick.
    was_down: bool,
}

impl ButtonState {
    /// Take the raw held state for this tick.
    fn sample(&mut self, is_down: bool) {
        self.is_down = is_down;
    }

    /// Roll the current state into the previous tick.
    fn update(&mut self) {
        self.was_down = self.is_down;
    }

    /// Whether the button is down right now.
    const fn held(&self) -> bool {
        self.is_down
    }

    /// Whether the button went from released to pressed this tick.
    const fn pressed(&self) -> bool {
        self.is_down && !self.was_down
    }

    /// Whether the button went from pressed to released this tick.
    const fn released(&self) -> bool {
        !self.is_down && self.was_down
    }
}

/// Manager tracking the pointer and the logical buttons across ticks.
#[derive(Debug, Default)]
pub(crate) struct Input {
    /// Pointer position, `None` when off-screen.
    pointer: Option<Vec2>,
    /// Primary mouse button.
    primary: ButtonState,
    /// Start key.
    start: ButtonState,
    /// Exit key.
    exit: ButtonState,
}

impl Input {
    /// Take the raw state sampled by the platform layer for this tick.
    pub(crate) fn sample(&mut self, frame: &FrameInput) {
        self.pointer = frame.pointer;
        self.primary.sample(frame.primary_held);
        self.start.sample(frame.start_held);
        self.exit.sample(frame.exit_held);
    }

    /// Roll all button states into the previous tick.
    ///
    /// Only allowed to be called once per update tick, after the edges have
    /// been read.
    pub(crate) fn update(&mut self) {
        self.primary.update();
        self.start.update();
        self.exit.update();
    }

    /// Pointer position if on screen.
    pub(crate) const fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Whether the primary mouse button is down.
    pub(crate) const fn primary_held(&self) -> bool {
        self.primary.held()
    }

    /// Whether the primary mouse button was released this tick.
    pub(crate) const fn primary_released(&self) -> bool {
        self.primary.released()
    }

    /// Whether the start key was pressed this tick.
    pub(crate) const fn start_pressed(&self) -> bool {
        self.start.pressed()
    }

    /// Whether the exit key was pressed this tick.
    pub(crate) const fn exit_pressed(&self) -> bool {
        self.exit.pressed()
    }
}
