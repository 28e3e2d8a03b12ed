//! Keyboard-style input with explicit frame-to-frame edge detection

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Logical actions the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Launch,
    DebugReset,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Launch, Action::DebugReset];

    #[inline]
    fn index(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Launch => 2,
            Action::DebugReset => 3,
        }
    }
}

/// Anything that can report raw key-down state
pub trait InputSource {
    fn is_action_down(&self, action: Action) -> bool;
}

/// Key-down state of every action for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    down: [bool; 4],
}

impl InputSnapshot {
    pub fn sample(source: &impl InputSource) -> Self {
        let mut snapshot = Self::default();
        for action in Action::ALL {
            snapshot.down[action.index()] = source.is_action_down(action);
        }
        snapshot
    }

    pub fn with(mut self, action: Action) -> Self {
        self.down[action.index()] = true;
        self
    }

    #[inline]
    pub fn is_down(&self, action: Action) -> bool {
        self.down[action.index()]
    }
}

impl InputSource for InputSnapshot {
    fn is_action_down(&self, action: Action) -> bool {
        self.is_down(action)
    }
}

/// Previous and current snapshots
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: InputSnapshot,
    current: InputSnapshot,
}

impl InputTracker {
    /// Shift the current snapshot to previous and sample a new one
    pub fn update(&mut self, source: &impl InputSource) {
        self.previous = self.current;
        self.current = InputSnapshot::sample(source);
    }

    /// Went down this frame
    pub fn pressed(&self, action: Action) -> bool {
        self.current.is_down(action) && !self.previous.is_down(action)
    }

    /// Went up this frame
    pub fn released(&self, action: Action) -> bool {
        !self.current.is_down(action) && self.previous.is_down(action)
    }

    pub fn held(&self, action: Action) -> bool {
        self.current.is_down(action)
    }

    /// Movement repeats while held; launch and reset fire once per press
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.held(Action::Left),
            move_right: self.held(Action::Right),
            launch: self.pressed(Action::Launch),
            debug_reset: self.pressed(Action::DebugReset),
        }
    }
}
