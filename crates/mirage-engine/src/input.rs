//! Held-command bitmask
//!
//! The host reports which directional/look commands are currently held as a
//! ten-bit mask; the engine never sees raw key events. Bit layout is part of
//! the host interface and must stay stable.

/// Bitmask of currently-held input commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState(pub u16);

impl InputState {
    pub const NONE: u16 = 0;
    pub const FORWARD: u16 = 1 << 0;
    pub const LEFT: u16 = 1 << 1;
    pub const RIGHT: u16 = 1 << 2;
    pub const BACK: u16 = 1 << 3;
    pub const UP: u16 = 1 << 4;
    pub const DOWN: u16 = 1 << 5;
    pub const LOOK_LEFT: u16 = 1 << 6;
    pub const LOOK_RIGHT: u16 = 1 << 7;
    pub const LOOK_UP: u16 = 1 << 8;
    pub const LOOK_DOWN: u16 = 1 << 9;

    pub fn new() -> Self {
        Self(Self::NONE)
    }

    /// Mark a command held.
    pub fn press(&mut self, command: u16) {
        self.0 |= command;
    }

    /// Mark a command released.
    pub fn release(&mut self, command: u16) {
        self.0 &= !command;
    }

    /// Whether every bit of `command` is held.
    pub fn is_held(self, command: u16) -> bool {
        self.0 & command == command
    }

    /// Whether nothing is held.
    pub fn is_idle(self) -> bool {
        self.0 == Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_round_trip() {
        let mut input = InputState::new();
        assert!(input.is_idle());

        input.press(InputState::FORWARD);
        input.press(InputState::LOOK_UP);
        assert!(input.is_held(InputState::FORWARD));
        assert!(input.is_held(InputState::LOOK_UP));
        assert!(!input.is_held(InputState::BACK));

        input.release(InputState::FORWARD);
        assert!(!input.is_held(InputState::FORWARD));
        assert!(input.is_held(InputState::LOOK_UP));
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut input = InputState::new();
        input.press(InputState::UP);
        input.press(InputState::UP);
        input.release(InputState::UP);
        assert!(input.is_idle());
    }
}
