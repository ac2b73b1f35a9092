//! Keyboard input handling

use game_core::{KeyPress, TickInput};
use winit::keyboard::KeyCode;

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    up: bool,
    down: bool,
}

impl KeyboardState {
    /// Track press/release of the movement keys; other keys are ignored
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowUp | KeyCode::KeyW => self.up = pressed,
            KeyCode::ArrowDown | KeyCode::KeyS => self.down = pressed,
            _ => {}
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
        }
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

/// Map a key press to the discrete action the match understands
pub fn key_press(code: KeyCode) -> KeyPress {
    match code {
        KeyCode::KeyR => KeyPress::Restart,
        _ => KeyPress::Other,
    }
}

pub fn is_quit(code: KeyCode) -> bool {
    code == KeyCode::Escape
}
