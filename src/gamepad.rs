//! The driver context shared by the button, joystick and vibration
//! operations.

use crate::{
    Board,
    Button,
    GamepadConfig,
};

/// Gamepad driver.
///
/// Owns the board together with the state the operations share: whether
/// the pull configuration has been applied, and the vibration override
/// speed. Every public operation applies the pull configuration on first
/// use.
pub struct GamePad<B> {
    board: B,
    config: GamepadConfig,
    initialized: bool,
    pub(crate) override_speed: Option<u8>,
}

impl<B: Board> GamePad<B> {
    pub fn new(board: B) -> Self {
        Self::with_config(board, GamepadConfig::default())
    }

    pub const fn with_config(board: B, config: GamepadConfig) -> Self {
        Self {
            board,
            config,
            initialized: false,
            override_speed: None,
        }
    }

    /// Apply the key pull configuration unless it already has been.
    pub fn ensure_initialized(&mut self) {
        if self.initialized {
            return;
        }
        for button in Button::ALL {
            self.board.set_pull(button.pin(), button.pull());
        }
        self.initialized = true;
        debug!("gamepad pins configured");
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub const fn config(&self) -> &GamepadConfig {
        &self.config
    }

    pub const fn board(&self) -> &B {
        &self.board
    }

    /// Board access for operations not covered by the driver.
    ///
    /// Touching key pins here can undo the pull configuration.
    pub const fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Give the board back.
    pub fn release(self) -> B {
        self.board
    }
}
