// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod color;
pub mod controls;
pub mod evaluator;
pub mod game_state;
pub mod logging;
pub mod secret;
pub mod theme;
pub mod tui;

// Re-export commonly used items for easier testing
pub use board::{Board, Hint, MAX_TURNS, Row, is_row_complete};
pub use color::{CODE_LENGTH, Code, Color, PLAYABLE};
pub use controls::{ButtonId, Controls, UserAction, apply_action};
pub use evaluator::evaluate;
pub use game_state::{GameInterface, GameState, Status, game_loop};
pub use secret::generate_code;
pub use theme::Theme;
