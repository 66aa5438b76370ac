// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod gallows;
pub mod game_state;
pub mod logging;
pub mod random;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GameEngine, GameStatus, is_valid_word, normalize_word};
pub use error::{HangmanError, Result};
pub use game_state::{GameConfig, GameInterface, PlaySummary, UserAction, game_loop};
pub use random::{FixedSource, IndexSource, SeededSource, ThreadRngSource};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
