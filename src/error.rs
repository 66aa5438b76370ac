use thiserror::Error;

/// Errors reported by [`GameEngine`](crate::engine::GameEngine).
///
/// Every variant is recoverable: a failed call leaves the word pool and the
/// active session exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// A guess or word was empty where a value is required
    #[error("Input cannot be empty.")]
    EmptyInput,

    /// A guess contains non-letters or has the wrong length
    #[error("Invalid guess '{0}': enter a single letter or a word as long as the secret word.")]
    InvalidFormat(String),

    /// A word fails the 2-20 letters rule
    #[error("Invalid word '{0}': words must be 2 to 20 letters (A-Z).")]
    InvalidWord(String),

    /// Starting attempts outside 1..=26
    #[error("Number of attempts must be between 1 and 26, got {0}.")]
    OutOfRange(u32),

    /// No override given and no words in the pool
    #[error("The word pool is empty; add words before starting a game.")]
    PoolEmpty,

    /// Bulk replacement produced no valid words
    #[error("The word source contains no valid words.")]
    NoValidWords,

    #[error("No game in progress; start a new game first.")]
    NotInitialized,

    #[error("The game is finished; start a new game to play again.")]
    GameFinished,
}

pub type Result<T> = std::result::Result<T, HangmanError>;
