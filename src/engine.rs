//! The hangman game engine.
//!
//! [`GameEngine`] owns the word pool and at most one active session. A session
//! is *active* while it has attempts left and has not been won, and
//! *finished* otherwise; guesses are rejected once finished until
//! [`GameEngine::new_game`] replaces the session.
//!
//! Words are stored lower-case. Rendering helpers ([`GameEngine::progress`],
//! [`GameEngine::incorrect_guesses`]) upper-case their output for display.

use crate::error::{HangmanError, Result};
use crate::random::{IndexSource, ThreadRngSource};
use crate::{debug_log, info_log};
use std::collections::HashSet;
use std::fmt;

pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = 20;
pub const MIN_ATTEMPTS: u32 = 1;
pub const MAX_ATTEMPTS: u32 = 26;
pub const PLACEHOLDER: char = '_';

/// True if `word` is 2 to 20 ASCII letters, in any case.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate `word` and return its lower-case form.
pub fn normalize_word(word: &str) -> Result<String> {
    if word.is_empty() {
        return Err(HangmanError::EmptyInput);
    }
    if !is_valid_word(word) {
        return Err(HangmanError::InvalidWord(word.to_string()));
    }
    Ok(word.to_ascii_lowercase())
}

/// Read-only snapshot of the active session for presenters.
///
/// Never contains the secret word itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatus {
    pub progress: String,
    pub incorrect_guesses: String,
    pub remaining_attempts: u32,
    pub starting_attempts: u32,
    pub finished: bool,
    pub won: bool,
}

impl GameStatus {
    /// Number of distinct incorrect guesses made so far.
    #[must_use]
    pub fn misses(&self) -> u32 {
        self.starting_attempts.saturating_sub(self.remaining_attempts)
    }
}

#[derive(Debug)]
struct Session {
    secret: String,
    revealed: Vec<char>,
    incorrect_letters: Vec<char>,
    incorrect_words: Vec<String>,
    seen_words: HashSet<String>,
    starting_attempts: u32,
    remaining_attempts: u32,
    won: bool,
}

impl Session {
    fn new(secret: String, starting_attempts: u32) -> Self {
        Self {
            revealed: vec![PLACEHOLDER; secret.len()],
            secret,
            incorrect_letters: Vec::new(),
            incorrect_words: Vec::new(),
            seen_words: HashSet::new(),
            starting_attempts,
            remaining_attempts: starting_attempts,
            won: false,
        }
    }

    fn is_finished(&self) -> bool {
        self.remaining_attempts == 0 || self.won
    }

    fn miss(&mut self) {
        self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
    }

    /// `letter` must already be lower-case ASCII.
    fn apply_letter(&mut self, letter: char) -> bool {
        let mut matched = false;
        for (slot, secret) in self.revealed.iter_mut().zip(self.secret.chars()) {
            if secret == letter {
                *slot = letter;
                matched = true;
            }
        }

        if matched {
            if self.revealed.iter().copied().eq(self.secret.chars()) {
                self.won = true;
            }
            return true;
        }

        if !self.incorrect_letters.contains(&letter) {
            self.incorrect_letters.push(letter);
            self.miss();
        }
        false
    }

    /// `word` must already be lower-case ASCII of the secret's length.
    fn apply_word(&mut self, word: String) -> bool {
        if word == self.secret {
            self.revealed = self.secret.chars().collect();
            self.won = true;
            return true;
        }

        if self.seen_words.insert(word.clone()) {
            self.incorrect_words.push(word);
            self.miss();
        }
        false
    }
}

/// Word pool plus the single active hangman session.
///
/// The pool keeps duplicates: adding a word twice makes it twice as likely
/// to be drawn.
pub struct GameEngine {
    pool: Vec<String>,
    session: Option<Session>,
    index_source: Box<dyn IndexSource>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("pool_size", &self.pool.len())
            .field("status", &self.status())
            .finish()
    }
}

impl GameEngine {
    /// Engine with an empty pool that draws words with the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_index_source(ThreadRngSource)
    }

    /// Engine drawing words through `source`.
    #[must_use]
    pub fn with_index_source<S: IndexSource + 'static>(source: S) -> Self {
        Self {
            pool: Vec::new(),
            session: None,
            index_source: Box::new(source),
        }
    }

    // Word pool

    pub fn add_word(&mut self, word: &str) -> Result<()> {
        let word = normalize_word(word)?;
        debug_log!("Added word to pool ({} letters)", word.len());
        self.pool.push(word);
        Ok(())
    }

    /// Replace the whole pool with the valid entries of `words`.
    ///
    /// Invalid entries are dropped silently. If none survive, the pool is
    /// left untouched and [`HangmanError::NoValidWords`] is returned.
    /// Returns the new pool size.
    pub fn replace_words_from_source<I, S>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dropped = 0usize;
        let valid: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let normalized = normalize_word(word.as_ref()).ok();
                if normalized.is_none() {
                    dropped += 1;
                }
                normalized
            })
            .collect();

        if valid.is_empty() {
            log::warn!("Word source rejected: no valid words ({dropped} dropped)");
            return Err(HangmanError::NoValidWords);
        }

        info_log!(
            "Word pool replaced: {} words ({} dropped)",
            valid.len(),
            dropped
        );
        self.pool = valid;
        Ok(self.pool.len())
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.pool
    }

    // Session lifecycle

    /// Start a new session, discarding any previous one.
    ///
    /// With `secret_word_override` the pool is bypassed; otherwise a word is
    /// drawn from the pool through the index source.
    pub fn new_game(
        &mut self,
        starting_attempts: u32,
        secret_word_override: Option<&str>,
    ) -> Result<()> {
        if !(MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&starting_attempts) {
            return Err(HangmanError::OutOfRange(starting_attempts));
        }

        let secret = match secret_word_override {
            Some(word) => normalize_word(word)?,
            None => {
                if self.pool.is_empty() {
                    return Err(HangmanError::PoolEmpty);
                }
                let index = self.index_source.next_index(self.pool.len()) % self.pool.len();
                self.pool[index].clone()
            }
        };

        info_log!(
            "New game: {} letters, {} attempts",
            secret.len(),
            starting_attempts
        );
        self.session = Some(Session::new(secret, starting_attempts));
        Ok(())
    }

    #[must_use]
    pub fn has_game(&self) -> bool {
        self.session.is_some()
    }

    fn active_session_mut(&mut self) -> Result<&mut Session> {
        match self.session.as_mut() {
            None => Err(HangmanError::NotInitialized),
            Some(session) if session.is_finished() => Err(HangmanError::GameFinished),
            Some(session) => Ok(session),
        }
    }

    // Guessing

    /// Guess a whole word, or a letter when `text` is a single character.
    ///
    /// Returns `true` on a hit. Repeating a wrong guess costs nothing.
    pub fn guess(&mut self, text: &str) -> Result<bool> {
        self.active_session_mut()?;
        if text.is_empty() {
            return Err(HangmanError::EmptyInput);
        }

        let mut chars = text.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return self.guess_letter(letter);
        }

        let session = self.active_session_mut()?;
        if !text.chars().all(|c| c.is_ascii_alphabetic()) || text.len() != session.secret.len() {
            return Err(HangmanError::InvalidFormat(text.to_string()));
        }

        let hit = session.apply_word(text.to_ascii_lowercase());
        debug_log!(
            "Word guess {}: {} attempts left",
            if hit { "hit" } else { "miss" },
            session.remaining_attempts
        );
        Self::log_if_finished(session);
        Ok(hit)
    }

    pub fn guess_letter(&mut self, letter: char) -> Result<bool> {
        let session = self.active_session_mut()?;
        if !letter.is_ascii_alphabetic() {
            return Err(HangmanError::InvalidFormat(letter.to_string()));
        }

        let hit = session.apply_letter(letter.to_ascii_lowercase());
        debug_log!(
            "Letter guess {}: {} attempts left",
            if hit { "hit" } else { "miss" },
            session.remaining_attempts
        );
        Self::log_if_finished(session);
        Ok(hit)
    }

    fn log_if_finished(session: &Session) {
        if session.is_finished() {
            info_log!("Game finished: {}", if session.won { "won" } else { "lost" });
        }
    }

    // Status queries

    /// False before the first game.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_finished)
    }

    #[must_use]
    pub fn player_won(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.won)
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.remaining_attempts)
    }

    #[must_use]
    pub fn starting_attempts(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.starting_attempts)
    }

    /// Revealed letters upper-cased, each followed by one space: `"H _ L L _ "`.
    #[must_use]
    pub fn progress(&self) -> String {
        let Some(session) = &self.session else {
            return String::new();
        };
        let mut out = String::with_capacity(session.revealed.len() * 2);
        for ch in &session.revealed {
            out.push(ch.to_ascii_uppercase());
            out.push(' ');
        }
        out
    }

    /// Wrong word guesses then wrong letters, upper-cased, joined by `", "`.
    #[must_use]
    pub fn incorrect_guesses(&self) -> String {
        let Some(session) = &self.session else {
            return String::new();
        };
        session
            .incorrect_words
            .iter()
            .map(|word| word.to_ascii_uppercase())
            .chain(
                session
                    .incorrect_letters
                    .iter()
                    .map(|letter| letter.to_ascii_uppercase().to_string()),
            )
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            progress: self.progress(),
            incorrect_guesses: self.incorrect_guesses(),
            remaining_attempts: self.remaining_attempts(),
            starting_attempts: self.starting_attempts(),
            finished: self.is_finished(),
            won: self.player_won(),
        }
    }
}
