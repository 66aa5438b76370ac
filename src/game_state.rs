use crate::engine::{GameEngine, GameStatus};
use crate::error::{HangmanError, Result};
use crate::{debug_log, info_log};

/// What the player asked for at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Round settings for [`game_loop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_attempts: u32,
    /// Secret word for the first round only; later rounds draw from the pool.
    pub first_word: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_attempts: 10,
            first_word: None,
        }
    }
}

/// Tally of the rounds played in one [`game_loop`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_started: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

/// Front-end seam: the loop only talks to the player through this trait.
pub trait GameInterface {
    fn display_intro(&mut self, starting_attempts: u32, pool_size: usize);
    fn display_status(&mut self, status: &GameStatus);
    fn read_guess(&mut self) -> UserAction;
    fn display_guess_result(&mut self, guess: &str, hit: bool);
    fn display_error(&mut self, error: &HangmanError);
    fn display_game_over(&mut self, status: &GameStatus);
    /// Asked after a round finishes; anything but `NewGame` ends the loop.
    fn read_after_game_over(&mut self) -> UserAction;
    fn display_new_game_message(&mut self, starting_attempts: u32);
    fn display_exit_message(&mut self);
}

/// Play rounds until the player exits.
///
/// Guess errors are shown and the player is re-prompted. Only failures to
/// start a round (empty pool, bad settings) end the loop with an error.
pub fn game_loop<I: GameInterface>(
    engine: &mut GameEngine,
    interface: &mut I,
    config: &GameConfig,
) -> Result<PlaySummary> {
    let mut summary = PlaySummary::default();

    engine.new_game(config.starting_attempts, config.first_word.as_deref())?;
    summary.games_started += 1;
    interface.display_intro(config.starting_attempts, engine.pool_size());

    loop {
        let status = engine.status();
        interface.display_status(&status);

        if status.finished {
            if status.won {
                summary.games_won += 1;
            } else {
                summary.games_lost += 1;
            }
            interface.display_game_over(&status);

            match interface.read_after_game_over() {
                UserAction::NewGame => {
                    start_next_round(engine, interface, config)?;
                    summary.games_started += 1;
                    continue;
                }
                UserAction::Exit | UserAction::Guess(_) => break,
            }
        }

        match interface.read_guess() {
            UserAction::Exit => break,
            UserAction::NewGame => {
                debug_log!("Round abandoned by player");
                start_next_round(engine, interface, config)?;
                summary.games_started += 1;
            }
            UserAction::Guess(guess) => match engine.guess(&guess) {
                Ok(hit) => interface.display_guess_result(&guess, hit),
                Err(error) => {
                    debug_log!("Guess rejected: {}", error);
                    interface.display_error(&error);
                }
            },
        }
    }

    info_log!(
        "Session over: {} started, {} won, {} lost",
        summary.games_started,
        summary.games_won,
        summary.games_lost
    );
    interface.display_exit_message();
    Ok(summary)
}

fn start_next_round<I: GameInterface>(
    engine: &mut GameEngine,
    interface: &mut I,
    config: &GameConfig,
) -> Result<()> {
    engine.new_game(config.starting_attempts, None)?;
    interface.display_new_game_message(config.starting_attempts);
    Ok(())
}
