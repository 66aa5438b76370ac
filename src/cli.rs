use crate::debug_log;
use crate::engine::{GameStatus, MAX_ATTEMPTS, MIN_ATTEMPTS};
use crate::error::HangmanError;
use crate::gallows;
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word list (words separated by commas or newlines)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Number of incorrect guesses allowed per round (1-26)
    #[arg(
        short = 'a',
        long = "attempts",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_ATTEMPTS)..=i64::from(MAX_ATTEMPTS))
    )]
    pub attempts: u32,

    /// Secret word for the first round instead of a random one
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Seed for repeatable word selection
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Use the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const RULE: &str = " ::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::::";

const CONSOLE_COMMANDS: [&str; 3] = ["exit", "quit", "next"];

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// True for words the guess prompt reads as commands, never as guesses.
#[must_use]
pub fn is_console_command(input: &str) -> bool {
    CONSOLE_COMMANDS
        .iter()
        .any(|command| input.trim().eq_ignore_ascii_case(command))
}

/// Drop candidates that could never be guessed at the console prompt.
pub fn without_console_commands<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .filter(|word| !is_console_command(word.as_ref()))
        .map(|word| word.as_ref().to_string())
        .collect()
}

/// Reject a fixed secret word that the console would read as a command.
pub fn check_console_word(word: &str) -> Result<(), HangmanError> {
    if is_console_command(word) {
        return Err(HangmanError::InvalidWord(word.to_string()));
    }
    Ok(())
}

/// Map a trimmed guess-prompt line to an action.
pub fn parse_guess_input(input: &str) -> UserAction {
    if is_exit_command(input) {
        UserAction::Exit
    } else if input.eq_ignore_ascii_case("next") {
        UserAction::NewGame
    } else {
        UserAction::Guess(input.to_string())
    }
}

/// Line-oriented console front end.
///
/// Reads player input from `reader` and writes the game screen to `writer`.
/// End of input counts as `exit`.
pub struct CliInterface<R: BufRead, W: Write = io::Stdout> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, " ::    {message}") {
            debug_log!("Console write failed: {}", e);
        }
    }

    fn prompt(&mut self, message: &str) {
        if let Err(e) = write!(self.writer, "\n\t{message}").and_then(|()| self.writer.flush()) {
            debug_log!("Console write failed: {}", e);
        }
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(e) => {
                debug_log!("Console read failed: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_intro(&mut self, starting_attempts: u32, pool_size: usize) {
        self.write("POOR OLD JACK PUDDINGS!");
        self.write("Caught stealing a loaf of bread, and the crowd wants a hanging.");
        self.write("We have decided on a Secret Word.");
        self.write("Guess it to spare him: one letter at a time, or the entire word.");
        self.write(&format!(
            "Be careful, after {starting_attempts} incorrect guesses he hangs!"
        ));
        self.write(&format!(
            "({pool_size} words loaded. Type 'next' for a new word, 'exit' to quit.)"
        ));
    }

    fn display_status(&mut self, status: &GameStatus) {
        if let Err(e) = writeln!(self.writer, "{RULE}") {
            debug_log!("Console write failed: {}", e);
        }
        if status.incorrect_guesses.is_empty() {
            self.write("");
        } else {
            self.write(&format!("Incorrect Guesses: {}", status.incorrect_guesses));
        }
        for line in gallows::render(status) {
            self.write(line);
        }
        self.write("");
        self.write(&format!("The Secret Word: {}", status.progress));
        self.write(&format!(
            "Attempts left: {} of {}",
            status.remaining_attempts, status.starting_attempts
        ));
    }

    fn read_guess(&mut self) -> UserAction {
        self.prompt("Your Guess: ");
        match self.read_line() {
            Some(input) => parse_guess_input(&input),
            None => UserAction::Exit,
        }
    }

    fn display_guess_result(&mut self, guess: &str, hit: bool) {
        let guess = guess.to_ascii_uppercase();
        if hit {
            self.write(&format!("Yes! {guess} is right."));
        } else {
            self.write(&format!("No, {guess} is wrong."));
        }
    }

    fn display_error(&mut self, error: &HangmanError) {
        self.write(&error.to_string());
    }

    fn display_game_over(&mut self, status: &GameStatus) {
        self.write("");
        if status.won {
            self.write("     YOU WIN !     ");
            self.write("");
            self.write("Poor Old Jack lives to see another day.");
        } else {
            self.write("     YOU LOSE !    ");
            self.write("");
            self.write("Poor Old Jack is no longer with us.");
        }
    }

    fn read_after_game_over(&mut self) -> UserAction {
        self.prompt("Press <Enter> to start a new game, or type 'exit' to quit. ");
        match self.read_line() {
            Some(input) if !is_exit_command(&input) => UserAction::NewGame,
            _ => UserAction::Exit,
        }
    }

    fn display_new_game_message(&mut self, starting_attempts: u32) {
        self.write(&format!(
            "New game started. A new Secret Word, {starting_attempts} attempts."
        ));
    }

    fn display_exit_message(&mut self) {
        self.write("Exiting.");
    }
}
