//! TUI (Terminal User Interface) module for Hangman
//!
//! Full-screen front end built on Ratatui and Crossterm. It implements
//! [`GameInterface`] so the same game loop drives it as the console.
//!
//! # State Machine
//! - `EnteringGuess`: letters typed into the input box, ENTER submits
//! - `GameOver`: the round is finished, N or ENTER starts another

use crate::engine::{GameStatus, MAX_WORD_LEN};
use crate::error::HangmanError;
use crate::gallows;
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const GALLOWS_WIDTH: u16 = 23;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// Everything a frame needs, borrowed from the interface.
struct RenderContext<'a> {
    game: &'a GameStatus,
    current_input: &'a str,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime; the terminal is restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    game: GameStatus,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            game: GameStatus::default(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            game: &self.game,
            current_input: &self.current_input,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(12),    // Gallows and word
                Constraint::Length(3),  // Input
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GALLOWS_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);

        Self::render_title(f, chunks[0]);
        Self::render_gallows(f, body[0], ctx.game);
        Self::render_info(f, body[1], ctx);
        Self::render_input(f, chunks[2], ctx.current_input, ctx.state);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_gallows(f: &mut Frame, area: Rect, game: &GameStatus) {
        let lines: Vec<Line> = gallows::render(game).into_iter().map(Line::from).collect();
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let game = ctx.game;
        let mut lines = vec![
            Line::from(vec![
                Span::raw("Secret word: "),
                Span::styled(game.progress.as_str(), INFO_STYLE),
            ]),
            Line::from(""),
            Line::from(format!(
                "Attempts left: {} of {}",
                game.remaining_attempts, game.starting_attempts
            )),
            Line::from(format!("Incorrect guesses: {}", game.incorrect_guesses)),
            Line::from(""),
        ];

        if game.finished {
            if game.won {
                lines.push(Line::from(Span::styled("YOU WIN!", SUCCESS_STYLE)));
            } else {
                lines.push(Line::from(Span::styled("YOU LOSE!", FAILURE_STYLE)));
            }
        }
        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, MESSAGE_STYLE)));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.error_message, ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Game").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => format!("{}_", current_input.to_ascii_uppercase()),
            TuiState::GameOver => String::new(),
        };
        let paragraph = Paragraph::new(text)
            .style(INFO_STYLE)
            .block(Block::default().title("Your guess").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => {
                "Type a letter or the whole word | ENTER: Submit | CTRL+N: New word | ESC: Quit"
            }
            TuiState::GameOver => "N / ENTER: New Game | ESC / Q: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait for the next key press; `None` on timeout or for other events.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char('c') if has_ctrl => Some(UserAction::Exit),
            KeyCode::Char('n') if has_ctrl => {
                self.current_input.clear();
                Some(UserAction::NewGame)
            }
            KeyCode::Enter => Some(UserAction::Guess(std::mem::take(&mut self.current_input))),
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !has_ctrl
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && self.current_input.len() < MAX_WORD_LEN =>
            {
                self.error_message.clear();
                self.current_input.push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    /// Redraw and read keys until `handle` produces an action.
    fn read_action<F>(&mut self, mut handle: F) -> UserAction
    where
        F: FnMut(&mut Self, KeyEvent) -> Option<UserAction>,
    {
        loop {
            if self.draw().is_err() {
                info_log!("Draw failed, exiting");
                return UserAction::Exit;
            }
            match Self::next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = handle(self, key) {
                        debug_log!("Action received: {:?}", action);
                        return action;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("Input error, exiting: {}", e);
                    return UserAction::Exit;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_intro(&mut self, starting_attempts: u32, pool_size: usize) {
        self.message = format!(
            "{pool_size} words loaded. Guess the secret word before {starting_attempts} misses."
        );
        self.draw_or_log();
    }

    fn display_status(&mut self, status: &GameStatus) {
        self.game = status.clone();
        self.state = if status.finished {
            TuiState::GameOver
        } else {
            TuiState::EnteringGuess
        };
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> UserAction {
        self.state = TuiState::EnteringGuess;
        self.read_action(Self::handle_guess_input)
    }

    fn display_guess_result(&mut self, guess: &str, hit: bool) {
        self.error_message.clear();
        let guess = guess.to_ascii_uppercase();
        self.message = if hit {
            format!("{guess} is right!")
        } else {
            format!("{guess} is wrong.")
        };
    }

    fn display_error(&mut self, error: &HangmanError) {
        self.message.clear();
        self.error_message = error.to_string();
    }

    fn display_game_over(&mut self, status: &GameStatus) {
        self.state = TuiState::GameOver;
        self.message = if status.won {
            "The prisoner lives to see another day.".to_string()
        } else {
            "The prisoner is no longer with us.".to_string()
        };
        self.draw_or_log();
    }

    fn read_after_game_over(&mut self) -> UserAction {
        self.read_action(|_, key| Self::handle_game_over_input(key))
    }

    fn display_new_game_message(&mut self, starting_attempts: u32) {
        self.current_input.clear();
        self.error_message.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game started with {starting_attempts} attempts.");
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Enter)),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Esc)),
            Some(UserAction::Exit)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('Q'))),
            Some(UserAction::Exit)
        );
        assert_eq!(
            TuiInterface::handle_game_over_input(key(KeyCode::Char('x'))),
            None
        );
    }
}
