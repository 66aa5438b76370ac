use hangman::cli::{
    CliInterface, check_console_word, parse_cli, without_console_commands,
};
use hangman::logging::{default_log_path, init_logging};
use hangman::tui::TuiInterface;
use hangman::wordbank::{
    EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str, user_wordbank_path,
};
use hangman::{GameConfig, GameEngine, SeededSource, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_file = cli.tui.then(default_log_path);
    if let Err(e) = init_logging(cli.verbose, log_file.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
    }

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_index_source(SeededSource::new(seed)),
        None => GameEngine::new(),
    };
    let console = !cli.tui;
    if console
        && let Some(word) = cli.word.as_deref()
        && check_console_word(word).is_err()
    {
        eprintln!("Cannot use '{word}' as the word: it is a console command. Use --tui to play it.");
        return ExitCode::FAILURE;
    }
    load_words(&mut engine, cli.wordbank_path.as_deref(), console);

    let config = GameConfig {
        starting_attempts: cli.attempts,
        first_word: cli.word.clone(),
    };

    let result = if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut engine, &mut interface, &config)
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut engine, &mut interface, &config)
    };

    match result {
        Ok(summary) => {
            log::info!(
                "Played {} games: {} won, {} lost",
                summary.games_started,
                summary.games_won,
                summary.games_lost
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the embedded words, then the user's list on top when one is available.
///
/// The console cannot take command words as guesses, so they are dropped.
fn load_words(engine: &mut GameEngine, explicit_path: Option<&str>, console: bool) {
    let playable = |words: Vec<String>| {
        if console {
            without_console_commands(words)
        } else {
            words
        }
    };

    let embedded = playable(load_wordbank_from_str(EMBEDDED_WORDBANK));
    if let Err(e) = engine.replace_words_from_source(embedded) {
        log::error!("Embedded word list unusable: {e}");
    }

    let Some(path) = user_wordbank_path(explicit_path) else {
        return;
    };

    match load_wordbank_from_file(&path) {
        Ok(words) => match engine.replace_words_from_source(playable(words)) {
            Ok(count) => log::info!("Loaded {count} words from {}", path.display()),
            Err(e) => eprintln!(
                "File Error: {} - {e} Using the default word list.",
                path.display()
            ),
        },
        Err(e) => eprintln!(
            "Failed to load word list from '{}': {e}. Using the default word list.",
            path.display()
        ),
    }
}
