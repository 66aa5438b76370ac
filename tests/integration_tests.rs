// Integration tests for the hangman crate
// These tests verify that word loading, the engine and the console front end work together

use hangman::cli::CliInterface;
use hangman::wordbank::EMBEDDED_WORDBANK;
use hangman::*;
use std::io::Cursor;

fn play(engine: &mut GameEngine, input: &str, config: &GameConfig) -> (String, PlaySummary) {
    let mut interface = CliInterface::with_writer(Cursor::new(input.to_string()), Vec::new());
    let summary = game_loop(engine, &mut interface, config).unwrap();
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (output, summary)
}

#[test]
fn test_fresh_game_state_for_every_attempt_count() {
    let mut engine = GameEngine::new();
    for attempts in 1..=26 {
        for word in ["ab", "hello", "Uncharacteristically"] {
            engine.new_game(attempts, Some(word)).unwrap();
            assert_eq!(engine.starting_attempts(), attempts);
            assert_eq!(engine.remaining_attempts(), attempts);
            assert!(!engine.player_won());
            assert!(!engine.is_finished());
            assert_eq!(engine.progress(), "_ ".repeat(word.len()));
        }
    }
}

#[test]
fn test_repeated_wrong_guesses_cost_one_attempt_each() {
    let mut engine = GameEngine::new();
    engine.new_game(10, Some("hello")).unwrap();

    engine.guess("q").unwrap();
    engine.guess_letter('Q').unwrap();
    engine.guess("apple").unwrap();
    engine.guess("APPLE").unwrap();

    assert_eq!(engine.remaining_attempts(), 8);
    assert_eq!(engine.incorrect_guesses(), "APPLE, Q");
}

#[test]
fn test_win_by_letters_costs_nothing() {
    let mut engine = GameEngine::new();
    engine.new_game(1, Some("hello")).unwrap();
    for letter in ["h", "E", "l", "o"] {
        assert!(engine.guess(letter).unwrap());
    }
    assert!(engine.player_won());
    assert!(engine.is_finished());
    assert_eq!(engine.remaining_attempts(), 1);
}

#[test]
fn test_win_by_word() {
    let mut engine = GameEngine::new();
    engine.new_game(1, Some("hello")).unwrap();
    assert!(engine.guess("hello").unwrap());
    assert!(engine.player_won());
}

#[test]
fn test_loss_locks_the_session() {
    let mut engine = GameEngine::new();
    engine.new_game(1, Some("hello")).unwrap();
    assert!(!engine.guess("x").unwrap());
    assert_eq!(engine.remaining_attempts(), 0);
    assert!(engine.is_finished());
    assert!(!engine.player_won());
    assert_eq!(engine.guess("hello"), Err(HangmanError::GameFinished));

    // A new game unlocks it again
    engine.new_game(1, Some("hello")).unwrap();
    assert!(engine.guess("hello").unwrap());
}

#[test]
fn test_progress_and_incorrect_guess_rendering() {
    let mut engine = GameEngine::new();
    engine.new_game(1, Some("someword")).unwrap();
    assert_eq!(engine.progress(), "_ _ _ _ _ _ _ _ ");
    engine.guess("someword").unwrap();
    assert_eq!(engine.progress(), "S O M E W O R D ");

    engine.new_game(5, Some("applesauce")).unwrap();
    engine.guess("sauceapple").unwrap();
    assert_eq!(engine.incorrect_guesses(), "SAUCEAPPLE");
    engine.guess_letter('x').unwrap();
    assert_eq!(engine.incorrect_guesses(), "SAUCEAPPLE, X");
}

#[test]
fn test_embedded_wordbank_feeds_the_engine() {
    let mut engine = GameEngine::with_index_source(SeededSource::new(3));
    let count = engine
        .replace_words_from_source(load_wordbank_from_str(EMBEDDED_WORDBANK))
        .unwrap();
    assert_eq!(count, 12);

    for _ in 0..20 {
        engine.new_game(10, None).unwrap();
        let letters = engine.progress().len() / 2;
        assert!(engine.words().iter().any(|w| w.len() == letters));
    }
}

#[test]
fn test_seeded_engines_pick_the_same_words() {
    let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let mut a = GameEngine::with_index_source(SeededSource::new(99));
    let mut b = GameEngine::with_index_source(SeededSource::new(99));
    a.replace_words_from_source(&words).unwrap();
    b.replace_words_from_source(&words).unwrap();

    for _ in 0..10 {
        a.new_game(3, None).unwrap();
        b.new_game(3, None).unwrap();
        assert_eq!(a.progress(), b.progress());
    }
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::{self, File};
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Melon, x, lemon").unwrap();
        writeln!(file, "n0pe").unwrap();
    }

    let words = load_wordbank_from_file(&path).unwrap();
    let mut engine = GameEngine::with_index_source(FixedSource::new(vec![1]));
    assert_eq!(engine.replace_words_from_source(words).unwrap(), 2);
    assert_eq!(engine.words(), ["melon", "lemon"]);

    let config = GameConfig {
        starting_attempts: 3,
        first_word: None,
    };
    let (output, summary) = play(&mut engine, "lemon\nexit\n", &config);
    assert_eq!(summary.games_won, 1);
    assert!(output.contains("The Secret Word: L E M O N "));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_bad_word_source_keeps_previous_pool() {
    let mut engine = GameEngine::new();
    engine
        .replace_words_from_source(load_wordbank_from_str(EMBEDDED_WORDBANK))
        .unwrap();

    let result = engine.replace_words_from_source(load_wordbank_from_str("1, 2, x, !!"));
    assert_eq!(result, Err(HangmanError::NoValidWords));
    assert_eq!(engine.pool_size(), 12);
}

#[test]
fn test_console_session_over_several_rounds() {
    let mut engine = GameEngine::with_index_source(FixedSource::new(vec![0]));
    engine.replace_words_from_source(["tofu"]).unwrap();
    let config = GameConfig {
        starting_attempts: 2,
        first_word: Some("devil".to_string()),
    };

    // Round 1 lost, round 2 won by letters, then quit
    let input = "a\nb\n\nt\no\nf\nu\nquit\n";
    let (output, summary) = play(&mut engine, input, &config);

    assert_eq!(
        summary,
        PlaySummary {
            games_started: 2,
            games_won: 1,
            games_lost: 1,
        }
    );
    assert!(output.contains("Incorrect Guesses: A, B"));
    assert!(output.contains("YOU LOSE !"));
    assert!(output.contains("The Secret Word: T O F U "));
    assert!(output.contains("YOU WIN !"));
    assert!(output.ends_with(" ::    Exiting.\n"));
}

#[test]
fn test_console_recovers_from_every_guess_error() {
    let mut engine = GameEngine::new();
    let config = GameConfig {
        starting_attempts: 4,
        first_word: Some("hello".to_string()),
    };

    let input = "\nhe\nh3llo\n?\nhello\n";
    let (output, summary) = play(&mut engine, input, &config);

    assert_eq!(summary.games_won, 1);
    assert!(output.contains("Input cannot be empty."));
    assert!(output.contains("Invalid guess 'he'"));
    assert!(output.contains("Invalid guess 'h3llo'"));
    assert!(output.contains("Invalid guess '?'"));
    assert!(output.contains("Attempts left: 4 of 4"));
}

#[test]
fn test_game_loop_reports_empty_pool() {
    let mut engine = GameEngine::new();
    let mut interface = CliInterface::with_writer(Cursor::new(String::new()), Vec::new());
    let result = game_loop(&mut engine, &mut interface, &GameConfig::default());
    assert_eq!(result, Err(HangmanError::PoolEmpty));
}
