use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Split word-list text into raw candidates.
///
/// Words may be separated by commas, newlines, or both. Surrounding
/// whitespace is stripped; validation is left to the engine.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().flat_map(split_line).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(split_line(&line?));
    }
    Ok(words)
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|word| word.split_whitespace().collect::<String>())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Per-user word list, `<config dir>/hangman/words.txt`.
pub fn default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("hangman");
        path.push("words.txt");
        path
    })
}

/// The word list to load on top of the embedded one, if any.
///
/// An explicit path is always returned; otherwise the per-user list is used
/// only when it exists.
pub fn user_wordbank_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => default_wordbank_path().filter(|path| path.exists()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_embedded_wordbank_has_defaults() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert_eq!(words.len(), 12);
        assert_eq!(words[0], "sinner");
        assert!(words.contains(&"asparagus".to_string()));
        assert_eq!(words.last().map(String::as_str), Some("banana"));
    }

    #[test]
    fn test_load_from_str_comma_separated() {
        let words = load_wordbank_from_str("apple, pear ,plum,,");
        assert_eq!(words, vec!["apple", "pear", "plum"]);
    }

    #[test]
    fn test_load_from_str_newline_separated() {
        let words = load_wordbank_from_str("apple\n  pear\r\n\nplum\n");
        assert_eq!(words, vec!["apple", "pear", "plum"]);
    }

    #[test]
    fn test_load_from_str_strips_inner_spaces() {
        // Spaces are removed like the comma format always did: "soy bean" -> "soybean"
        let words = load_wordbank_from_str("soy bean, to fu");
        assert_eq!(words, vec!["soybean", "tofu"]);
    }

    #[test]
    fn test_load_from_str_keeps_invalid_candidates() {
        let words = load_wordbank_from_str("x, n1ce, Good");
        assert_eq!(words, vec!["x", "n1ce", "Good"]);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("hangman_wordbank_test.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "melon, lemon").unwrap();
            writeln!(file, "grape").unwrap();
        }

        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["melon", "lemon", "grape"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("hangman_wordbank_missing_1234.txt");
        let _ = fs::remove_file(&path);
        let err = load_wordbank_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_user_wordbank_path_prefers_explicit() {
        assert_eq!(
            user_wordbank_path(Some("custom.txt")),
            Some(PathBuf::from("custom.txt"))
        );
    }

    #[test]
    fn test_default_wordbank_path_file_name() {
        if let Some(path) = default_wordbank_path() {
            assert!(path.ends_with("hangman/words.txt"));
        }
    }
}
