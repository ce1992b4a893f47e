use crate::models::Pair;
use std::fs;
use std::path::Path;

/// Reads a `word,definition` file into a deck.
pub fn load_deck_file(path: &Path) -> std::io::Result<Vec<Pair>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_deck_text(&content))
}

/// Parses editor text into pairs. Each line is split on its first comma; lines
/// without a non-empty word and definition after trimming are dropped.
pub fn parse_deck_text(text: &str) -> Vec<Pair> {
    text.lines().filter_map(parse_deck_line).collect()
}

pub fn parse_deck_line(line: &str) -> Option<Pair> {
    let (word, definition) = line.split_once(',')?;
    let word = word.trim();
    let definition = definition.trim();

    if word.is_empty() || definition.is_empty() {
        return None;
    }

    Some(Pair::new(word, definition))
}

pub fn format_deck_text(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{},{}", pair.word, pair.definition))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_incomplete_lines() {
        let pairs = parse_deck_text("cat,a small feline\n,bad\nok,");
        assert_eq!(pairs, vec![Pair::new("cat", "a small feline")]);
    }

    #[test]
    fn test_parse_splits_on_first_comma_only() {
        let pairs = parse_deck_text("list,one, two, three");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].word, "list");
        assert_eq!(pairs[0].definition, "one, two, three");
    }

    #[test]
    fn test_parse_trims_fields() {
        let pairs = parse_deck_text("  dog  ,   a loyal canine  ");
        assert_eq!(pairs, vec![Pair::new("dog", "a loyal canine")]);
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_windows_endings() {
        let pairs = parse_deck_text("a,1\r\n\r\n   \nb,2\n");
        assert_eq!(pairs, vec![Pair::new("a", "1"), Pair::new("b", "2")]);
    }

    #[test]
    fn test_parse_line_without_comma() {
        assert!(parse_deck_line("no separator here").is_none());
        assert!(parse_deck_line("").is_none());
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let pairs = parse_deck_text("x,1\nx,1\ny,2");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], pairs[1]);
        assert_eq!(pairs[2].word, "y");
    }

    #[test]
    fn test_format_then_parse_keeps_deck() {
        let pairs = vec![
            Pair::new("sun", "the star at the center, of the solar system"),
            Pair::new("moon", "natural satellite"),
        ];
        let text = format_deck_text(&pairs);
        assert_eq!(
            text,
            "sun,the star at the center, of the solar system\nmoon,natural satellite"
        );
        assert_eq!(parse_deck_text(&text), pairs);
    }

    #[test]
    fn test_format_empty_deck() {
        assert_eq!(format_deck_text(&[]), "");
    }

    #[test]
    fn test_load_deck_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        std::fs::write(&path, "Q1,A1\n\nQ2,A2\n,A3\n").unwrap();

        let pairs = load_deck_file(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], Pair::new("Q2", "A2"));
    }

    #[test]
    fn test_load_deck_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_deck_file(&dir.path().join("missing.csv")).is_err());
    }
}
