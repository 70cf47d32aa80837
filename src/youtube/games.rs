//! Game-name extraction from free-text video titles
//!
//! Stream titles conventionally lead with the game ("Warzone - Ranked
//! Grind #4"), so the left segment before the first delimiter is taken as a
//! candidate. The heuristic is naive and noisy; segments of thirty or more
//! characters are discarded.

use serde::{Deserialize, Serialize};

/// Characters that end the game-name segment of a title
pub const TITLE_DELIMITERS: [char; 3] = ['-', '|', ':'];

/// Candidates this many characters or longer are discarded
pub const MAX_GAME_NAME_CHARS: usize = 30;

/// Extract a candidate game name from a video title.
///
/// Returns `None` when the trimmed left segment is empty or at least
/// [`MAX_GAME_NAME_CHARS`] characters long.
pub fn extract_game_name(title: &str) -> Option<String> {
    let head = match title.find(&TITLE_DELIMITERS[..]) {
        Some(idx) => &title[..idx],
        None => title,
    }
    .trim();

    if head.is_empty() || head.chars().count() >= MAX_GAME_NAME_CHARS {
        return None;
    }

    Some(head.to_string())
}

/// Collect unique game names from a sequence of titles, first-seen order.
pub fn collect_game_names<I, S>(titles: I) -> GameNameSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    titles
        .into_iter()
        .filter_map(|title| extract_game_name(title.as_ref()))
        .collect()
}

/// Insertion-ordered set of game names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GameNameSet {
    names: Vec<String>,
}

impl GameNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a trimmed name; returns `false` for blanks and duplicates
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name.trim())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for GameNameSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = GameNameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl From<Vec<String>> for GameNameSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<GameNameSet> for Vec<String> {
    fn from(set: GameNameSet) -> Self {
        set.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use fake::faker::lorem::en::{Sentence, Word};
    use rstest::rstest;

    #[rstest]
    #[case("Warzone - Ranked Grind #4", Some("Warzone"))]
    #[case("League of Legends: Worlds 2026 quarterfinal", Some("League of Legends"))]
    #[case("Valorant | ranked to radiant", Some("Valorant"))]
    #[case("Minecraft", Some("Minecraft"))]
    #[case("  Elden Ring   ", Some("Elden Ring"))]
    #[case("Half-Life 2 speedrun", Some("Half"))]
    #[case("Apex: day 3 - squads | EU", Some("Apex"))]
    #[case("ポケモン - ランクマッチ", Some("ポケモン"))]
    #[case(": intro segment", None)]
    #[case("   | nothing before", None)]
    #[case("", None)]
    #[case("Just a very very very very very long stream title with no delimiter", None)]
    fn test_extract_game_name(#[case] title: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_game_name(title).as_deref(), expected);
    }

    #[test]
    fn test_length_cutoff_is_exclusive() {
        let twenty_nine = "a".repeat(29);
        let thirty = "a".repeat(30);

        assert_eq!(extract_game_name(&twenty_nine), Some(twenty_nine.clone()));
        assert_eq!(extract_game_name(&format!("{} - live", thirty)), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 characters, 60 bytes
        let title = format!("{} - stream", "ゲ".repeat(20));
        assert_eq!(extract_game_name(&title), Some("ゲ".repeat(20)));
    }

    #[test]
    fn test_collect_dedups_in_first_seen_order() {
        let names = collect_game_names([
            "Fortnite - solo cash cup",
            "Valorant | scrims",
            "Fortnite: zero build",
            "An extremely long title that clearly is not a game name",
            "Valorant - ranked",
        ]);

        assert_eq!(names.into_vec(), vec!["Fortnite", "Valorant"]);
    }

    #[test]
    fn test_generated_titles_never_yield_invalid_names() {
        for _ in 0..200 {
            let game: String = Word().fake();
            let tail: String = Sentence(1..12).fake();
            let sep = TITLE_DELIMITERS[(0..3).fake::<usize>()];
            let titles = [format!("{} {} {}", game, sep, tail), tail];

            for name in collect_game_names(&titles).iter() {
                assert!(!name.is_empty());
                assert!(name.chars().count() < MAX_GAME_NAME_CHARS);
            }
        }
    }

    #[test]
    fn test_set_insert_trims_and_rejects_duplicates() {
        let mut set = GameNameSet::new();
        assert!(set.insert(" Dota 2 "));
        assert!(!set.insert("Dota 2"));
        assert!(!set.insert("   "));
        assert!(set.contains("Dota 2"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_serializes_as_array() {
        let set: GameNameSet = ["CS2", "Rocket League"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["CS2","Rocket League"]"#
        );

        let back: GameNameSet = serde_json::from_str(r#"["CS2","CS2"," "]"#).unwrap();
        assert_eq!(back.len(), 1);
    }
}
