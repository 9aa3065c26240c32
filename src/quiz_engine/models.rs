use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Asia,
    SouthAsia,
    MiddleEast,
    Africa,
    LatinAmerica,
    Caribbean,
    Oceania,
    Europe,
    CentralEurope,
    EasternEurope,
    WesternEurope,
    NorthAmerica,
}

impl Region {
    /// Every region, in declaration order.
    pub const ALL: [Region; 12] = [
        Region::Asia,
        Region::SouthAsia,
        Region::MiddleEast,
        Region::Africa,
        Region::LatinAmerica,
        Region::Caribbean,
        Region::Oceania,
        Region::Europe,
        Region::CentralEurope,
        Region::EasternEurope,
        Region::WesternEurope,
        Region::NorthAmerica,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::Asia          => "ASIA",
            Region::SouthAsia     => "SOUTH_ASIA",
            Region::MiddleEast    => "MIDDLE_EAST",
            Region::Africa        => "AFRICA",
            Region::LatinAmerica  => "LATIN_AMERICA",
            Region::Caribbean     => "CARIBBEAN",
            Region::Oceania       => "OCEANIA",
            Region::Europe        => "EUROPE",
            Region::CentralEurope => "CENTRAL_EUROPE",
            Region::EasternEurope => "EASTERN_EUROPE",
            Region::WesternEurope => "WESTERN_EUROPE",
            Region::NorthAmerica  => "NORTH_AMERICA",
        }
    }

    /// Badge text shown above a question, e.g. "LATIN AMERICA".
    pub fn display_name(self) -> String {
        self.code().replacen('_', " ", 1)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Country records
// ---------------------------------------------------------------------------

/// Base difficulty bucket a country is tagged with in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Easy   => write!(f, "EASY"),
            Tier::Medium => write!(f, "MEDIUM"),
            Tier::Hard   => write!(f, "HARD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    /// Lowercase ISO code used to look up the flag image, e.g. "bt".
    pub flag: String,
    pub region: Region,
    pub mascot: String,
    pub sport: String,
    pub cuisine: String,
    pub dress: String,
    pub landmark: String,
    pub symbol: String,
    pub history: String,
    pub fun_fact: String,
    pub difficulty: Tier,
}

impl Country {
    /// External image reference for the flag. The engine never fetches it.
    pub fn flag_image_url(&self) -> String {
        format!("https://flagcdn.com/w640/{}.png", self.flag)
    }
}

// ---------------------------------------------------------------------------
// Question categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Flag,
    Mascot,
    Sport,
    Cuisine,
    Dress,
    Landmark,
    Symbol,
    History,
}

/// Fixed rotation of categories; round `k` uses `CATEGORY_CYCLE[k % 8]`.
pub const CATEGORY_CYCLE: [Category; 8] = [
    Category::Flag,
    Category::Mascot,
    Category::Sport,
    Category::Cuisine,
    Category::Dress,
    Category::Landmark,
    Category::Symbol,
    Category::History,
];

/// The seven categories backed by a text attribute (everything but FLAG).
pub const THEMATIC_CATEGORIES: [Category; 7] = [
    Category::Mascot,
    Category::Sport,
    Category::Cuisine,
    Category::Dress,
    Category::Landmark,
    Category::Symbol,
    Category::History,
];

impl Category {
    /// The attribute of `country` this category cues on.
    ///
    /// The field read is the one named by the lowercased category; FLAG has
    /// no text attribute and therefore no thematic match rule.
    pub fn attribute(self, country: &Country) -> Option<&str> {
        match self {
            Category::Flag     => None,
            Category::Mascot   => Some(&country.mascot),
            Category::Sport    => Some(&country.sport),
            Category::Cuisine  => Some(&country.cuisine),
            Category::Dress    => Some(&country.dress),
            Category::Landmark => Some(&country.landmark),
            Category::Symbol   => Some(&country.symbol),
            Category::History  => Some(&country.history),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Flag     => "National Banner",
            Category::Mascot   => "National Mascot",
            Category::Sport    => "National Sport",
            Category::Cuisine  => "Traditional Cuisine",
            Category::Dress    => "National Dress",
            Category::Landmark => "Historic Landmark",
            Category::Symbol   => "National Symbol",
            Category::History  => "Historical Legacy",
        }
    }

    /// Category for a 0-based round index.
    pub fn for_round(round_index: usize) -> Category {
        CATEGORY_CYCLE[round_index % CATEGORY_CYCLE.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Flag     => "FLAG",
            Category::Mascot   => "MASCOT",
            Category::Sport    => "SPORT",
            Category::Cuisine  => "CUISINE",
            Category::Dress    => "DRESS",
            Category::Landmark => "LANDMARK",
            Category::Symbol   => "SYMBOL",
            Category::History  => "HISTORY",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Difficulty modes and their rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyMode {
    Easy,
    #[default]
    Classic,
    Hard,
}

impl DifficultyMode {
    pub const ALL: [DifficultyMode; 3] =
        [DifficultyMode::Easy, DifficultyMode::Classic, DifficultyMode::Hard];

    /// Options shown per question, correct answer included.
    pub fn option_count(self) -> usize {
        match self {
            DifficultyMode::Easy    => 2,
            DifficultyMode::Classic => 4,
            DifficultyMode::Hard    => 6,
        }
    }

    /// Maximum rounds in a session before it finishes.
    pub fn round_limit(self) -> usize {
        match self {
            DifficultyMode::Easy    => 10,
            DifficultyMode::Classic => 15,
            DifficultyMode::Hard    => 25,
        }
    }

    /// Score change for a wrong answer.
    pub fn wrong_answer_penalty(self) -> i32 {
        match self {
            DifficultyMode::Easy    => 0,
            DifficultyMode::Classic => -1,
            DifficultyMode::Hard    => -2,
        }
    }

    /// One-line summary for the mode picker.
    pub fn blurb(self) -> &'static str {
        match self {
            DifficultyMode::Easy    => "10 Rounds • 2 Choices • No Penalties",
            DifficultyMode::Classic => "15 Rounds • 4 Choices • Smart Distractors",
            DifficultyMode::Hard    => "25 Rounds • 6 Choices • Thematic Similarity",
        }
    }
}

impl fmt::Display for DifficultyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyMode::Easy    => write!(f, "EASY"),
            DifficultyMode::Classic => write!(f, "CLASSIC"),
            DifficultyMode::Hard    => write!(f, "HARD"),
        }
    }
}

impl FromStr for DifficultyMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY"    => Ok(DifficultyMode::Easy),
            "CLASSIC" => Ok(DifficultyMode::Classic),
            "HARD"    => Ok(DifficultyMode::Hard),
            _ => Err(QuizError::UnknownMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-round output types
// ---------------------------------------------------------------------------

/// A secondary piece of trivia about the answer country, revealed with feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryFact {
    pub category: Category,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub category: Category,
    pub correct_answer: Country,
    /// Display names, correct answer included exactly once, in random order.
    pub options: Vec<String>,
    /// Question wording; empty for FLAG questions, where the flag is the cue.
    pub prompt: String,
    pub discovery: Option<DiscoveryFact>,
}

impl Question {
    pub fn is_correct(&self, selection: &str) -> bool {
        selection == self.correct_answer.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub is_skipped: bool,
    pub correct_name: String,
    pub fun_fact: String,
    pub discovery: Option<DiscoveryFact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Start,
    ModeSelect,
    Playing,
    Feedback,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Start      => write!(f, "START"),
            GameStatus::ModeSelect => write!(f, "MODE_SELECT"),
            GameStatus::Playing    => write!(f, "PLAYING"),
            GameStatus::Feedback   => write!(f, "FEEDBACK"),
            GameStatus::Finished   => write!(f, "FINISHED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_cycle_starts_with_flag_and_wraps() {
        assert_eq!(Category::for_round(0), Category::Flag);
        assert_eq!(Category::for_round(3), Category::Cuisine);
        assert_eq!(Category::for_round(7), Category::History);
        assert_eq!(Category::for_round(8), Category::Flag);
        assert_eq!(Category::for_round(17), Category::Mascot);
    }

    #[test]
    fn mode_rules_match_the_published_table() {
        let rules: Vec<(usize, usize, i32)> = DifficultyMode::ALL
            .iter()
            .map(|m| (m.option_count(), m.round_limit(), m.wrong_answer_penalty()))
            .collect();
        assert_eq!(rules, vec![(2, 10, 0), (4, 15, -1), (6, 25, -2)]);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("hard".parse::<DifficultyMode>().unwrap(), DifficultyMode::Hard);
        assert_eq!(" Classic ".parse::<DifficultyMode>().unwrap(), DifficultyMode::Classic);
        assert!(matches!(
            "expert".parse::<DifficultyMode>(),
            Err(QuizError::UnknownMode(s)) if s == "expert"
        ));
    }

    #[test]
    fn region_display_name_drops_the_underscore() {
        assert_eq!(Region::LatinAmerica.display_name(), "LATIN AMERICA");
        assert_eq!(Region::Oceania.display_name(), "OCEANIA");
    }

    #[test]
    fn region_serializes_with_wire_name() {
        let json = serde_json::to_string(&Region::CentralEurope).unwrap();
        assert_eq!(json, "\"CENTRAL_EUROPE\"");
        for r in Region::ALL {
            assert_eq!(serde_json::to_string(&r).unwrap(), format!("\"{}\"", r.code()));
        }
    }

    #[test]
    fn default_mode_is_classic() {
        assert_eq!(DifficultyMode::default(), DifficultyMode::Classic);
    }
}
