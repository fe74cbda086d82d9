use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Medium,
    High,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }

    /// beginner and medium are multiple choice, high spells the word from tiles
    pub fn round_mode(&self) -> RoundMode {
        match self {
            Difficulty::Beginner | Difficulty::Medium => RoundMode::MultipleChoice,
            Difficulty::High => RoundMode::TileSpelling,
        }
    }

    pub fn choice_count(&self) -> usize {
        match self {
            Difficulty::Beginner => 2,
            Difficulty::Medium => 4,
            Difficulty::High => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Quiz(Difficulty),
    Practice(Difficulty),
    Speller,
}

impl GameKind {
    /// graded games always consume a round, right or wrong.
    /// ungraded games let the player retry until correct.
    pub fn graded(&self) -> bool {
        matches!(self, GameKind::Quiz(_))
    }

    pub fn round_limit(&self) -> Option<usize> {
        match self {
            GameKind::Quiz(_) => Some(10),
            GameKind::Practice(_) | GameKind::Speller => None,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameKind::Quiz(d) | GameKind::Practice(d) => Some(*d),
            GameKind::Speller => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    MultipleChoice,
    TileSpelling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Incorrect,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MediaRef {
    pub image_key: Option<String>,
    pub fallback_glyph: String,
    pub audio_ref: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LetterEntry {
    pub symbol: String,
    pub example_word: String,
    pub secondary_words: Vec<String>,
    pub media: MediaRef,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetData {
    #[allow(dead_code)]
    pub language: String,
    pub letters: Vec<LetterEntry>,
}

/// one tile picked into the in-progress answer. the bank slot index is the
/// identity: a word like "Bibi" holds the same letter in two slots, and only
/// the slot tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePick {
    pub ch: char,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Challenge {
    MultipleChoice { choices: Vec<LetterEntry> },
    TileSpelling { bank: Vec<char>, answer: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundSpec {
    pub target: LetterEntry,
    pub challenge: Challenge,
}

impl RoundSpec {
    pub fn mode(&self) -> RoundMode {
        match self.challenge {
            Challenge::MultipleChoice { .. } => RoundMode::MultipleChoice,
            Challenge::TileSpelling { .. } => RoundMode::TileSpelling,
        }
    }

    /// answer length in characters for tile rounds, 0 for multiple choice
    pub fn required_len(&self) -> usize {
        match &self.challenge {
            Challenge::MultipleChoice { .. } => 0,
            Challenge::TileSpelling { answer, .. } => answer.chars().count(),
        }
    }
}

/// append-only record of one answered round, the sole input to the review screen
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLogEntry {
    pub difficulty: Option<Difficulty>,
    pub mode: RoundMode,
    pub symbol: String,
    pub word: String,
    pub given: String,
    pub expected: String,
    pub correct: bool,
}
