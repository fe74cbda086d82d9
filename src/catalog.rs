use crate::models::{AlphabetData, LetterEntry};
use crate::utils::words;
use anyhow::{bail, Context, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeSet;

#[derive(RustEmbed)]
#[folder = "resources/"]
struct Asset;

/// the static alphabet dataset every round is drawn from. loaded once at
/// startup and validated up front, so a broken entry can never surface
/// mid-round
#[derive(Debug, Clone)]
pub struct Catalog {
    letters: Vec<LetterEntry>,
    alphabet: Vec<char>,
}

impl Catalog {
    pub fn load(language: &str) -> Result<Self> {
        let filename = format!("alphabet/{}.json", language);
        let file = Asset::get(&filename).context(format!(
            "Could not find embedded alphabet file: {}",
            filename
        ))?;
        let raw = std::str::from_utf8(file.data.as_ref())?;
        let data: AlphabetData = serde_json::from_str(raw)
            .context(format!("Could not parse alphabet file: {}", filename))?;
        Self::from_entries(data.letters)
    }

    pub fn from_entries(letters: Vec<LetterEntry>) -> Result<Self> {
        if letters.is_empty() {
            bail!("alphabet catalog is empty");
        }

        let mut alphabet: BTreeSet<char> = BTreeSet::new();
        {
            let mut seen: BTreeSet<&str> = BTreeSet::new();
            for entry in &letters {
                if entry.symbol.trim().is_empty() {
                    bail!("catalog entry has a blank symbol");
                }
                if entry.example_word.trim().is_empty() {
                    bail!("letter '{}' has no example word", entry.symbol);
                }
                if !seen.insert(entry.symbol.as_str()) {
                    bail!("duplicate symbol '{}' in catalog", entry.symbol);
                }
                alphabet.extend(words::normalize_word(&entry.symbol).chars());
            }
        }

        for entry in &letters {
            for c in words::normalize_word(&entry.example_word).chars() {
                if !alphabet.contains(&c) {
                    bail!(
                        "example word '{}' uses '{}' which no symbol covers",
                        entry.example_word,
                        c
                    );
                }
            }
        }

        Ok(Self {
            letters,
            alphabet: alphabet.into_iter().collect(),
        })
    }

    pub fn all(&self) -> &[LetterEntry] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn by_index(&self, i: usize) -> Option<&LetterEntry> {
        self.letters.get(i)
    }

    /// literal comparison on the stored string. folding would collapse a
    /// digraph like "LL" into its base letter and collide two entries
    pub fn by_key(&self, symbol: &str) -> Option<&LetterEntry> {
        self.letters.iter().find(|e| e.symbol == symbol)
    }

    /// every character any symbol contributes; the superset distractor
    /// tiles are drawn from
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}
