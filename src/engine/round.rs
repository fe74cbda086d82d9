use crate::catalog::Catalog;
use crate::models::{Challenge, Difficulty, LetterEntry, RoundSpec};
use crate::utils::{random, words};
use rand::Rng;
use std::collections::HashSet;

/// tile banks on high difficulty pad short words out to this many tiles
const HIGH_BANK_SIZE: usize = 10;
/// words longer than the bank get this many extra distractors instead
const LONG_WORD_EXTRA: usize = 2;
/// the speller never hands out fewer distractors than this
const SPELLER_MIN_EXTRA: usize = 3;

/// builds the full presentation for one quiz round at the given difficulty
pub fn generate_round(
    catalog: &Catalog,
    target: &LetterEntry,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> RoundSpec {
    match difficulty {
        Difficulty::Beginner | Difficulty::Medium => {
            multiple_choice_round(catalog, target, difficulty.choice_count(), rng)
        }
        Difficulty::High => {
            let required = words::normalize_word(&target.example_word).chars().count();
            let extra = if required > HIGH_BANK_SIZE {
                LONG_WORD_EXTRA
            } else {
                HIGH_BANK_SIZE - required
            };
            tile_round(catalog, target, extra, rng)
        }
    }
}

/// the standalone speller is untimed and single-difficulty, so its bank
/// scales with the word instead of filling a fixed size
pub fn generate_speller_round(
    catalog: &Catalog,
    target: &LetterEntry,
    rng: &mut impl Rng,
) -> RoundSpec {
    let required = words::normalize_word(&target.example_word).chars().count();
    let extra = required.div_ceil(2).max(SPELLER_MIN_EXTRA);
    tile_round(catalog, target, extra, rng)
}

fn multiple_choice_round(
    catalog: &Catalog,
    target: &LetterEntry,
    size: usize,
    rng: &mut impl Rng,
) -> RoundSpec {
    // distractors come from the rest of the catalog, no entry twice
    let others: Vec<LetterEntry> = catalog
        .all()
        .iter()
        .filter(|e| e.symbol != target.symbol)
        .cloned()
        .collect();
    let mut choices = random::sample(&others, size.saturating_sub(1), rng);
    choices.push(target.clone());
    let choices = random::shuffled(&choices, rng);

    RoundSpec {
        target: target.clone(),
        challenge: Challenge::MultipleChoice { choices },
    }
}

fn tile_round(
    catalog: &Catalog,
    target: &LetterEntry,
    extra: usize,
    rng: &mut impl Rng,
) -> RoundSpec {
    let answer = words::normalize_word(&target.example_word);
    let mut tiles: Vec<char> = answer.chars().collect();
    let exclude: HashSet<char> = tiles.iter().copied().collect();
    tiles.extend(random::random_distractor_letters(
        catalog.alphabet(),
        extra,
        &exclude,
        rng,
    ));
    let bank = random::shuffled(&tiles, rng);

    RoundSpec {
        target: target.clone(),
        challenge: Challenge::TileSpelling { bank, answer },
    }
}
