use letra::catalog::Catalog;
use letra::models::{Challenge, Difficulty};
use letra::engine::round::{generate_round, generate_speller_round};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn catalog() -> Catalog {
    Catalog::load("tetun").unwrap()
}

fn counts(chars: impl Iterator<Item = char>) -> HashMap<char, usize> {
    let mut map = HashMap::new();
    for c in chars {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

#[test]
fn beginner_round_for_a_offers_the_target_and_one_distractor() {
    let catalog = catalog();
    let target = catalog.by_key("A").unwrap().clone();
    assert_eq!(target.example_word, "Ahi");

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let spec = generate_round(&catalog, &target, Difficulty::Beginner, &mut rng);
        let Challenge::MultipleChoice { choices } = &spec.challenge else {
            panic!("beginner rounds are multiple choice");
        };
        assert_eq!(choices.len(), 2);
        assert_eq!(choices.iter().filter(|e| e.symbol == "A").count(), 1);
        assert!(choices.iter().any(|e| e.symbol != "A"));
    }
}

#[test]
fn bibi_bank_holds_the_double_letters_and_ten_tiles() {
    let catalog = catalog();
    let target = catalog.by_key("B").unwrap().clone();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let spec = generate_round(&catalog, &target, Difficulty::High, &mut rng);
        let Challenge::TileSpelling { bank, answer } = &spec.challenge else {
            panic!("high rounds are tile spelling");
        };
        assert_eq!(answer, "BIBI");
        assert_eq!(bank.len(), 10, "4 required tiles + 6 distractors");
        let available = counts(bank.iter().copied());
        assert!(available[&'B'] >= 2);
        assert!(available[&'I'] >= 2);
    }
}

#[test]
fn every_tile_round_covers_its_word_with_alphabet_letters_only() {
    let catalog = catalog();
    let mut rng = StdRng::seed_from_u64(3);

    for target in catalog.all() {
        for spec in [
            generate_round(&catalog, target, Difficulty::High, &mut rng),
            generate_speller_round(&catalog, target, &mut rng),
        ] {
            let Challenge::TileSpelling { bank, answer } = &spec.challenge else {
                panic!("expected a tile round");
            };
            let required = counts(answer.chars());
            let available = counts(bank.iter().copied());
            for (c, n) in &required {
                assert!(available.get(c).copied().unwrap_or(0) >= *n);
            }
            assert!(bank.iter().all(|c| catalog.alphabet().contains(c)));
            assert!(bank.len() >= answer.chars().count());
        }
    }
}

#[test]
fn choice_rounds_never_duplicate_an_entry() {
    let catalog = catalog();
    let mut rng = StdRng::seed_from_u64(11);

    for target in catalog.all() {
        let spec = generate_round(&catalog, target, Difficulty::Medium, &mut rng);
        let Challenge::MultipleChoice { choices } = &spec.challenge else {
            panic!("medium rounds are multiple choice");
        };
        let mut symbols: Vec<&str> = choices.iter().map(|e| e.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 4);
    }
}
