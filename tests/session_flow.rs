use letra::catalog::Catalog;
use letra::engine::session::Session;
use letra::models::{
    Challenge, Difficulty, Feedback, GameKind, LetterEntry, MediaRef,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn session(kind: GameKind, seed: u64) -> Session {
    let catalog = Catalog::load("tetun").unwrap();
    with_catalog(catalog, kind, seed)
}

fn with_catalog(catalog: Catalog, kind: GameKind, seed: u64) -> Session {
    let mut s = Session::new(catalog, kind, StdRng::seed_from_u64(seed));
    s.feedback_delay = Duration::ZERO;
    s
}

fn entry(symbol: &str, word: &str) -> LetterEntry {
    LetterEntry {
        symbol: symbol.to_string(),
        example_word: word.to_string(),
        secondary_words: Vec::new(),
        media: MediaRef {
            image_key: None,
            fallback_glyph: symbol.to_string(),
            audio_ref: format!("audio/{}.mp3", symbol.to_lowercase()),
        },
    }
}

/// spells the given word by picking, for each letter, the last unused bank
/// slot holding it. picking from the back proves the answer is keyed by
/// slot, not by character value
fn spell(s: &mut Session, word: &str) {
    let Challenge::TileSpelling { bank, .. } = s.round.challenge.clone() else {
        panic!("expected a tile round");
    };
    let mut used = vec![false; bank.len()];
    for c in word.chars() {
        let slot = (0..bank.len())
            .rev()
            .find(|&i| !used[i] && bank[i] == c)
            .expect("bank covers the word");
        used[slot] = true;
        s.pick_tile(slot);
    }
    s.submit();
}

fn pick_wrong_choice(s: &mut Session) {
    let Challenge::MultipleChoice { choices } = s.round.challenge.clone() else {
        panic!("expected a choice round");
    };
    let wrong = choices
        .iter()
        .map(|e| e.symbol.clone())
        .find(|sym| *sym != s.round.target.symbol)
        .unwrap();
    s.select_choice(&wrong);
}

#[test]
fn high_quiz_spelled_correctly_finishes_with_a_full_log() {
    let mut s = session(GameKind::Quiz(Difficulty::High), 5);
    for _ in 0..10 {
        let Challenge::TileSpelling { answer, .. } = s.round.challenge.clone() else {
            panic!("high quiz rounds are tile spelling");
        };
        spell(&mut s, &answer);
        assert_eq!(s.feedback, Feedback::Correct);
        s.tick();
    }
    assert!(s.finished);
    assert_eq!(s.log.len(), 10);
    assert_eq!(s.correct_count(), 10);
}

#[test]
fn wrong_picks_still_consume_all_ten_quiz_rounds() {
    let mut s = session(GameKind::Quiz(Difficulty::Beginner), 8);
    for _ in 0..10 {
        let target = s.round.target.symbol.clone();
        pick_wrong_choice(&mut s);
        assert_eq!(s.feedback, Feedback::Incorrect);
        let logged = s.log.last().unwrap();
        assert!(!logged.correct);
        assert_eq!(logged.expected, target);
        s.tick();
    }
    assert!(s.finished);
    assert_eq!(s.log.len(), 10);
    assert_eq!(s.correct_count(), 0);
}

#[test]
fn grouped_word_accepts_only_the_flat_concatenation() {
    // a minimal alphabet whose symbols cover "Rai-kutun"
    let catalog = Catalog::from_entries(vec![
        entry("R", "Rai-kutun"),
        entry("A", "Aat"),
        entry("I", "Inan"),
        entry("K", "Kuak"),
        entry("U", "Uat"),
        entry("T", "Tinta"),
        entry("N", "Nurak"),
    ])
    .unwrap();
    let mut s = with_catalog(catalog, GameKind::Speller, 21);

    // play until the compound word comes up
    let mut rounds = 0;
    while s.round.target.symbol != "R" {
        let Challenge::TileSpelling { answer, .. } = s.round.challenge.clone() else {
            panic!("speller rounds are tile spelling");
        };
        spell(&mut s, &answer);
        s.tick();
        rounds += 1;
        assert!(rounds < 500, "compound target never drawn");
    }

    let Challenge::TileSpelling { answer, bank } = s.round.challenge.clone() else {
        panic!("speller rounds are tile spelling");
    };
    assert_eq!(answer, "RAIKUTUN");
    assert!(!bank.contains(&'-'), "the separator is never a tile");

    // a complete but rearranged answer is wrong and the bank survives for retry
    let rotated: String = {
        let mut cs: Vec<char> = answer.chars().collect();
        cs.rotate_left(1);
        cs.into_iter().collect()
    };
    spell(&mut s, &rotated);
    assert_eq!(s.feedback, Feedback::Incorrect);
    s.tick();
    assert_eq!(s.round.target.symbol, "R");
    let Challenge::TileSpelling { bank: bank_after, .. } = s.round.challenge.clone() else {
        panic!("speller rounds are tile spelling");
    };
    assert_eq!(bank_after, bank, "retry keeps the same bank");
    assert!(s.picked.is_empty());

    // the concatenation, picked in arbitrary slot order, is the one right answer
    spell(&mut s, "RAIKUTUN");
    assert_eq!(s.feedback, Feedback::Correct);
    s.tick();
    assert_ne!(s.round.target.symbol, "R");
}

#[test]
fn restart_after_a_finished_quiz_resamples_the_targets() {
    let mut s = session(GameKind::Quiz(Difficulty::Beginner), 13);
    let mut first_targets = Vec::new();
    for _ in 0..10 {
        first_targets.push(s.round.target.symbol.clone());
        let target = s.round.target.symbol.clone();
        s.select_choice(&target);
        s.tick();
    }
    assert!(s.finished);

    s.reset();
    assert!(!s.finished);
    assert_eq!(s.round_index, 0);
    assert!(s.log.is_empty());

    let mut second_targets = Vec::new();
    for _ in 0..10 {
        second_targets.push(s.round.target.symbol.clone());
        let target = s.round.target.symbol.clone();
        s.select_choice(&target);
        s.tick();
    }
    assert!(s.finished);
    assert_eq!(second_targets.len(), 10);

    // both runs drew 10 distinct targets
    for run in [&first_targets, &second_targets] {
        let mut deduped = run.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 10);
    }
}

#[test]
fn practice_never_finishes_and_never_logs_misses() {
    let mut s = session(GameKind::Practice(Difficulty::Medium), 2);
    for _ in 0..30 {
        pick_wrong_choice(&mut s);
        s.tick();
    }
    assert!(!s.finished);
    assert_eq!(s.round_index, 0);
    assert!(s.log.is_empty());

    let target = s.round.target.symbol.clone();
    s.select_choice(&target);
    s.tick();
    assert_eq!(s.round_index, 1);
    assert_eq!(s.log.len(), 1);
}
