use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// uniform permutation of a copy. the input is never mutated
pub fn shuffled<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// shuffle, then take the first n. a short input comes back whole,
/// never padded and never an error
pub fn sample<T: Clone>(items: &[T], n: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut out = shuffled(items, rng);
    out.truncate(n);
    out
}

/// count independent uniform draws from the alphabet, repeats allowed.
/// excluding the answer's own letters keeps the bank from handing out free
/// duplicates. when the exclusion would empty the pool the draw falls back
/// to the full alphabet, so the caller always gets count letters back
pub fn random_distractor_letters(
    alphabet: &[char],
    count: usize,
    exclude: &HashSet<char>,
    rng: &mut impl Rng,
) -> Vec<char> {
    let filtered: Vec<char> = alphabet
        .iter()
        .copied()
        .filter(|c| !exclude.contains(c))
        .collect();
    let pool: &[char] = if filtered.is_empty() { alphabet } else { &filtered };

    (0..count).filter_map(|_| pool.choose(rng).copied()).collect()
}
