use crate::catalog::Catalog;
use crate::engine::round;
use crate::models::{
    Challenge, Feedback, GameKind, LetterEntry, ResultLogEntry, RoundSpec, TilePick,
};
use crate::utils::random;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::{Duration, Instant};

/// how long right/wrong feedback stays on screen before the session moves on
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(900);

/// one play-through: a sequence of rounds, the in-progress answer, and the
/// accumulated result log. every transition is a no-op when called in a
/// state it doesn't apply to; misuse never errors
pub struct Session {
    pub kind: GameKind,
    pub round_index: usize,
    pub round: RoundSpec,
    /// tile picks in order, keyed by bank slot so duplicate letters work
    pub picked: Vec<TilePick>,
    /// the one multiple-choice selection allowed per round
    pub selected: Option<String>,
    pub feedback: Feedback,
    pub log: Vec<ResultLogEntry>,
    pub finished: bool,
    pub feedback_delay: Duration,

    catalog: Catalog,
    /// the quiz draws its whole target sequence up front; unbounded kinds
    /// leave this empty and draw per round
    targets: Vec<usize>,
    /// pending advance deadline. clearing it is what cancels a stale
    /// advance when the session resets mid-feedback
    advance_at: Option<Instant>,
    rng: StdRng,
}

impl Session {
    /// the catalog is validated at load time, so a session always starts
    /// from at least one usable entry
    pub fn new(catalog: Catalog, kind: GameKind, rng: StdRng) -> Self {
        let placeholder = RoundSpec {
            target: catalog.all()[0].clone(),
            challenge: Challenge::MultipleChoice { choices: Vec::new() },
        };
        let mut session = Self {
            kind,
            round_index: 0,
            round: placeholder,
            picked: Vec::new(),
            selected: None,
            feedback: Feedback::None,
            log: Vec::new(),
            finished: false,
            feedback_delay: FEEDBACK_DELAY,
            catalog,
            targets: Vec::new(),
            advance_at: None,
            rng,
        };
        session.reset();
        session
    }

    /// callable from any state. cancels a pending advance, clears the log
    /// and the in-progress answer, and redraws the target sequence
    pub fn reset(&mut self) {
        self.advance_at = None;
        self.round_index = 0;
        self.log.clear();
        self.picked.clear();
        self.selected = None;
        self.feedback = Feedback::None;
        self.finished = false;

        self.targets = match self.kind.round_limit() {
            Some(limit) => {
                let indices: Vec<usize> = (0..self.catalog.len()).collect();
                random::sample(&indices, limit, &mut self.rng)
            }
            None => Vec::new(),
        };
        let first = match self.targets.first() {
            Some(&i) => self.catalog.all()[i].clone(),
            None => {
                let i = self.rng.random_range(0..self.catalog.len());
                self.catalog.all()[i].clone()
            }
        };
        self.round = self.make_round(&first);
    }

    /// switching difficulty or game mid-session starts over
    pub fn switch_kind(&mut self, kind: GameKind) {
        self.kind = kind;
        self.reset();
    }

    /// quiz sessions run exactly as many rounds as targets were drawn
    pub fn round_limit(&self) -> Option<usize> {
        match self.kind {
            GameKind::Quiz(_) => Some(self.targets.len()),
            GameKind::Practice(_) | GameKind::Speller => None,
        }
    }

    /// multiple choice only, one selection per round. a graded session logs
    /// both outcomes; ungraded play logs only a hit and lets a miss retry
    pub fn select_choice(&mut self, symbol: &str) {
        if self.finished || self.feedback != Feedback::None || self.selected.is_some() {
            return;
        }
        let Challenge::MultipleChoice { choices } = &self.round.challenge else {
            return;
        };
        if !choices.iter().any(|e| e.symbol == symbol) {
            return;
        }

        let correct = symbol == self.round.target.symbol;
        self.selected = Some(symbol.to_string());
        self.feedback = if correct { Feedback::Correct } else { Feedback::Incorrect };
        if self.kind.graded() || correct {
            self.push_log(symbol.to_string(), self.round.target.symbol.clone(), correct);
        }
        self.advance_at = Some(Instant::now() + self.feedback_delay);
    }

    /// takes the tile in the given bank slot, if that slot is still free
    /// and the answer has room
    pub fn pick_tile(&mut self, slot: usize) {
        if self.finished || self.feedback != Feedback::None {
            return;
        }
        let Challenge::TileSpelling { bank, answer } = &self.round.challenge else {
            return;
        };
        if self.picked.len() >= answer.chars().count()
            || slot >= bank.len()
            || self.picked.iter().any(|p| p.slot == slot)
        {
            return;
        }
        self.picked.push(TilePick { ch: bank[slot], slot });
    }

    pub fn backspace(&mut self) {
        if self.finished || self.feedback != Feedback::None {
            return;
        }
        self.picked.pop();
    }

    pub fn clear(&mut self) {
        if self.finished || self.feedback != Feedback::None {
            return;
        }
        self.picked.clear();
    }

    /// tile spelling only, and only once the answer is complete. every
    /// submit is logged; whether it consumes the round depends on grading
    pub fn submit(&mut self) {
        if self.finished || self.feedback != Feedback::None {
            return;
        }
        let Challenge::TileSpelling { answer, .. } = &self.round.challenge else {
            return;
        };
        if self.picked.len() != answer.chars().count() {
            return;
        }

        let expected = answer.clone();
        let given = self.picked_word();
        let correct = given == expected;
        self.feedback = if correct { Feedback::Correct } else { Feedback::Incorrect };
        self.push_log(given, expected, correct);
        self.advance_at = Some(Instant::now() + self.feedback_delay);
    }

    /// the in-progress answer as typed so far
    pub fn picked_word(&self) -> String {
        self.picked.iter().map(|p| p.ch).collect()
    }

    pub fn slot_used(&self, slot: usize) -> bool {
        self.picked.iter().any(|p| p.slot == slot)
    }

    pub fn correct_count(&self) -> usize {
        self.log.iter().filter(|e| e.correct).count()
    }

    /// drives the feedback delay. called from the event loop every frame,
    /// it fires the pending advance once the deadline passes
    pub fn tick(&mut self) {
        if let Some(at) = self.advance_at {
            if Instant::now() >= at {
                self.advance_at = None;
                self.resolve_feedback();
            }
        }
    }

    /// a graded round is consumed either way. ungraded play only moves on
    /// from a hit; a miss wipes the selection and offers the same round again
    fn resolve_feedback(&mut self) {
        let correct = self.feedback == Feedback::Correct;
        if self.kind.graded() || correct {
            self.advance();
        } else {
            self.selected = None;
            self.picked.clear();
            self.feedback = Feedback::None;
        }
    }

    fn advance(&mut self) {
        self.selected = None;
        self.picked.clear();
        self.feedback = Feedback::None;

        if let Some(limit) = self.round_limit() {
            if self.round_index + 1 >= limit {
                self.finished = true;
                return;
            }
        }
        self.round_index += 1;
        let target = self.next_target();
        self.round = self.make_round(&target);
    }

    fn next_target(&mut self) -> LetterEntry {
        if let Some(&i) = self.targets.get(self.round_index) {
            return self.catalog.all()[i].clone();
        }
        // unbounded kinds draw fresh each round, skipping the symbol just played
        let prev = &self.round.target.symbol;
        let pool: Vec<&LetterEntry> = self
            .catalog
            .all()
            .iter()
            .filter(|e| &e.symbol != prev)
            .collect();
        if pool.is_empty() {
            return self.round.target.clone();
        }
        let i = self.rng.random_range(0..pool.len());
        pool[i].clone()
    }

    fn make_round(&mut self, target: &LetterEntry) -> RoundSpec {
        match self.kind {
            GameKind::Quiz(d) | GameKind::Practice(d) => {
                round::generate_round(&self.catalog, target, d, &mut self.rng)
            }
            GameKind::Speller => {
                round::generate_speller_round(&self.catalog, target, &mut self.rng)
            }
        }
    }

    fn push_log(&mut self, given: String, expected: String, correct: bool) {
        self.log.push(ResultLogEntry {
            difficulty: self.kind.difficulty(),
            mode: self.round.mode(),
            symbol: self.round.target.symbol.clone(),
            word: self.round.target.example_word.clone(),
            given,
            expected,
            correct,
        });
    }
}
