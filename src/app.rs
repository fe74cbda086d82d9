use crate::catalog::Catalog;
use crate::config::Theme;
use crate::engine::session::Session;
use crate::models::{Challenge, Difficulty, GameKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// home grid cell width in terminal columns
pub const GRID_CELL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Letter,
    Game,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub theme: Theme,
    pub catalog: Catalog,
    pub session: Option<Session>,

    /// home grid cursor (catalog index)
    pub cursor: usize,
    /// catalog index shown in the letter detail screen
    pub open_letter: usize,
    /// highlighted bank slot in tile rounds
    pub bank_cursor: usize,
    pub terminal_width: u16,

    seed: Option<u64>,
}

impl App {
    pub fn new(
        alphabet: String,
        start: Option<GameKind>,
        seed: Option<u64>,
        theme: Theme,
    ) -> Result<Self> {
        let catalog = Catalog::load(&alphabet)?;

        let mut app = Self {
            should_quit: false,
            screen: Screen::Home,
            theme,
            catalog,
            session: None,
            cursor: 0,
            open_letter: 0,
            bank_cursor: 0,
            terminal_width: 80,
            seed,
        };
        if let Some(kind) = start {
            app.start_game(kind);
        }
        Ok(app)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn resize(&mut self, width: u16, _height: u16) {
        self.terminal_width = width;
    }

    pub fn grid_cols(&self) -> usize {
        let usable = (self.terminal_width as usize * 80) / 100;
        (usable / GRID_CELL_WIDTH).clamp(1, 8)
    }

    pub fn start_game(&mut self, kind: GameKind) {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.session = Some(Session::new(self.catalog.clone(), kind, rng));
        self.bank_cursor = 0;
        self.screen = Screen::Game;
    }

    /// drives the session's feedback timer, called once per frame
    pub fn tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.tick();
        // the bank changes size between rounds, keep the cursor inside it
        let bank_len = match &session.round.challenge {
            Challenge::TileSpelling { bank, .. } => bank.len(),
            Challenge::MultipleChoice { .. } => 0,
        };
        if bank_len == 0 {
            self.bank_cursor = 0;
        } else if self.bank_cursor >= bank_len {
            self.bank_cursor = bank_len - 1;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, mods: KeyModifiers) {
        if code == KeyCode::Char('q') && mods.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }
        match self.screen {
            Screen::Home => self.handle_home_key(code),
            Screen::Letter => self.handle_letter_key(code),
            Screen::Game => self.handle_game_key(code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        let cols = self.grid_cols();
        let len = self.catalog.len();
        match code {
            KeyCode::Esc => self.quit(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(cols),
            KeyCode::Down => {
                if self.cursor + cols < len {
                    self.cursor += cols;
                }
            }
            KeyCode::Enter => {
                self.open_letter = self.cursor;
                self.screen = Screen::Letter;
            }
            KeyCode::Char('b') => self.start_game(GameKind::Quiz(Difficulty::Beginner)),
            KeyCode::Char('m') => self.start_game(GameKind::Quiz(Difficulty::Medium)),
            KeyCode::Char('h') => self.start_game(GameKind::Quiz(Difficulty::High)),
            KeyCode::Char('s') => self.start_game(GameKind::Speller),
            KeyCode::Char('p') => self.start_game(GameKind::Practice(Difficulty::Beginner)),
            _ => {}
        }
    }

    fn handle_letter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Home,
            KeyCode::Left => self.open_letter = self.open_letter.saturating_sub(1),
            KeyCode::Right => {
                if self.open_letter + 1 < self.catalog.len() {
                    self.open_letter += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if self.session.is_none() {
            self.screen = Screen::Home;
            return;
        }
        match code {
            KeyCode::Esc => {
                // dropping the session also drops any pending advance
                self.session = None;
                self.screen = Screen::Home;
                return;
            }
            KeyCode::Tab => {
                if let Some(session) = self.session.as_mut() {
                    session.reset();
                }
                self.bank_cursor = 0;
                return;
            }
            _ => {}
        }

        let bank_len = self
            .session
            .as_ref()
            .map(|s| match &s.round.challenge {
                Challenge::TileSpelling { bank, .. } => bank.len(),
                Challenge::MultipleChoice { .. } => 0,
            })
            .unwrap_or(0);
        match code {
            KeyCode::Left => {
                self.bank_cursor = self.bank_cursor.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                if bank_len > 0 && self.bank_cursor + 1 < bank_len {
                    self.bank_cursor += 1;
                }
                return;
            }
            _ => {}
        }

        let bank_cursor = self.bank_cursor;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.finished {
            if code == KeyCode::Enter {
                session.reset();
            }
            return;
        }
        match code {
            KeyCode::Char('b') => Self::switch_difficulty(session, Difficulty::Beginner),
            KeyCode::Char('m') => Self::switch_difficulty(session, Difficulty::Medium),
            KeyCode::Char('h') => Self::switch_difficulty(session, Difficulty::High),
            KeyCode::Char(c) if ('1'..='4').contains(&c) => {
                let idx = (c as u8 - b'1') as usize;
                let symbol = match &session.round.challenge {
                    Challenge::MultipleChoice { choices } => {
                        choices.get(idx).map(|e| e.symbol.clone())
                    }
                    Challenge::TileSpelling { .. } => None,
                };
                if let Some(symbol) = symbol {
                    session.select_choice(&symbol);
                }
            }
            KeyCode::Enter => {
                let required = session.round.required_len();
                if required > 0 && session.picked.len() == required {
                    session.submit();
                } else {
                    session.pick_tile(bank_cursor);
                }
            }
            KeyCode::Backspace => session.backspace(),
            KeyCode::Delete => session.clear(),
            _ => {}
        }
    }

    /// the speller has no difficulty to switch; quiz and practice restart
    /// at the new one
    fn switch_difficulty(session: &mut Session, difficulty: Difficulty) {
        match session.kind {
            GameKind::Quiz(_) => session.switch_kind(GameKind::Quiz(difficulty)),
            GameKind::Practice(_) => session.switch_kind(GameKind::Practice(difficulty)),
            GameKind::Speller => {}
        }
    }
}
