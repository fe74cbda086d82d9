use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use letra::app::App;
use letra::config::{AppConfig, Theme};
use letra::models::{Difficulty, GameKind};
use letra::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "letra")]
#[command(version)]
#[command(about = "Learn the Tetun alphabet in your terminal", long_about = None)]
// disable the default flags so they can be customized manually below
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
#[command(group(
    ArgGroup::new("mode")
        .required(false)
        .args(&["quiz", "practice", "spell"])
))]
struct Cli {
    /// Quiz mode: graded 10-round quiz ("beginner", "medium", "high")
    #[arg(short, long)]
    quiz: Option<String>,

    /// Practice mode: untimed multiple choice with free retry
    #[arg(short, long)]
    practice: Option<String>,

    /// Alphabet: embedded alphabet file to use (e.g. "tetun")
    #[arg(short, long, default_value = "tetun")]
    alphabet: String,

    /// Seed the session's randomness for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Speller mode: spell example words from a letter bank
    #[arg(short, long, default_value_t = false, help_heading = "Flags")]
    spell: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

fn parse_difficulty(raw: &str) -> Difficulty {
    match raw.to_lowercase().as_str() {
        "medium" | "m" => Difficulty::Medium,
        "high" | "h" => Difficulty::High,
        _ => Difficulty::Beginner,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        AppConfig {
            theme: Theme::default(),
        }
    });

    let start = if let Some(q) = cli.quiz {
        Some(GameKind::Quiz(parse_difficulty(&q)))
    } else if let Some(p) = cli.practice {
        Some(GameKind::Practice(parse_difficulty(&p)))
    } else if cli.spell {
        Some(GameKind::Speller)
    } else {
        None
    };

    // a broken catalog should fail here, before the terminal is taken over
    let mut app = App::new(cli.alphabet, start, cli.seed, app_config.theme)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        terminal.draw(|f| ui::render(f, app))?;
        app.tick();

        if event::poll(std::time::Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code, key.modifiers);
                    }
                }
                Event::Resize(w, h) => {
                    app.resize(w, h);
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
