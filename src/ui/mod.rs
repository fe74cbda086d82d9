pub mod home;
pub mod letter;
pub mod review;
pub mod round;
pub mod quiz;
pub mod speller;
pub mod utils;

use crate::app::{App, Screen};
use crate::models::GameKind;
use crate::ui::utils::hex_to_rgb;
use ratatui::{style::Style, widgets::Block, Frame};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    match app.screen {
        Screen::Home => home::draw(f, app),
        Screen::Letter => letter::draw(f, app),
        Screen::Game => match &app.session {
            Some(session) if session.finished => review::draw(f, app, session),
            Some(session) => match session.kind {
                GameKind::Speller => speller::draw(f, app, session),
                _ => quiz::draw(f, app, session),
            },
            None => home::draw(f, app),
        },
    }
}
