use crate::app::App;
use crate::engine::session::Session;
use crate::ui::round;
use crate::ui::utils::{centered_band, render_footer, render_header};
use ratatui::layout::Alignment;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App, session: &Session) {
    let streak = session.log.iter().rev().take_while(|e| e.correct).count();
    let status = format!(
        "speller · loos {}/{} · streak {}",
        session.correct_count(),
        session.log.len(),
        streak
    );
    render_header(f, app, &status);

    let lines = vec![
        round::prompt_line(&app.theme, session),
        Line::default(),
        round::slot_line(&app.theme, session),
        Line::default(),
        round::bank_line(&app.theme, session, app.bank_cursor),
        Line::default(),
        round::feedback_line(&app.theme, session),
    ];

    let band = centered_band(f, lines.len() as u16);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    render_footer(
        f,
        app,
        "←/→ enter: pick tile | enter: submit | backspace: undo | del: clear | tab: restart | esc: home",
    );
}
