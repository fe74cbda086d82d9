use crate::app::App;
use crate::engine::session::Session;
use crate::models::{Challenge, GameKind};
use crate::ui::round;
use crate::ui::utils::{centered_band, render_footer, render_header};
use ratatui::layout::Alignment;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App, session: &Session) {
    let status = match (session.kind, session.round_limit()) {
        (GameKind::Quiz(d), Some(limit)) => {
            format!("quiz {} · {}/{}", d.label(), session.round_index + 1, limit)
        }
        (GameKind::Practice(d), _) => format!("practice {}", d.label()),
        _ => String::new(),
    };
    render_header(f, app, &status);

    let mut lines = vec![round::prompt_line(&app.theme, session), Line::default()];
    match &session.round.challenge {
        Challenge::MultipleChoice { .. } => {
            lines.extend(round::choice_lines(&app.theme, session));
        }
        Challenge::TileSpelling { .. } => {
            lines.push(round::slot_line(&app.theme, session));
            lines.push(Line::default());
            lines.push(round::bank_line(&app.theme, session, app.bank_cursor));
        }
    }
    lines.push(Line::default());
    lines.push(round::feedback_line(&app.theme, session));

    let band = centered_band(f, lines.len() as u16);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    let hint = match &session.round.challenge {
        Challenge::MultipleChoice { .. } => {
            "1-4: pick | b/m/h: difficulty | tab: restart | esc: home"
        }
        Challenge::TileSpelling { .. } => {
            "←/→ enter: pick tile | enter: submit | backspace: undo | del: clear | tab: restart | esc: home"
        }
    };
    render_footer(f, app, hint);
}
