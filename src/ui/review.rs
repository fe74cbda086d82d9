use crate::app::App;
use crate::engine::session::Session;
use crate::ui::utils::{centered_band, hex_to_rgb, render_footer, render_header};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// end-of-quiz summary, built entirely from the result log
pub fn draw(f: &mut Frame, app: &App, session: &Session) {
    render_header(f, app, "rezultadu");

    let color_main = hex_to_rgb(&app.theme.main);
    let color_sub = hex_to_rgb(&app.theme.sub);
    let color_text = hex_to_rgb(&app.theme.text);
    let color_correct = hex_to_rgb(&app.theme.correct);
    let color_error = hex_to_rgb(&app.theme.error);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("score ", Style::default().fg(color_sub)),
            Span::styled(
                format!("{}/{}", session.correct_count(), session.log.len()),
                Style::default()
                    .fg(color_main)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ]),
        Line::default(),
    ];

    for entry in &session.log {
        let (marker, marker_color) = if entry.correct {
            ("✓", color_correct)
        } else {
            ("✗", color_error)
        };
        let mut spans = vec![
            Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
            Span::styled(
                format!("{:<3}", entry.symbol),
                Style::default().fg(color_text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.word.clone(), Style::default().fg(color_sub)),
        ];
        if !entry.correct {
            spans.push(Span::styled(
                format!("  → {}", entry.given),
                Style::default().fg(color_error),
            ));
        }
        lines.push(Line::from(spans));
    }

    let height = (lines.len() as u16).min(f.area().height.saturating_sub(4));
    let band = centered_band(f, height);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    render_footer(f, app, "enter/tab: play again | esc: home");
}
