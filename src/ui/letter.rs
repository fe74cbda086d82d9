use crate::app::App;
use crate::media;
use crate::ui::utils::{centered_band, hex_to_rgb, render_footer, render_header};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App) {
    let Some(entry) = app.catalog.by_index(app.open_letter) else {
        return;
    };
    render_header(f, app, &format!("letra {}", entry.symbol));

    let color_main = hex_to_rgb(&app.theme.main);
    let color_text = hex_to_rgb(&app.theme.text);
    let color_sub = hex_to_rgb(&app.theme.sub);
    let color_sub_alt = hex_to_rgb(&app.theme.sub_alt);

    // a missing or unresolvable image degrades to the glyph, never an error
    let image_line = match media::image_url(&entry.media) {
        Some(url) => format!("imajen: {}", url),
        None => "imajen: laiha".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            entry.media.fallback_glyph.clone(),
            Style::default().fg(color_main).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                entry.symbol.clone(),
                Style::default().fg(color_main).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  hanesan iha  ", Style::default().fg(color_sub)),
            Span::styled(
                entry.example_word.clone(),
                Style::default().fg(color_text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];

    if !entry.secondary_words.is_empty() {
        lines.push(Line::from(Span::styled(
            entry.secondary_words.join("  ·  "),
            Style::default().fg(color_sub),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        image_line,
        Style::default().fg(color_sub_alt),
    )));
    lines.push(Line::from(Span::styled(
        format!("audio: {}", media::audio_url(&entry.media)),
        Style::default().fg(color_sub_alt),
    )));

    let band = centered_band(f, lines.len() as u16);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    render_footer(f, app, "←/→: browse | esc: back");
}
