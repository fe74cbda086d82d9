use crate::app::{App, GRID_CELL_WIDTH};
use crate::ui::utils::{centered_band, hex_to_rgb, render_footer, render_header};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App) {
    render_header(f, app, "alfabetu");

    let cols = app.grid_cols();
    let letters = app.catalog.all();
    let rows = letters.len().div_ceil(cols);

    let color_text = hex_to_rgb(&app.theme.text);
    let color_cursor_bg = hex_to_rgb(&app.theme.main);
    let color_cursor_fg = hex_to_rgb(&app.theme.bg);
    let color_sub = hex_to_rgb(&app.theme.sub);

    let mut lines = Vec::new();
    for row in 0..rows {
        let mut spans = Vec::new();
        for col in 0..cols {
            let i = row * cols + col;
            let Some(entry) = letters.get(i) else {
                break;
            };
            let cell = format!("{:^width$}", entry.symbol, width = GRID_CELL_WIDTH);
            let style = if i == app.cursor {
                Style::default()
                    .bg(color_cursor_bg)
                    .fg(color_cursor_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color_text)
            };
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // the word the highlighted letter teaches
    if let Some(entry) = letters.get(app.cursor) {
        lines.push(Line::from(Span::styled(
            format!("{}  {}", entry.media.fallback_glyph, entry.example_word),
            Style::default().fg(color_sub),
        )));
    }

    let height = (lines.len() as u16).min(f.area().height.saturating_sub(4));
    let band = centered_band(f, height);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), band);

    render_footer(
        f,
        app,
        "enter: open letter | b/m/h: quiz | s: speller | p: practice | esc: quit",
    );
}
