use crate::app::App;
use ratatui::style::Color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn hex_to_rgb(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    } else {
        Color::White
    }
}

pub fn render_header(f: &mut Frame, app: &App, subtitle: &str) {
    let mut header_spans = vec![Span::styled(
        "letra",
        Style::default()
            .fg(hex_to_rgb(&app.theme.main))
            .add_modifier(ratatui::style::Modifier::BOLD),
    )];
    if !subtitle.is_empty() {
        header_spans.push(Span::styled(
            format!(" | {}", subtitle),
            Style::default().fg(hex_to_rgb(&app.theme.sub)),
        ));
    }

    let header_row_area = Rect::new(0, 1, f.area().width, 1);
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(82),
            Constraint::Fill(1),
        ])
        .split(header_row_area);

    f.render_widget(Paragraph::new(Line::from(header_spans)), header_layout[1]);
}

pub fn render_footer(f: &mut Frame, app: &App, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(hex_to_rgb(&app.theme.sub_alt)))
        .alignment(Alignment::Center);
    f.render_widget(
        footer,
        Rect::new(0, f.area().height.saturating_sub(1), f.area().width, 1),
    );
}

/// centers a content band of the given height, 82% wide like the header
pub fn centered_band(f: &Frame, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(f.area());

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(82),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}
