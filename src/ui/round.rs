use crate::config::Theme;
use crate::engine::session::Session;
use crate::models::{Challenge, Feedback};
use crate::ui::utils::hex_to_rgb;
use crate::utils::words;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// the prompt every round opens with: the letter's glyph, big and bold
pub fn prompt_line(theme: &Theme, session: &Session) -> Line<'static> {
    let target = &session.round.target;
    Line::from(vec![
        Span::styled(
            target.media.fallback_glyph.clone(),
            Style::default()
                .fg(hex_to_rgb(&theme.main))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  letra {}", target.symbol),
            Style::default().fg(hex_to_rgb(&theme.sub)),
        ),
    ])
}

/// one line per choice card, numbered by its selection key. once feedback
/// shows, the target turns green and a wrong selection turns red
pub fn choice_lines(theme: &Theme, session: &Session) -> Vec<Line<'static>> {
    let Challenge::MultipleChoice { choices } = &session.round.challenge else {
        return Vec::new();
    };

    let color_text = hex_to_rgb(&theme.text);
    let color_sub = hex_to_rgb(&theme.sub);
    let color_correct = hex_to_rgb(&theme.correct);
    let color_error = hex_to_rgb(&theme.error);
    let revealing = session.feedback != Feedback::None;

    choices
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_target = entry.symbol == session.round.target.symbol;
            let is_selected = session.selected.as_deref() == Some(entry.symbol.as_str());

            let symbol_style = if revealing && is_target {
                Style::default().fg(color_correct).add_modifier(Modifier::BOLD)
            } else if revealing && is_selected {
                Style::default().fg(color_error).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color_text).add_modifier(Modifier::BOLD)
            };

            Line::from(vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(color_sub)),
                Span::styled(entry.symbol.clone(), symbol_style),
            ])
        })
        .collect()
}

/// the answer slots, grouped the way the raw word is written: "Rai-kutun"
/// shows two slot groups but fills as one string
pub fn slot_line(theme: &Theme, session: &Session) -> Line<'static> {
    let Challenge::TileSpelling { .. } = &session.round.challenge else {
        return Line::default();
    };

    let picked: Vec<char> = session.picked.iter().map(|p| p.ch).collect();
    let color_text = hex_to_rgb(&theme.text);
    let color_sub = hex_to_rgb(&theme.sub);

    let mut spans = Vec::new();
    for (gi, group) in words::word_groups(&session.round.target.example_word)
        .iter()
        .enumerate()
    {
        if gi > 0 {
            spans.push(Span::raw("   "));
        }
        for (ci, _) in group.text.chars().enumerate() {
            let pos = group.offset + ci;
            match picked.get(pos) {
                Some(c) => spans.push(Span::styled(
                    format!("{} ", c),
                    Style::default().fg(color_text).add_modifier(Modifier::BOLD),
                )),
                None => spans.push(Span::styled("_ ", Style::default().fg(color_sub))),
            }
        }
    }
    Line::from(spans)
}

/// the shuffled bank. the cursor slot is highlighted, spent slots dim out
pub fn bank_line(theme: &Theme, session: &Session, bank_cursor: usize) -> Line<'static> {
    let Challenge::TileSpelling { bank, .. } = &session.round.challenge else {
        return Line::default();
    };

    let color_text = hex_to_rgb(&theme.text);
    let color_used = hex_to_rgb(&theme.sub_alt);
    let color_cursor_bg = hex_to_rgb(&theme.main);
    let color_cursor_fg = hex_to_rgb(&theme.bg);

    let mut spans = Vec::new();
    for (slot, c) in bank.iter().enumerate() {
        let style = if session.slot_used(slot) {
            Style::default().fg(color_used)
        } else if slot == bank_cursor {
            Style::default().bg(color_cursor_bg).fg(color_cursor_fg)
        } else {
            Style::default().fg(color_text)
        };
        spans.push(Span::styled(format!(" {} ", c), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// "Loos!" or "Sala!", revealing the word; empty while the round is open
pub fn feedback_line(theme: &Theme, session: &Session) -> Line<'static> {
    let word = session.round.target.example_word.clone();
    match session.feedback {
        Feedback::None => Line::default(),
        Feedback::Correct => Line::from(Span::styled(
            format!("Loos! ✓  {}", word),
            Style::default()
                .fg(hex_to_rgb(&theme.correct))
                .add_modifier(Modifier::BOLD),
        )),
        Feedback::Incorrect => Line::from(Span::styled(
            format!("Sala! ✗  {}", word),
            Style::default()
                .fg(hex_to_rgb(&theme.error))
                .add_modifier(Modifier::BOLD),
        )),
    }
}
