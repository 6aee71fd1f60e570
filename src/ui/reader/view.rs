use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::anchor::{start_column, AnchoredWord};
use crate::app::{App, DisplayItem, RenderState};
use crate::engine::Scheduler;
use crate::reading::Word;
use crate::ui::theme::Theme;

const BREAK_MARK: &str = "¶";
const READY_TEXT: &str = "Ready";

fn word_style(word: &Word, theme: &Theme) -> Style {
    let mut style = Style::default().fg(if word.heading.is_some() {
        theme.heading
    } else {
        theme.text
    });
    if word.emphasis.bold || word.heading.is_some() {
        style = style.add_modifier(Modifier::BOLD);
    }
    if word.emphasis.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    style
}

/// The word area line: the current word shifted so its anchor letter sits
/// in the middle column of `width`.
pub fn render_word_line(item: &DisplayItem, theme: &Theme, width: u16) -> Line<'static> {
    match item {
        DisplayItem::Word(word) => {
            let anchored = AnchoredWord::split(&word.text);
            let padding = " ".repeat(usize::from(start_column(&anchored, width)));
            let style = word_style(word, theme);
            Line::from(vec![
                Span::raw(padding),
                Span::styled(anchored.prefix.to_string(), style),
                Span::styled(
                    anchored.anchor.to_string(),
                    style.fg(theme.anchor).add_modifier(Modifier::BOLD),
                ),
                Span::styled(anchored.suffix.to_string(), style),
            ])
        }
        DisplayItem::Break => {
            Line::styled(BREAK_MARK, Style::default().fg(theme.dimmed)).alignment(Alignment::Center)
        }
        DisplayItem::Ready => {
            Line::styled(READY_TEXT, Style::default().fg(theme.dimmed)).alignment(Alignment::Center)
        }
    }
}

/// Bottom bar: play/pause indicator, rate, progress text and the latest
/// status message.
pub fn render_status_line(state: &RenderState, status: Option<&str>, theme: &Theme) -> Line<'static> {
    let indicator = if state.playing { "▶" } else { "⏸" };
    let mut spans = vec![
        Span::styled(format!(" {} ", indicator), Style::default().fg(theme.anchor)),
        Span::styled(format!("{} WPM", state.wpm), Style::default().fg(theme.text)),
    ];
    if !state.progress.is_empty() {
        spans.push(Span::styled(
            format!("  {}", state.progress),
            Style::default().fg(theme.text),
        ));
    }
    if let Some(message) = status {
        spans.push(Span::styled(
            format!("  {}", message),
            Style::default().fg(theme.dimmed),
        ));
    }
    Line::from(spans)
}

pub fn render_prompt_line(buffer: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("▌", Style::default().fg(theme.anchor)),
        Span::styled(buffer.to_string(), Style::default().fg(theme.text)),
    ])
}

/// Draws one frame of the reader.
pub fn draw<S: Scheduler>(frame: &mut Frame, app: &App<S>, prompt: Option<&str>, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let word_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(rows[0])[1];

    let state = app.render_state();
    frame.render_widget(
        Paragraph::new(render_word_line(&state.current, theme, word_area.width)),
        word_area,
    );
    frame.render_widget(
        Paragraph::new(render_status_line(state, app.status(), theme)),
        rows[1],
    );
    if let Some(buffer) = prompt {
        frame.render_widget(Paragraph::new(render_prompt_line(buffer, theme)), rows[2]);
    }
}
