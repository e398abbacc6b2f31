//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::keymap::KeyContext;
use crate::styles::ColorTheme;

/// Render keyboard hints, or `error` in their place.
pub fn render_footer(frame: &mut Frame, area: Rect, context: KeyContext, error: Option<&str>) {
    let theme = ColorTheme::default();
    let line = if let Some(error) = error {
        Line::from(Span::styled(format!("! {error}"), theme.error_style()))
    } else {
        let hints: &[(&str, &str)] = match context {
            KeyContext::Navigate => &[
                ("q", "quit"),
                ("tab", "switch"),
                ("↑↓", "select"),
                ("←→", "adjust"),
                ("m/a", "billing"),
                ("1-3", "plan"),
                ("^R", "reset"),
            ],
            KeyContext::TextEntry => &[
                ("esc", "quit"),
                ("tab", "switch"),
                ("enter", "analyze"),
                ("^R", "reset"),
            ],
        };
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (i, (key, label)) in hints.iter().enumerate() {
            spans.push(Span::styled(*key, theme.key_style()));
            let sep = if i + 1 < hints.len() { " | " } else { "" };
            spans.push(Span::raw(format!(": {label}{sep}")));
        }
        Line::from(spans)
    };

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
