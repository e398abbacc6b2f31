//! TUI header: calculator tabs.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use roicalc_core::calculator::CalculatorKind;

use crate::styles::ColorTheme;

/// Render the tab bar with `active` highlighted.
pub fn render_header(frame: &mut Frame, area: Rect, active: CalculatorKind) {
    let theme = ColorTheme::default();
    let titles = CalculatorKind::ALL.iter().map(|kind| kind.title());
    let selected = CalculatorKind::ALL
        .iter()
        .position(|&kind| kind == active)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(theme.muted_style())
        .highlight_style(theme.header_style())
        .select(selected)
        .divider(" | ");
    frame.render_widget(tabs, area);
}
