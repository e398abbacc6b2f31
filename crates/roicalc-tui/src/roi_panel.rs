//! ROI calculator panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use roicalc_core::format::{format_money, format_number, format_signed_percent};
use roicalc_core::roi::RoiCalculator;

use crate::styles::ColorTheme;

/// Input rows, in selection order.
pub const ROI_FIELDS: [&str; 4] = [
    "Content pieces / mo",
    "Team size",
    "Avg customer value",
    "Monthly traffic",
];

/// Values shown for [`ROI_FIELDS`].
#[must_use]
pub fn field_values(calc: &RoiCalculator) -> [String; 4] {
    [
        format_number(calc.content_pieces.value()),
        format_number(calc.team_size.value()),
        format!("${}", format_number(calc.avg_customer_value.value())),
        format_number(calc.monthly_traffic.value()),
    ]
}

/// Render inputs on the left and derived figures on the right.
///
/// `roi_shown` and `revenue_shown` are the animated headline values; the
/// remaining figures are drawn at their settled values.
#[allow(clippy::cast_precision_loss)]
pub fn render_roi(
    frame: &mut Frame,
    area: Rect,
    calc: &RoiCalculator,
    selected: usize,
    roi_shown: i64,
    revenue_shown: f64,
) {
    let theme = ColorTheme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let inputs: Vec<Line> = ROI_FIELDS
        .iter()
        .zip(field_values(calc))
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == selected {
                theme.selected_style()
            } else {
                theme.text_style()
            };
            Line::styled(format!(" {label:<22}{value:>16} "), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(inputs).block(Block::default().borders(Borders::ALL).title(" Inputs ")),
        columns[0],
    );

    let b = calc.breakdown();
    let results = vec![
        Line::from(vec![
            Span::raw("ROI "),
            Span::styled(format_signed_percent(roi_shown), theme.figure_style()),
        ]),
        Line::from(vec![
            Span::styled(format_money(revenue_shown), theme.figure_style()),
            Span::raw(" projected revenue impact"),
        ]),
        Line::default(),
        Line::raw(format!("Hours saved / mo    {}", format_number(b.hours_saved))),
        Line::raw(format!("Traffic lift        +{}%", b.traffic_lift_percent)),
        Line::raw(format!(
            "New customers / yr  {}",
            format_number(b.new_customers_per_year)
        )),
        Line::raw(format!("Annual cost         -{}", format_money(b.annual_cost as f64))),
        Line::raw(format!("Net return          {}", format_money(b.net_return as f64))),
    ];
    frame.render_widget(
        Paragraph::new(results).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Estimated annual ROI "),
        ),
        columns[1],
    );
}
