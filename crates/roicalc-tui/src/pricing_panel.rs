//! Pricing calculator panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use roicalc_core::format::{format_currency, format_number};
use roicalc_core::pricing::{Billing, Plan, PricingCalculator};

use crate::styles::ColorTheme;

/// Input rows, in selection order.
pub const PRICING_FIELDS: [&str; 3] = ["Plan", "Billing", "Seats"];

fn plan_row(current: Plan) -> String {
    Plan::ALL
        .iter()
        .map(|&plan| {
            if plan == current {
                format!("[{plan}]")
            } else {
                format!(" {plan} ")
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn billing_row(current: Billing) -> &'static str {
    match current {
        Billing::Monthly => "[monthly]  annual -20% ",
        Billing::Annual => " monthly  [annual -20%]",
    }
}

/// Render plan/billing/seat inputs and the quote.
///
/// `total_shown` is the animated billed amount.
pub fn render_pricing(
    frame: &mut Frame,
    area: Rect,
    calc: &PricingCalculator,
    selected: usize,
    total_shown: f64,
) {
    let theme = ColorTheme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let values = [
        plan_row(calc.plan),
        billing_row(calc.billing).to_string(),
        format_number(calc.seats.value()),
    ];
    let inputs: Vec<Line> = PRICING_FIELDS
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == selected {
                theme.selected_style()
            } else {
                theme.text_style()
            };
            Line::styled(format!(" {label:<8}{value:>30} "), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(inputs).block(Block::default().borders(Borders::ALL).title(" Plan ")),
        columns[0],
    );

    let q = calc.quote();
    let cycle = match q.billing {
        Billing::Annual => "yr",
        Billing::Monthly => "mo",
    };
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Total "),
            Span::styled(format_currency(total_shown), theme.figure_style()),
            Span::raw(format!(" / {cycle}")),
        ]),
        Line::default(),
        Line::raw(format!(
            "Price per seat  {} / mo",
            format_currency(q.price_per_seat)
        )),
        Line::raw(format!("Subtotal        {} / mo", format_currency(q.subtotal))),
    ];
    if q.savings > 0.0 {
        lines.push(Line::styled(
            format!("You save        {} / mo", format_currency(q.savings)),
            theme.figure_style(),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Quote ")),
        columns[1],
    );
}
