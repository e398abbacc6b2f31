//! AI search audit panel: domain entry, scan progress, and results.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use roicalc_core::flow::{AuditFlow, FlowStage};
use roicalc_core::format::format_number;
use roicalc_core::report::Report;

use crate::styles::ColorTheme;

/// Animated report figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditFigures {
    pub pages: i64,
    pub traffic_at_risk: i64,
}

/// Render whichever view matches the flow stage.
pub fn render_audit(frame: &mut Frame, area: Rect, flow: &AuditFlow, figures: AuditFigures) {
    match (flow.stage(), flow.report()) {
        (FlowStage::Input, _) => render_input(frame, area, flow.input()),
        (FlowStage::Scanning, _) => render_scanning(frame, area, flow),
        (FlowStage::Results, Some(report)) => render_results(frame, area, report, figures),
        (FlowStage::Results, None) => {}
    }
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let theme = ColorTheme::default();
    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::styled(input.to_string(), theme.text_style()),
            Span::styled("_", theme.key_style()),
        ]),
        Line::default(),
        Line::styled(
            "Enter a website to find where AI answer engines skip you.",
            theme.muted_style(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Domain ")),
        area,
    );
}

fn render_scanning(frame: &mut Frame, area: Rect, flow: &AuditFlow) {
    let theme = ColorTheme::default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Scanning {} ", flow.domain())),
        )
        .gauge_style(theme.figure_style())
        .ratio(f64::from(flow.progress()) / 100.0)
        .label(format!("{}%", flow.progress()));
    frame.render_widget(gauge, rows[0]);

    let steps: Vec<Line> = flow
        .steps()
        .iter()
        .enumerate()
        .map(|(i, label)| match i.cmp(&flow.step()) {
            std::cmp::Ordering::Less => Line::styled(format!(" ✓ {label}"), theme.muted_style()),
            std::cmp::Ordering::Equal => Line::styled(format!(" › {label}"), theme.header_style()),
            std::cmp::Ordering::Greater => Line::styled(format!("   {label}"), theme.muted_style()),
        })
        .collect();
    frame.render_widget(
        Paragraph::new(steps).block(Block::default().borders(Borders::ALL)),
        rows[1],
    );
}

fn render_results(frame: &mut Frame, area: Rect, report: &Report, figures: AuditFigures) {
    let theme = ColorTheme::default();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let summary = vec![
        Line::from(vec![
            Span::styled(format_number(figures.traffic_at_risk), theme.figure_style()),
            Span::raw(" visits / mo at risk"),
        ]),
        Line::default(),
        Line::raw(format!("Pages scanned       {}", format_number(figures.pages))),
        Line::raw(format!(
            "Missing AI content  {}",
            format_number(i64::from(report.missing_ai))
        )),
        Line::raw(format!("Content gaps        {}", report.gaps)),
        Line::raw(format!("AI citation rate    {}%", report.citation_rate)),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", report.domain)),
        ),
        columns[0],
    );

    let opportunities: Vec<Line> = report
        .opportunities
        .iter()
        .map(|o| {
            Line::from(vec![
                Span::styled(format!("{:<5}", o.severity.as_str()), theme.severity_style(o.severity)),
                Span::raw(format!(" {:<42}{:>4}", o.label, o.count)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(opportunities).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Opportunities "),
        ),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Duration;

    fn text(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn draw(flow: &AuditFlow, figures: AuditFigures) -> String {
        let backend = TestBackend::new(120, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| {
                let area = frame.area();
                render_audit(frame, area, flow, figures);
            })
            .unwrap();
        text(frame.buffer)
    }

    #[test]
    fn input_view_echoes_text() {
        let mut flow = AuditFlow::new();
        flow.set_input("airops.co");
        let content = draw(&flow, AuditFigures::default());
        assert!(content.contains("> airops.co_"));
    }

    #[test]
    fn scanning_view_shows_progress_and_step() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", Duration::ZERO).unwrap();
        flow.advance(Duration::from_millis(1_000));
        let content = draw(&flow, AuditFigures::default());
        assert!(content.contains("Scanning airops.com"));
        assert!(content.contains("25%"));
        assert!(content.contains("✓ Crawling sitemap"));
        assert!(content.contains("› Extracting page content"));
    }

    #[test]
    fn results_view_lists_opportunities() {
        let mut flow = AuditFlow::new();
        flow.analyze("airops.com", Duration::ZERO).unwrap();
        flow.advance(Duration::from_secs(10));
        let report = flow.report().unwrap();
        let figures = AuditFigures {
            pages: i64::from(report.pages),
            traffic_at_risk: i64::from(report.traffic_at_risk),
        };
        let content = draw(&flow, figures);
        assert!(content.contains("11,867 visits / mo at risk"));
        assert!(content.contains("Pages scanned       947"));
        assert!(content.contains("HIGH  Questions AI answers without citing you"));
        assert!(content.contains("LOW   Thin FAQ coverage"));
    }
}
