//! CLI output formatting.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use roicalc_core::format::{format_currency, format_money, format_number, format_signed_percent};
use roicalc_core::pricing::{Billing, PricingQuote};
use roicalc_core::report::Report;
use roicalc_core::roi::{RoiBreakdown, RoiInputs};

/// Lines describing an ROI breakdown.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn roi_lines(inputs: &RoiInputs, breakdown: &RoiBreakdown) -> Vec<String> {
    vec![
        format!("Content pieces / mo: {}", format_number(inputs.content_pieces)),
        format!("Team size: {}", format_number(inputs.team_size)),
        format!("Avg customer value: {}", format_money(inputs.avg_customer_value as f64)),
        format!("Monthly traffic: {}", format_number(inputs.monthly_traffic)),
        String::new(),
        format!("Hours saved / mo: {}", format_number(breakdown.hours_saved)),
        format!("Traffic lift: +{}%", breakdown.traffic_lift_percent),
        format!("New customers / yr: {}", format_number(breakdown.new_customers_per_year)),
        format!("Revenue impact: {}", format_money(breakdown.revenue_impact as f64)),
        format!("Annual cost: -{}", format_money(breakdown.annual_cost as f64)),
        format!("Net return: {}", format_money(breakdown.net_return as f64)),
        format!("ROI: {}", format_signed_percent(breakdown.roi)),
    ]
}

/// Lines describing a pricing quote.
#[must_use]
pub fn pricing_lines(quote: &PricingQuote) -> Vec<String> {
    let cycle = match quote.billing {
        Billing::Annual => "yr",
        Billing::Monthly => "mo",
    };
    let mut lines = vec![
        format!("Plan: {} ({})", quote.plan, quote.billing),
        format!("Seats: {}", format_number(quote.seats)),
        format!("Price per seat: {} / mo", format_currency(quote.price_per_seat)),
        format!("Subtotal: {} / mo", format_currency(quote.subtotal)),
        format!("Total: {} / {cycle}", format_currency(quote.total)),
    ];
    if quote.savings > 0.0 {
        lines.push(format!("You save: {} / mo", format_currency(quote.savings)));
    }
    lines
}

/// Lines describing an audit report.
#[must_use]
pub fn report_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![
        format!("Domain: {}", report.domain),
        format!("Pages scanned: {}", format_number(i64::from(report.pages))),
        format!("Missing AI-ready content: {}", format_number(i64::from(report.missing_ai))),
        format!("Content gaps: {}", report.gaps),
        format!(
            "Traffic at risk: {} / mo",
            format_number(i64::from(report.traffic_at_risk))
        ),
        format!("AI citation rate: {}%", report.citation_rate),
        String::new(),
        "Opportunities:".to_string(),
    ];
    lines.extend(report.opportunities.iter().map(|o| {
        format!("  {:<6} {:<42} {:>4}", format!("[{}]", o.severity), o.label, o.count)
    }));
    lines
}

/// JSON document for an ROI result.
#[must_use]
pub fn roi_document(inputs: &RoiInputs, breakdown: &RoiBreakdown) -> Value {
    json!({ "calculator": "roi", "inputs": inputs, "result": breakdown })
}

/// JSON document for a pricing quote.
#[must_use]
pub fn pricing_document(quote: &PricingQuote) -> Value {
    json!({ "calculator": "pricing", "result": quote })
}

/// JSON document for an audit report.
#[must_use]
pub fn report_document(report: &Report) -> Value {
    json!({ "calculator": "audit", "result": report })
}

/// Write any result as pretty JSON to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_json_to_file<T: Serialize>(path: &str, value: &T) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    writeln!(file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roicalc_core::pricing::{quote, Plan};
    use roicalc_core::report::derive_report;
    use roicalc_core::roi::derive_roi;

    #[test]
    fn roi_lines_reference_inputs() {
        let inputs = RoiInputs {
            content_pieces: 40,
            team_size: 5,
            avg_customer_value: 5_000,
            monthly_traffic: 50_000,
        };
        let lines = roi_lines(&inputs, &derive_roi(&inputs));
        assert!(lines.contains(&"Hours saved / mo: 108".to_string()));
        assert!(lines.contains(&"Traffic lift: +18%".to_string()));
        assert!(lines.contains(&"New customers / yr: 1,620".to_string()));
        assert!(lines.contains(&"Revenue impact: $8.1M".to_string()));
        assert!(lines.contains(&"Annual cost: -$2K".to_string()));
        assert!(lines.contains(&"ROI: +346,054%".to_string()));
    }

    #[test]
    fn pricing_lines_annual_shows_savings() {
        let lines = pricing_lines(&quote(Plan::Pro, Billing::Annual, 5));
        assert_eq!(lines[0], "Plan: pro (annual)");
        assert!(lines.contains(&"Price per seat: $31.20 / mo".to_string()));
        assert!(lines.contains(&"Total: $1,872.00 / yr".to_string()));
        assert!(lines.contains(&"You save: $39.00 / mo".to_string()));
    }

    #[test]
    fn pricing_lines_monthly_no_savings() {
        let lines = pricing_lines(&quote(Plan::Starter, Billing::Monthly, 1));
        assert!(!lines.iter().any(|l| l.starts_with("You save")));
        assert!(lines.contains(&"Total: $15.00 / mo".to_string()));
    }

    #[test]
    fn report_lines_list_opportunities() {
        let lines = report_lines(&derive_report("airops.com"));
        assert_eq!(lines[0], "Domain: airops.com");
        assert!(lines.contains(&"Pages scanned: 947".to_string()));
        assert!(lines.contains(&"Traffic at risk: 11,867 / mo".to_string()));
        assert!(lines.contains(&"AI citation rate: 17%".to_string()));
        let opp = lines.iter().find(|l| l.contains("Thin FAQ coverage")).unwrap();
        assert!(opp.contains("[LOW]"));
        assert!(opp.trim_end().ends_with('6'));
    }

    #[test]
    fn documents_tag_calculator() {
        let q = quote(Plan::Pro, Billing::Annual, 5);
        let doc = pricing_document(&q);
        assert_eq!(doc["calculator"], "pricing");
        assert_eq!(doc["result"]["plan"], "pro");
        assert_eq!(doc["result"]["billing"], "annual");
        let total = doc["result"]["total"].as_f64().unwrap();
        assert!((total - 1872.0).abs() < 1e-9);

        let doc = report_document(&derive_report("airops.com"));
        assert_eq!(doc["result"]["opportunities"][0]["severity"], "HIGH");
        assert_eq!(doc["result"]["opportunities"][0]["count"], 45);
    }

    #[test]
    fn write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let path = path.to_str().unwrap();
        write_json_to_file(path, &derive_report("example.com")).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["pages"], 699);
    }

    #[test]
    fn write_json_bad_path_errors() {
        assert!(write_json_to_file("/nonexistent/dir/out.json", &1).is_err());
    }
}
