//! Result presenters: human-readable text and JSON.

use roicalc_core::format::{format_currency, format_number, format_signed_percent};
use roicalc_core::pricing::PricingQuote;
use roicalc_core::report::Report;
use roicalc_core::roi::{RoiBreakdown, RoiInputs};

use crate::output::{
    pricing_document, pricing_lines, report_document, report_lines, roi_document, roi_lines,
};
use crate::ui;

/// Sink for calculator results.
pub trait ResultPresenter: Send + Sync {
    fn present_roi(&self, inputs: &RoiInputs, breakdown: &RoiBreakdown);
    fn present_pricing(&self, quote: &PricingQuote);
    fn present_report(&self, report: &Report);
    fn present_error(&self, error: &str);
}

/// Plain-text presenter. Quiet mode prints only the headline number.
pub struct CliResultPresenter {
    quiet: bool,
}

impl CliResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn print_lines(lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }
}

impl ResultPresenter for CliResultPresenter {
    fn present_roi(&self, inputs: &RoiInputs, breakdown: &RoiBreakdown) {
        if self.quiet {
            println!("{}", breakdown.roi);
            return;
        }
        ui::print_header("ROI Calculator");
        ui::print_headline("Estimated annual ROI", &format_signed_percent(breakdown.roi));
        Self::print_lines(&roi_lines(inputs, breakdown));
    }

    fn present_pricing(&self, quote: &PricingQuote) {
        if self.quiet {
            println!("{:.2}", quote.total);
            return;
        }
        ui::print_header("Pricing Calculator");
        ui::print_headline("Total", &format_currency(quote.total));
        Self::print_lines(&pricing_lines(quote));
    }

    fn present_report(&self, report: &Report) {
        if self.quiet {
            println!("{}", report.gaps);
            return;
        }
        ui::print_header("AI Search Audit");
        ui::print_headline(
            "Traffic at risk",
            &format!("{} / mo", format_number(i64::from(report.traffic_at_risk))),
        );
        Self::print_lines(&report_lines(report));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Pretty JSON on stdout, one document per result.
pub struct JsonResultPresenter;

impl JsonResultPresenter {
    fn emit(value: &serde_json::Value) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => ui::print_error(&format!("failed to encode JSON: {e}")),
        }
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_roi(&self, inputs: &RoiInputs, breakdown: &RoiBreakdown) {
        Self::emit(&roi_document(inputs, breakdown));
    }

    fn present_pricing(&self, quote: &PricingQuote) {
        Self::emit(&pricing_document(quote));
    }

    fn present_report(&self, report: &Report) {
        Self::emit(&report_document(report));
    }

    fn present_error(&self, error: &str) {
        Self::emit(&serde_json::json!({ "error": error }));
    }
}
