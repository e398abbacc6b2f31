//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use roicalc_cli::output::{pricing_document, report_document, roi_document, write_json_to_file};
use roicalc_cli::presenter::{CliResultPresenter, JsonResultPresenter, ResultPresenter};
use roicalc_cli::scan::{CancellationToken, Scanner};
use roicalc_cli::ui;
use roicalc_core::calculator::{CalcError, CalculatorKind};
use roicalc_core::report::Report;
use roicalc_tui::CalcApp;

use crate::config::AppConfig;

/// Run the application.
///
/// Errors are reported through the selected presenter before being returned,
/// so the caller only maps them to an exit code.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        roicalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter: Box<dyn ResultPresenter> = if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CliResultPresenter::new(config.quiet))
    };

    let result = dispatch(config, presenter.as_ref());
    if let Err(err) = &result {
        presenter.present_error(&format!("{err:#}"));
    }
    result
}

fn dispatch(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    let kind = config.calculator_kind()?;

    if config.tui {
        return run_tui(config, kind);
    }

    run_cli(config, kind, presenter)
}

fn run_cli(
    config: &AppConfig,
    kind: CalculatorKind,
    presenter: &dyn ResultPresenter,
) -> Result<()> {
    debug!(%kind, "evaluating calculator");

    let document = match kind {
        CalculatorKind::Roi => {
            let inputs = config.roi_calculator().inputs();
            let breakdown = roicalc_core::roi::derive_roi(&inputs);
            presenter.present_roi(&inputs, &breakdown);
            roi_document(&inputs, &breakdown)
        }
        CalculatorKind::Pricing => {
            let quote = config.pricing_calculator()?.quote();
            presenter.present_pricing(&quote);
            pricing_document(&quote)
        }
        CalculatorKind::Audit => {
            let report = run_audit(config)?;
            presenter.present_report(&report);
            report_document(&report)
        }
    };

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_json_to_file(path, &document).with_context(|| format!("writing {path}"))?;
        if !config.quiet && !config.json {
            ui::print_success(&format!("Results written to {path}"));
        }
    }

    Ok(())
}

fn run_audit(config: &AppConfig) -> Result<Report> {
    let domain = config.domain.as_deref().ok_or(CalcError::EmptyDomain)?;
    let scanner = Scanner::new().show_progress(!config.quiet && !config.json);

    if config.no_animate {
        return Ok(scanner.run_instant(domain)?);
    }

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;
    Ok(scanner.run(domain, &cancel)?)
}

fn run_tui(config: &AppConfig, kind: CalculatorKind) -> Result<()> {
    let mut app = CalcApp::new(kind, config.roi_calculator(), config.pricing_calculator()?);
    if let Some(domain) = &config.domain {
        app.audit.set_input(domain);
    }

    // Run TUI event loop on the main thread
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("setting Ctrl+C handler")
}
