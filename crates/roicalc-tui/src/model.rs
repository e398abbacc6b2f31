//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use roicalc_core::animation::AnimatedDisplay;
use roicalc_core::calculator::CalculatorKind;
use roicalc_core::constants::{AUDIT_ANIMATION, PRICING_ANIMATION, ROI_ANIMATION};
use roicalc_core::flow::{AuditFlow, FlowStage};
use roicalc_core::input::BoundedInput;
use roicalc_core::pricing::{Billing, Plan, PricingCalculator};
use roicalc_core::roi::RoiCalculator;

use crate::audit_panel::{render_audit, AuditFigures};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction, KeyContext};
use crate::messages::TuiMessage;
use crate::pricing_panel::{render_pricing, PRICING_FIELDS};
use crate::roi_panel::{render_roi, ROI_FIELDS};

/// Redraw cadence; roughly one display frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Dashboard failure.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Dashboard state (Elm Model).
pub struct CalcApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Calculator tab in focus.
    pub active: CalculatorKind,
    pub roi: RoiCalculator,
    /// Selected ROI input row.
    pub roi_field: usize,
    pub pricing: PricingCalculator,
    /// Selected pricing input row.
    pub pricing_field: usize,
    pub audit: AuditFlow,
    /// Last rejected action, shown in the footer until the next key.
    pub error: Option<String>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    now: Duration,
    roi_percent: AnimatedDisplay,
    revenue: AnimatedDisplay,
    pricing_total: AnimatedDisplay,
    audit_pages: AnimatedDisplay,
    audit_traffic: AnimatedDisplay,
}

impl Default for CalcApp {
    fn default() -> Self {
        Self::new(
            CalculatorKind::Roi,
            RoiCalculator::default(),
            PricingCalculator::default(),
        )
    }
}

impl CalcApp {
    /// Create a dashboard focused on `active`, seeded with the given inputs.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(active: CalculatorKind, roi: RoiCalculator, pricing: PricingCalculator) -> Self {
        let b = roi.breakdown();
        let q = pricing.quote();
        Self {
            should_quit: false,
            active,
            roi_percent: AnimatedDisplay::new(b.roi as f64, ROI_ANIMATION),
            revenue: AnimatedDisplay::new(b.revenue_impact as f64, ROI_ANIMATION),
            pricing_total: AnimatedDisplay::new(q.total, PRICING_ANIMATION),
            audit_pages: AnimatedDisplay::new(0.0, AUDIT_ANIMATION),
            audit_traffic: AnimatedDisplay::new(0.0, AUDIT_ANIMATION),
            roi,
            roi_field: 0,
            pricing,
            pricing_field: 0,
            audit: AuditFlow::new(),
            error: None,
            terminal_width: 80,
            terminal_height: 24,
            now: Duration::ZERO,
        }
    }

    /// Whether printable keys go to the domain field.
    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        if self.active == CalculatorKind::Audit && self.audit.stage() == FlowStage::Input {
            KeyContext::TextEntry
        } else {
            KeyContext::Navigate
        }
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Tick(now) => self.tick(now),
            TuiMessage::Key(key) => {
                let action = map_key(key, self.key_context());
                self.handle_key_action(action);
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => self.should_quit = true,
        }
    }

    /// Advance the clock: fire due scan timers and step every animation.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        if self.audit.advance(now) {
            if let Some(report) = self.audit.report() {
                let pages = f64::from(report.pages);
                let traffic = f64::from(report.traffic_at_risk);
                self.audit_pages.jump_to(0.0, now);
                self.audit_traffic.jump_to(0.0, now);
                self.audit_pages.retarget(pages, now);
                self.audit_traffic.retarget(traffic, now);
            }
        }
        for display in [
            &mut self.roi_percent,
            &mut self.revenue,
            &mut self.pricing_total,
            &mut self.audit_pages,
            &mut self.audit_traffic,
        ] {
            display.on_frame(now);
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        if action != KeyAction::None {
            self.error = None;
        }
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextTab => self.switch_tab(1),
            KeyAction::PrevTab => self.switch_tab(CalculatorKind::ALL.len() - 1),
            KeyAction::SelectUp => self.move_selection(false),
            KeyAction::SelectDown => self.move_selection(true),
            KeyAction::Increment => self.adjust(true),
            KeyAction::Decrement => self.adjust(false),
            KeyAction::SetBilling(billing) if self.active == CalculatorKind::Pricing => {
                self.pricing.billing = billing;
                self.refresh_pricing();
            }
            KeyAction::SetPlan(plan) if self.active == CalculatorKind::Pricing => {
                self.pricing.plan = plan;
                self.refresh_pricing();
            }
            KeyAction::Input(c) if self.active == CalculatorKind::Audit => self.audit.push_char(c),
            KeyAction::Backspace if self.active == CalculatorKind::Audit => self.audit.pop_char(),
            KeyAction::Submit if self.active == CalculatorKind::Audit => self.submit_audit(),
            KeyAction::Reset => self.reset_active(),
            _ => {}
        }
    }

    fn switch_tab(&mut self, offset: usize) {
        let all = CalculatorKind::ALL;
        let index = all.iter().position(|&k| k == self.active).unwrap_or(0);
        self.active = all[(index + offset) % all.len()];
    }

    fn move_selection(&mut self, down: bool) {
        let (field, count) = match self.active {
            CalculatorKind::Roi => (&mut self.roi_field, ROI_FIELDS.len()),
            CalculatorKind::Pricing => (&mut self.pricing_field, PRICING_FIELDS.len()),
            CalculatorKind::Audit => return,
        };
        *field = if down {
            (*field + 1) % count
        } else {
            (*field + count - 1) % count
        };
    }

    fn roi_input_mut(&mut self) -> &mut BoundedInput {
        match self.roi_field {
            0 => &mut self.roi.content_pieces,
            1 => &mut self.roi.team_size,
            2 => &mut self.roi.avg_customer_value,
            _ => &mut self.roi.monthly_traffic,
        }
    }

    fn adjust(&mut self, up: bool) {
        match self.active {
            CalculatorKind::Roi => {
                let input = self.roi_input_mut();
                if up {
                    input.increment();
                } else {
                    input.decrement();
                }
                self.refresh_roi();
            }
            CalculatorKind::Pricing => {
                match self.pricing_field {
                    0 => {
                        let plans = Plan::ALL;
                        let index = plans.iter().position(|&p| p == self.pricing.plan).unwrap_or(0);
                        let next = if up {
                            (index + 1).min(plans.len() - 1)
                        } else {
                            index.saturating_sub(1)
                        };
                        self.pricing.plan = plans[next];
                    }
                    1 => {
                        self.pricing.billing = if up { Billing::Annual } else { Billing::Monthly };
                    }
                    _ => {
                        if up {
                            self.pricing.seats.increment();
                        } else {
                            self.pricing.seats.decrement();
                        }
                    }
                }
                self.refresh_pricing();
            }
            CalculatorKind::Audit => {}
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn refresh_roi(&mut self) {
        let b = self.roi.breakdown();
        self.roi_percent.retarget(b.roi as f64, self.now);
        self.revenue.retarget(b.revenue_impact as f64, self.now);
    }

    fn refresh_pricing(&mut self) {
        let q = self.pricing.quote();
        self.pricing_total.retarget(q.total, self.now);
    }

    fn submit_audit(&mut self) {
        match self.audit.start(self.now) {
            Ok(domain) => debug!(domain, "audit submitted"),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn reset_active(&mut self) {
        match self.active {
            CalculatorKind::Roi => {
                self.roi = RoiCalculator::default();
                self.refresh_roi();
            }
            CalculatorKind::Pricing => {
                self.pricing = PricingCalculator::default();
                self.refresh_pricing();
            }
            CalculatorKind::Audit => {
                self.audit.reset();
                self.audit_pages.jump_to(0.0, self.now);
                self.audit_traffic.jump_to(0.0, self.now);
            }
        }
    }

    /// Headline ROI percentage as currently drawn.
    #[must_use]
    pub fn roi_shown(&self) -> i64 {
        self.roi_percent.rounded()
    }

    /// Billed pricing total as currently drawn.
    #[must_use]
    pub fn pricing_total_shown(&self) -> f64 {
        self.pricing_total.displayed()
    }

    /// Report figures as currently drawn.
    #[must_use]
    pub fn audit_figures(&self) -> AuditFigures {
        AuditFigures {
            pages: self.audit_pages.rounded(),
            traffic_at_risk: self.audit_traffic.rounded(),
        }
    }

    /// Split into header, body and footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header, body, footer) = Self::compute_layout(frame.area());
        render_header(frame, header, self.active);
        match self.active {
            CalculatorKind::Roi => render_roi(
                frame,
                body,
                &self.roi,
                self.roi_field,
                self.roi_shown(),
                self.revenue.displayed(),
            ),
            CalculatorKind::Pricing => render_pricing(
                frame,
                body,
                &self.pricing,
                self.pricing_field,
                self.pricing_total_shown(),
            ),
            CalculatorKind::Audit => render_audit(frame, body, &self.audit, self.audit_figures()),
        }
        render_footer(frame, footer, self.key_context(), self.error.as_deref());
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(stdout, EnterAlternateScreen)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
        if entered.is_err() {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = terminal::disable_raw_mode();
        }
        entered
    }

    /// Tear down the terminal, restoring normal mode.
    ///
    /// Every restore step runs; the first failure is returned.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        first_failure([
            terminal::disable_raw_mode(),
            execute!(terminal.backend_mut(), LeaveAlternateScreen),
            terminal.show_cursor(),
        ])
    }

    /// Run the event loop until the user quits.
    ///
    /// The terminal is restored even when drawing or input fails. An event
    /// loop error takes precedence over a restore error.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let restored = Self::teardown_terminal(&mut terminal);
        prefer_first(result, restored)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), TuiError> {
        let start = Instant::now();
        while !self.should_quit {
            self.handle_message(TuiMessage::Tick(start.elapsed()));
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_message(TuiMessage::Key(key)),
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

fn first_failure<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

fn prefer_first(result: Result<(), TuiError>, cleanup: io::Result<()>) -> Result<(), TuiError> {
    result?;
    cleanup.map_err(TuiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use roicalc_core::calculator::CalcError;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn press(app: &mut CalcApp, code: KeyCode) {
        app.handle_message(TuiMessage::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut CalcApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn audit_app() -> CalcApp {
        CalcApp::new(
            CalculatorKind::Audit,
            RoiCalculator::default(),
            PricingCalculator::default(),
        )
    }

    #[test]
    fn initial_state() {
        let app = CalcApp::default();
        assert!(!app.should_quit);
        assert_eq!(app.active, CalculatorKind::Roi);
        assert_eq!(app.roi_field, 0);
        assert_eq!(app.roi_shown(), 346_054);
        assert!(app.error.is_none());
        assert_eq!(app.key_context(), KeyContext::Navigate);
    }

    #[test]
    fn tabs_cycle_both_ways() {
        let mut app = CalcApp::default();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, CalculatorKind::Pricing);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, CalculatorKind::Audit);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, CalculatorKind::Roi);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active, CalculatorKind::Audit);
    }

    #[test]
    fn selection_wraps() {
        let mut app = CalcApp::default();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.roi_field, ROI_FIELDS.len() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.roi_field, 0);
    }

    #[test]
    fn increment_animates_toward_new_roi() {
        let mut app = CalcApp::default();
        app.tick(ms(1_000));
        app.roi_field = 3;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.roi.monthly_traffic.value(), 55_000);
        let target = app.roi.breakdown().roi;
        assert_ne!(target, 346_054);

        app.tick(ms(1_100));
        let mid = app.roi_shown();
        assert!(mid > 346_054 && mid < target);

        app.tick(ms(1_000 + 420));
        assert_eq!(app.roi_shown(), target);
    }

    #[test]
    fn decrement_clamps_at_min() {
        let mut app = CalcApp::default();
        app.roi_field = 1;
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.roi.team_size.value(), 1);
    }

    #[test]
    fn pricing_shortcuts_only_on_pricing_tab() {
        let mut app = CalcApp::default();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.pricing.billing, Billing::Monthly);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.pricing.billing, Billing::Annual);
        assert_eq!(app.pricing.plan, Plan::Enterprise);

        app.tick(ms(380));
        let expected = app.pricing.quote().total;
        assert!((app.pricing_total_shown() - expected).abs() < 1e-9);
    }

    #[test]
    fn pricing_plan_steps_stop_at_ends() {
        let mut app = CalcApp::new(
            CalculatorKind::Pricing,
            RoiCalculator::default(),
            PricingCalculator::default(),
        );
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.pricing.plan, Plan::Enterprise);
        for _ in 0..4 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.pricing.plan, Plan::Starter);
    }

    #[test]
    fn typing_q_on_audit_is_text() {
        let mut app = audit_app();
        assert_eq!(app.key_context(), KeyContext::TextEntry);
        type_text(&mut app, "quora.com");
        assert!(!app.should_quit);
        assert_eq!(app.audit.input(), "quora.com");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.audit.input(), "quora.co");
    }

    #[test]
    fn submitting_empty_domain_shows_error() {
        let mut app = audit_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.error.as_deref(), Some(CalcError::EmptyDomain.to_string().as_str()));
        assert_eq!(app.audit.stage(), FlowStage::Input);

        type_text(&mut app, "x");
        assert!(app.error.is_none());
    }

    #[test]
    fn scan_runs_to_results_and_counts_up() {
        let mut app = audit_app();
        type_text(&mut app, "https://www.airops.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.audit.stage(), FlowStage::Scanning);
        assert_eq!(app.key_context(), KeyContext::Navigate);

        let mut now = 0;
        while app.audit.stage() == FlowStage::Scanning {
            now += 16;
            app.tick(ms(now));
        }
        assert_eq!(app.audit.domain(), "airops.com");
        assert!(app.audit_figures().traffic_at_risk < 11_867);

        app.tick(ms(now + 600));
        assert_eq!(
            app.audit_figures(),
            AuditFigures {
                pages: 947,
                traffic_at_risk: 11_867
            }
        );
    }

    #[test]
    fn reset_mid_scan_returns_to_input() {
        let mut app = audit_app();
        type_text(&mut app, "example.com");
        press(&mut app, KeyCode::Enter);
        app.tick(ms(1_000));
        app.handle_message(TuiMessage::Key(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.audit.stage(), FlowStage::Input);
        app.tick(ms(10_000));
        assert!(app.audit.report().is_none());
    }

    #[test]
    fn reset_from_results_zeroes_figures() {
        let mut app = audit_app();
        type_text(&mut app, "airops.com");
        press(&mut app, KeyCode::Enter);
        app.tick(ms(4_400));
        app.tick(ms(4_500));
        assert!(app.audit_figures().pages > 0);

        app.handle_message(TuiMessage::Key(KeyEvent::new(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.audit.stage(), FlowStage::Input);
        assert_eq!(
            app.audit_figures(),
            AuditFigures {
                pages: 0,
                traffic_at_risk: 0
            }
        );
        app.tick(ms(5_000));
        assert_eq!(app.audit_figures().pages, 0);
    }

    #[test]
    fn reset_restores_roi_defaults() {
        let mut app = CalcApp::default();
        press(&mut app, KeyCode::Right);
        app.handle_key_action(KeyAction::Reset);
        assert_eq!(app.roi, RoiCalculator::default());
    }

    #[test]
    fn quit_and_resize() {
        let mut app = CalcApp::default();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!((app.terminal_width, app.terminal_height), (120, 40));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = CalcApp::compute_layout(area);
        assert_eq!(header.y, 0);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(header.height + body.height + footer.height, area.height);
    }

    #[test]
    fn renders_every_tab() {
        let mut app = CalcApp::default();
        for _ in 0..CalculatorKind::ALL.len() {
            let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
            terminal.draw(|frame| app.render(frame)).unwrap();
            press(&mut app, KeyCode::Tab);
        }
    }

    #[test]
    fn restore_reports_first_failed_step() {
        let denied = || Err(io::Error::new(io::ErrorKind::PermissionDenied, "raw mode"));
        let broken = || Err(io::Error::new(io::ErrorKind::BrokenPipe, "cursor"));
        assert!(first_failure([Ok(()), Ok(()), Ok(())]).is_ok());
        let err = first_failure([Ok(()), denied(), broken()]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn loop_error_wins_over_restore_error() {
        let draw = TuiError::Io(io::Error::new(io::ErrorKind::Interrupted, "draw"));
        let restore = Err(io::Error::new(io::ErrorKind::BrokenPipe, "restore"));
        let TuiError::Io(err) = prefer_first(Err(draw), restore).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);

        let restore = Err(io::Error::new(io::ErrorKind::BrokenPipe, "restore"));
        let TuiError::Io(err) = prefer_first(Ok(()), restore).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        assert!(prefer_first(Ok(()), Ok(())).is_ok());
    }
}
