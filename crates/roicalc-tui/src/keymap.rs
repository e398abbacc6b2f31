//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use roicalc_core::pricing::{Billing, Plan};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextTab,
    PrevTab,
    SelectUp,
    SelectDown,
    Increment,
    Decrement,
    SetBilling(Billing),
    SetPlan(Plan),
    Input(char),
    Backspace,
    Submit,
    Reset,
    None,
}

/// Whether printable keys are shortcuts or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Navigate,
    TextEntry,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent, context: KeyContext) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('r') if ctrl => KeyAction::Reset,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PrevTab,
        KeyCode::Enter => KeyAction::Submit,
        _ => match context {
            KeyContext::TextEntry => map_text_key(key, ctrl),
            KeyContext::Navigate => map_navigation_key(key),
        },
    }
}

fn map_text_key(key: KeyEvent, ctrl: bool) -> KeyAction {
    match key.code {
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) if !ctrl => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}

fn map_navigation_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::SelectDown,
        KeyCode::Right | KeyCode::Char('+' | '=' | 'l') => KeyAction::Increment,
        KeyCode::Left | KeyCode::Char('-' | 'h') => KeyAction::Decrement,
        KeyCode::Char('m') => KeyAction::SetBilling(Billing::Monthly),
        KeyCode::Char('a') => KeyAction::SetBilling(Billing::Annual),
        KeyCode::Char('1') => KeyAction::SetPlan(Plan::Starter),
        KeyCode::Char('2') => KeyAction::SetPlan(Plan::Pro),
        KeyCode::Char('3') => KeyAction::SetPlan(Plan::Enterprise),
        _ => KeyAction::None,
    }
}
