//! Key bindings: maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::Field;

/// Steps applied by Shift+arrow and PageUp/PageDown.
pub const COARSE_STEPS: f64 = 10.0;

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or stop the playback clock.
    ToggleClock,
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Move the focused field by a number of steps.
    Nudge(f64),
    /// Set the focused field to its minimum.
    SetMin,
    /// Set the focused field to its maximum.
    SetMax,
    /// Enter on a field outside of text entry.
    Activate,
    /// Start typing a value, seeded with the first character.
    BeginEntry(char),
    /// Insert a character into the entry buffer.
    EntryInsert(char),
    /// Delete the last character of the entry buffer.
    EntryBackspace,
    /// Commit the entry buffer to the focused field.
    EntryCommit,
    /// Abandon the entry buffer.
    EntryCancel,
    /// Toggle help overlay.
    ToggleHelp,
    /// Cycle to the next theme.
    CycleTheme,
    /// Escape key (close overlays).
    Escape,
}

fn starts_entry(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Map a key event to an action given the entry state and focused field.
pub fn map_key(key: KeyEvent, entry_active: bool, focus: Field) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // Global bindings
    if ctrl {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            _ => None,
        };
    }

    // Text entry intercepts everything else
    if entry_active {
        return match key.code {
            KeyCode::Enter | KeyCode::Tab => Some(Action::EntryCommit),
            KeyCode::Esc => Some(Action::EntryCancel),
            KeyCode::Backspace => Some(Action::EntryBackspace),
            KeyCode::Char(c) => Some(Action::EntryInsert(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char(' ') => Some(Action::ToggleClock),
        KeyCode::Char(c) if starts_entry(c) && focus.param().is_some() => {
            Some(Action::BeginEntry(c))
        }
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Right if shift => Some(Action::Nudge(COARSE_STEPS)),
        KeyCode::Left if shift => Some(Action::Nudge(-COARSE_STEPS)),
        KeyCode::Right => Some(Action::Nudge(1.0)),
        KeyCode::Left => Some(Action::Nudge(-1.0)),
        KeyCode::PageUp => Some(Action::Nudge(COARSE_STEPS)),
        KeyCode::PageDown => Some(Action::Nudge(-COARSE_STEPS)),
        KeyCode::Home => Some(Action::SetMin),
        KeyCode::End => Some(Action::SetMax),
        _ => None,
    }
}
