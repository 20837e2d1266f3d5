//! Event handler for the TUI
//!
//! Routes keyboard events to the focused filter control.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedField};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::Enter => {
            app.reload();
            return Ok(());
        }
        _ => {}
    }

    match app.focused {
        FocusedField::Category => handle_category_key(app, key),
        FocusedField::Results => handle_results_key(app, key),
        FocusedField::From | FocusedField::To | FocusedField::Amount => {
            if let Some(input) = app.focused_input_mut() {
                handle_input_key(input, key);
            }
        }
    }

    Ok(())
}

/// Category picker: changing the selection reloads right away
fn handle_category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            app.prev_category();
            app.reload();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_category();
            app.reload();
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        _ => {}
    }
}

/// Line editing for the text inputs
fn handle_input_key(input: &mut TextInput, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
