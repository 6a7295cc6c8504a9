//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and turns finished requests into state actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::Action;

use super::app::{ActiveDialog, App, FormField, InputMode};
use super::event::Event;

/// Lines moved by PageUp/PageDown in the affirmation list
const PAGE_SCROLL: usize = 10;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::AffirmationsReady { seq, outcome } => {
            match outcome {
                Ok(items) => app.dispatch(Action::AffirmationsResolved { seq, items }),
                Err(message) => app.dispatch(Action::AffirmationsFailed { seq, message }),
            }
            Ok(())
        }
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Mouse(_) | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Focus
        KeyCode::Tab => app.move_focus(true),
        KeyCode::BackTab => app.move_focus(false),

        // Trigger from anywhere
        KeyCode::Char('s') | KeyCode::F(5) => app.submit(),

        KeyCode::Enter => {
            if app.focused == FormField::Trigger {
                app.submit();
            } else {
                app.start_editing();
            }
        }

        // Steppers on years and rate
        KeyCode::Up | KeyCode::Char('+') => app.step_focused(true),
        KeyCode::Down | KeyCode::Char('-') => app.step_focused(false),

        // Affirmation list
        KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::Home => app.scroll_offset = 0,

        // Typing a digit into an input starts editing it
        KeyCode::Char(c) if c.is_ascii_digit() && app.focused.is_input() => {
            app.start_editing();
            insert_char(app, c);
        }

        _ => {}
    }
    Ok(())
}

/// Handle keys while editing an input
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Tab => app.move_focus(true),
        KeyCode::BackTab => app.move_focus(false),
        KeyCode::Char(c) => insert_char(app, c),
        KeyCode::Backspace => {
            if let Some(input) = app.focused_input() {
                input.backspace();
            }
            after_edit(app);
        }
        KeyCode::Delete => {
            if let Some(input) = app.focused_input() {
                input.delete();
            }
            after_edit(app);
        }
        KeyCode::Left => {
            if let Some(input) = app.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = app.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = app.focused_input() {
                input.move_end();
            }
        }
        _ => {}
    }
    Ok(())
}

fn insert_char(app: &mut App, c: char) {
    if let Some(input) = app.focused_input() {
        input.insert(c);
    }
    after_edit(app);
}

/// The amount field is reformatted live; the others wait for commit
fn after_edit(app: &mut App) {
    if app.focused == FormField::Amount {
        app.amount_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::Affirmation;
    use crate::state::LoadingState;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_amount_groups_digits() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "1680000");
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.amount_input.value(), "1,680,000");
        assert_eq!(app.state.amount, "1,680,000");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.amount, "168,000");
    }

    #[test]
    fn test_letters_in_amount_are_dropped() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "5a0x0");
        assert_eq!(app.state.amount, "500");
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_types_nothing_while_editing() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_years_with_tab_commit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "30");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.state.years, 30);
        assert_eq!(app.focused, FormField::Rate);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_full_trigger_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "16800000000");
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);

        let effects = app.take_effects();
        assert_eq!(effects.len(), 1);
        assert!(app.state.is_loading());

        let seq = app.state.request_seq;
        let items = vec![Affirmation {
            id: 1,
            category: "Kết nối - Hiện tại đơn".into(),
            content: "Tôi sở hữu 16,800,000,000 VND.".into(),
        }];
        handle_event(
            &mut app,
            Event::AffirmationsReady {
                seq,
                outcome: Ok(items),
            },
        )
        .unwrap();
        assert_eq!(app.state.loading, LoadingState::Succeeded);
        assert_eq!(app.state.affirmations.len(), 1);
    }

    #[test]
    fn test_failed_request_keeps_projection() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        type_text(&mut app, "1000000");
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('s'));

        let seq = app.state.request_seq;
        handle_event(
            &mut app,
            Event::AffirmationsReady {
                seq,
                outcome: Err("timeout".into()),
            },
        )
        .unwrap();
        assert_eq!(app.state.loading, LoadingState::Failed);
        assert!(app.state.projection.is_some());
        assert!(app.state.affirmations.is_empty());
    }

    #[test]
    fn test_help_dialog_toggles() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }
}
