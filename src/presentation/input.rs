use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use tracing::warn;

use crate::application::{App, LoadState, SubmitPhase, View};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.view {
            View::Home => Self::handle_home(app, key),
            View::Dashboard => Self::handle_dashboard(app, key, modifiers),
            View::AddUser => Self::handle_wizard(app, key, modifiers),
        }
    }

    fn handle_home(app: &mut App, key: KeyCode) {
        // 'q' quits and is handled by the main loop
        if key == KeyCode::Enter {
            app.open_dashboard();
        }
    }

    fn handle_dashboard(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('a') => {
                    app.open_add_user();
                    return;
                }
                KeyCode::Char('y') => {
                    Self::copy_selected_email(app);
                    return;
                }
                _ => {}
            }
        }

        app.status_message = None;

        match key {
            KeyCode::Esc => app.go_home(),
            KeyCode::Up => app.select_previous(),
            KeyCode::Down => app.select_next(),
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Char('r') if matches!(app.dashboard.load, LoadState::Failed(_)) => {
                app.retry_fetch();
            }
            // Every printable keystroke feeds the search query directly
            KeyCode::Char(c) if matches!(app.dashboard.load, LoadState::Loaded) => {
                app.push_query_char(c);
            }
            _ => {}
        }
    }

    fn handle_wizard(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        // While a submission is pending the form is inert; only the back
        // link still works, which abandons the wizard and cancels the
        // pending deadline.
        if app.add_user.phase != SubmitPhase::Idle {
            if key == KeyCode::Esc {
                app.open_dashboard();
            }
            return;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('b') = key {
                app.retreat();
                return;
            }
        }

        match key {
            KeyCode::Esc => app.open_dashboard(),
            KeyCode::Enter => {
                if app.add_user.step.is_last() {
                    app.submit(Instant::now());
                } else {
                    app.advance();
                }
            }
            KeyCode::Tab => app.focus_next_field(),
            KeyCode::BackTab => app.focus_previous_field(),
            KeyCode::Down => app.focus_next_field(),
            KeyCode::Up => app.focus_previous_field(),
            KeyCode::Left => app.cursor_left(),
            KeyCode::Right => app.cursor_right(),
            KeyCode::Home => app.cursor_home(),
            KeyCode::End => app.cursor_end(),
            KeyCode::Backspace => app.delete_char_back(),
            KeyCode::Delete => app.delete_char_forward(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn copy_selected_email(app: &mut App) {
        let Some(user) = app.dashboard.selected_user() else {
            app.status_message = Some("No user selected".to_string());
            return;
        };
        let email = user.email.clone();

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(email.clone()))
        {
            Ok(()) => {
                app.status_message = Some(format!("Copied {email} to clipboard"));
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                app.status_message = Some(format!("Clipboard unavailable: {e}"));
            }
        }
    }
}
