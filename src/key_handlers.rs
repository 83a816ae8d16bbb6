use crate::app::App;
use crate::chat_view;
use crate::suggested_questions::{self, SUGGESTED_QUESTIONS};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key handling for the chat screen. Enter submits; Shift+Enter inserts a
/// newline into the draft instead. Editing keys are rejected while a
/// request is pending or the backend is unreachable.
pub fn handle_key(key: KeyEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            if app.input_enabled() {
                app.input.push('\n');
            }
        }
        KeyCode::Enter => {
            if let Some(idx) = app.suggestion_cursor.filter(|_| app.suggestions_visible()) {
                submit(app, app_arc, SUGGESTED_QUESTIONS[idx].to_string());
            } else if app.input_enabled() {
                let draft = app.input.clone();
                submit(app, app_arc, draft);
            }
        }
        KeyCode::Tab => {
            if app.suggestions_visible() {
                app.suggestion_cursor = suggested_questions::cycle(app.suggestion_cursor, false);
            }
        }
        KeyCode::BackTab => {
            if app.suggestions_visible() {
                app.suggestion_cursor = suggested_questions::cycle(app.suggestion_cursor, true);
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            if app.input_enabled() {
                app.input.pop();
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else if app.input_enabled() {
                app.input.push(c);
                app.suggestion_cursor = None;
            }
        }
        _ => {}
    }
}

/// Clicking a suggestion forwards its text to the submit path, exactly as
/// if the user had typed it. The wheel scrolls the transcript.
pub fn handle_mouse(event: MouseEvent, app: &mut App, app_arc: &Arc<Mutex<App>>) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !app.suggestions_visible() {
                return;
            }
            if let Some(idx) =
                suggested_questions::hit_test(&app.suggestion_rows, event.column, event.row)
            {
                submit(app, app_arc, SUGGESTED_QUESTIONS[idx].to_string());
            }
        }
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        _ => {}
    }
}

fn submit(app: &mut App, app_arc: &Arc<Mutex<App>>, text: String) {
    if let Some(query) = app.begin_submission(&text) {
        tokio::spawn(chat_view::submit_query(app_arc.clone(), query));
    }
}
