use crate::application::{App, AppMode, FormField};
use crate::domain::CsvExporter;
use crossterm::event::{KeyCode, KeyModifiers};

/// Byte offset of the `cursor`-th character, or the end of `text` when
/// the cursor sits past the last character. The filename cursor counts
/// characters, so edits land on char boundaries even for non-ASCII
/// names.
fn byte_offset(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map_or(text.len(), |(at, _)| at)
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::PickLocation => Self::handle_pick_location_mode(app, key),
            AppMode::EntryForm => Self::handle_form_mode(app, key),
            AppMode::ExportCsv => Self::handle_filename_input_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.start_csv_export();
            }
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.select_next();
            }
            KeyCode::Char('n') => {
                app.start_pick_location();
            }
            KeyCode::Char('d') => {
                app.status_message = None;
                app.request_delete_selected();
            }
            KeyCode::Char('D') => {
                app.status_message = None;
                app.request_delete_all();
            }
            KeyCode::Char('y') => {
                // Delete-all takes precedence over a per-entry prompt.
                if app.delete_all_pending {
                    app.confirm_delete_all();
                } else if app.selected_pending_delete() {
                    app.confirm_delete_selected();
                }
            }
            KeyCode::Esc => {
                if app.delete_all_pending {
                    app.cancel_delete_all();
                } else if app.selected_pending_delete() {
                    app.cancel_delete_selected();
                } else {
                    app.status_message = None;
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Handled by the main loop.
            }
            _ => {}
        }
    }

    fn handle_pick_location_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up => app.move_cursor(1.0, 0.0),
            KeyCode::Down => app.move_cursor(-1.0, 0.0),
            KeyCode::Left => app.move_cursor(0.0, -1.0),
            KeyCode::Right => app.move_cursor(0.0, 1.0),
            KeyCode::Enter => app.confirm_location(),
            KeyCode::Esc => app.cancel_pick_location(),
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_form(),
            KeyCode::Esc => app.cancel_form(),
            KeyCode::Tab | KeyCode::Down => {
                app.form.field = app.form.field.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.form.field = app.form.field.previous();
            }
            KeyCode::Char(' ') => {
                if app.form.field == FormField::Kind {
                    app.toggle_form_kind();
                } else if let Some(text) = app.form.focused_text() {
                    text.push(' ');
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = app.form.focused_text() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = app.form.focused_text() {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_filename_input_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_csv_export_filename();
                let result = CsvExporter::export_workouts(app.store.workouts(), &filename);
                app.set_csv_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                    let at = byte_offset(&app.filename_input, app.cursor_position);
                    app.filename_input.remove(at);
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.filename_input.chars().count() {
                    let at = byte_offset(&app.filename_input, app.cursor_position);
                    app.filename_input.remove(at);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filename_input.chars().count() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.chars().count();
            }
            KeyCode::Char(c) => {
                let at = byte_offset(&app.filename_input, app.cursor_position);
                app.filename_input.insert(at, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
