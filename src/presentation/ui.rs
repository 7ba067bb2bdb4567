use crate::application::{App, AppMode, FormField};
use crate::domain::WorkoutKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

/// Degrees of latitude/longitude covered by one map-panel cell.
const DEGREES_PER_CELL: f64 = 0.005;

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_map(f, app, panels[0]);
    render_workout_list(f, app, panels[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::EntryForm) {
        render_form_popup(f, app);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (count, distance_km, duration_min) = app.store.totals();
    let header = Paragraph::new(format!(
        "tracklog - Workout Tracker | {} workouts | {:.1} km | {:.0} min",
        count, distance_km, duration_min
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

/// Renders the map panel: a scatter of markers around the view center,
/// one cursor step per cell. In degraded mode the panel explains how to
/// get a map back.
fn render_map(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Map");

    let Some(board) = app.map.as_ref() else {
        let message = Paragraph::new(
            "No map available.\n\nSet TRACKLOG_POSITION=\"lat,lng\"\nand restart to log workouts.",
        )
        .block(block)
        .style(Style::default().fg(Color::Red));
        f.render_widget(message, area);
        return;
    };

    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;
    if width == 0 || height == 0 {
        f.render_widget(block, area);
        return;
    }

    let mut grid = vec![vec![' '; width]; height];
    let center = board.center();

    let plot = |lat: f64, lng: f64, symbol: char, grid: &mut Vec<Vec<char>>| {
        let col = ((lng - center.lng) / DEGREES_PER_CELL + width as f64 / 2.0).round();
        let row = ((center.lat - lat) / DEGREES_PER_CELL + height as f64 / 2.0).round();
        if col >= 0.0 && row >= 0.0 && (col as usize) < width && (row as usize) < height {
            grid[row as usize][col as usize] = symbol;
        }
    };

    for marker in board.markers() {
        plot(marker.coordinates.lat, marker.coordinates.lng, 'o', &mut grid);
    }
    if let Some(selected) = app.selected_workout() {
        plot(selected.coordinates.lat, selected.coordinates.lng, 'O', &mut grid);
    }
    if matches!(app.mode, AppMode::PickLocation) {
        plot(app.cursor.lat, app.cursor.lng, '+', &mut grid);
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| Line::from(row.into_iter().collect::<String>()))
        .collect();

    let title = format!("Map ({:.4}, {:.4})", center.lat, center.lng);
    let map = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::Green));
    f.render_widget(map, area);
}

fn render_workout_list(f: &mut Frame, app: &App, area: Rect) {
    let mut rows = Vec::new();

    if app.delete_all_pending {
        rows.push(
            Row::new(vec![Cell::from("Delete ALL workouts? y: confirm | Esc: cancel")])
                .style(Style::default().bg(Color::Red).fg(Color::White))
                .height(1),
        );
    }

    for (index, workout) in app.store.workouts().iter().enumerate() {
        let selected = index == app.selected && matches!(app.mode, AppMode::Normal);
        let pending = app.pending_deletes.contains(&workout.id);

        // A pending confirmation replaces the entry's detail line.
        let detail = if pending {
            "Delete this workout? y: confirm | Esc: cancel".to_string()
        } else {
            workout.metric_summary()
        };

        let style = if pending {
            Style::default().fg(Color::Red)
        } else if selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        let text = format!("{}\n  {}", workout.description, detail);
        rows.push(Row::new(vec![Cell::from(text)]).style(style).height(2));
    }

    if app.store.is_empty() {
        rows.push(Row::new(vec![Cell::from("No workouts yet - press n to add one")]).height(1));
    }

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .block(Block::default().borders(Borders::ALL).title("Workouts"))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if app.delete_all_pending {
                "Delete ALL workouts? (y to confirm, Esc to cancel)".to_string()
            } else if app.selected_pending_delete() {
                "Delete selected workout? (y to confirm, Esc to cancel)".to_string()
            } else if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                let mut hints =
                    "n: new workout | j/k: select | d: delete | Ctrl+E: export CSV".to_string();
                if app.delete_all_available() {
                    hints.push_str(" | D: delete all");
                }
                hints.push_str(" | F1/?: help | q: quit");
                hints
            }
        }
        AppMode::PickLocation => format!(
            "Pick location ({:.4}, {:.4}): arrows move, Enter opens form, Esc cancels",
            app.cursor.lat, app.cursor.lng
        ),
        AppMode::EntryForm => {
            "New workout: Tab next field, Space toggles kind, Enter saves, Esc cancels".to_string()
        }
        AppMode::ExportCsv => format!(
            "Export CSV as: {} (Enter to export, Esc to cancel)",
            app.filename_input
        ),
        AppMode::Help => "Up/Down/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => {
                if app.delete_all_pending || app.selected_pending_delete() {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                }
            }
            AppMode::PickLocation => Style::default().fg(Color::Green),
            AppMode::EntryForm => Style::default().fg(Color::Green),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_form_popup(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 4,
        y: area.height / 4,
        width: area.width / 2,
        height: 8.min(area.height),
    };

    f.render_widget(Clear, popup_area);

    let field_line = |label: &str, value: &str, field: FormField| {
        let marker = if app.form.field == field { "> " } else { "  " };
        format!("{}{:<16}{}", marker, label, value)
    };

    let kind_value = match app.form.kind {
        WorkoutKind::Running => "Running  (Space to switch)",
        WorkoutKind::Cycling => "Cycling  (Space to switch)",
    };

    let text = [
        field_line("Kind", kind_value, FormField::Kind),
        field_line("Distance (km)", &app.form.distance, FormField::Distance),
        field_line("Duration (min)", &app.form.duration, FormField::Duration),
        field_line(app.form.extra_label(), &app.form.extra, FormField::Extra),
        String::new(),
        format!(
            "  at ({:.4}, {:.4})",
            app.form.coordinates.lat, app.form.coordinates.lng
        ),
    ]
    .join("\n");

    let form = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("New workout")
                .style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(form, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "tracklog Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TRACKLOG REFERENCE

=== CONCEPTS ===
Workouts are logged at a location picked on the map panel. Each entry
stores distance and duration plus a kind-specific metric: cadence for
running (pace is derived), elevation gain for cycling (speed is
derived). The list is saved automatically after every change.

=== ADDING A WORKOUT ===
n               Start a new workout (opens the location picker)
Arrow keys      Move the location cursor on the map
Enter           Accept the location and open the entry form
Tab / Up/Down   Move between form fields
Space           Toggle kind (running/cycling) on the Kind field
Enter           Save the workout
Esc             Cancel without saving

Distance and duration must be positive numbers. Cadence must be
positive too; elevation gain may be negative (descents happen).

=== MANAGING THE LIST ===
j/k or arrows   Select a workout (the map recenters on it)
d               Ask to delete the selected workout
D               Ask to delete ALL workouts (needs more than one)
y               Confirm the pending delete
Esc             Cancel the pending delete

Deletes always ask first. Several entries can have open prompts at
the same time; each is confirmed or cancelled on its own.

=== FILES ===
Ctrl+E          Export the list to a CSV file
                Workouts persist automatically as JSON; pass a path
                as the first argument to choose the snapshot file.

=== MAP ===
The map panel is a scatter of your workouts around the view center:
o  workout       O  selected workout       +  location cursor
Set TRACKLOG_POSITION="lat,lng" before starting to place the map;
without it the tracker runs in list-only mode.

=== HELP NAVIGATION ===
Up/Down or j/k  Scroll help text one line
Page Up/Down    Scroll help text five lines
Home            Jump to top
Esc/F1/?/q      Close this help window"#
        .to_string()
}
