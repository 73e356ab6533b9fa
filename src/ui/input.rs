use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_modal_open() {
        // Esc is the global cancel key.
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q')) {
            app.close_modal();
        }
        return;
    }

    match app.focus() {
        Focus::StartDate => handle_start_date_key(app, key),
        Focus::Gallery => handle_gallery_key(app, key),
    }
}

fn handle_start_date_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_start_date();
        }
        KeyCode::Esc | KeyCode::Tab => app.leave_start_date(),
        KeyCode::Backspace => app.pop_start_char(),
        KeyCode::Char(ch) => app.push_start_char(ch),
        _ => {}
    }
}

fn handle_gallery_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab => app.focus_start_date(),
        KeyCode::Char('f') | KeyCode::Char('r') => {
            app.request_fetch();
        }
        KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),
        KeyCode::Enter => {
            app.open_selected();
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
