use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::terminal::state::AppState;

/// Returns `true` when the dashboard should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    if !state.page.alerts.is_empty() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                state.dismiss_alert();
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('r') => {
            state.trigger_refresh();
        }
        KeyCode::Down | KeyCode::Char('j') => state.scroll_list(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll_list(-1),
        KeyCode::PageDown => state.scroll_list(10),
        KeyCode::PageUp => state.scroll_list(-10),
        KeyCode::Home => state.list_scroll = 0,
        _ => {}
    }
    false
}
