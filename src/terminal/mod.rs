//! Interactive terminal dashboard.

pub mod events;
pub mod state;
pub mod ui;

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyEventKind},
};

use crate::controller::FetchController;
use crate::terminal::events::handle_key;
use crate::terminal::state::AppState;

const TICK: Duration = Duration::from_millis(100);

pub fn run_tui(controller: FetchController) -> Result<()> {
    color_eyre::install()?;

    let terminal = ratatui::init();
    let mut state = AppState::new(controller);
    let result = run(terminal, &mut state);

    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        state.poll_fetch();
        terminal.draw(|f| ui::render(f, state))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(key, state)
        {
            break;
        }
    }
    Ok(())
}
