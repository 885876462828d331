use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Upper bound on how long the loop sleeps between redraws.
const FRAME_BUDGET: Duration = Duration::from_millis(250);

/// Waits up to `timeout` for terminal input. Anything that isn't a key
/// press (timeouts, releases, resizes, mouse) becomes a `Tick`.
pub fn next_event(timeout: Duration) -> Result<AppEvent> {
    if !event::poll(timeout)? {
        return Ok(AppEvent::Tick);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::KeyPress(key.code)),
        _ => Ok(AppEvent::Tick),
    }
}

/// Draw, wait for input, update; until the app asks to quit.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;
        let event = next_event(FRAME_BUDGET)?;
        app.update(event);
    }
    Ok(())
}
