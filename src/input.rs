/// Input adapter.
///
/// Key mapping is a pure function; the actual poll drains whatever events
/// crossterm has pending without ever blocking, so the tick cadence is
/// unaffected when no key is pressed.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Command;

/// Map a key event to a command.  Unrecognized keys are `None` — a no-op
/// for the tick.
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

/// Poll one command without blocking.
///
/// Drains every pending event and keeps the most recent movement key, so a
/// burst of buffered presses does not lag the shooter by several ticks.
/// Quit short-circuits.  Returns `Ok(None)` immediately when nothing is
/// pending.
pub fn poll_command() -> io::Result<Option<Command>> {
    let mut latest = None;
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        {
            if kind != KeyEventKind::Press {
                continue;
            }
            match map_key(code, modifiers) {
                Some(Command::Quit) => return Ok(Some(Command::Quit)),
                Some(cmd) => latest = Some(cmd),
                None => {}
            }
        }
    }
    Ok(latest)
}
