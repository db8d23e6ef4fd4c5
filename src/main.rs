use std::io::{stdout, BufWriter, Write};
use std::thread;
use std::time::Instant;

use crossterm::{cursor, terminal, ExecutableCommand};
use rand::thread_rng;

use star_defender::compute::{init_state, move_shooter_left, move_shooter_right, tick};
use star_defender::display;
use star_defender::entities::{Command, Status, COLS, ROWS};
use star_defender::grid::Grid;
use star_defender::input::poll_command;
use star_defender::timers::{Cadences, Timings};

/// How a game ended.  The loop reports it; only `main` decides process
/// lifetime.
enum Outcome {
    Quit,
    Lost,
}

// ── Terminal guard ────────────────────────────────────────────────────────────

/// Scoped terminal configuration: raw mode, alternate screen, hidden
/// cursor.  `Drop` restores the original state on every exit path — quit,
/// loss, error return, and panic unwind alike.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on the guard exists, so an error below still restores
        // raw mode on the way out.
        let guard = TerminalGuard;
        stdout().execute(terminal::EnterAlternateScreen)?;
        stdout().execute(cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = stdout().execute(cursor::Show);
        let _ = stdout().execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run ticks until the player quits or an enemy reaches the bottom row.
///
/// Per tick: poll at most one command, move the shooter (or bail out on
/// quit before any further mutation), advance the simulation by whichever
/// cadences are due, redraw, then sleep out the remainder of the tick.
fn game_loop<W: Write>(out: &mut W) -> std::io::Result<Outcome> {
    let mut rng = thread_rng();
    let timings = Timings::default();
    let mut cadences = Cadences::new(&timings, Instant::now());
    let mut state = init_state(ROWS, COLS);

    loop {
        let tick_start = Instant::now();

        match poll_command()? {
            Some(Command::Quit) => return Ok(Outcome::Quit),
            Some(Command::Left) => state = move_shooter_left(&state),
            Some(Command::Right) => state = move_shooter_right(&state),
            None => {}
        }

        let events = cadences.poll(tick_start);
        state = tick(&state, events, &mut rng);

        if state.status == Status::Lost {
            return Ok(Outcome::Lost);
        }

        display::render(out, &Grid::from_state(&state))?;

        let elapsed = tick_start.elapsed();
        if elapsed < timings.tick_delay {
            thread::sleep(timings.tick_delay - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let outcome = {
        let _guard = TerminalGuard::acquire()?;
        let mut out = BufWriter::new(stdout());
        game_loop(&mut out)?
        // guard drops here, restoring the terminal before any message
    };

    match outcome {
        Outcome::Lost => println!("You lost"),
        Outcome::Quit => println!("Quit."),
    }
    Ok(())
}
