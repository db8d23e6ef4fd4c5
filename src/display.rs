/// Rendering layer — all terminal output lives here.
///
/// `render` receives a mutable writer and the derived marker grid.  No
/// game logic is performed; this module only translates cells into
/// terminal commands.  The whole grid is redrawn every tick — no diffing.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::Marker;
use crate::grid::Grid;

/// Glyph drawn on empty border cells, framing the play field.
pub const FILLER_GLYPH: char = '0';

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SHOOTER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_TRAIL: Color = Color::Cyan;
const C_EMPTY: Color = Color::Reset;

fn cell_face(grid: &Grid, row: usize, col: usize) -> (char, Color) {
    match grid.get(row, col) {
        Marker::Empty if grid.is_border(row, col) => (FILLER_GLYPH, C_BORDER),
        Marker::Empty => (' ', C_EMPTY),
        Marker::Shooter => (Marker::Shooter.glyph(), C_SHOOTER),
        Marker::Enemy => (Marker::Enemy.glyph(), C_ENEMY),
        Marker::Trail => (Marker::Trail.glyph(), C_TRAIL),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: clear, then draw every cell row by row.
/// Consecutive same-coloured cells are batched into one `Print`.
pub fn render<W: Write>(out: &mut W, grid: &Grid) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for row in 0..grid.rows() {
        out.queue(cursor::MoveTo(0, row as u16))?;

        let mut run = String::with_capacity(grid.cols());
        let mut run_color = None;
        for col in 0..grid.cols() {
            let (glyph, color) = cell_face(grid, row, col);
            if run_color != Some(color) {
                if !run.is_empty() {
                    out.queue(Print(std::mem::take(&mut run)))?;
                }
                out.queue(style::SetForegroundColor(color))?;
                run_color = Some(color);
            }
            run.push(glyph);
        }
        if !run.is_empty() {
            out.queue(Print(run))?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, grid.rows().saturating_sub(1) as u16))?;
    out.flush()?;
    Ok(())
}
