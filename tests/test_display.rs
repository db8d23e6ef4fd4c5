use star_defender::compute::init_state;
use star_defender::display::{render, FILLER_GLYPH};
use star_defender::entities::{Enemy, Projectile, COLS, ROWS};
use star_defender::grid::Grid;

fn render_to_string(grid: &Grid) -> String {
    let mut out: Vec<u8> = Vec::new();
    render(&mut out, grid).expect("render to a Vec cannot fail");
    String::from_utf8(out).expect("crossterm output is valid UTF-8")
}

#[test]
fn border_rows_draw_as_filler_runs() {
    let frame = render_to_string(&Grid::new(ROWS, COLS));
    // Top and bottom border rows are fully empty, so each is emitted as
    // one contiguous run of the filler glyph.
    let full_border: String = std::iter::repeat(FILLER_GLYPH).take(COLS).collect();
    assert_eq!(frame.matches(&full_border).count(), 2);
}

#[test]
fn interior_empty_cells_draw_as_spaces() {
    let frame = render_to_string(&Grid::new(ROWS, COLS));
    // An interior row is filler, 158 spaces, filler — the space run is
    // emitted contiguously.
    let interior_run = " ".repeat(COLS - 2);
    assert!(frame.contains(&interior_run));
}

#[test]
fn entities_appear_with_their_glyphs() {
    let mut s = init_state(ROWS, COLS);
    s.enemies.push(Enemy { row: 3, col: 40 });
    s.projectiles.push(Projectile { row: 12, col: 70 });
    let frame = render_to_string(&Grid::from_state(&s));
    assert!(frame.contains('A'));
    assert!(frame.contains('#'));
    assert!(frame.contains('.'));
}

#[test]
fn frame_is_a_full_redraw() {
    // Rendering the same grid twice produces identical output — there is
    // no diffing state carried between frames.
    let grid = Grid::from_state(&init_state(ROWS, COLS));
    assert_eq!(render_to_string(&grid), render_to_string(&grid));
}
