/// All game entity types — pure data, no logic.

/// Reference play-field dimensions, borders included.
pub const ROWS: usize = 30;
pub const COLS: usize = 160;

/// What a single grid cell shows.  The grid holds exactly one marker per
/// cell; border framing is a rendering concern, not a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Empty,
    Shooter,
    Enemy,
    Trail,
}

impl Marker {
    pub fn glyph(self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::Shooter => 'A',
            Marker::Enemy => '#',
            Marker::Trail => '.',
        }
    }
}

/// A recognized keypress, after mapping.  Everything else is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shooter {
    /// Column only — the shooter always sits on the fixed shooter row.
    pub col: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projectile {
    pub row: usize,
    pub col: usize,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Entities are the source of truth; the
/// marker grid is derived from this each tick for rendering.  Cloneable so
/// pure update functions can return a new copy without mutating the
/// original.
#[derive(Clone, Debug)]
pub struct World {
    pub rows: usize,
    pub cols: usize,
    pub shooter: Shooter,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub status: Status,
}

impl World {
    /// Topmost interior row — where enemies spawn.
    pub fn spawn_row(&self) -> usize {
        1
    }

    /// Row the shooter occupies (second-to-last row).
    pub fn shooter_row(&self) -> usize {
        self.rows - 2
    }

    /// Row a freshly fired projectile starts on, just above the shooter.
    pub fn fire_row(&self) -> usize {
        self.rows - 3
    }

    /// The bottom border row.  An enemy falling onto it loses the game.
    pub fn loss_row(&self) -> usize {
        self.rows - 1
    }

    /// Interior column bounds for the shooter and enemy spawns.
    pub fn min_col(&self) -> usize {
        1
    }

    pub fn max_col(&self) -> usize {
        self.cols - 2
    }
}
