/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (and, where needed, an RNG handle) and returns a brand-new
/// `World`.  Side effects are limited to the injected RNG; wall-clock
/// decisions arrive pre-made as a `TickEvents`.

use std::collections::HashSet;

use rand::Rng;

use crate::entities::{Enemy, Projectile, Shooter, Status, World};
use crate::timers::TickEvents;

/// Starting column of the shooter on the reference 30×160 field.
const SHOOTER_START_COL: usize = 70;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world for the given field dimensions.
pub fn init_state(rows: usize, cols: usize) -> World {
    World {
        rows,
        cols,
        shooter: Shooter {
            col: SHOOTER_START_COL.min(cols - 2),
        },
        enemies: Vec::new(),
        projectiles: Vec::new(),
        status: Status::Playing,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_shooter_left(state: &World) -> World {
    let new_col = state.shooter.col.saturating_sub(1).max(state.min_col());
    World {
        shooter: Shooter { col: new_col },
        ..state.clone()
    }
}

pub fn move_shooter_right(state: &World) -> World {
    let new_col = (state.shooter.col + 1).min(state.max_col());
    World {
        shooter: Shooter { col: new_col },
        ..state.clone()
    }
}

// ── Per-tick step (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one tick.  `events` says which cadence clocks
/// fired; all randomness comes through `rng` so callers control determinism
/// (useful for tests with a seeded RNG).
///
/// Order within the tick: fire, spawn, fall (with the loss check), then
/// projectile advance with collision resolution.  Shooter movement happens
/// before the tick, in the caller.
pub fn tick(state: &World, events: TickEvents, rng: &mut impl Rng) -> World {
    let mut world = state.clone();

    if events.fire {
        fire(&mut world);
    }
    if events.spawn {
        spawn_enemy(&mut world, rng);
    }
    if events.fall {
        fall_enemies(&mut world);
        // Runs every fall-tick, not only when a move just occurred.
        if world.enemies.iter().any(|e| e.row >= world.loss_row()) {
            world.status = Status::Lost;
        }
    }
    advance_projectiles(&mut world);

    world
}

/// Append a projectile just above the shooter.  No overlap check — two
/// projectiles may share a cell and advance together.
fn fire(world: &mut World) {
    world.projectiles.push(Projectile {
        row: world.fire_row(),
        col: world.shooter.col,
    });
}

/// Spawn an enemy at a uniformly random interior column of the top
/// interior row.  An occupied target cell drops the spawn; no retry.
fn spawn_enemy(world: &mut World, rng: &mut impl Rng) {
    let col = rng.gen_range(world.min_col()..=world.max_col());
    let row = world.spawn_row();
    let occupied = world.enemies.iter().any(|e| (e.row, e.col) == (row, col))
        || world.projectiles.iter().any(|p| (p.row, p.col) == (row, col));
    if !occupied {
        world.enemies.push(Enemy { row, col });
    }
}

/// Move every enemy down one row where the cell below is free.
///
/// Enemies are processed bottom-up with a live occupancy set: a stacked
/// column shifts one row per pass (the cell an enemy vacates frees up for
/// the one above it within the same pass), while no enemy ever moves twice
/// in one tick.  Enemies and projectiles block the fall; the shooter does
/// not — an enemy that slips past it is about to end the game anyway.
fn fall_enemies(world: &mut World) {
    let mut occupied: HashSet<(usize, usize)> = world
        .enemies
        .iter()
        .map(|e| (e.row, e.col))
        .chain(world.projectiles.iter().map(|p| (p.row, p.col)))
        .collect();

    let mut order: Vec<usize> = (0..world.enemies.len()).collect();
    order.sort_by(|&a, &b| world.enemies[b].row.cmp(&world.enemies[a].row));

    for i in order {
        let (row, col) = (world.enemies[i].row, world.enemies[i].col);
        if row >= world.loss_row() {
            continue; // already on the bottom border row
        }
        let below = (row + 1, col);
        if !occupied.contains(&below) {
            occupied.remove(&(row, col));
            occupied.insert(below);
            world.enemies[i].row += 1;
        }
    }
}

/// Rebuild the projectile collection one row up, resolving exits and hits.
///
/// A projectile leaving the top interior row is discarded outright; one
/// advancing into an enemy cell removes both (the first of two stacked
/// projectiles takes the kill, the second flies on through the now-empty
/// cell).  Survivors land in a fresh collection so removed entries never
/// reappear.
fn advance_projectiles(world: &mut World) {
    let mut survivors: Vec<Projectile> = Vec::with_capacity(world.projectiles.len());
    let projectiles = std::mem::take(&mut world.projectiles);

    for p in &projectiles {
        if p.row <= 1 {
            continue; // exits the play field above the top interior row
        }
        let next = (p.row - 1, p.col);
        if let Some(i) = world
            .enemies
            .iter()
            .position(|e| (e.row, e.col) == next)
        {
            world.enemies.swap_remove(i); // hit destroys both
        } else {
            survivors.push(Projectile {
                row: next.0,
                col: next.1,
            });
        }
    }

    world.projectiles = survivors;
}
