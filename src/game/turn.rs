//! Turn State Machine
//!
//! Sequences one full turn: accept a direction while idle, animate the
//! resolved tile movements, spawn a tile once they finish, then check for
//! game over. Driven by `advance()`, one call per rendering frame.
//!
//! ```text
//!            submit (grid changed)          last animation retired
//!   ┌──────┐ ───────────────────► ┌───────────┐ ──────────► ┌──────────────┐
//!   │ Idle │                      │ Animating │             │ SpawnPending │
//!   └──────┘ ◄──────────────────────────────────────────────└──────────────┘
//!                 spawn, grid still playable          │ spawn, no move left
//!                                                     ▼
//!                                               ┌──────────┐
//!                                               │ GameOver │ (fade only)
//!                                               └──────────┘
//! ```
//!
//! SpawnPending is handled in the same `advance()` that enters it, so a
//! caller never observes it between calls.

use serde::{Serialize, Deserialize};
use tracing::{debug, info, trace};

use crate::core::hash::{StateHash, compute_state_hash};
use crate::core::rng::DeterministicRng;
use crate::game::animation::Animation;
use crate::game::events::{IgnoreReason, TurnEvent};
use crate::game::game_over::is_over;
use crate::game::grid::{self, Grid};
use crate::game::input::{Direction, InputLog};
use crate::game::resolve::resolve;
use crate::game::snapshot::TurnSnapshot;
use crate::game::spawn::{spawn, SpawnConfig};

/// Tiles placed on a fresh grid.
pub const STARTING_TILES: usize = 2;

/// Turn phase. Exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TurnState {
    /// Waiting for a direction
    Idle = 0,
    /// Tiles are sliding; input is ignored
    Animating = 1,
    /// Animations done, tile spawn due this tick
    SpawnPending = 2,
    /// No move can change the grid
    GameOver = 3,
}

/// Configuration for the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    /// Ticks each tile animation lasts
    pub animation_ticks: u32,
    /// Cap for the game-over fade level
    pub fade_max: u32,
    /// Fade increase per tick after game over
    pub fade_step: u32,
    /// Tile spawn configuration
    pub spawn: SpawnConfig,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            animation_ticks: 8,
            fade_max: 200,
            fade_step: 5,
            spawn: SpawnConfig::default(),
        }
    }
}

/// Owner of the grid and the in-flight animations.
///
/// The grid is only ever replaced whole (by a resolved move or a spawn),
/// and readers get copies through [`TurnStateMachine::current_grid`] or
/// [`TurnStateMachine::snapshot`].
#[derive(Clone, Debug)]
pub struct TurnStateMachine {
    grid: Grid,
    state: TurnState,
    animations: Vec<Animation>,
    fade_level: u32,
    tick: u32,
    seed: u64,
    rng: DeterministicRng,
    config: TurnConfig,
    input_log: InputLog,
}

impl TurnStateMachine {
    /// Start a new game: empty grid plus two spawned tiles.
    pub fn new(seed: u64, config: TurnConfig) -> Self {
        let mut machine = Self::with_grid(Grid::create(), seed, config);
        for _ in 0..STARTING_TILES {
            let (next, _) = spawn(&machine.grid, &mut machine.rng, &machine.config.spawn);
            machine.grid = next;
        }
        debug!(seed, grid = ?machine.grid, "new game");
        machine
    }

    /// Start from an existing grid.
    ///
    /// A grid with no possible move starts in `GameOver`.
    pub fn with_grid(grid: Grid, seed: u64, config: TurnConfig) -> Self {
        let state = if is_over(&grid) { TurnState::GameOver } else { TurnState::Idle };
        Self {
            grid,
            state,
            animations: Vec::new(),
            fade_level: 0,
            tick: 0,
            seed,
            rng: DeterministicRng::new(seed),
            config,
            input_log: InputLog::new(),
        }
    }

    /// Submit a direction.
    ///
    /// Only starts a move from `Idle` and only if the grid changes;
    /// otherwise the input is dropped and the returned event says why.
    pub fn submit_direction(&mut self, direction: Direction) -> TurnEvent {
        let blocked = match self.state {
            TurnState::Idle => None,
            TurnState::Animating | TurnState::SpawnPending => Some(IgnoreReason::Busy),
            TurnState::GameOver => Some(IgnoreReason::GameOver),
        };
        if let Some(reason) = blocked {
            trace!(tick = self.tick, %direction, ?reason, "input ignored");
            return self.ignored(direction, reason);
        }

        let resolution = resolve(&self.grid, direction);
        if grid::equals(&resolution.grid, &self.grid) {
            trace!(tick = self.tick, %direction, "move changes nothing");
            return self.ignored(direction, IgnoreReason::NoChange);
        }

        let duration = self.config.animation_ticks;
        let merges = resolution.merge_count();
        self.grid = resolution.grid;
        self.animations = resolution
            .events
            .iter()
            .map(|&event| Animation::new(event, duration))
            .collect();
        self.input_log.record(self.tick, direction);
        self.state = TurnState::Animating;

        debug!(
            tick = self.tick,
            %direction,
            moved = self.animations.len(),
            merges,
            "move started"
        );

        TurnEvent::MoveStarted {
            tick: self.tick,
            direction,
            moved: self.animations.len() as u32,
            merges,
        }
    }

    fn ignored(&self, direction: Direction, reason: IgnoreReason) -> TurnEvent {
        TurnEvent::MoveIgnored {
            tick: self.tick,
            direction,
            reason,
        }
    }

    /// Advance one tick.
    ///
    /// Returns the turn events this tick produced (often none).
    pub fn advance(&mut self) -> Vec<TurnEvent> {
        // Pinned at u32::MAX so the input log stays tick-ordered
        self.tick = self.tick.saturating_add(1);
        let mut events = Vec::new();

        match self.state {
            TurnState::Idle | TurnState::SpawnPending => {}
            TurnState::Animating => {
                for animation in &mut self.animations {
                    animation.step();
                }
                self.animations.retain(|a| !a.is_finished());

                if self.animations.is_empty() {
                    self.state = TurnState::SpawnPending;
                    events.push(TurnEvent::AnimationsFinished { tick: self.tick });
                }
            }
            TurnState::GameOver => {
                self.fade_level = self
                    .fade_level
                    .saturating_add(self.config.fade_step)
                    .min(self.config.fade_max);
            }
        }

        // Same tick as the transition: no extra delay before the spawn
        if self.state == TurnState::SpawnPending {
            self.finish_turn(&mut events);
        }

        events
    }

    /// Spawn a tile, then check for game over. Spawn strictly first.
    fn finish_turn(&mut self, events: &mut Vec<TurnEvent>) {
        let (next, spawned) = spawn(&self.grid, &mut self.rng, &self.config.spawn);
        self.grid = next;

        if let Some(tile) = spawned {
            debug!(tick = self.tick, cell = %tile.cell, value = tile.value, "tile spawned");
            events.push(TurnEvent::TileSpawned {
                tick: self.tick,
                cell: tile.cell,
                value: tile.value,
            });
        }

        if is_over(&self.grid) {
            self.state = TurnState::GameOver;
            info!(
                tick = self.tick,
                score = self.grid.score(),
                max_tile = self.grid.max_tile(),
                "game over"
            );
            events.push(TurnEvent::GameOver {
                tick: self.tick,
                score: self.grid.score(),
                max_tile: self.grid.max_tile(),
            });
        } else {
            self.state = TurnState::Idle;
        }
    }

    /// Copy of the current grid.
    pub fn current_grid(&self) -> Grid {
        self.grid
    }

    /// Tile animations in flight (empty unless `Animating`).
    pub fn active_animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Current phase.
    pub fn current_state(&self) -> TurnState {
        self.state
    }

    /// Game-over overlay level, 0 until game over, capped at `fade_max`.
    pub fn fade_level(&self) -> u32 {
        self.fade_level
    }

    /// Sum of all tiles.
    pub fn score(&self) -> u32 {
        self.grid.score()
    }

    /// Ticks advanced so far.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Seed the session RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted moves so far.
    pub fn input_log(&self) -> &InputLog {
        &self.input_log
    }

    /// Active configuration.
    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Immutable view for a renderer.
    pub fn snapshot(&self) -> TurnSnapshot {
        TurnSnapshot::capture(self)
    }

    /// Hash of the full turn state, including the RNG position.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.seed, |hasher| {
            self.grid.hash_into(hasher);
            hasher.update_u8(self.state as u8);
            hasher.update_u32(self.fade_level);

            for animation in &self.animations {
                hasher.update_vec2(animation.position());
                hasher.update_u32(animation.event.value);
                hasher.update_bool(animation.event.merge);
                hasher.update_u32(animation.frame);
            }

            let [s0, s1] = self.rng.state();
            hasher.update_u64(s0);
            hasher.update_u64(s1);
        })
    }
}

/// Re-run a session started with [`TurnStateMachine::new`].
///
/// Submits each logged move at its recorded tick and advances until
/// `ticks`. Same seed and log give the same final hash.
pub fn replay(seed: u64, config: TurnConfig, log: &InputLog, ticks: u32) -> TurnStateMachine {
    let mut machine = TurnStateMachine::new(seed, config);

    loop {
        for input in log.inputs_at(machine.tick()) {
            machine.submit_direction(input.direction);
        }
        if machine.tick() >= ticks {
            break;
        }
        machine.advance();
    }

    machine
}

// =============================================================================
// TESTS
// =============================================================================
