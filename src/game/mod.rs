//! Game Logic Module
//!
//! All turn simulation code. 100% deterministic given a seed.
//!
//! ## Module Structure
//!
//! - `grid`: The value matrix and its read queries
//! - `input`: Direction parsing and the accepted-move log
//! - `resolve`: Compaction, merging and per-tile move events
//! - `events`: Move events and turn events
//! - `spawn`: Random tile insertion
//! - `game_over`: Terminal-state detection
//! - `animation`: Timed tile movements
//! - `turn`: The turn state machine
//! - `snapshot`: Immutable render views

pub mod grid;
pub mod input;
pub mod resolve;
pub mod events;
pub mod spawn;
pub mod game_over;
pub mod animation;
pub mod turn;
pub mod snapshot;

// Re-export key types
pub use grid::{Cell, Grid, GridError, GRID_SIZE, MAX_TILE};
pub use input::{Direction, DirectionError, InputLog, MoveInput};
pub use resolve::{resolve, Resolution};
pub use events::{IgnoreReason, MoveEvent, TurnEvent};
pub use spawn::{spawn, SpawnConfig, SpawnedTile};
pub use game_over::is_over;
pub use animation::Animation;
pub use turn::{replay, TurnConfig, TurnState, TurnStateMachine};
pub use snapshot::{SnapshotError, TurnSnapshot};
