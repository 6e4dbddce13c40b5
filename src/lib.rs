//! # Twenty48 Engine
//!
//! Deterministic sliding-tile (2048) engine: move resolution with per-tile
//! movement events, and a tick-driven turn state machine that animates
//! moves, spawns tiles and detects game over.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     TWENTY48 ENGINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fixed.rs    - Q16.16 fixed-point arithmetic             │
//! │  ├── vec2.rs     - Fixed-point positions in cell units       │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── grid.rs     - 4×4 value matrix                          │
//! │  ├── input.rs    - Directions and move log                   │
//! │  ├── resolve.rs  - Compaction, merge, move events            │
//! │  ├── spawn.rs    - Tile spawning                             │
//! │  ├── game_over.rs- Terminal-state detection                  │
//! │  ├── animation.rs- Timed tile movement                       │
//! │  ├── turn.rs     - Turn state machine                        │
//! │  └── snapshot.rs - Immutable render views                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! - No floating-point arithmetic in game logic
//! - No system time dependencies
//! - All randomness from seeded Xorshift128+
//!
//! Given an identical seed and move log, a session replays to the
//! **identical state hash**.
//!
//! ## Example
//!
//! ```
//! use twenty48::{Direction, Grid, TurnConfig, TurnState, TurnStateMachine};
//!
//! let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut machine = TurnStateMachine::with_grid(grid, 42, TurnConfig::default());
//!
//! machine.submit_direction(Direction::Left);
//! assert_eq!(machine.current_grid().rows()[0], [4, 0, 0, 0]);
//!
//! while machine.current_state() == TurnState::Animating {
//!     machine.advance();
//! }
//! assert_eq!(machine.current_state(), TurnState::Idle);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use core::fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use core::vec2::FixedVec2;
pub use core::rng::DeterministicRng;
pub use game::grid::{Cell, Grid, GRID_SIZE};
pub use game::input::Direction;
pub use game::turn::{TurnConfig, TurnState, TurnStateMachine};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nominal rendering rate the default animation length is tuned for (Hz)
pub const TICK_RATE: u32 = 60;
