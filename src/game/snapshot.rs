//! Render Snapshots
//!
//! An immutable copy of everything a renderer reads in one frame. Built by
//! value so it can cross to a render thread without borrowing the state
//! machine. JSON for debugging ease, bincode for compact hand-off.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::game::animation::Animation;
use crate::game::grid::Grid;
use crate::game::turn::{TurnState, TurnStateMachine};

/// Snapshot encoding errors.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed.
    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

/// Frame-consistent view of a turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    /// Tick the snapshot was taken at
    pub tick: u32,
    /// Turn phase
    pub state: TurnState,
    /// Game-over overlay level
    pub fade_level: u32,
    /// Sum of all tiles
    pub score: u32,
    /// Post-move grid
    pub grid: Grid,
    /// Tile animations in flight
    pub animations: Vec<Animation>,
}

impl TurnSnapshot {
    /// Copy the renderable state out of a machine.
    pub fn capture(machine: &TurnStateMachine) -> Self {
        Self {
            tick: machine.tick(),
            state: machine.current_state(),
            fade_level: machine.fade_level(),
            score: machine.score(),
            grid: machine.current_grid(),
            animations: machine.active_animations().to_vec(),
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
