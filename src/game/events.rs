//! Game Events
//!
//! Per-tile movement events produced by the resolver, and turn-level events
//! produced by the state machine for logging and replay checks.

use serde::{Serialize, Deserialize};

use crate::game::grid::Cell;
use crate::game::input::Direction;

/// One source tile's movement in a resolved move.
///
/// A merge yields two events sharing `to`, each carrying its own pre-merge
/// value so both tiles can be animated converging on the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Origin cell in the pre-move grid
    pub from: Cell,
    /// Destination cell in the post-move grid
    pub to: Cell,
    /// Tile value before the merge
    pub value: u32,
    /// Tile took part in a merge
    pub merge: bool,
}

impl MoveEvent {
    /// Create a move event.
    pub const fn new(from: Cell, to: Cell, value: u32, merge: bool) -> Self {
        Self { from, to, value, merge }
    }

    /// Tile stays on its own cell.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.from == self.to
    }
}

/// Why a submitted direction did not start a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// A move is already in flight
    Busy,
    /// Session is over
    GameOver,
    /// Direction leaves the grid unchanged
    NoChange,
}

/// Turn-level event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    /// A move was accepted and its animations started
    MoveStarted {
        /// Tick of acceptance
        tick: u32,
        /// Direction of the move
        direction: Direction,
        /// Number of tile animations started
        moved: u32,
        /// Number of merges (pairs) in the move
        merges: u32,
    },

    /// Input had no effect
    MoveIgnored {
        /// Tick of submission
        tick: u32,
        /// Submitted direction
        direction: Direction,
        /// Why it was dropped
        reason: IgnoreReason,
    },

    /// Last tile animation retired
    AnimationsFinished {
        /// Tick of completion
        tick: u32,
    },

    /// A new tile appeared
    TileSpawned {
        /// Tick of the spawn
        tick: u32,
        /// Cell that received the tile
        cell: Cell,
        /// 2 or 4
        value: u32,
    },

    /// No move can change the grid any more
    GameOver {
        /// Tick of detection
        tick: u32,
        /// Final score
        score: u32,
        /// Highest tile reached
        max_tile: u32,
    },
}

impl TurnEvent {
    /// Tick the event happened at.
    pub fn tick(&self) -> u32 {
        match self {
            TurnEvent::MoveStarted { tick, .. }
            | TurnEvent::MoveIgnored { tick, .. }
            | TurnEvent::AnimationsFinished { tick }
            | TurnEvent::TileSpawned { tick, .. }
            | TurnEvent::GameOver { tick, .. } => *tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary() {
        let e = MoveEvent::new(Cell::new(0, 0), Cell::new(0, 0), 2, true);
        assert!(e.is_stationary());

        let e = MoveEvent::new(Cell::new(0, 3), Cell::new(0, 0), 2, false);
        assert!(!e.is_stationary());
    }

    #[test]
    fn test_turn_event_json_tag() {
        let event = TurnEvent::TileSpawned {
            tick: 12,
            cell: Cell::new(1, 2),
            value: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "tile_spawned");
        assert_eq!(json["value"], 4);
        assert_eq!(event.tick(), 12);
    }
}
