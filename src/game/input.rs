//! Direction Input and Move Recording
//!
//! The resolved direction is the only input the core accepts. Raw values
//! (key codes, wire bytes, strings) are validated here at the boundary so
//! an unrecognized value never reaches the resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use thiserror::Error;

// =============================================================================
// DIRECTION
// =============================================================================

/// Direction of travel for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    /// Tiles slide toward column 0
    Left = 0,
    /// Tiles slide toward the last column
    Right = 1,
    /// Tiles slide toward row 0
    Up = 2,
    /// Tiles slide toward the last row
    Down = 3,
}

impl Direction {
    /// All four directions, in game-over probe order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Lines are columns rather than rows.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Tiles travel toward the high index of their line.
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected direction values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectionError {
    /// Numeric code outside 0..=3.
    #[error("unknown direction code {0}")]
    UnknownCode(u8),

    /// Name that is not left/right/up/down.
    #[error("unknown direction name {0:?}")]
    UnknownName(String),
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            2 => Ok(Direction::Up),
            3 => Ok(Direction::Down),
            other => Err(DirectionError::UnknownCode(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(DirectionError::UnknownName(s.to_string())),
        }
    }
}

// =============================================================================
// INPUT LOG
// =============================================================================

/// A direction accepted by the turn state machine at a given tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    /// Tick count when the move was accepted
    pub tick: u32,
    /// Accepted direction
    pub direction: Direction,
}

/// Every accepted move of a session, in order.
///
/// Only accepted moves are recorded: input submitted while animating, or a
/// move that changes nothing, has no effect on state and is left out.
/// Together with the seed this is enough to replay the session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLog {
    entries: Vec<MoveInput>,
}

impl InputLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted move.
    ///
    /// Ticks are non-decreasing; the state machine accepts at most one
    /// move per tick because an accepted move always starts an animation.
    pub fn record(&mut self, tick: u32, direction: Direction) {
        debug_assert!(
            self.entries.last().map_or(true, |last| last.tick <= tick),
            "input log must be recorded in tick order"
        );
        self.entries.push(MoveInput { tick, direction });
    }

    /// All recorded moves.
    pub fn entries(&self) -> &[MoveInput] {
        &self.entries
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves accepted at exactly `tick`.
    ///
    /// Binary search, entries are tick-ordered.
    pub fn inputs_at(&self, tick: u32) -> &[MoveInput] {
        let start = self.entries.partition_point(|e| e.tick < tick);
        let end = self.entries.partition_point(|e| e.tick <= tick);
        &self.entries[start..end]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_code() {
        assert_eq!(Direction::try_from(0u8), Ok(Direction::Left));
        assert_eq!(Direction::try_from(3u8), Ok(Direction::Down));
        assert_eq!(Direction::try_from(4u8), Err(DirectionError::UnknownCode(4)));
        assert_eq!(Direction::try_from(255u8), Err(DirectionError::UnknownCode(255)));
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" Up ".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(DirectionError::UnknownName(_))
        ));
    }

    #[test]
    fn test_direction_display_roundtrips() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
            assert_eq!(Direction::try_from(dir as u8), Ok(dir));
        }
    }

    #[test]
    fn test_direction_axes() {
        assert!(!Direction::Left.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Right.is_reversed());
        assert!(!Direction::Up.is_reversed());
    }

    #[test]
    fn test_input_log_lookup() {
        let mut log = InputLog::new();
        assert!(log.is_empty());

        log.record(0, Direction::Left);
        log.record(9, Direction::Up);
        log.record(20, Direction::Right);

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().last().map(|e| e.tick), Some(20));

        assert_eq!(log.inputs_at(9), &[MoveInput { tick: 9, direction: Direction::Up }]);
        assert!(log.inputs_at(5).is_empty());
        assert!(log.inputs_at(100).is_empty());
    }

    #[test]
    fn test_input_log_serde() {
        let mut log = InputLog::new();
        log.record(3, Direction::Down);

        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"down\""));

        let back: InputLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
