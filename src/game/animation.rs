//! Tile Animations
//!
//! A move event plus a frame counter. Owned by the turn state machine for
//! the lifetime of one move and retired once `frame >= duration`.

use serde::{Serialize, Deserialize};

use crate::core::fixed::{Fixed, progress_ratio};
use crate::core::vec2::FixedVec2;
use crate::game::events::MoveEvent;

/// One tile sliding from its origin to its destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Movement being animated
    pub event: MoveEvent,
    /// Ticks elapsed (starts at 0)
    pub frame: u32,
    /// Total ticks
    pub duration: u32,
}

impl Animation {
    /// Start animating an event.
    pub fn new(event: MoveEvent, duration: u32) -> Self {
        Self {
            event,
            frame: 0,
            duration,
        }
    }

    /// Advance one tick.
    #[inline]
    pub fn step(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    /// Done animating.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frame >= self.duration
    }

    /// `min(frame / duration, 1)` as fixed-point.
    #[inline]
    pub fn progress(&self) -> Fixed {
        progress_ratio(self.frame, self.duration)
    }

    /// Interpolated tile position in cell-grid coordinates
    /// (`x` = column, `y` = row).
    pub fn position(&self) -> FixedVec2 {
        let from = self.event.from.position();
        let to = self.event.to.position();
        from.lerp(to, self.progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixed::{to_fixed, FIXED_HALF, FIXED_ONE};
    use crate::game::grid::Cell;

    fn slide_left() -> MoveEvent {
        MoveEvent::new(Cell::new(1, 3), Cell::new(1, 0), 2, false)
    }

    #[test]
    fn test_animation_lifecycle() {
        let mut anim = Animation::new(slide_left(), 8);
        assert_eq!(anim.progress(), 0);
        assert!(!anim.is_finished());

        for _ in 0..4 {
            anim.step();
        }
        assert_eq!(anim.progress(), FIXED_HALF);
        assert!(!anim.is_finished());

        for _ in 0..4 {
            anim.step();
        }
        assert_eq!(anim.progress(), FIXED_ONE);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_animation_position() {
        let mut anim = Animation::new(slide_left(), 8);
        assert_eq!(anim.position(), FixedVec2::from_ints(3, 1));

        for _ in 0..4 {
            anim.step();
        }
        assert_eq!(anim.position(), FixedVec2::new(to_fixed(1.5), to_fixed(1.0)));

        // Overshoot clamps to the destination
        for _ in 0..10 {
            anim.step();
        }
        assert_eq!(anim.position(), FixedVec2::from_ints(0, 1));
    }
}
