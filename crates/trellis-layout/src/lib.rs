#![forbid(unsafe_code)]

//! Layout primitives and solver.
//!
//! This crate splits a [`Rect`] along one axis into segments:
//!
//! - [`Layout`] - builder holding direction, constraints, margin, flex and spacing
//! - [`Constraint`] - per-segment sizing (Length, Percentage, Ratio, Min, Max, Fill)
//! - [`Flex`] - how unclaimed space and gaps are distributed
//! - [`Spacing`] - gap (or overlap) between adjacent segments
//! - [`strength`] - solver priorities that decide which preference gives way
//! - [`solver`] - the [`ConstraintSolver`] seam, implemented for `cassowary`
//!
//! ```
//! use trellis_layout::{Constraint, Flex, Layout, Rect};
//!
//! let (segments, spacers) = Layout::horizontal([Constraint::Length(10), Constraint::Length(10)])
//!     .flex(Flex::Center)
//!     .split_with_spacers(Rect::new(0, 0, 40, 1));
//!
//! assert_eq!(segments[0].x, 10);
//! assert_eq!(segments[1].x, 20);
//! assert_eq!(spacers.len(), 3);
//! ```

pub mod constraint;
pub mod flex;
pub mod layout;
pub mod solver;
pub mod strength;

pub use constraint::Constraint;
pub use flex::{Flex, Spacing};
pub use layout::Layout;
pub use solver::{ConstraintSolver, LayoutError, Solution};
pub use trellis_core::geometry::{Margin, Position, Rect, Size};

use std::fmt;

/// The axis a layout splits along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

impl Direction {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Direction::Vertical => Direction::Horizontal,
            Direction::Horizontal => Direction::Vertical,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        })
    }
}
