#![forbid(unsafe_code)]

//! Seam between the layout code and the linear constraint solver.
//!
//! The layout only needs three things from a solver: fresh variables,
//! weighted (in)equalities over them, and a solved value per variable.
//! [`ConstraintSolver`] captures exactly that, and is implemented for
//! [`cassowary::Solver`].

use std::collections::HashMap;
use std::fmt;

use cassowary::WeightedRelation::{EQ, GE, LE};
use cassowary::{AddConstraintError, Expression, Variable};

use crate::strength::EMPTY_EQ;

/// Solver values are kept at this many sub-cell units per cell, so float
/// noise in the solver is rounded away instead of shifting whole cells.
pub(crate) const FLOAT_PRECISION_MULTIPLIER: f64 = 100.0;

/// Resolved value for every variable the solver moved away from zero.
pub type Solution = HashMap<Variable, f64>;

/// A linear constraint solver with weighted (relaxable) constraints.
pub trait ConstraintSolver {
    /// Create a fresh real-valued variable.
    fn new_variable(&mut self) -> Variable {
        Variable::new()
    }

    /// Add a constraint. Only [`REQUIRED`](crate::strength::REQUIRED)
    /// constraints can be rejected; weaker ones are relaxed instead.
    fn add_constraint(&mut self, constraint: cassowary::Constraint) -> Result<(), LayoutError>;

    /// Solve and return the value of each variable. Variables missing from
    /// the result are zero.
    fn solve(&mut self) -> Solution;
}

impl ConstraintSolver for cassowary::Solver {
    fn add_constraint(&mut self, constraint: cassowary::Constraint) -> Result<(), LayoutError> {
        cassowary::Solver::add_constraint(self, constraint).map_err(LayoutError::from)
    }

    fn solve(&mut self) -> Solution {
        self.fetch_changes().iter().copied().collect()
    }
}

/// Errors surfaced by the fallible layout entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The solver rejected a required constraint.
    Solver(String),
    /// A fixed-size destructure asked for a different number of rects than
    /// the layout produced.
    AreaCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Solver(reason) => write!(f, "constraint solver failed: {reason}"),
            LayoutError::AreaCountMismatch { expected, actual } => write!(
                f,
                "layout produced {actual} areas but {expected} were requested"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<AddConstraintError> for LayoutError {
    fn from(err: AddConstraintError) -> Self {
        let reason = match err {
            AddConstraintError::DuplicateConstraint => "duplicate constraint".to_owned(),
            AddConstraintError::UnsatisfiableConstraint => "unsatisfiable constraint".to_owned(),
            AddConstraintError::InternalSolverError(msg) => format!("internal error: {msg}"),
        };
        LayoutError::Solver(reason)
    }
}

/// The `(start, end)` variable pair for one segment or spacer.
///
/// Sizes handed to the helpers below are in cells and get scaled by
/// [`FLOAT_PRECISION_MULTIPLIER`]; expressions are already in scaled units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Element {
    pub(crate) start: Variable,
    pub(crate) end: Variable,
}

impl From<(Variable, Variable)> for Element {
    fn from((start, end): (Variable, Variable)) -> Self {
        Self { start, end }
    }
}

impl Element {
    pub(crate) fn size(&self) -> Expression {
        self.end - self.start
    }

    pub(crate) fn has_max_size(&self, size: u16, strength: f64) -> cassowary::Constraint {
        self.size() | LE(strength) | (f64::from(size) * FLOAT_PRECISION_MULTIPLIER)
    }

    pub(crate) fn has_min_size(&self, size: f64, strength: f64) -> cassowary::Constraint {
        self.size() | GE(strength) | (size * FLOAT_PRECISION_MULTIPLIER)
    }

    pub(crate) fn has_int_size(&self, size: u16, strength: f64) -> cassowary::Constraint {
        self.size() | EQ(strength) | (f64::from(size) * FLOAT_PRECISION_MULTIPLIER)
    }

    /// Spacing is signed, so overlaps produce negative spacer targets.
    pub(crate) fn has_spacing(&self, spacing: f64, strength: f64) -> cassowary::Constraint {
        self.size() | EQ(strength) | (spacing * FLOAT_PRECISION_MULTIPLIER)
    }

    pub(crate) fn has_size<E: Into<Expression>>(
        &self,
        size: E,
        strength: f64,
    ) -> cassowary::Constraint {
        self.size() | EQ(strength) | size.into()
    }

    pub(crate) fn has_double_size<E: Into<Expression>>(
        &self,
        size: E,
        strength: f64,
    ) -> cassowary::Constraint {
        self.size() | EQ(strength) | (size.into() * 2.0)
    }

    pub(crate) fn is_empty(&self) -> cassowary::Constraint {
        self.size() | EQ(EMPTY_EQ) | 0.0
    }
}

impl From<Element> for Expression {
    fn from(element: Element) -> Self {
        element.size()
    }
}

impl From<&Element> for Expression {
    fn from(element: &Element) -> Self {
        element.size()
    }
}
