#![forbid(unsafe_code)]

//! One-axis layout resolved by a linear constraint solver.

use std::iter;

use cassowary::Variable;
use cassowary::WeightedRelation::{EQ, GE, LE};
use itertools::Itertools;
use trellis_core::geometry::{Margin, Rect};
use trellis_core::{debug_span, error, trace, warn};

use crate::solver::{ConstraintSolver, Element, FLOAT_PRECISION_MULTIPLIER, LayoutError, Solution};
use crate::strength::{
    ALL_SEGMENT_GROW, FILL_GROW, FILL_SCALE_EQ, GROW, LENGTH_SIZE_EQ, MAX_SIZE_EQ, MAX_SIZE_LE,
    MIN_SIZE_EQ, MIN_SIZE_GE, PERCENTAGE_SIZE_EQ, RATIO_SIZE_EQ, REQUIRED, SPACE_GROW,
    SPACER_SIZE_EQ,
};
use crate::{Constraint, Direction, Flex, Spacing};

// A split produces two lists of rects:
//
// 1. segments, one per constraint, in constraint order
// 2. spacers around and between the segments
//
// <------------------------------------80 px------------------------------------->
// ┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐
//   1  │        a         │  2  │         b        │  3  │         c        │  4
// └   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘
//
// There is always one more spacer than there are segments.

/// A set of constraints applied along one axis of an area.
///
/// A layout is built from:
/// - a [`Direction`] (which axis is split)
/// - a list of [`Constraint`]s, one per output segment
/// - a [`Margin`] removed from the area before splitting
/// - a [`Flex`] policy for unclaimed space
/// - a [`Spacing`] between adjacent segments
///
/// Splitting is a pure function of these and the area: every call builds a
/// fresh solver and nothing is cached between calls.
///
/// ```
/// use trellis_layout::{Constraint, Layout, Rect};
///
/// let layout = Layout::horizontal([Constraint::Length(20), Constraint::Fill(1)]);
/// let [sidebar, body] = layout.areas(Rect::new(0, 0, 80, 24));
/// assert_eq!(sidebar, Rect::new(0, 0, 20, 24));
/// assert_eq!(body, Rect::new(20, 0, 60, 24));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Layout {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Margin,
    flex: Flex,
    spacing: Spacing,
}

impl Layout {
    /// Create a layout with the given direction and constraints.
    pub fn new<I>(direction: Direction, constraints: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        Self {
            direction,
            constraints: constraints.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a new vertical layout (segments stacked top to bottom).
    pub fn vertical<I>(constraints: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        Self::new(Direction::Vertical, constraints)
    }

    /// Create a new horizontal layout (segments side by side).
    pub fn horizontal<I>(constraints: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        Self::new(Direction::Horizontal, constraints)
    }

    /// Set the layout direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the constraints.
    #[must_use]
    pub fn constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Constraint>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    /// Set the same margin on all four sides.
    #[must_use]
    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = Margin::uniform(margin);
        self
    }

    /// Set the left and right margin.
    #[must_use]
    pub fn horizontal_margin(mut self, horizontal: u16) -> Self {
        self.margin.horizontal = horizontal;
        self
    }

    /// Set the top and bottom margin.
    #[must_use]
    pub fn vertical_margin(mut self, vertical: u16) -> Self {
        self.margin.vertical = vertical;
        self
    }

    /// Set how unclaimed space is distributed.
    #[must_use]
    pub fn flex(mut self, flex: Flex) -> Self {
        self.flex = flex;
        self
    }

    /// Set the gap between adjacent segments.
    ///
    /// Accepts a [`Spacing`] or an integer; negative integers overlap.
    /// The `Space*` flex policies treat the spacing as a minimum gap.
    #[must_use]
    pub fn spacing<T: Into<Spacing>>(mut self, spacing: T) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Number of constraints (and thus segments from [`split`](Self::split)).
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Split `area` into one rect per constraint.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        self.split_with_spacers(area).0
    }

    /// Split `area` into segments and the spacers around them.
    ///
    /// There is always one more spacer than there are segments. If the
    /// solver fails, every rect collapses to zero size at the inner area's
    /// origin instead of panicking.
    pub fn split_with_spacers(&self, area: Rect) -> (Vec<Rect>, Vec<Rect>) {
        let mut solver = cassowary::Solver::new();
        match self.split_with_solver(area, &mut solver) {
            Ok(result) => result,
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            Err(err) => {
                error!(error = %err, "layout solve failed, collapsing segments");
                self.collapsed(area)
            }
        }
    }

    /// Fallible form of [`split_with_spacers`](Self::split_with_spacers).
    pub fn try_split_with_spacers(&self, area: Rect) -> Result<(Vec<Rect>, Vec<Rect>), LayoutError> {
        let mut solver = cassowary::Solver::new();
        self.split_with_solver(area, &mut solver)
    }

    /// Split `area` into exactly `N` segments.
    ///
    /// # Panics
    ///
    /// Panics if the layout does not have exactly `N` constraints. Use
    /// [`try_areas`](Self::try_areas) to get an error instead.
    pub fn areas<const N: usize>(&self, area: Rect) -> [Rect; N] {
        match self.try_areas(area) {
            Ok(areas) => areas,
            Err(err) => panic!("{err}"),
        }
    }

    /// Split `area` into exactly `N` segments, or report the mismatch.
    pub fn try_areas<const N: usize>(&self, area: Rect) -> Result<[Rect; N], LayoutError> {
        let (segments, _) = self.try_split_with_spacers(area)?;
        let actual = segments.len();
        segments
            .try_into()
            .map_err(|_| LayoutError::AreaCountMismatch {
                expected: N,
                actual,
            })
    }

    /// Split `area` and return exactly `N` spacers, one more than the
    /// number of segments.
    ///
    /// # Panics
    ///
    /// Panics if `N` is not the spacer count this layout produces.
    pub fn spacers<const N: usize>(&self, area: Rect) -> [Rect; N] {
        let (_, spacers) = self.split_with_spacers(area);
        let actual = spacers.len();
        match spacers.try_into() {
            Ok(spacers) => spacers,
            Err(_) => panic!(
                "{}",
                LayoutError::AreaCountMismatch {
                    expected: N,
                    actual,
                }
            ),
        }
    }

    /// Resolve the layout with a caller-supplied solver.
    ///
    /// The solver should be fresh; constraints from earlier solves would
    /// leak into this one.
    pub fn split_with_solver<S: ConstraintSolver>(
        &self,
        area: Rect,
        solver: &mut S,
    ) -> Result<(Vec<Rect>, Vec<Rect>), LayoutError> {
        let inner_area = area.inner(self.margin);
        let span = debug_span!(
            "layout_split",
            direction = %self.direction,
            flex = %self.flex,
            segments = self.constraints.len()
        );
        let _guard = span.enter();

        let (area_start, area_end) = match self.direction {
            Direction::Horizontal => (
                f64::from(inner_area.x) * FLOAT_PRECISION_MULTIPLIER,
                f64::from(inner_area.right()) * FLOAT_PRECISION_MULTIPLIER,
            ),
            Direction::Vertical => (
                f64::from(inner_area.y) * FLOAT_PRECISION_MULTIPLIER,
                f64::from(inner_area.bottom()) * FLOAT_PRECISION_MULTIPLIER,
            ),
        };

        // ```plain
        // <───────────────────────────────────area_size──────────────────────────────────>
        // ┌─area_start                                                          area_end─┐
        // V                                                                              V
        // ┌────┬───────────────────┬────┬─────variables─────┬────┬───────────────────┬────┐
        // │    │                   │    │                   │    │                   │    │
        // V    V                   V    V                   V    V                   V    V
        // ┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐┌──────────────────┐┌   ┐
        //      │     Max(20)      │     │      Max(20)     │     │      Max(20)     │
        // └   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘└──────────────────┘└   ┘
        // ^    ^                   ^    ^                   ^    ^                   ^    ^
        // └v0  └v1                 └v2  └v3                 └v4  └v5                 └v6  └v7
        // ```
        //
        // Spacers are (v0, v1), (v2, v3), ...; segments are (v1, v2), (v3, v4), ...
        // Adjacent elements share a variable, so their sizes always add up to the area.
        let variable_count = self.constraints.len() * 2 + 2;
        let variables: Vec<Variable> = iter::repeat_with(|| solver.new_variable())
            .take(variable_count)
            .collect();
        let spacers: Vec<Element> = variables
            .iter()
            .tuples()
            .map(|(&start, &end)| Element { start, end })
            .collect();
        let segments: Vec<Element> = variables
            .iter()
            .skip(1)
            .tuples()
            .map(|(&start, &end)| Element { start, end })
            .collect();

        let area_size = Element::from((variables[0], variables[variable_count - 1]));
        configure_area(solver, area_size, area_start, area_end)?;
        configure_variable_in_area_constraints(solver, &variables, area_size)?;
        configure_variable_constraints(solver, &variables)?;
        configure_flex_constraints(solver, area_size, &spacers, self.flex, self.spacing)?;
        configure_constraints(solver, area_size, &segments, &self.constraints, self.flex)?;
        configure_fill_constraints(solver, &segments, &self.constraints, self.flex)?;

        if self.flex != Flex::Legacy {
            for (left, right) in segments.iter().tuple_windows() {
                solver.add_constraint(left.has_size(right, ALL_SEGMENT_GROW))?;
            }
        }

        let values = solver.solve();
        let segment_rects = changes_to_rects(&values, &segments, inner_area, self.direction);
        let spacer_rects = changes_to_rects(&values, &spacers, inner_area, self.direction);

        trace!(
            segments = segment_rects.len(),
            spacers = spacer_rects.len(),
            "layout resolved"
        );
        Ok((segment_rects, spacer_rects))
    }

    /// Zero-sized rects at the inner area's origin, one per segment and spacer.
    fn collapsed(&self, area: Rect) -> (Vec<Rect>, Vec<Rect>) {
        let inner_area = area.inner(self.margin);
        let empty = Rect::new(inner_area.x, inner_area.y, 0, 0);
        (
            vec![empty; self.constraints.len()],
            vec![empty; self.constraints.len() + 1],
        )
    }
}

fn configure_area<S: ConstraintSolver>(
    solver: &mut S,
    area: Element,
    area_start: f64,
    area_end: f64,
) -> Result<(), LayoutError> {
    solver.add_constraint(area.start | EQ(REQUIRED) | area_start)?;
    solver.add_constraint(area.end | EQ(REQUIRED) | area_end)?;
    Ok(())
}

fn configure_variable_in_area_constraints<S: ConstraintSolver>(
    solver: &mut S,
    variables: &[Variable],
    area: Element,
) -> Result<(), LayoutError> {
    // all variables are in the range [area.start, area.end]
    for &variable in variables {
        solver.add_constraint(variable | GE(REQUIRED) | area.start)?;
        solver.add_constraint(variable | LE(REQUIRED) | area.end)?;
    }
    Ok(())
}

fn configure_variable_constraints<S: ConstraintSolver>(
    solver: &mut S,
    variables: &[Variable],
) -> Result<(), LayoutError> {
    // Every segment starts before it ends. Spacers are left unordered so an
    // overlap can make them negative.
    for (&left, &right) in variables.iter().skip(1).tuples() {
        solver.add_constraint(left | LE(REQUIRED) | right)?;
    }
    Ok(())
}

fn configure_constraints<S: ConstraintSolver>(
    solver: &mut S,
    area: Element,
    segments: &[Element],
    constraints: &[Constraint],
    flex: Flex,
) -> Result<(), LayoutError> {
    for (&constraint, segment) in constraints.iter().zip(segments) {
        match constraint {
            Constraint::Max(max) => {
                solver.add_constraint(segment.has_max_size(max, MAX_SIZE_LE))?;
                solver.add_constraint(segment.has_int_size(max, MAX_SIZE_EQ))?;
            }
            Constraint::Min(min) => {
                solver.add_constraint(segment.has_min_size(f64::from(min), MIN_SIZE_GE))?;
                if flex == Flex::Legacy {
                    solver.add_constraint(segment.has_int_size(min, MIN_SIZE_EQ))?;
                } else {
                    solver.add_constraint(segment.has_size(area, FILL_GROW))?;
                }
            }
            Constraint::Length(length) => {
                solver.add_constraint(segment.has_int_size(length, LENGTH_SIZE_EQ))?;
            }
            Constraint::Percentage(p) => {
                let clamped = Constraint::clamped_percentage(p);
                if clamped != p {
                    warn!(percentage = p, "percentage above 100 clamped");
                }
                let size = area.size() * f64::from(clamped) / 100.0;
                solver.add_constraint(segment.has_size(size, PERCENTAGE_SIZE_EQ))?;
            }
            Constraint::Ratio(num, den) => {
                // a zero denominator is treated as 1
                let size = area.size() * f64::from(num) / f64::from(den.max(1));
                solver.add_constraint(segment.has_size(size, RATIO_SIZE_EQ))?;
            }
            Constraint::Fill(_) => {
                // given no other constraints, this segment will grow as much as possible.
                solver.add_constraint(segment.has_size(area, FILL_GROW))?;
            }
        }
    }
    Ok(())
}

fn configure_flex_constraints<S: ConstraintSolver>(
    solver: &mut S,
    area: Element,
    spacers: &[Element],
    flex: Flex,
    spacing: Spacing,
) -> Result<(), LayoutError> {
    let spacing = spacing.signed();
    let spacers_except_first_and_last = spacers.get(1..spacers.len() - 1).unwrap_or(&[]);
    match flex {
        Flex::Legacy => {
            for spacer in spacers_except_first_and_last {
                solver.add_constraint(spacer.has_spacing(spacing, SPACER_SIZE_EQ))?;
            }
            if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
                solver.add_constraint(first.is_empty())?;
                solver.add_constraint(last.is_empty())?;
            }
        }

        // all spacers are the same size and will grow to fill any remaining space after the
        // constraints are satisfied
        Flex::SpaceEvenly => configure_even_spacers(solver, area, spacers, spacing)?,

        // interior spacers are the same size and the outer ones are half that size; with too
        // few spacers to tell the two apart this is the same as SpaceEvenly
        Flex::SpaceAround => {
            if spacers.len() <= 3 {
                configure_even_spacers(solver, area, spacers, spacing)?;
            } else {
                let first = &spacers[0];
                let last = &spacers[spacers.len() - 1];
                for (left, right) in spacers_except_first_and_last.iter().tuple_windows() {
                    solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
                }
                if let Some(first_interior) = spacers_except_first_and_last.first() {
                    solver.add_constraint(first_interior.has_double_size(first, SPACER_SIZE_EQ))?;
                    solver.add_constraint(first_interior.has_double_size(last, SPACER_SIZE_EQ))?;
                }
                for spacer in spacers {
                    solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
                    solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
                }
            }
        }

        // interior spacers are the same size and will grow to fill any remaining space after
        // the constraints are satisfied, but the first and last spacers are zero size
        Flex::SpaceBetween => {
            for (left, right) in spacers_except_first_and_last.iter().tuple_windows() {
                solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
            }
            for spacer in spacers_except_first_and_last {
                solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
                solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
            }
            if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
                solver.add_constraint(first.is_empty())?;
                solver.add_constraint(last.is_empty())?;
            }
        }
        Flex::Start => {
            for spacer in spacers_except_first_and_last {
                solver.add_constraint(spacer.has_spacing(spacing, SPACER_SIZE_EQ))?;
            }
            if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
                solver.add_constraint(first.is_empty())?;
                solver.add_constraint(last.has_size(area, GROW))?;
            }
        }
        Flex::Center => {
            for spacer in spacers_except_first_and_last {
                solver.add_constraint(spacer.has_spacing(spacing, SPACER_SIZE_EQ))?;
            }
            if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
                solver.add_constraint(first.has_size(area, GROW))?;
                solver.add_constraint(last.has_size(area, GROW))?;
                solver.add_constraint(first.has_size(last, SPACER_SIZE_EQ))?;
            }
        }
        Flex::End => {
            for spacer in spacers_except_first_and_last {
                solver.add_constraint(spacer.has_spacing(spacing, SPACER_SIZE_EQ))?;
            }
            if let (Some(first), Some(last)) = (spacers.first(), spacers.last()) {
                solver.add_constraint(last.is_empty())?;
                solver.add_constraint(first.has_size(area, GROW))?;
            }
        }
    }
    Ok(())
}

fn configure_even_spacers<S: ConstraintSolver>(
    solver: &mut S,
    area: Element,
    spacers: &[Element],
    spacing: f64,
) -> Result<(), LayoutError> {
    for (left, right) in spacers.iter().tuple_windows() {
        solver.add_constraint(left.has_size(right, SPACER_SIZE_EQ))?;
    }
    for spacer in spacers {
        solver.add_constraint(spacer.has_min_size(spacing, SPACER_SIZE_EQ))?;
        solver.add_constraint(spacer.has_size(area, SPACE_GROW))?;
    }
    Ok(())
}

/// Make every `Fill` segment (and, outside `Flex::Legacy`, every `Min`
/// segment as `Fill(1)`) proportional to its weight:
///
/// ```text
/// [Fill(1), Fill(1)]
/// ┌──────┐┌──────┐
/// │abcdef││abcdef│
/// └──────┘└──────┘
///
/// [Min(0), Fill(2)]
/// ┌──────┐┌────────────┐
/// │abcdef││abcdefabcdef│
/// └──────┘└────────────┘
/// ```
///
/// Each weighted segment is tied to the next weighted one:
/// `left_size * right_weight == right_size * left_weight`
fn configure_fill_constraints<S: ConstraintSolver>(
    solver: &mut S,
    segments: &[Element],
    constraints: &[Constraint],
    flex: Flex,
) -> Result<(), LayoutError> {
    let weighted = constraints
        .iter()
        .zip(segments)
        .filter_map(|(&constraint, segment)| fill_weight(constraint, flex).map(|w| (w, segment)));
    for ((left_weight, left), (right_weight, right)) in weighted.tuple_windows() {
        solver.add_constraint(
            (left.size() * right_weight) | EQ(FILL_SCALE_EQ) | (right.size() * left_weight),
        )?;
    }
    Ok(())
}

/// Weight of a segment that takes part in proportional filling.
fn fill_weight(constraint: Constraint, flex: Flex) -> Option<f64> {
    match constraint {
        Constraint::Fill(weight) => Some(f64::from(weight).max(1e-6)),
        Constraint::Min(_) if flex != Flex::Legacy => Some(1.0),
        _ => None,
    }
}

/// Convert solved (scaled) positions back to cell rects.
///
/// Positions are rounded at sub-cell precision first and again after
/// scaling down, so float noise from the solver never moves an edge.
fn changes_to_rects(
    values: &Solution,
    elements: &[Element],
    area: Rect,
    direction: Direction,
) -> Vec<Rect> {
    elements
        .iter()
        .map(|element| {
            let start = to_cell(values.get(&element.start).copied().unwrap_or(0.0));
            let end = to_cell(values.get(&element.end).copied().unwrap_or(0.0));
            let size = end.saturating_sub(start);
            match direction {
                Direction::Horizontal => Rect {
                    x: start,
                    y: area.y,
                    width: size,
                    height: area.height,
                },
                Direction::Vertical => Rect {
                    x: area.x,
                    y: start,
                    width: area.width,
                    height: size,
                },
            }
        })
        .collect()
}

fn to_cell(scaled: f64) -> u16 {
    let cell = (scaled.round() / FLOAT_PRECISION_MULTIPLIER).round();
    cell.clamp(0.0, f64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use Constraint::{Fill, Length, Max, Min, Percentage, Ratio};

    fn widths(rects: &[Rect]) -> Vec<u16> {
        rects.iter().map(|r| r.width).collect()
    }

    fn xs(rects: &[Rect]) -> Vec<u16> {
        rects.iter().map(|r| r.x).collect()
    }

    #[test]
    fn single_length_leaves_trailing_space() {
        let area = Rect::new(0, 0, 100, 1);
        let (segments, spacers) = Layout::horizontal([Length(40)]).split_with_spacers(area);
        assert_eq!(segments, vec![Rect::new(0, 0, 40, 1)]);
        assert_eq!(spacers.len(), 2);
        assert_eq!(spacers.iter().map(|s| s.width).sum::<u16>(), 60);
    }

    #[test]
    fn lengths_vertical() {
        let layout = Layout::vertical([Length(3), Length(5)]);
        let rects = layout.split(Rect::new(2, 1, 10, 20));
        assert_eq!(rects, vec![Rect::new(2, 1, 10, 3), Rect::new(2, 4, 10, 5)]);
    }

    #[test]
    fn percentage_half() {
        let rects = Layout::horizontal([Percentage(50)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![50]);
    }

    #[test]
    fn percentages_fill_exactly() {
        let rects = Layout::horizontal([Percentage(25), Percentage(75)]).split(Rect::new(0, 0, 80, 1));
        assert_eq!(widths(&rects), vec![20, 60]);
        assert_eq!(xs(&rects), vec![0, 20]);
    }

    #[test]
    fn percentage_above_hundred_is_clamped() {
        let a = Layout::horizontal([Percentage(250)]).split(Rect::new(0, 0, 40, 1));
        let b = Layout::horizontal([Percentage(100)]).split(Rect::new(0, 0, 40, 1));
        assert_eq!(a, b);
        assert_eq!(widths(&a), vec![40]);
    }

    #[test]
    fn ratio_zero_denominator_matches_one() {
        let area = Rect::new(0, 0, 100, 1);
        let zero = Layout::horizontal([Ratio(1, 0)]).split_with_spacers(area);
        let one = Layout::horizontal([Ratio(1, 1)]).split_with_spacers(area);
        assert_eq!(zero, one);
        assert_eq!(widths(&zero.0), vec![100]);
    }

    #[test]
    fn ratios_split_thirds() {
        let rects = Layout::horizontal([Ratio(1, 3), Ratio(2, 3)]).split(Rect::new(0, 0, 90, 1));
        assert_eq!(widths(&rects), vec![30, 60]);
    }

    #[test]
    fn fills_share_remaining_space_by_weight() {
        let rects =
            Layout::horizontal([Length(10), Fill(1), Fill(2)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![10, 30, 60]);
        assert_eq!(xs(&rects), vec![0, 10, 40]);
    }

    #[test]
    fn fill_zero_weight_does_not_fail() {
        let rects = Layout::horizontal([Fill(0), Fill(1)]).split(Rect::new(0, 0, 50, 1));
        assert_eq!(rects.len(), 2);
        assert_eq!(rects.iter().map(|r| r.width).sum::<u16>(), 50);
    }

    #[test]
    fn max_prefers_exact_value() {
        let rects = Layout::horizontal([Max(20), Fill(1)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![20, 80]);
    }

    #[test]
    fn max_shrinks_when_space_is_short() {
        let rects = Layout::horizontal([Max(20), Length(90)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![10, 90]);
    }

    #[test]
    fn min_grows_outside_legacy() {
        let rects = Layout::horizontal([Min(10), Length(20)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![80, 20]);
    }

    #[test]
    fn min_beats_length_when_over_constrained() {
        let rects = Layout::horizontal([Min(60), Length(60)]).split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![60, 40]);
    }

    #[test]
    fn legacy_last_segment_absorbs_excess() {
        let rects = Layout::horizontal([Length(10), Length(20)])
            .flex(Flex::Legacy)
            .split(Rect::new(0, 0, 100, 1));
        assert_eq!(rects.iter().map(|r| r.width).sum::<u16>(), 100);
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[1].right(), 100);
    }

    #[test]
    fn legacy_min_pins_to_minimum() {
        let rects = Layout::horizontal([Min(10), Fill(1)])
            .flex(Flex::Legacy)
            .split(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&rects), vec![10, 90]);
    }

    #[test]
    fn start_center_end_place_segments() {
        let area = Rect::new(0, 0, 100, 1);
        let constraints = [Length(20), Length(20)];

        let start = Layout::horizontal(constraints).flex(Flex::Start).split(area);
        assert_eq!(xs(&start), vec![0, 20]);

        let center = Layout::horizontal(constraints).flex(Flex::Center).split(area);
        assert_eq!(xs(&center), vec![30, 50]);

        let end = Layout::horizontal(constraints).flex(Flex::End).split(area);
        assert_eq!(xs(&end), vec![60, 80]);
    }

    #[test]
    fn space_between_pushes_to_edges() {
        let (segments, spacers) = Layout::horizontal([Length(10), Length(10), Length(10)])
            .flex(Flex::SpaceBetween)
            .split_with_spacers(Rect::new(0, 0, 100, 1));
        assert_eq!(xs(&segments), vec![0, 45, 90]);
        assert_eq!(widths(&spacers), vec![0, 35, 35, 0]);
    }

    #[test]
    fn space_evenly_equal_spacers() {
        let (segments, spacers) = Layout::horizontal([Length(10), Length(10), Length(10)])
            .flex(Flex::SpaceEvenly)
            .split_with_spacers(Rect::new(0, 0, 110, 1));
        assert_eq!(widths(&spacers), vec![20, 20, 20, 20]);
        assert_eq!(xs(&segments), vec![20, 50, 80]);
    }

    #[test]
    fn space_around_outer_spacers_are_half() {
        let (segments, spacers) = Layout::horizontal([Length(10), Length(10), Length(10)])
            .flex(Flex::SpaceAround)
            .split_with_spacers(Rect::new(0, 0, 90, 1));
        assert_eq!(widths(&spacers), vec![10, 20, 20, 10]);
        assert_eq!(xs(&segments), vec![10, 40, 70]);
    }

    #[test]
    fn space_around_two_segments_matches_space_evenly() {
        let area = Rect::new(0, 0, 100, 1);
        let constraints = [Length(10), Length(10)];
        let around = Layout::horizontal(constraints)
            .flex(Flex::SpaceAround)
            .split_with_spacers(area);
        let evenly = Layout::horizontal(constraints)
            .flex(Flex::SpaceEvenly)
            .split_with_spacers(area);
        assert_eq!(around, evenly);
    }

    #[test]
    fn spacing_between_segments() {
        let (segments, spacers) = Layout::horizontal([Length(10), Length(10)])
            .spacing(5)
            .split_with_spacers(Rect::new(0, 0, 100, 1));
        assert_eq!(segments, vec![Rect::new(0, 0, 10, 1), Rect::new(15, 0, 10, 1)]);
        assert_eq!(widths(&spacers), vec![0, 5, 75]);
    }

    #[test]
    fn overlap_pulls_segments_together() {
        let rects = Layout::horizontal([Length(10), Length(10)])
            .spacing(-1)
            .split(Rect::new(0, 0, 100, 1));
        assert_eq!(rects, vec![Rect::new(0, 0, 10, 1), Rect::new(9, 0, 10, 1)]);
    }

    #[test]
    fn margin_shrinks_area() {
        let rects = Layout::vertical([Fill(1)])
            .horizontal_margin(2)
            .vertical_margin(1)
            .split(Rect::new(0, 0, 20, 10));
        assert_eq!(rects, vec![Rect::new(2, 1, 16, 8)]);
    }

    #[test]
    fn margin_larger_than_area_gives_zero_rects() {
        let (segments, spacers) = Layout::horizontal([Length(5), Fill(1)])
            .margin(10)
            .split_with_spacers(Rect::new(0, 0, 15, 15));
        assert_eq!(segments.len(), 2);
        assert_eq!(spacers.len(), 3);
        assert!(segments.iter().chain(&spacers).all(|r| r.area() == 0));
    }

    #[test]
    fn oversized_margin_keeps_rects_inside_offset_area() {
        let area = Rect::new(50, 50, 15, 15);
        let (segments, spacers) = Layout::horizontal([Length(5)])
            .margin(10)
            .split_with_spacers(area);
        assert_eq!(segments, vec![Rect::new(57, 57, 0, 0)]);
        for rect in segments.iter().chain(&spacers) {
            assert!(rect.x >= area.x && rect.right() <= area.right(), "{rect:?}");
            assert!(rect.y >= area.y && rect.bottom() <= area.bottom(), "{rect:?}");
        }
    }

    #[test]
    fn percentage_outranks_ratio() {
        let area = Rect::new(0, 0, 100, 1);
        for flex in Flex::ALL {
            let rects = Layout::horizontal([Percentage(60), Ratio(3, 5)])
                .flex(flex)
                .split(area);
            assert_eq!(widths(&rects), vec![60, 40], "flex={flex}");

            let rects = Layout::horizontal([Ratio(3, 5), Percentage(60)])
                .flex(flex)
                .split(area);
            assert_eq!(widths(&rects), vec![40, 60], "flex={flex}");
        }
    }

    #[test]
    fn legacy_interior_spacers_match_spacing() {
        let (segments, spacers) = Layout::horizontal([Length(10), Length(10), Fill(1)])
            .flex(Flex::Legacy)
            .spacing(3)
            .split_with_spacers(Rect::new(0, 0, 100, 1));
        assert_eq!(widths(&spacers), vec![0, 3, 3, 0]);
        assert_eq!(widths(&segments), vec![10, 10, 74]);
        assert_eq!(xs(&segments), vec![0, 13, 26]);
    }

    #[test]
    fn empty_constraints_yield_one_spacer() {
        let area = Rect::new(3, 4, 50, 10);
        let (segments, spacers) = Layout::horizontal(Vec::<Constraint>::new()).split_with_spacers(area);
        assert!(segments.is_empty());
        assert_eq!(spacers, vec![area]);
    }

    #[test]
    fn split_is_deterministic() {
        let layout = Layout::horizontal([Percentage(33), Fill(1), Ratio(1, 7), Min(4)])
            .flex(Flex::SpaceAround)
            .spacing(1);
        let area = Rect::new(1, 2, 97, 5);
        assert_eq!(layout.split_with_spacers(area), layout.split_with_spacers(area));
    }

    #[test]
    fn try_areas_reports_mismatch() {
        let layout = Layout::horizontal([Length(1), Length(2)]);
        let err = layout.try_areas::<3>(Rect::new(0, 0, 10, 1)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::AreaCountMismatch {
                expected: 3,
                actual: 2
            }
        );
        let [a, b] = layout.areas(Rect::new(0, 0, 10, 1));
        assert_eq!((a.width, b.width), (1, 2));
    }

    #[test]
    fn spacers_destructure() {
        let [first, middle, last] = Layout::horizontal([Length(4), Length(4)])
            .flex(Flex::Center)
            .spacing(2)
            .spacers(Rect::new(0, 0, 20, 1));
        assert_eq!((first.width, middle.width, last.width), (5, 2, 5));
    }

    #[test]
    #[should_panic(expected = "layout produced 1 areas but 2 were requested")]
    fn areas_panics_on_mismatch() {
        let _: [Rect; 2] = Layout::horizontal([Length(1)]).areas(Rect::new(0, 0, 10, 1));
    }

    #[test]
    fn to_cell_rounds_twice() {
        assert_eq!(to_cell(3349.6), 34);
        assert_eq!(to_cell(3349.4), 33);
        assert_eq!(to_cell(-5.0), 0);
        assert_eq!(to_cell(1e12), u16::MAX);
    }
}
