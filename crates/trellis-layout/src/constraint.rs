#![forbid(unsafe_code)]

//! Sizing rules for a single layout segment.

use std::fmt;

/// A constraint on the size of one segment along the layout axis.
///
/// Constraints are resolved together by the solver, so a single constraint
/// describes a preference rather than a guarantee. When preferences conflict
/// the stronger kind wins; from strongest to weakest:
///
/// 1. [`Min`](Constraint::Min) / [`Max`](Constraint::Max) bounds
/// 2. [`Length`](Constraint::Length)
/// 3. [`Percentage`](Constraint::Percentage)
/// 4. [`Ratio`](Constraint::Ratio)
/// 5. [`Fill`](Constraint::Fill)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// An exact size in cells.
    Length(u16),
    /// A percentage of the available size (0 to 100).
    ///
    /// Values above 100 are treated as 100.
    Percentage(u16),
    /// A fraction of the available size (numerator, denominator).
    ///
    /// A zero denominator is treated as 1.
    Ratio(u32, u32),
    /// At least this many cells.
    ///
    /// Outside [`Flex::Legacy`](crate::Flex::Legacy) a `Min` segment also
    /// grows like `Fill(1)` once its minimum is met.
    Min(u16),
    /// At most this many cells, preferring exactly this many.
    Max(u16),
    /// Take a weighted share of the space left over by the other constraints.
    ///
    /// `Fill(1)` next to `Fill(2)` splits the leftover 1:2.
    Fill(u16),
}

impl Constraint {
    /// Size this constraint would take from `length` on its own, without any
    /// siblings competing for the space.
    ///
    /// ```
    /// use trellis_layout::Constraint;
    ///
    /// assert_eq!(Constraint::Percentage(50).apply(100), 50);
    /// assert_eq!(Constraint::Ratio(1, 3).apply(90), 30);
    /// assert_eq!(Constraint::Length(120).apply(100), 100);
    /// assert_eq!(Constraint::Min(120).apply(100), 120);
    /// ```
    pub fn apply(&self, length: u16) -> u16 {
        match *self {
            Constraint::Percentage(p) => {
                let p = u32::from(p.min(100));
                (u32::from(length) * p / 100) as u16
            }
            Constraint::Ratio(num, den) => {
                let scaled = u64::from(num) * u64::from(length) / u64::from(den.max(1));
                scaled.min(u64::from(length)) as u16
            }
            Constraint::Length(l) | Constraint::Max(l) => length.min(l),
            Constraint::Min(m) => length.max(m),
            Constraint::Fill(_) => length,
        }
    }

    /// Percentage with out-of-range values clamped to 100.
    pub(crate) fn clamped_percentage(p: u16) -> u16 {
        p.min(100)
    }

    /// One `Length` per value.
    pub fn from_lengths<T: IntoIterator<Item = u16>>(lengths: T) -> Vec<Constraint> {
        lengths.into_iter().map(Constraint::Length).collect()
    }

    /// One `Percentage` per value.
    pub fn from_percentages<T: IntoIterator<Item = u16>>(percentages: T) -> Vec<Constraint> {
        percentages.into_iter().map(Constraint::Percentage).collect()
    }

    /// One `Ratio` per `(numerator, denominator)` pair.
    pub fn from_ratios<T: IntoIterator<Item = (u32, u32)>>(ratios: T) -> Vec<Constraint> {
        ratios
            .into_iter()
            .map(|(num, den)| Constraint::Ratio(num, den))
            .collect()
    }

    /// One `Min` per value.
    pub fn from_mins<T: IntoIterator<Item = u16>>(mins: T) -> Vec<Constraint> {
        mins.into_iter().map(Constraint::Min).collect()
    }

    /// One `Max` per value.
    pub fn from_maxes<T: IntoIterator<Item = u16>>(maxes: T) -> Vec<Constraint> {
        maxes.into_iter().map(Constraint::Max).collect()
    }

    /// One `Fill` per weight.
    pub fn from_fills<T: IntoIterator<Item = u16>>(weights: T) -> Vec<Constraint> {
        weights.into_iter().map(Constraint::Fill).collect()
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::Percentage(100)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Length(l) => write!(f, "Length({l})"),
            Constraint::Percentage(p) => write!(f, "Percentage({p})"),
            Constraint::Ratio(num, den) => write!(f, "Ratio({num}, {den})"),
            Constraint::Min(m) => write!(f, "Min({m})"),
            Constraint::Max(m) => write!(f, "Max({m})"),
            Constraint::Fill(w) => write!(f, "Fill({w})"),
        }
    }
}
