#![forbid(unsafe_code)]

//! Distribution of unclaimed space and gaps between segments.

use std::fmt;

/// How space not claimed by the segments' constraints is distributed.
///
/// Every split produces one more spacer than segments: a leading spacer,
/// one between each pair of segments, and a trailing spacer. `Flex` decides
/// how big each of those spacers is.
///
/// ```text
/// Start         |aaa|bbb|           |
/// Center        |     |aaa|bbb|     |
/// End           |           |aaa|bbb|
/// SpaceBetween  |aaa|           |bbb|
/// SpaceEvenly   |    |aaa|    |bbb|    |
/// SpaceAround   |  |aaa|    |bbb|  |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flex {
    /// Outer spacers are empty and the segments absorb any excess space.
    ///
    /// Under this policy `Min` pins to its minimum instead of growing.
    Legacy,
    /// Segments packed at the start; the trailing spacer takes the excess.
    #[default]
    Start,
    /// Segments packed in the middle; both outer spacers share the excess.
    Center,
    /// Segments packed at the end; the leading spacer takes the excess.
    End,
    /// Outer spacers are empty; the excess is split between segments.
    SpaceBetween,
    /// Every spacer, outer ones included, is the same size.
    SpaceEvenly,
    /// Outer spacers are half the size of the spacers between segments.
    ///
    /// With two or fewer segments this behaves like [`Flex::SpaceEvenly`].
    SpaceAround,
}

impl Flex {
    /// All policies, in declaration order.
    pub const ALL: [Flex; 7] = [
        Flex::Legacy,
        Flex::Start,
        Flex::Center,
        Flex::End,
        Flex::SpaceBetween,
        Flex::SpaceEvenly,
        Flex::SpaceAround,
    ];

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Flex::Legacy => "legacy",
            Flex::Start => "start",
            Flex::Center => "center",
            Flex::End => "end",
            Flex::SpaceBetween => "space-between",
            Flex::SpaceEvenly => "space-evenly",
            Flex::SpaceAround => "space-around",
        }
    }
}

impl fmt::Display for Flex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Requested gap between adjacent segments.
///
/// `Space(n)` leaves `n` cells between segments. `Overlap(n)` pulls adjacent
/// segments `n` cells into each other, which is useful for sharing borders.
///
/// Integer conversions map negative values to `Overlap` and saturate at
/// `u16::MAX` cells:
///
/// ```
/// use trellis_layout::Spacing;
///
/// assert_eq!(Spacing::from(2u16), Spacing::Space(2));
/// assert_eq!(Spacing::from(-1i16), Spacing::Overlap(1));
/// assert_eq!(Spacing::from(-100_000i32), Spacing::Overlap(u16::MAX));
/// assert_eq!(Spacing::from(40_000i32), Spacing::Space(40_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// Cells left empty between adjacent segments.
    Space(u16),
    /// Cells adjacent segments share.
    Overlap(u16),
}

impl Spacing {
    /// Signed gap in cells (negative for overlap).
    pub(crate) fn signed(self) -> f64 {
        match self {
            Spacing::Space(n) => f64::from(n),
            Spacing::Overlap(n) => -f64::from(n),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Space(0)
    }
}

impl From<u16> for Spacing {
    fn from(value: u16) -> Self {
        Spacing::Space(value)
    }
}

impl From<i16> for Spacing {
    fn from(value: i16) -> Self {
        if value < 0 {
            Spacing::Overlap(value.unsigned_abs())
        } else {
            Spacing::Space(value.unsigned_abs())
        }
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        let magnitude = u16::try_from(value.unsigned_abs()).unwrap_or(u16::MAX);
        if value < 0 {
            Spacing::Overlap(magnitude)
        } else {
            Spacing::Space(magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Flex, Spacing};

    #[test]
    fn default_flex_is_start() {
        assert_eq!(Flex::default(), Flex::Start);
    }

    #[test]
    fn flex_labels_are_unique() {
        let mut labels: Vec<&str> = Flex::ALL.iter().map(|f| f.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Flex::ALL.len());
        assert_eq!(Flex::SpaceAround.to_string(), "space-around");
    }

    #[test]
    fn spacing_conversions() {
        assert_eq!(Spacing::default(), Spacing::Space(0));
        assert_eq!(Spacing::from(0i16), Spacing::Space(0));
        assert_eq!(Spacing::from(i16::MIN), Spacing::Overlap(32_768));
        assert_eq!(Spacing::from(40_000i32), Spacing::Space(40_000));
        assert_eq!(Spacing::from(70_000i32), Spacing::Space(u16::MAX));
        assert_eq!(Spacing::from(-70_000i32), Spacing::Overlap(u16::MAX));
        assert_eq!(Spacing::from(i32::MIN), Spacing::Overlap(u16::MAX));
        assert_eq!(Spacing::from(-3i32), Spacing::Overlap(3));
    }

    #[test]
    fn spacing_signed() {
        assert_eq!(Spacing::Space(4).signed(), 4.0);
        assert_eq!(Spacing::Overlap(4).signed(), -4.0);
    }
}
