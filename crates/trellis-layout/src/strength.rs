#![forbid(unsafe_code)]

//! Priority levels attached to every constraint handed to the solver.
//!
//! When the system is over-determined the solver relaxes the weakest
//! constraints first. The base levels come from the solver; the layout
//! levels below are fractional multiples of them. Ordered strongest first:
//!
//! | Level | Value |
//! |---|---|
//! | [`REQUIRED`] | never relaxed |
//! | [`SPACER_SIZE_EQ`] | `REQUIRED / 10` |
//! | [`MIN_SIZE_GE`], [`MAX_SIZE_LE`] | `STRONG * 100` |
//! | [`LENGTH_SIZE_EQ`] | `STRONG * 10` |
//! | [`PERCENTAGE_SIZE_EQ`] | `STRONG` |
//! | [`RATIO_SIZE_EQ`] | `STRONG / 10` |
//! | [`MIN_SIZE_EQ`], [`MAX_SIZE_EQ`] | `MEDIUM * 10` |
//! | [`FILL_GROW`], [`FILL_SCALE_EQ`] | `MEDIUM` |
//! | [`GROW`] | `MEDIUM / 10` |
//! | [`SPACE_GROW`] | `WEAK * 10` |
//! | [`ALL_SEGMENT_GROW`] | `WEAK` |

pub use cassowary::strength::{MEDIUM, REQUIRED, STRONG, WEAK};

/// Pins an outer spacer to zero. Just below [`REQUIRED`] so an impossible
/// layout degrades instead of being rejected.
///
/// ```text
/// ┌┐┌───┐┌┐
/// ││ a ││
/// └┘└───┘└┘
/// ```
pub const EMPTY_EQ: f64 = REQUIRED - 1.0;

/// Keeps spacers at their requested size, or equal to each other.
///
/// ```text
/// ┌     ┐┌───┐┌     ┐┌───┐┌     ┐
///   ==x  │   │  ==x  │   │  ==x
/// └     ┘└───┘└     ┘└───┘└     ┘
/// ```
pub const SPACER_SIZE_EQ: f64 = REQUIRED / 10.0;

/// `Min` lower bound.
///
/// ```text
/// ┌────────┐
/// │Min(>=x)│
/// └────────┘
/// ```
pub const MIN_SIZE_GE: f64 = STRONG * 100.0;

/// `Max` upper bound.
///
/// ```text
/// ┌────────┐
/// │Max(<=x)│
/// └────────┘
/// ```
pub const MAX_SIZE_LE: f64 = STRONG * 100.0;

/// `Length` pin.
pub const LENGTH_SIZE_EQ: f64 = STRONG * 10.0;

/// `Percentage` target.
pub const PERCENTAGE_SIZE_EQ: f64 = STRONG;

/// `Ratio` target. Weaker than [`PERCENTAGE_SIZE_EQ`] so a percentage wins
/// when both compete for the same space.
pub const RATIO_SIZE_EQ: f64 = STRONG / 10.0;

/// `Min` pinned to its minimum under `Flex::Legacy`.
pub const MIN_SIZE_EQ: f64 = MEDIUM * 10.0;

/// `Max` preference for exactly its maximum.
pub const MAX_SIZE_EQ: f64 = MEDIUM * 10.0;

/// Growth of `Fill` (and non-legacy `Min`) segments toward the whole area.
///
/// ```text
/// ┌─────────────────────┐
/// │<=     Fill(x)     =>│
/// └─────────────────────┘
/// ```
pub const FILL_GROW: f64 = MEDIUM;

/// Proportionality between weighted fill segments.
pub const FILL_SCALE_EQ: f64 = MEDIUM;

/// Growth of the outer spacers under `Start`, `Center` and `End`.
pub const GROW: f64 = MEDIUM / 10.0;

/// Growth of spacers under the `Space*` policies.
pub const SPACE_GROW: f64 = WEAK * 10.0;

/// Pulls adjacent segments toward equal sizes so leftover space is shared
/// instead of landing on an arbitrary segment.
pub const ALL_SEGMENT_GROW: f64 = WEAK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_strictly_ordered() {
        let ordered = [
            REQUIRED,
            EMPTY_EQ,
            SPACER_SIZE_EQ,
            MIN_SIZE_GE,
            LENGTH_SIZE_EQ,
            PERCENTAGE_SIZE_EQ,
            RATIO_SIZE_EQ,
            MIN_SIZE_EQ,
            FILL_GROW,
            GROW,
            SPACE_GROW,
            ALL_SEGMENT_GROW,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] > pair[1], "{} should exceed {}", pair[0], pair[1]);
        }
        assert_eq!(MIN_SIZE_GE, MAX_SIZE_LE);
        assert_eq!(MIN_SIZE_EQ, MAX_SIZE_EQ);
        assert_eq!(FILL_GROW, FILL_SCALE_EQ);
    }
}
