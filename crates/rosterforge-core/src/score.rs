//! RosterScore - three-level breakdown of the roster objective.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// The solved objective split into its tiers.
///
/// - `shortage`: minus the priority-weighted unmet staffing (never positive)
/// - `assigned`: number of assignments made
/// - `preference`: sum of honoured position preferences
///
/// Comparison order: shortage > assigned > preference. The weights used in
/// the model keep the scalarized objective consistent with this order.
///
/// # Examples
///
/// ```
/// use rosterforge_core::RosterScore;
///
/// let score1 = RosterScore::of(0, 10, 0);
/// let score2 = RosterScore::of(-5000, 12, 40);
///
/// // Less shortage wins even with fewer assignments and preferences
/// assert!(score1 > score2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterScore {
    shortage: i64,
    assigned: i64,
    preference: i64,
}

impl RosterScore {
    /// The zero score.
    pub const ZERO: RosterScore = RosterScore {
        shortage: 0,
        assigned: 0,
        preference: 0,
    };

    /// Creates a new RosterScore.
    #[inline]
    pub const fn of(shortage: i64, assigned: i64, preference: i64) -> Self {
        RosterScore {
            shortage,
            assigned,
            preference,
        }
    }

    /// Returns the (non-positive) shortage component.
    #[inline]
    pub const fn shortage(&self) -> i64 {
        self.shortage
    }

    #[inline]
    pub const fn assigned(&self) -> i64 {
        self.assigned
    }

    #[inline]
    pub const fn preference(&self) -> i64 {
        self.preference
    }

    /// True when no staffing requirement is left unmet.
    #[inline]
    pub const fn is_fully_staffed(&self) -> bool {
        self.shortage >= 0
    }

    /// The single linear objective value the model maximizes.
    #[inline]
    pub const fn objective(&self) -> i64 {
        self.shortage + self.assigned + self.preference
    }
}

impl Ord for RosterScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.shortage
            .cmp(&other.shortage)
            .then_with(|| self.assigned.cmp(&other.assigned))
            .then_with(|| self.preference.cmp(&other.preference))
    }
}

impl PartialOrd for RosterScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for RosterScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        RosterScore::of(
            self.shortage + other.shortage,
            self.assigned + other.assigned,
            self.preference + other.preference,
        )
    }
}

impl Sub for RosterScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        RosterScore::of(
            self.shortage - other.shortage,
            self.assigned - other.assigned,
            self.preference - other.preference,
        )
    }
}

impl Neg for RosterScore {
    type Output = Self;

    fn neg(self) -> Self {
        RosterScore::of(-self.shortage, -self.assigned, -self.preference)
    }
}

impl fmt::Debug for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RosterScore({}, {}, {})",
            self.shortage, self.assigned, self.preference
        )
    }
}

impl fmt::Display for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}shortage/{}assigned/{}preference",
            self.shortage, self.assigned, self.preference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let score = RosterScore::of(-20000, 3, 7);
        assert_eq!(score.shortage(), -20000);
        assert_eq!(score.assigned(), 3);
        assert_eq!(score.preference(), 7);
        assert_eq!(score.objective(), -19990);
    }

    #[test]
    fn test_comparison() {
        let s1 = RosterScore::of(-100, 50, 50);
        let s2 = RosterScore::of(0, 1, 0);
        let s3 = RosterScore::of(0, 1, 5);

        assert!(s2 > s1);
        assert!(s3 > s2);
        assert_eq!(s1.max(s3), s3);
    }

    #[test]
    fn test_arithmetic() {
        let s1 = RosterScore::of(-10, 2, 3);
        let s2 = RosterScore::of(-5, 1, 1);

        assert_eq!(s1 + s2, RosterScore::of(-15, 3, 4));
        assert_eq!(s1 - s2, RosterScore::of(-5, 1, 2));
        assert_eq!(-s1, RosterScore::of(10, -2, -3));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", RosterScore::of(-10000, 4, 9)),
            "-10000shortage/4assigned/9preference"
        );
        assert!(RosterScore::ZERO.is_fully_staffed());
        assert!(!RosterScore::of(-1, 0, 0).is_fully_staffed());
    }
}
