//! Availability resolution.
//!
//! Turns an employee's raw per-day cells (free text such as `"morning,
//! night"` or `"בוקר"`) and optional manual overrides into a
//! [`DayAvailability`] per day.
//!
//! A day is resolved from exactly one source:
//! - a manual override (five booleans `M, A, N, Can_DM, Can_DN`), used
//!   verbatim; the auto-doubles policy never widens it, or
//! - the raw cell, keyword-matched for `M`/`A`/`N`, then widened with
//!   `Can_DM`/`Can_DN` when auto-doubles applies.

use std::collections::{BTreeMap, HashMap};

use crate::shift::{ShiftCode, ShiftGroup};

const MORNING_KEYWORDS: &[&str] = &["בוקר", "morning"];
const AFTERNOON_KEYWORDS: &[&str] = &["צהריים", "afternoon"];
const NIGHT_KEYWORDS: &[&str] = &["לילה", "night"];

/// Number of values an override column must carry.
pub const OVERRIDE_LEN: usize = 5;

/// One element of a day's availability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityFlag {
    Morning,
    Afternoon,
    Night,
    CanDoubleMorning,
    CanDoubleNight,
}

impl AvailabilityFlag {
    /// Flags in override column order.
    pub const ALL: [AvailabilityFlag; OVERRIDE_LEN] = [
        AvailabilityFlag::Morning,
        AvailabilityFlag::Afternoon,
        AvailabilityFlag::Night,
        AvailabilityFlag::CanDoubleMorning,
        AvailabilityFlag::CanDoubleNight,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            AvailabilityFlag::Morning => 1,
            AvailabilityFlag::Afternoon => 1 << 1,
            AvailabilityFlag::Night => 1 << 2,
            AvailabilityFlag::CanDoubleMorning => 1 << 3,
            AvailabilityFlag::CanDoubleNight => 1 << 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AvailabilityFlag::Morning => "M",
            AvailabilityFlag::Afternoon => "A",
            AvailabilityFlag::Night => "N",
            AvailabilityFlag::CanDoubleMorning => "Can_DM",
            AvailabilityFlag::CanDoubleNight => "Can_DN",
        }
    }

    /// The flag an assignment of `shift` requires.
    pub const fn required_for(shift: ShiftCode) -> AvailabilityFlag {
        match shift {
            ShiftCode::Morning => AvailabilityFlag::Morning,
            ShiftCode::Afternoon => AvailabilityFlag::Afternoon,
            ShiftCode::Night => AvailabilityFlag::Night,
            ShiftCode::DoubleMorning => AvailabilityFlag::CanDoubleMorning,
            ShiftCode::DoubleNight => AvailabilityFlag::CanDoubleNight,
        }
    }
}

/// Resolved availability of one employee on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DayAvailability {
    bits: u8,
    from_override: bool,
}

impl DayAvailability {
    /// The empty set: unavailable all day.
    pub const UNAVAILABLE: DayAvailability = DayAvailability {
        bits: 0,
        from_override: false,
    };

    /// Builds a set from raw source flags (not an override).
    pub fn from_flags(flags: impl IntoIterator<Item = AvailabilityFlag>) -> Self {
        let mut day = Self::UNAVAILABLE;
        for flag in flags {
            day.insert(flag);
        }
        day
    }

    /// Builds a set from a manual override column.
    ///
    /// Returns `None` unless exactly five values are supplied.
    pub fn from_override(values: &[bool]) -> Option<Self> {
        if values.len() != OVERRIDE_LEN {
            return None;
        }
        let mut day = DayAvailability {
            bits: 0,
            from_override: true,
        };
        for (flag, &set) in AvailabilityFlag::ALL.iter().zip(values) {
            if set {
                day.insert(*flag);
            }
        }
        Some(day)
    }

    /// Keyword-matches a raw cell, case-insensitively.
    pub fn parse_cell(cell: &str) -> Self {
        let lowered = cell.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        let mut day = Self::UNAVAILABLE;
        if has(MORNING_KEYWORDS) {
            day.insert(AvailabilityFlag::Morning);
        }
        if has(AFTERNOON_KEYWORDS) {
            day.insert(AvailabilityFlag::Afternoon);
        }
        if has(NIGHT_KEYWORDS) {
            day.insert(AvailabilityFlag::Night);
        }
        day
    }

    #[inline]
    pub fn insert(&mut self, flag: AvailabilityFlag) {
        self.bits |= flag.bit();
    }

    #[inline]
    pub fn contains(&self, flag: AvailabilityFlag) -> bool {
        self.bits & flag.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether this day came from a manual override.
    #[inline]
    pub fn is_override(&self) -> bool {
        self.from_override
    }

    /// Whether the employee declared the plain shift of `group`.
    #[inline]
    pub fn has_plain(&self, group: ShiftGroup) -> bool {
        self.contains(AvailabilityFlag::required_for(group.plain_shift()))
    }

    /// Plain shift groups (M/A/N) present in this set, in day order.
    pub fn plain_groups(&self) -> impl Iterator<Item = ShiftGroup> + '_ {
        ShiftGroup::ALL.into_iter().filter(|g| self.has_plain(*g))
    }

    /// Whether an assignment of `shift` is permitted on this day.
    ///
    /// Double shifts additionally need the global `allow_double` switch.
    pub fn permits(&self, shift: ShiftCode, allow_double: bool) -> bool {
        if shift.is_double() && !allow_double {
            return false;
        }
        self.contains(AvailabilityFlag::required_for(shift))
    }

    /// Flags in column order, for display.
    pub fn flags(&self) -> impl Iterator<Item = AvailabilityFlag> + '_ {
        AvailabilityFlag::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

/// Auto-doubles policy applied to days resolved from raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoublePolicy {
    /// Global "available for a shift implies available for its double".
    pub auto_doubles: bool,
    /// Per-employee permission to work doubles.
    pub employee_may_double: bool,
}

impl DoublePolicy {
    #[inline]
    fn widens(&self) -> bool {
        self.auto_doubles && self.employee_may_double
    }
}

/// Resolves a single day.
///
/// A well-formed override wins outright. Otherwise the raw cell is parsed;
/// a missing cell yields an empty set.
pub fn resolve_day(cell: Option<&str>, override_values: Option<&[bool]>, policy: DoublePolicy) -> DayAvailability {
    if let Some(day) = override_values.and_then(DayAvailability::from_override) {
        return day;
    }

    let mut day = cell.map(DayAvailability::parse_cell).unwrap_or_default();
    if policy.widens() {
        if day.contains(AvailabilityFlag::Morning) {
            day.insert(AvailabilityFlag::CanDoubleMorning);
        }
        if day.contains(AvailabilityFlag::Night) {
            day.insert(AvailabilityFlag::CanDoubleNight);
        }
    }
    day
}

/// Availability of one employee across the scheduling horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyAvailability {
    days: Vec<DayAvailability>,
    malformed_overrides: Vec<usize>,
}

impl WeeklyAvailability {
    /// Resolves every day in `days`, in order.
    ///
    /// Override columns with the wrong number of values are ignored (the
    /// day falls back to raw data) and their day indices recorded in
    /// [`malformed_overrides`](Self::malformed_overrides).
    pub fn resolve(
        days: &[String],
        cells: &HashMap<String, String>,
        overrides: Option<&BTreeMap<String, Vec<bool>>>,
        policy: DoublePolicy,
    ) -> Self {
        let mut malformed_overrides = Vec::new();
        let resolved = days
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let values = overrides.and_then(|o| o.get(label.trim()).or_else(|| o.get(label)));
                if values.is_some_and(|v| v.len() != OVERRIDE_LEN) {
                    malformed_overrides.push(index);
                }
                resolve_day(
                    cells.get(label).map(String::as_str),
                    values.map(Vec::as_slice),
                    policy,
                )
            })
            .collect();

        Self {
            days: resolved,
            malformed_overrides,
        }
    }

    /// Builds directly from resolved days.
    pub fn from_days(days: Vec<DayAvailability>) -> Self {
        Self {
            days,
            malformed_overrides: Vec::new(),
        }
    }

    /// Availability on `day`; out-of-range days are unavailable.
    #[inline]
    pub fn day(&self, day: usize) -> DayAvailability {
        self.days.get(day).copied().unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day indices whose override column was ignored.
    pub fn malformed_overrides(&self) -> &[usize] {
        &self.malformed_overrides
    }
}
