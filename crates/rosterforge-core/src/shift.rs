//! Shift codes, shift groups and coverage windows.
//!
//! A day is split into three plain shifts and two double shifts:
//!
//! | code | window        | covers                         |
//! |------|---------------|--------------------------------|
//! | `M`  | 07:00 - 15:00 | morning                        |
//! | `A`  | 15:00 - 23:00 | both afternoon halves          |
//! | `N`  | 23:00 - 07:00 | night                          |
//! | `DM` | 07:00 - 19:00 | morning + first afternoon half |
//! | `DN` | 19:00 - 07:00 | second afternoon half + night  |

use std::fmt;

/// A concrete shift an employee can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftCode {
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    Morning,
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    Afternoon,
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Night,
    #[cfg_attr(feature = "serde", serde(rename = "DM"))]
    DoubleMorning,
    #[cfg_attr(feature = "serde", serde(rename = "DN"))]
    DoubleNight,
}

impl ShiftCode {
    /// Every shift code, in model order.
    pub const ALL: [ShiftCode; 5] = [
        ShiftCode::Morning,
        ShiftCode::Afternoon,
        ShiftCode::Night,
        ShiftCode::DoubleMorning,
        ShiftCode::DoubleNight,
    ];

    /// Returns the short code (`M`, `A`, `N`, `DM`, `DN`).
    pub const fn code(self) -> &'static str {
        match self {
            ShiftCode::Morning => "M",
            ShiftCode::Afternoon => "A",
            ShiftCode::Night => "N",
            ShiftCode::DoubleMorning => "DM",
            ShiftCode::DoubleNight => "DN",
        }
    }

    /// Returns the label shown in roster rows.
    pub const fn display_label(self) -> &'static str {
        match self {
            ShiftCode::Morning => "בוקר (07-15)",
            ShiftCode::Afternoon => "צהריים (15-23)",
            ShiftCode::Night => "לילה (23-07)",
            ShiftCode::DoubleMorning => "כפולה בוקר (07-19)",
            ShiftCode::DoubleNight => "כפולה לילה (19-07)",
        }
    }

    /// Returns the canonical `(start, end)` wall-clock times.
    pub const fn time_range(self) -> (&'static str, &'static str) {
        match self {
            ShiftCode::Morning => ("07:00", "15:00"),
            ShiftCode::Afternoon => ("15:00", "23:00"),
            ShiftCode::Night => ("23:00", "07:00"),
            ShiftCode::DoubleMorning => ("07:00", "19:00"),
            ShiftCode::DoubleNight => ("19:00", "07:00"),
        }
    }

    #[inline]
    pub const fn is_double(self) -> bool {
        matches!(self, ShiftCode::DoubleMorning | ShiftCode::DoubleNight)
    }

    /// True for shifts that start at the morning boundary (`M`, `DM`).
    #[inline]
    pub const fn starts_in_morning(self) -> bool {
        matches!(self, ShiftCode::Morning | ShiftCode::DoubleMorning)
    }

    /// True for shifts that run through the night (`N`, `DN`).
    #[inline]
    pub const fn ends_after_night(self) -> bool {
        matches!(self, ShiftCode::Night | ShiftCode::DoubleNight)
    }

    /// Returns whether this shift counts towards the given coverage window.
    pub const fn covers(self, window: CoverageWindow) -> bool {
        matches!(
            (self, window),
            (ShiftCode::Morning, CoverageWindow::Morning)
                | (ShiftCode::Afternoon, CoverageWindow::AfternoonEarly)
                | (ShiftCode::Afternoon, CoverageWindow::AfternoonLate)
                | (ShiftCode::Night, CoverageWindow::Night)
                | (ShiftCode::DoubleMorning, CoverageWindow::Morning)
                | (ShiftCode::DoubleMorning, CoverageWindow::AfternoonEarly)
                | (ShiftCode::DoubleNight, CoverageWindow::AfternoonLate)
                | (ShiftCode::DoubleNight, CoverageWindow::Night)
        )
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One of the three plain staffing periods of a day.
///
/// Requirements and priorities are expressed per group; shortages are
/// reported per group once the afternoon halves are collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShiftGroup {
    Morning,
    Afternoon,
    Night,
}

impl ShiftGroup {
    pub const ALL: [ShiftGroup; 3] = [ShiftGroup::Morning, ShiftGroup::Afternoon, ShiftGroup::Night];

    /// The plain shift that staffs this group.
    pub const fn plain_shift(self) -> ShiftCode {
        match self {
            ShiftGroup::Morning => ShiftCode::Morning,
            ShiftGroup::Afternoon => ShiftCode::Afternoon,
            ShiftGroup::Night => ShiftCode::Night,
        }
    }

    /// Short name used in availability summaries.
    pub const fn label(self) -> &'static str {
        match self {
            ShiftGroup::Morning => "בוקר",
            ShiftGroup::Afternoon => "צהריים",
            ShiftGroup::Night => "לילה",
        }
    }

    /// Name with the full time range, used for shortage rows.
    pub const fn display_label(self) -> &'static str {
        match self {
            ShiftGroup::Morning => "בוקר (07:00-15:00)",
            ShiftGroup::Afternoon => "צהריים (15:00-23:00)",
            ShiftGroup::Night => "לילה (23:00-07:00)",
        }
    }

    /// Coverage windows that make up this group.
    pub const fn windows(self) -> &'static [CoverageWindow] {
        match self {
            ShiftGroup::Morning => &[CoverageWindow::Morning],
            ShiftGroup::Afternoon => &[CoverageWindow::AfternoonEarly, CoverageWindow::AfternoonLate],
            ShiftGroup::Night => &[CoverageWindow::Night],
        }
    }
}

impl fmt::Display for ShiftGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staffing window that gets its own coverage equation.
///
/// The afternoon is split in two halves because a `DM` shift only reaches
/// 19:00 and a `DN` shift only starts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoverageWindow {
    Morning,
    AfternoonEarly,
    AfternoonLate,
    Night,
}

impl CoverageWindow {
    pub const ALL: [CoverageWindow; 4] = [
        CoverageWindow::Morning,
        CoverageWindow::AfternoonEarly,
        CoverageWindow::AfternoonLate,
        CoverageWindow::Night,
    ];

    pub const fn group(self) -> ShiftGroup {
        match self {
            CoverageWindow::Morning => ShiftGroup::Morning,
            CoverageWindow::AfternoonEarly | CoverageWindow::AfternoonLate => ShiftGroup::Afternoon,
            CoverageWindow::Night => ShiftGroup::Night,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CoverageWindow::Morning => "בוקר",
            CoverageWindow::AfternoonEarly => "צהריים (15:00-19:00)",
            CoverageWindow::AfternoonLate => "צהריים (19:00-23:00)",
            CoverageWindow::Night => "לילה",
        }
    }

    /// Shift codes whose assignments count towards this window.
    pub fn contributing_shifts(self) -> impl Iterator<Item = ShiftCode> {
        ShiftCode::ALL.into_iter().filter(move |s| s.covers(self))
    }
}

impl fmt::Display for CoverageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
