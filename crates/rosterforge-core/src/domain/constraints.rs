//! Global scheduling rules.

/// Rest/overlap/double-shift policy shared by every employee.
///
/// `no_overlap` is always enforced by the model (at most one shift per
/// employee per day); the flag is kept so callers can round-trip their
/// settings. `min_rest` is informational: rest is enforced structurally by
/// the back-to-back rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct Constraints {
    pub no_overlap: bool,
    /// Forbid a night (`N`/`DN`) followed by next-day morning (`M`/`DM`).
    pub no_back_to_back: bool,
    /// Minimum rest hours between shifts.
    pub min_rest: u32,
    /// Allow double shifts at all.
    pub allow_double: bool,
    /// Availability for `M`/`N` implies availability for `DM`/`DN`
    /// on days without a manual override.
    pub auto_doubles: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            no_overlap: true,
            no_back_to_back: true,
            min_rest: 8,
            allow_double: true,
            auto_doubles: false,
        }
    }
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_back_to_back_forbidden(mut self, forbidden: bool) -> Self {
        self.no_back_to_back = forbidden;
        self
    }

    pub fn with_doubles(mut self, allow_double: bool) -> Self {
        self.allow_double = allow_double;
        self
    }

    pub fn with_auto_doubles(mut self, auto_doubles: bool) -> Self {
        self.auto_doubles = auto_doubles;
        self
    }

    pub fn with_min_rest(mut self, hours: u32) -> Self {
        self.min_rest = hours;
        self
    }
}
