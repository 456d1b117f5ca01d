//! Tests for domain records, availability resolution and qualification.

use std::collections::{BTreeMap, HashMap};

use super::availability::{resolve_day, AvailabilityFlag, DayAvailability, DoublePolicy};
use super::qualification::is_qualified;
use super::*;
use crate::shift::{ShiftCode, ShiftGroup};

const NO_AUTO: DoublePolicy = DoublePolicy {
    auto_doubles: false,
    employee_may_double: true,
};

const AUTO: DoublePolicy = DoublePolicy {
    auto_doubles: true,
    employee_may_double: true,
};

// ============================================================================
// Availability Resolution
// ============================================================================

mod availability {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        let day = resolve_day(Some("Morning, NIGHT"), None, NO_AUTO);
        assert!(day.contains(AvailabilityFlag::Morning));
        assert!(!day.contains(AvailabilityFlag::Afternoon));
        assert!(day.contains(AvailabilityFlag::Night));
        assert!(!day.is_override());
    }

    #[test]
    fn test_hebrew_keywords() {
        let day = resolve_day(Some("בוקר / צהריים"), None, NO_AUTO);
        assert!(day.has_plain(ShiftGroup::Morning));
        assert!(day.has_plain(ShiftGroup::Afternoon));
        assert!(!day.has_plain(ShiftGroup::Night));
    }

    #[test]
    fn test_missing_or_unparseable_cell_is_unavailable() {
        assert!(resolve_day(None, None, AUTO).is_empty());
        assert!(resolve_day(Some("n/a"), None, AUTO).is_empty());
    }

    #[test]
    fn test_auto_doubles_widen_raw_days() {
        let day = resolve_day(Some("morning"), None, AUTO);
        assert!(day.contains(AvailabilityFlag::CanDoubleMorning));
        assert!(!day.contains(AvailabilityFlag::CanDoubleNight));

        let night = resolve_day(Some("night"), None, AUTO);
        assert!(night.contains(AvailabilityFlag::CanDoubleNight));
        assert!(!night.contains(AvailabilityFlag::CanDoubleMorning));
    }

    #[test]
    fn test_auto_doubles_respect_employee_permission() {
        let policy = DoublePolicy {
            auto_doubles: true,
            employee_may_double: false,
        };
        let day = resolve_day(Some("morning, night"), None, policy);
        assert!(!day.contains(AvailabilityFlag::CanDoubleMorning));
        assert!(!day.contains(AvailabilityFlag::CanDoubleNight));
    }

    #[test]
    fn test_no_doubles_without_auto_policy() {
        let day = resolve_day(Some("morning, night"), None, NO_AUTO);
        assert!(!day.permits(ShiftCode::DoubleMorning, true));
        assert!(day.permits(ShiftCode::Morning, true));
    }

    #[test]
    fn test_override_is_authoritative() {
        // M=true, Can_DM=false while auto-doubles would add Can_DM
        let values = [true, false, false, false, false];
        let day = resolve_day(Some("afternoon"), Some(&values[..]), AUTO);

        assert!(day.is_override());
        assert!(day.contains(AvailabilityFlag::Morning));
        assert!(!day.contains(AvailabilityFlag::Afternoon));
        assert!(!day.contains(AvailabilityFlag::CanDoubleMorning));
        assert!(!day.permits(ShiftCode::DoubleMorning, true));
    }

    #[test]
    fn test_override_maps_all_five_flags() {
        let values = [false, true, false, true, true];
        let day = DayAvailability::from_override(&values).unwrap();
        let flags: Vec<_> = day.flags().map(AvailabilityFlag::name).collect();
        assert_eq!(flags, vec!["A", "Can_DM", "Can_DN"]);
    }

    #[test]
    fn test_malformed_override_falls_back_to_raw_data() {
        let values = [true, true, true];
        let day = resolve_day(Some("night"), Some(&values[..]), NO_AUTO);
        assert!(!day.is_override());
        assert!(day.contains(AvailabilityFlag::Night));
        assert!(!day.contains(AvailabilityFlag::Morning));
    }

    #[test]
    fn test_doubles_need_global_switch() {
        let day = DayAvailability::from_override(&[true, false, true, true, true]).unwrap();
        assert!(day.permits(ShiftCode::DoubleNight, true));
        assert!(!day.permits(ShiftCode::DoubleNight, false));
        assert!(day.permits(ShiftCode::Night, false));
    }

    #[test]
    fn test_weekly_resolution_records_malformed_days() {
        let days = vec!["Sun".to_string(), "Mon".to_string(), "Tue".to_string()];
        let mut cells = HashMap::new();
        cells.insert("Sun".to_string(), "morning".to_string());
        cells.insert("Mon".to_string(), "night".to_string());

        let mut overrides = BTreeMap::new();
        overrides.insert("Mon".to_string(), vec![true, true]);
        overrides.insert("Tue".to_string(), vec![false, false, true, false, false]);

        let week = WeeklyAvailability::resolve(&days, &cells, Some(&overrides), AUTO);
        assert_eq!(week.len(), 3);
        assert!(week.day(0).contains(AvailabilityFlag::CanDoubleMorning));
        assert!(week.day(1).contains(AvailabilityFlag::Night));
        assert!(week.day(1).contains(AvailabilityFlag::CanDoubleNight));
        assert!(week.day(2).is_override());
        assert!(!week.day(2).contains(AvailabilityFlag::CanDoubleNight));
        assert_eq!(week.malformed_overrides(), &[1]);
        assert!(week.day(7).is_empty());
    }
}

// ============================================================================
// Qualification Matching
// ============================================================================

mod qualification {
    use super::*;

    #[test]
    fn test_exact_token() {
        assert!(is_qualified("Gate, Lobby", "lobby"));
        assert!(is_qualified("  gate ", "Gate"));
        assert!(!is_qualified("Gate, Lobby", "Parking"));
    }

    #[test]
    fn test_substring_both_ways() {
        // position contained in a role
        assert!(is_qualified("Head of Security", "Security"));
        // role contained in the position
        assert!(is_qualified("Gate", "Main Gate"));
    }

    #[test]
    fn test_wildcard() {
        let roles = RoleSet::parse("Gate, ALL");
        assert!(roles.is_wildcard());
        assert!(roles.qualifies_for("Anything"));
    }

    #[test]
    fn test_empty_role_string_qualifies_for_nothing() {
        let roles = RoleSet::parse(" , ,");
        assert!(roles.is_empty());
        assert!(!roles.qualifies_for("Gate"));
    }
}

// ============================================================================
// Records and Problem Snapshot
// ============================================================================

mod records {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_position_defaults_and_requirements() {
        let position = Position::new("Gate").with_guards(1, 2, 0);
        assert_eq!(position.priority, DEFAULT_POSITION_PRIORITY);
        assert_eq!(position.shift_priority(ShiftGroup::Night), DEFAULT_SHIFT_PRIORITY);
        assert_eq!(position.requirement(ShiftGroup::Afternoon), 2);
        assert_eq!(position.requirement(ShiftGroup::Night), 0);
    }

    #[test]
    fn test_position_normalization_clamps_priorities() {
        let position = Position::new(" Gate ")
            .with_priority(0)
            .with_shift_priorities(0, 2, 0)
            .normalized();
        assert_eq!(position.name, "Gate");
        assert_eq!(position.priority, 1);
        assert_eq!(position.priority_morning, 1);
        assert_eq!(position.priority_afternoon, 2);
        assert_eq!(position.priority_night, 1);
    }

    #[test]
    fn test_constraint_defaults() {
        let constraints = Constraints::default();
        assert!(constraints.no_overlap);
        assert!(constraints.no_back_to_back);
        assert!(constraints.allow_double);
        assert!(!constraints.auto_doubles);
        assert_eq!(constraints.min_rest, 8);
    }

    #[test]
    fn test_duplicate_position_names_rejected() {
        let problem = RosterProblem::new(["Sun"])
            .with_position(Position::new("Gate"))
            .with_position(Position::new("Gate "));
        assert!(matches!(problem.validate(), Err(RosterError::DomainModel(_))));
    }

    #[test]
    fn test_blank_position_name_rejected() {
        let problem = RosterProblem::new(["Sun"])
            .with_position(Position::new("  ").with_guards(1, 0, 0))
            .with_employee(Employee::new(1, "Dana").with_roles("Kitchen"));
        assert!(matches!(problem.validate(), Err(RosterError::DomainModel(_))));

        let problem = RosterProblem::new(["Sun"]).with_position(Position::new(""));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_normalized_trims_preference_keys() {
        let problem = RosterProblem::new(["Sun"])
            .with_position(Position::new("Gate "))
            .with_preference(1, "Gate ", 10)
            .with_preference(2, " Lobby", 4)
            .with_preference(2, "Lobby", 7)
            .normalized();

        assert_eq!(problem.positions[0].name, "Gate");
        assert_eq!(problem.preference(EmployeeId(1), "Gate"), 10);
        assert_eq!(problem.preference(EmployeeId(2), "Lobby"), 7);
    }

    #[test]
    fn test_duplicate_employee_ids_rejected() {
        let problem = RosterProblem::new(["Sun"])
            .with_employee(Employee::new(1, "Dana"))
            .with_employee(Employee::new(1, "Noa"));
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_duplicate_days_rejected() {
        let problem = RosterProblem::new(["Sun", "Sun"]);
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_empty_day_list_rejected() {
        let problem = RosterProblem::new(Vec::<String>::new());
        assert!(matches!(problem.validate(), Err(RosterError::DomainModel(_))));
    }

    #[test]
    fn test_empty_problem_is_valid() {
        assert!(RosterProblem::new(["Sun"]).validate().is_ok());
    }

    #[test]
    fn test_preferences_are_clamped() {
        let problem = RosterProblem::new(["Sun"])
            .with_preference(1, "Gate", 25)
            .with_preference(1, "Lobby", -3);
        assert_eq!(problem.preference(EmployeeId(1), "Gate"), MAX_PREFERENCE);
        assert_eq!(problem.preference(EmployeeId(1), "Lobby"), 0);
        assert_eq!(problem.preference(EmployeeId(1), "Parking"), 0);
        assert_eq!(problem.preference(EmployeeId(2), "Gate"), 0);
    }

    #[test]
    fn test_availability_of_uses_overrides_and_policy() {
        let problem = RosterProblem::new(["Sun", "Mon"])
            .with_constraints(Constraints::default().with_auto_doubles(true))
            .with_employee(
                Employee::new(1, "Dana")
                    .with_cell("Sun", "morning")
                    .with_cell("Mon", "morning"),
            )
            .with_override(1, "Mon", [true, false, false, false, false]);

        let week = problem.availability_of(&problem.employees[0]);
        assert!(week.day(0).permits(ShiftCode::DoubleMorning, true));
        assert!(!week.day(1).permits(ShiftCode::DoubleMorning, true));
        assert!(week.day(1).permits(ShiftCode::Morning, true));
    }
}
