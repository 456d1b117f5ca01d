//! End-to-end rosters solved with the microlp backend.

use std::collections::HashSet;

use rosterforge_core::{
    CoverageWindow, Employee, Position, RosterError, RosterOutcome, RosterProblem, ShiftCode,
    ShiftGroup, ShortageKey, SolveStatus,
};
use rosterforge_solver::{RosterManager, RosterSolver};
use rosterforge_test::scenarios::{
    back_to_back, competing_priorities, overridden_double, single_gate, unstaffed_gate, DAY,
};
use rosterforge_test::week::demo_week;

fn solve(problem: &RosterProblem) -> RosterOutcome {
    RosterSolver::new().solve(problem).unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_gate_is_staffed() {
    let outcome = solve(&single_gate());

    assert_eq!(outcome.status, SolveStatus::Optimal);
    assert_eq!(outcome.roster.len(), 1);
    let row = &outcome.roster[0];
    assert_eq!(row.position, "Gate");
    assert_eq!(row.employee_display(), "Dana");
    assert_eq!(row.shift_label, "בוקר (07-15)");
    assert!(outcome.shortages.is_empty());
    assert!(outcome.score.unwrap().is_fully_staffed());
}

#[test]
fn test_unstaffed_gate_reports_shortage() {
    let outcome = solve(&unstaffed_gate());

    assert_eq!(outcome.status, SolveStatus::Optimal);
    assert_eq!(outcome.roster.len(), 1);
    assert!(outcome.roster[0].is_shortage());
    let labels = outcome.shortages.labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels.get("ראשון|Gate|בוקר"), Some(&1));
}

#[test]
fn test_night_shift_blocks_next_morning() {
    let outcome = solve(&back_to_back());

    assert_eq!(outcome.assignments.len(), 1);
    let night = &outcome.assignments[0];
    assert_eq!(night.employee_name, "Noa");
    assert_eq!(night.position_name, "Night Gate");
    assert_eq!(night.day, 0);
    assert_eq!(night.shift, ShiftCode::Night);

    let second_morning = ShortageKey {
        day: 1,
        position: 1,
        window: CoverageWindow::Morning,
    };
    assert_eq!(outcome.shortages.get(second_morning), Some(1));
    // rest-blocked, so not surplus either
    assert!(outcome.surplus_on(1).is_empty());
}

#[test]
fn test_override_prevents_auto_double() {
    let outcome = solve(&overridden_double());

    let first_day: Vec<_> = outcome.assignments.iter().filter(|a| a.day == 0).collect();
    assert_eq!(first_day.len(), 1);
    assert_eq!(first_day[0].shift, ShiftCode::Morning);

    let second_day: Vec<_> = outcome.assignments.iter().filter(|a| a.day == 1).collect();
    assert_eq!(second_day.len(), 1);
    assert_eq!(second_day[0].shift, ShiftCode::DoubleMorning);
}

#[test]
fn test_higher_priority_position_filled_first() {
    let outcome = solve(&competing_priorities());

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].position_name, "Gate");
    let labels = outcome.shortages.labels();
    assert_eq!(labels.get("ראשון|Lobby|בוקר"), Some(&1));
    assert_eq!(labels.get("ראשון|Gate|בוקר"), None);
}

#[test]
fn test_preference_breaks_ties() {
    let problem = competing_priorities();
    let mut problem = problem.with_preference(1, "Lobby", 10);
    for position in &mut problem.positions {
        position.priority = 2;
    }

    let outcome = solve(&problem);
    assert_eq!(outcome.assignments[0].position_name, "Lobby");
    assert_eq!(outcome.score.unwrap().preference(), 10);
}

#[test]
fn test_preference_for_untrimmed_position_name() {
    let problem = RosterProblem::new([DAY])
        .with_position(Position::new("Lobby").with_guards(1, 0, 0).with_priority(2))
        .with_position(Position::new("Gate ").with_guards(1, 0, 0).with_priority(2))
        .with_employee(Employee::new(1, "Dana").with_roles("all").with_cell(DAY, "morning"))
        .with_preference(1, "Gate ", 10);

    let outcome = solve(&problem);
    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].position_name, "Gate");
    assert_eq!(outcome.score.unwrap().preference(), 10);
}

#[test]
fn test_blank_position_name_is_rejected() {
    let problem = RosterProblem::new([DAY])
        .with_position(Position::new("  ").with_guards(1, 0, 0))
        .with_employee(Employee::new(1, "Dana").with_roles("Kitchen").with_cell(DAY, "morning"));

    let err = RosterSolver::new().solve(&problem).unwrap_err();
    assert!(matches!(err, RosterError::DomainModel(_)));
}

// ============================================================================
// Properties over a full week
// ============================================================================

#[test]
fn test_week_is_solved() {
    let outcome = solve(&demo_week());

    assert_eq!(outcome.status, SolveStatus::Optimal);
    let score = outcome.score.unwrap();
    assert_eq!(score.assigned(), outcome.assignments.len() as i64);
    assert_eq!(
        outcome.roster.iter().filter(|r| !r.is_shortage()).count(),
        outcome.assignments.len()
    );
}

#[test]
fn test_week_coverage_is_monotone() {
    let problem = demo_week();
    let outcome = solve(&problem);

    for (position_index, position) in problem.positions.iter().enumerate() {
        for day in 0..problem.days.len() {
            for window in CoverageWindow::ALL {
                let requirement = position.requirement(window.group());
                if requirement == 0 {
                    continue;
                }
                let covered = outcome
                    .assignments
                    .iter()
                    .filter(|a| a.position == position_index && a.day == day && a.shift.covers(window))
                    .count() as u32;
                let key = ShortageKey {
                    day,
                    position: position_index,
                    window,
                };
                let shortage = outcome.shortages.get(key).unwrap_or(0);

                assert!(covered <= requirement, "{key:?} over-staffed");
                assert_eq!(shortage, requirement - covered, "{key:?}");
            }
        }
    }
}

#[test]
fn test_week_at_most_one_shift_per_day() {
    let outcome = solve(&demo_week());

    let mut seen = HashSet::new();
    for assignment in &outcome.assignments {
        assert!(
            seen.insert((assignment.employee, assignment.day)),
            "{} works twice on {}",
            assignment.employee_name,
            assignment.day_label
        );
    }
}

#[test]
fn test_week_respects_rest() {
    let outcome = solve(&demo_week());

    let nights: HashSet<_> = outcome
        .assignments
        .iter()
        .filter(|a| a.shift.ends_after_night())
        .map(|a| (a.employee, a.day))
        .collect();
    for assignment in outcome.assignments.iter().filter(|a| a.shift.starts_in_morning()) {
        if assignment.day == 0 {
            continue;
        }
        assert!(
            !nights.contains(&(assignment.employee, assignment.day - 1)),
            "{} works a morning after a night",
            assignment.employee_name
        );
    }
}

#[test]
fn test_week_assignments_are_permitted() {
    let problem = demo_week();
    let outcome = solve(&problem);

    for assignment in &outcome.assignments {
        let employee = problem
            .employees
            .iter()
            .find(|e| e.id == assignment.employee)
            .unwrap();
        let week = problem.availability_of(employee);
        assert!(week
            .day(assignment.day)
            .permits(assignment.shift, problem.constraints.allow_double));
        assert!(employee.role_set().qualifies_for(&assignment.position_name));
    }
}

#[test]
fn test_week_reports_are_consistent() {
    let outcome = solve(&demo_week());

    let collapsed: HashSet<_> = outcome
        .shortages
        .iter()
        .map(|s| (s.key.day, s.key.position, s.key.window.group()))
        .collect();
    assert_eq!(outcome.gap_recommendations.len(), collapsed.len());

    let shortage_rows = outcome.roster.iter().filter(|r| r.is_shortage()).count();
    assert_eq!(shortage_rows, collapsed.len());

    for day in &outcome.surplus {
        for entry in &day.entries {
            assert!(!entry.shifts.is_empty());
            assert!(!outcome
                .assignments
                .iter()
                .any(|a| a.employee == entry.employee && a.day == day.day));
        }
    }
}

#[test]
fn test_week_interpretation_is_stable() {
    let problem = demo_week();
    assert_eq!(solve(&problem), solve(&problem));
}

#[test]
fn test_manager_generates_week() {
    let manager = RosterManager::new();
    let outcome = manager.generate(demo_week()).unwrap();

    assert_eq!(outcome.status, SolveStatus::Optimal);
    assert!(manager.latest().is_some());
    assert!(outcome
        .roster
        .iter()
        .filter(|r| r.is_shortage())
        .all(|r| ShiftGroup::ALL
            .iter()
            .any(|g| g.display_label() == r.shift_label)));
}
