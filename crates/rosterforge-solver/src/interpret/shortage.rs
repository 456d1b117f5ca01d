//! Shortage extraction.

use std::collections::BTreeMap;

use rosterforge_core::{GapKey, RosterProblem, RosterRow, RowKind, Shortage, ShortageSummary};

use crate::backend::SolvedValues;
use crate::model::RosterModel;

/// Every slack solved above zero, in model order.
pub(super) fn summarize(
    problem: &RosterProblem,
    model: &RosterModel,
    values: &SolvedValues,
) -> ShortageSummary {
    let shortages = model
        .slacks()
        .iter()
        .zip(&values.slacks)
        .filter(|(_, &count)| count > 0)
        .map(|(slack, &count)| Shortage {
            key: slack.key,
            day_label: problem.days[slack.key.day].clone(),
            position_name: problem.positions[slack.key.position].name.clone(),
            count,
        })
        .collect();
    ShortageSummary::new(shortages)
}

pub(super) fn diagnostics(shortages: &ShortageSummary) -> Vec<String> {
    shortages
        .iter()
        .map(|s| format!("חסר/ים {} עובדים ב: {}", s.count, s.label()))
        .collect()
}

/// Collapses windows into shift groups.
///
/// The two afternoon halves become one entry carrying the larger count.
pub(super) fn collapse(shortages: &ShortageSummary) -> BTreeMap<GapKey, u32> {
    let mut gaps = BTreeMap::new();
    for shortage in shortages.iter() {
        let key = GapKey {
            day: shortage.key.day,
            position: shortage.key.position,
            group: shortage.key.window.group(),
        };
        let count = gaps.entry(key).or_insert(0);
        *count = (*count).max(shortage.count);
    }
    gaps
}

/// One synthetic roster row per collapsed shortage.
pub(super) fn rows(problem: &RosterProblem, gaps: &BTreeMap<GapKey, u32>) -> Vec<RosterRow> {
    gaps.iter()
        .map(|(key, &count)| RosterRow {
            day: key.day,
            day_label: problem.days[key.day].clone(),
            position: problem.positions[key.position].name.clone(),
            shift_label: key.group.display_label().to_string(),
            kind: RowKind::Shortage {
                group: key.group,
                count,
            },
        })
        .collect()
}
