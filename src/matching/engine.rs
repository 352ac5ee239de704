use super::catalog::AssignmentCatalog;
use super::domain::{Assignment, Consultant};
use super::outcome::{MatchFailure, MatchOutcome};

/// Find the catalogue assignment sharing the most skills with the consultant.
///
/// Assignments with zero overlap are ineligible. Ties are broken by lowest
/// catalogue index: a later assignment replaces the current best only with a
/// strictly higher score, so the result is stable across runs regardless of
/// how the skill sets themselves iterate.
///
/// Pure function: no side effects, deterministic for fixed inputs.
pub fn find_best_match<'a>(
    consultant: &Consultant,
    catalog: &'a AssignmentCatalog,
) -> MatchOutcome<&'a Assignment> {
    let mut best: Option<(&Assignment, usize)> = None;

    for assignment in catalog.assignments() {
        let score = assignment.match_score(consultant);
        if score == 0 {
            continue;
        }
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((assignment, score));
        }
    }

    match best {
        Some((assignment, _)) => Ok(assignment),
        None => Err(MatchFailure::NoMatchingAssignment {
            consultant: consultant.clone(),
        }),
    }
}
