use super::domain::Assignment;

/// Read-only, ordered collection of assignments.
///
/// The catalogue keeps insertion order because the matching engine breaks
/// score ties by lowest catalogue index; iteration order is part of the
/// contract, not an accident of the backing collection.
#[derive(Debug, Clone, Default)]
pub struct AssignmentCatalog {
    assignments: Vec<Assignment>,
}

impl AssignmentCatalog {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// The sample catalogue used by the demo wiring and the docs.
    pub fn standard() -> Self {
        Self::new(vec![
            Assignment::new(
                "Assignment aviation",
                ["java", "spring", "kafka"],
                "Aviation client",
            ),
            Assignment::new(
                "Assignment banking",
                ["kotlin", "spring", "angular"],
                "Banking client",
            ),
            Assignment::new(
                "Assignment e-commerce",
                ["kotlin", "ktor", "react"],
                "E-commerce client",
            ),
        ])
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl FromIterator<Assignment> for AssignmentCatalog {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
