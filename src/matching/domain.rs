use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A consultant looking for their next assignment.
///
/// Values are immutable once constructed; the pipeline never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    pub name: String,
    pub skills: BTreeSet<String>,
    /// Soft preference only: a match with a non-remote client is still a
    /// definite answer, never a failure.
    #[serde(default)]
    pub remote_only: bool,
}

impl Consultant {
    pub fn new(name: impl Into<String>, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            skills: skills.into_iter().map(Into::into).collect(),
            remote_only: false,
        }
    }

    pub fn remote_only(mut self) -> Self {
        self.remote_only = true;
        self
    }
}

/// A client assignment advertised in the catalogue.
///
/// Uniqueness by `name` is assumed by convention, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub required_stack: BTreeSet<String>,
    pub client_name: String,
}

impl Assignment {
    pub fn new(
        name: impl Into<String>,
        required_stack: impl IntoIterator<Item = impl Into<String>>,
        client_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            required_stack: required_stack.into_iter().map(Into::into).collect(),
            client_name: client_name.into(),
        }
    }

    /// Number of required skills the consultant actually has.
    pub fn match_score(&self, consultant: &Consultant) -> usize {
        self.required_stack
            .iter()
            .filter(|skill| consultant.skills.contains(*skill))
            .count()
    }
}
