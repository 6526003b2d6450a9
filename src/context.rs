use std::collections::HashMap;

use crate::candidate::Candidate;

/// Evaluation state threaded through every operator: the current matches,
/// in order, plus variable bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    pub matches: Vec<Candidate>,
    pub variables: HashMap<String, Vec<Candidate>>,
}

impl Context {
    pub fn new(matches: Vec<Candidate>) -> Self {
        Context {
            matches,
            variables: HashMap::new(),
        }
    }

    /// Snapshot used to evaluate one operand of an operator.
    ///
    /// Nothing done to the clone (new matches, new bindings) is visible
    /// through `self`.
    pub fn read_only_clone(&self) -> Context {
        self.clone()
    }

    /// Same variables, different matches.
    pub fn child(&self, matches: Vec<Candidate>) -> Context {
        Context {
            matches,
            variables: self.variables.clone(),
        }
    }

    pub fn single_child(&self, candidate: Candidate) -> Context {
        self.child(vec![candidate])
    }

    pub fn variable(&self, name: &str) -> Option<&[Candidate]> {
        self.variables.get(name).map(Vec::as_slice)
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: Vec<Candidate>) {
        self.variables.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
