// The user's selected keyword set.
//
// Insertion order is kept for display. Duplicates are never stored, so the
// graph builder can treat the selection as a set.

use serde::{Deserialize, Serialize};

use crate::keywords::tokenize::normalize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectedKeywords {
    terms: Vec<String>,
}

impl SelectedKeywords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term. Returns false (and changes nothing) if it is already selected.
    pub fn add(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Remove a term. Returns false if it was not selected.
    pub fn remove(&mut self, term: &str) -> bool {
        let before = self.terms.len();
        self.terms.retain(|t| t != term);
        self.terms.len() != before
    }

    pub fn reset(&mut self) {
        self.terms.clear();
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedKeywords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = Self::new();
        for term in iter {
            selected.add(term);
        }
        selected
    }
}

impl From<Vec<String>> for SelectedKeywords {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<SelectedKeywords> for Vec<String> {
    fn from(selected: SelectedKeywords) -> Self {
        selected.terms
    }
}

/// Turn raw user input into selectable terms.
///
/// Each input is normalized and split on whitespace, since keywords are
/// single tokens. Blank inputs yield nothing.
pub fn parse_terms<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .flat_map(|input| {
            normalize(input.as_ref())
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
