//! A route is the sequence of moves a strategy found from the start to a
//! goal. This module provides the [`Route`] struct, which represents it.

use crate::search::{Action, State};
use itertools::Itertools;
use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    actions: Vec<Action>,
}

impl Route {
    pub fn empty() -> Self {
        Self { actions: vec![] }
    }

    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Appends another route's moves, used when chaining legs of a
    /// multi-goal run.
    pub fn extend(&mut self, tail: Route) {
        self.actions.extend(tail.actions);
    }

    /// Applies the moves one by one from `start` and returns every cell
    /// visited, both endpoints included.
    pub fn replay(&self, start: State) -> Vec<State> {
        let mut cells = Vec::with_capacity(self.actions.len() + 1);
        let mut current = start;
        cells.push(current);
        for &action in &self.actions {
            current = action.apply(current);
            cells.push(current);
        }
        cells
    }
}

impl Deref for Route {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.actions
    }
}

impl IntoIterator for Route {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.actions.iter().join(", "))
    }
}
