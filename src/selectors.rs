use std::sync::Arc;

use crate::data_models::{SearchResult, SearchState, Status};

pub fn is_loading(state: &SearchState) -> bool {
    state.status == Status::Loading
}

pub fn search_result(state: &SearchState) -> Option<Arc<SearchResult>> {
    state.result.clone()
}

/// The idle prompt animation runs only while the box is empty and unfocused.
pub fn typewriter_eligible(state: &SearchState) -> bool {
    state.search_term.is_empty() && !state.infocus
}

pub fn suggestions(state: &SearchState) -> Vec<String> {
    state.suggestions.clone()
}

pub fn search_term(state: &SearchState) -> String {
    state.search_term.clone()
}

/// A projection memoized on the identity of the state it last saw.
pub struct Selector<T> {
    project: fn(&SearchState) -> T,
    last: Option<(Arc<SearchState>, T)>,
    recomputations: usize,
}

impl<T: Clone> Selector<T> {
    pub fn new(project: fn(&SearchState) -> T) -> Self {
        Self {
            project,
            last: None,
            recomputations: 0,
        }
    }

    pub fn select(&mut self, state: &Arc<SearchState>) -> T {
        if let Some((seen, value)) = &self.last {
            if Arc::ptr_eq(seen, state) {
                return value.clone();
            }
        }
        let value = (self.project)(state);
        self.recomputations += 1;
        self.last = Some((Arc::clone(state), value.clone()));
        value
    }

    /// How many times the projection actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// The five selectors the search page binds to.
pub struct SearchSelectors {
    pub is_loading: Selector<bool>,
    pub search_result: Selector<Option<Arc<SearchResult>>>,
    pub typewriter_eligible: Selector<bool>,
    pub suggestions: Selector<Vec<String>>,
    pub search_term: Selector<String>,
}

impl SearchSelectors {
    pub fn new() -> Self {
        Self {
            is_loading: Selector::new(is_loading),
            search_result: Selector::new(search_result),
            typewriter_eligible: Selector::new(typewriter_eligible),
            suggestions: Selector::new(suggestions),
            search_term: Selector::new(search_term),
        }
    }
}

impl Default for SearchSelectors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_skips_same_state() {
        let state = Arc::new(SearchState::new());
        let mut selector = Selector::new(is_loading);

        assert!(!selector.select(&state));
        assert!(!selector.select(&state));
        assert_eq!(selector.recomputations(), 1);

        let loading = Arc::new(SearchState {
            status: Status::Loading,
            ..SearchState::new()
        });
        assert!(selector.select(&loading));
        assert_eq!(selector.recomputations(), 2);
    }

    #[test]
    fn test_equal_but_distinct_state_recomputes() {
        let a = Arc::new(SearchState::new());
        let b = Arc::new(SearchState::new());
        let mut selector = Selector::new(search_term);

        selector.select(&a);
        selector.select(&b);
        assert_eq!(selector.recomputations(), 2);
    }
}
