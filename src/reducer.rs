use std::sync::Arc;

use crate::actions::Action;
use crate::data_models::{SearchState, Status};

/// Computes the next state.
///
/// Actions with no case here return the very same `Arc`, so observers can skip
/// work with `Arc::ptr_eq`. Note that `SearchPosts` leaves the previous result
/// and error in place while the new request is loading.
pub fn search_reducer(state: &Arc<SearchState>, action: &Action) -> Arc<SearchState> {
    let next = match action {
        Action::UpdateSearchTerm { search } => SearchState {
            search_term: search.clone(),
            ..(**state).clone()
        },
        Action::UpdateSearchFocus => SearchState {
            infocus: !state.infocus,
            ..(**state).clone()
        },
        Action::LoadSuggestions => SearchState {
            status: Status::Loading,
            ..(**state).clone()
        },
        Action::LoadSuggestionsSuccess { suggestions } => SearchState {
            suggestions: suggestions.clone(),
            status: Status::Success,
            ..(**state).clone()
        },
        Action::LoadSuggestionsFailure { error } => SearchState {
            suggestions: Vec::new(),
            error: Some(error.clone()),
            status: Status::Error,
            ..(**state).clone()
        },
        Action::SearchPosts { .. } => SearchState {
            status: Status::Loading,
            ..(**state).clone()
        },
        Action::SearchPostsSuccess { result } => SearchState {
            result: Some(Arc::clone(result)),
            error: None,
            status: Status::Success,
            ..(**state).clone()
        },
        Action::SearchPostsFailure { error } => SearchState {
            result: None,
            error: Some(error.clone()),
            status: Status::Error,
            ..(**state).clone()
        },
        Action::Init | Action::InputSearch { .. } => return Arc::clone(state),
    };
    Arc::new(next)
}
