use std::sync::Arc;

use crate::data_models::SearchResult;

/// Everything that can happen to the search page, from the user or from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Dispatched once by the store when it starts.
    Init,
    UpdateSearchTerm { search: String },
    UpdateSearchFocus,
    LoadSuggestions,
    LoadSuggestionsSuccess { suggestions: Vec<String> },
    LoadSuggestionsFailure { error: String },
    /// Raw keystroke-level input; debounced before it becomes a search.
    InputSearch { search_term: String },
    SearchPosts { search_term: String },
    SearchPostsSuccess { result: Arc<SearchResult> },
    SearchPostsFailure { error: String },
}

impl Action {
    pub fn search_posts(search_term: impl Into<String>) -> Action {
        Action::SearchPosts {
            search_term: search_term.into(),
        }
    }

    pub fn input_search(search_term: impl Into<String>) -> Action {
        Action::InputSearch {
            search_term: search_term.into(),
        }
    }

    /// Stable label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Init => "[Store] Init",
            Action::UpdateSearchTerm { .. } => "[Search Page] Update Search Term",
            Action::UpdateSearchFocus => "[Search Page] Update Search Focus",
            Action::LoadSuggestions => "[Search Page] Load Suggestions",
            Action::LoadSuggestionsSuccess { .. } => "[Search Page] Suggestion Load Success",
            Action::LoadSuggestionsFailure { .. } => "[Search Page] Suggestion Load Failure",
            Action::InputSearch { .. } => "[Search Page] Input Search",
            Action::SearchPosts { .. } => "[Search Page] Search Posts",
            Action::SearchPostsSuccess { .. } => "[Search Page] Posts Search Success",
            Action::SearchPostsFailure { .. } => "[Search Page] Posts Search Failure",
        }
    }
}
