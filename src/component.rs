use std::sync::Arc;

use tokio::sync::watch;

use crate::actions::Action;
use crate::data_models::{SearchResult, SearchState};
use crate::error::StoreError;
use crate::selectors::SearchSelectors;
use crate::store::{Dispatcher, Store};

/// What a front end needs to draw the search page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub suggestions: Vec<String>,
    pub result: Option<Arc<SearchResult>>,
    pub is_loading: bool,
    pub typewriter: bool,
    pub search_term: String,
    pub error: Option<String>,
}

/// Binds the selectors to a view and turns user intents into actions.
pub struct SearchComponent {
    dispatcher: Dispatcher,
    state: watch::Receiver<Arc<SearchState>>,
    selectors: SearchSelectors,
}

impl SearchComponent {
    pub fn new(store: &Store) -> SearchComponent {
        SearchComponent {
            dispatcher: store.dispatcher(),
            state: store.subscribe(),
            selectors: SearchSelectors::new(),
        }
    }

    /// Kicks off the first suggestions load.
    pub fn init(&self) -> Result<(), StoreError> {
        self.dispatcher.dispatch(Action::LoadSuggestions)
    }

    pub fn input_search(&self, search_term: &str) -> Result<(), StoreError> {
        self.dispatcher.dispatch(Action::UpdateSearchTerm {
            search: search_term.to_string(),
        })?;
        self.dispatcher.dispatch(Action::input_search(search_term))
    }

    pub fn focus_changed(&self) -> Result<(), StoreError> {
        self.dispatcher.dispatch(Action::UpdateSearchFocus)
    }

    pub fn refresh_suggestions(&self) -> Result<(), StoreError> {
        self.dispatcher.dispatch(Action::LoadSuggestions)
    }

    pub fn view(&mut self) -> SearchView {
        let state = self.state.borrow_and_update().clone();
        self.project(&state)
    }

    /// Waits for the next state change and returns the view for it.
    pub async fn changed(&mut self) -> Result<SearchView, StoreError> {
        self.state.changed().await.map_err(|_| StoreError::Closed)?;
        Ok(self.view())
    }

    fn project(&mut self, state: &Arc<SearchState>) -> SearchView {
        SearchView {
            suggestions: self.selectors.suggestions.select(state),
            result: self.selectors.search_result.select(state),
            is_loading: self.selectors.is_loading.select(state),
            typewriter: self.selectors.typewriter_eligible.select(state),
            search_term: self.selectors.search_term.select(state),
            error: state.error.clone(),
        }
    }
}
