use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A post as returned by the search backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// One ranked match. `distance` is the similarity score reported by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostMatch {
    pub id: String,
    pub distance: f64,
    pub post: Post,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Backend-side search latency in milliseconds.
    pub latency: f64,
    pub num_matches: u64,
    pub matches: Vec<PostMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Pending,
    Loading,
    Error,
    Success,
}

/// The whole client state. Owned by the store and replaced, never mutated in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub suggestions: Vec<String>,
    pub result: Option<Arc<SearchResult>>,
    pub error: Option<String>,
    pub status: Status,
    pub infocus: bool,
    pub search_term: String,
}

impl SearchState {
    pub fn new() -> SearchState {
        SearchState::default()
    }
}
