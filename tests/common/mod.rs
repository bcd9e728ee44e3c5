#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use reqwest::StatusCode;
use semantic_search::client::SearchApi;
use semantic_search::data_models::{Post, PostMatch, SearchResult};
use semantic_search::error::ApiError;

/// Canned reply of the stub backend.
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(StatusCode, String),
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Status(status, body) => Err(ApiError::Status { status, body }),
        }
    }
}

/// In-memory `SearchApi` with per-term replies and optional delays.
pub struct StubSearchApi {
    suggestions: Mutex<Reply<Vec<String>>>,
    queued_suggestions: Mutex<VecDeque<(Duration, Reply<Vec<String>>)>>,
    results: Mutex<HashMap<String, (Duration, Reply<SearchResult>)>>,
    calls: Mutex<Vec<String>>,
}

impl StubSearchApi {
    pub fn new() -> Self {
        Self {
            suggestions: Mutex::new(Reply::Ok(Vec::new())),
            queued_suggestions: Mutex::new(VecDeque::new()),
            results: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_suggestions(self, reply: Reply<Vec<String>>) -> Self {
        *self.suggestions.lock().unwrap() = reply;
        self
    }

    /// Queues a reply for the next suggestions call. Queued replies are used
    /// in order; once they run out the `with_suggestions` reply is returned.
    pub fn with_suggestions_call(self, delay: Duration, reply: Reply<Vec<String>>) -> Self {
        self.queued_suggestions
            .lock()
            .unwrap()
            .push_back((delay, reply));
        self
    }

    pub fn with_result(self, term: &str, delay: Duration, reply: Reply<SearchResult>) -> Self {
        self.results
            .lock()
            .unwrap()
            .insert(term.to_string(), (delay, reply));
        self
    }

    /// Search terms requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchApi for StubSearchApi {
    async fn fetch_suggestions(&self) -> Result<Vec<String>, ApiError> {
        let queued = self.queued_suggestions.lock().unwrap().pop_front();
        let (delay, reply) = match queued {
            Some(call) => call,
            None => (Duration::ZERO, self.suggestions.lock().unwrap().clone()),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.into_result()
    }

    async fn fetch_results(&self, search_term: &str) -> Result<SearchResult, ApiError> {
        self.calls.lock().unwrap().push(search_term.to_string());
        let entry = self.results.lock().unwrap().get(search_term).cloned();
        let (delay, reply) = entry.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Reply::Status(StatusCode::NOT_FOUND, format!("no stub for {search_term}")),
            )
        });
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply.into_result()
    }
}

pub fn sample_result() -> SearchResult {
    SearchResult {
        latency: 0.0,
        num_matches: 1,
        matches: vec![PostMatch {
            id: "1".to_string(),
            distance: 0.8,
            post: Post {
                title: "title1".to_string(),
                body: "body1".to_string(),
                tags: vec!["tag1".to_string(), "tag2".to_string()],
            },
        }],
    }
}

pub fn result_titled(title: &str) -> SearchResult {
    let mut result = sample_result();
    result.matches[0].post.title = title.to_string();
    result
}
