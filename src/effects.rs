use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::actions::Action;
use crate::client::SearchApi;
use crate::config::{DEFAULT_DEBOUNCE_MS, MIN_SEARCH_TERM_LEN};
use crate::debounce::Debouncer;
use crate::store::{Dispatcher, Store};

/// The three side-effect handlers of the search page.
///
/// Each handler runs in its own task with its own subscription to the action
/// stream and feeds follow-up actions back into the store.
pub struct SearchEffects<A: SearchApi> {
    api: Arc<A>,
    debounce: Duration,
}

/// Join handles of running effect tasks.
pub struct EffectHandles {
    handles: Vec<JoinHandle<()>>,
}

impl EffectHandles {
    /// Waits for every handler to stop. Handlers stop when the store shuts down.
    pub async fn join(self) {
        for res in futures::future::join_all(self.handles).await {
            if let Err(e) = res {
                log::error!("effect task ended abnormally: {e}");
            }
        }
    }
}

impl<A: SearchApi> SearchEffects<A> {
    pub fn new(api: A) -> Self {
        Self::from_shared(Arc::new(api))
    }

    pub fn from_shared(api: Arc<A>) -> Self {
        Self {
            api,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Subscribes all handlers to the store and spawns them.
    pub async fn register(self, store: &Store) -> EffectHandles {
        let handles = vec![
            tokio::spawn(load_suggestions(
                self.api.clone(),
                store.actions().await,
                store.dispatcher(),
                store.shutdown_token(),
            )),
            tokio::spawn(input_search(
                store.actions().await,
                store.dispatcher(),
                self.debounce,
                store.shutdown_token(),
            )),
            tokio::spawn(search_posts(
                self.api.clone(),
                store.actions().await,
                store.dispatcher(),
                store.shutdown_token(),
            )),
        ];
        log::info!("search effects registered, debounce {:?}", self.debounce);
        EffectHandles { handles }
    }
}

/// `LoadSuggestions` -> `LoadSuggestionsSuccess` | `LoadSuggestionsFailure`, latest wins.
pub async fn load_suggestions<A: SearchApi>(
    api: Arc<A>,
    actions: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    shutdown: CancellationToken,
) {
    switch_latest(actions, dispatcher, shutdown, move |action| match action {
        Action::LoadSuggestions => {
            let api = api.clone();
            Some(async move {
                match api.fetch_suggestions().await {
                    Ok(suggestions) => Action::LoadSuggestionsSuccess { suggestions },
                    Err(e) => {
                        log::warn!("loading suggestions failed: {e}");
                        Action::LoadSuggestionsFailure { error: e.message() }
                    }
                }
            })
        }
        _ => None,
    })
    .await
}

/// `SearchPosts` -> `SearchPostsSuccess` | `SearchPostsFailure`, latest wins.
pub async fn search_posts<A: SearchApi>(
    api: Arc<A>,
    actions: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    shutdown: CancellationToken,
) {
    switch_latest(actions, dispatcher, shutdown, move |action| match action {
        Action::SearchPosts { search_term } => {
            let api = api.clone();
            Some(async move {
                match api.fetch_results(&search_term).await {
                    Ok(result) => {
                        log::info!(
                            "search {search_term:?}: {} matches in {}ms",
                            result.num_matches,
                            result.latency
                        );
                        Action::SearchPostsSuccess {
                            result: Arc::new(result),
                        }
                    }
                    Err(e) => {
                        log::warn!("search {search_term:?} failed: {e}");
                        Action::SearchPostsFailure { error: e.message() }
                    }
                }
            })
        }
        _ => None,
    })
    .await
}

/// `InputSearch` -> debounce -> drop repeats -> drop short terms -> `SearchPosts`.
pub async fn input_search(
    mut actions: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    debounce: Duration,
    shutdown: CancellationToken,
) {
    let mut debouncer = Debouncer::new(debounce, MIN_SEARCH_TERM_LEN);
    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => return,
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(term) = debouncer.fire(Instant::now()) {
                    if dispatcher.dispatch(Action::search_posts(term)).is_err() {
                        return;
                    }
                }
            }
            action = actions.recv() => match action {
                Some(Action::InputSearch { search_term }) => {
                    debouncer.push(search_term, Instant::now());
                }
                Some(_) => {}
                None => break,
            },
        }
    }
    if let Some(term) = debouncer.flush() {
        if let Err(e) = dispatcher.dispatch(Action::search_posts(term)) {
            log::debug!("dropping pending search on close: {e}");
        }
    }
}

/// Runs at most one request at a time. A newer request drops the pending one,
/// so a superseded result is never dispatched.
async fn switch_latest<F, Fut>(
    mut actions: mpsc::UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    shutdown: CancellationToken,
    mut request_for: F,
) where
    F: FnMut(Action) -> Option<Fut>,
    Fut: Future<Output = Action> + Send + 'static,
{
    let mut in_flight: Option<BoxFuture<'static, Action>> = None;
    let mut input_closed = false;

    loop {
        if input_closed && in_flight.is_none() {
            break;
        }
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            follow_up = resolve(&mut in_flight), if in_flight.is_some() => {
                in_flight = None;
                if dispatcher.dispatch(follow_up).is_err() {
                    break;
                }
            }
            action = actions.recv(), if !input_closed => match action {
                Some(action) => {
                    let kind = action.kind();
                    if let Some(request) = request_for(action) {
                        if in_flight.replace(request.boxed()).is_some() {
                            log::debug!("{kind} superseded a pending request");
                        }
                    }
                }
                None => input_closed = true,
            },
        }
    }
}

async fn resolve(in_flight: &mut Option<BoxFuture<'static, Action>>) -> Action {
    match in_flight {
        Some(request) => request.await,
        None => std::future::pending().await,
    }
}
