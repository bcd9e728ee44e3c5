use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::actions::Action;
use crate::data_models::SearchState;
use crate::error::StoreError;
use crate::reducer::search_reducer;

type Subscribers = Arc<Mutex<Vec<mpsc::UnboundedSender<Action>>>>;

/// Handle for putting actions on the store's queue.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Dispatcher {
        Dispatcher { tx }
    }

    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        self.tx.send(action).map_err(|_| StoreError::Closed)
    }
}

/// Single owner of [`SearchState`].
///
/// Actions are reduced one at a time in the order they were dispatched. After
/// each action the new state is published on a watch channel (only if the
/// reducer produced a new value) and the action is forwarded to every action
/// stream subscriber.
pub struct Store {
    dispatcher: Dispatcher,
    state_rx: watch::Receiver<Arc<SearchState>>,
    subscribers: Subscribers,
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl Store {
    /// Spawns the coordinator task. Must be called inside a tokio runtime.
    pub fn new(initial: SearchState) -> Store {
        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(Arc::new(initial));
        let subscribers: Subscribers = Arc::new(Mutex::new(Vec::new()));
        let shutdown = CancellationToken::new();

        let dispatcher = Dispatcher::new(tx);
        // Init is queued before anything else can be.
        let _ = dispatcher.dispatch(Action::Init);

        let handle = tokio::spawn(Self::run(
            rx,
            state_tx,
            subscribers.clone(),
            shutdown.clone(),
        ));

        Store {
            dispatcher,
            state_rx,
            subscribers,
            shutdown,
            handle,
        }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        self.dispatcher.dispatch(action)
    }

    /// The latest reduced state.
    pub fn state(&self) -> Arc<SearchState> {
        self.state_rx.borrow().clone()
    }

    /// Watches state changes. The receiver starts out with the current state marked seen.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SearchState>> {
        let mut rx = self.state_rx.clone();
        rx.mark_unchanged();
        rx
    }

    /// A stream of every action reduced from now on, in reduction order.
    pub async fn actions(&self) -> mpsc::UnboundedReceiver<Action> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().await.push(tx);
        rx
    }

    /// Token cancelled when the store shuts down. Effects stop on it.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }

    pub async fn shutdown(self) {
        self.shutdown.cancel();
        if let Err(e) = self.handle.await {
            log::error!("store task ended abnormally: {e}");
        }
    }

    async fn run(
        mut rx: mpsc::UnboundedReceiver<Action>,
        state_tx: watch::Sender<Arc<SearchState>>,
        subscribers: Subscribers,
        shutdown: CancellationToken,
    ) {
        loop {
            let action = tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                action = rx.recv() => match action {
                    Some(action) => action,
                    None => break,
                },
            };

            log::debug!("reducing {}", action.kind());
            state_tx.send_if_modified(|state| {
                let next = search_reducer(state, &action);
                if Arc::ptr_eq(state, &next) {
                    return false;
                }
                *state = next;
                true
            });

            let mut subscribers = subscribers.lock().await;
            subscribers.retain(|tx| tx.send(action.clone()).is_ok());
        }
        log::info!("store stopped");
    }
}
