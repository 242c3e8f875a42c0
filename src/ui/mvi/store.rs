//! State container that runs the intent → mutation → state loop.

use std::collections::VecDeque;
use std::marker::PhantomData;

use super::mutation::Mutator;
use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<S> = Box<dyn FnMut(&S) + Send + 'static>;

struct Subscriber<S> {
    id: SubscriptionId,
    callback: Callback<S>,
    /// Last state delivered to this subscriber.
    last: Option<S>,
}

/// Single source of truth for one MVI feature.
///
/// Intents are queued and processed strictly in arrival order. After each
/// processed intent every subscriber whose last delivered state differs from
/// the new one is called synchronously with it.
pub struct Store<M, R>
where
    M: Mutator,
    R: Reducer<State = M::State, Mutation = M::Mutation>,
{
    state: M::State,
    mutator: M,
    pending: VecDeque<M::Intent>,
    subscribers: Vec<Subscriber<M::State>>,
    next_id: u64,
    _reducer: PhantomData<R>,
}

impl<M, R> Store<M, R>
where
    M: Mutator,
    R: Reducer<State = M::State, Mutation = M::Mutation>,
{
    /// Create a store starting from the default (empty) state.
    pub fn new(mutator: M) -> Self {
        Self::with_state(M::State::default(), mutator)
    }

    pub fn with_state(state: M::State, mutator: M) -> Self {
        Self {
            state,
            mutator,
            pending: VecDeque::new(),
            subscribers: Vec::new(),
            next_id: 0,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Number of queued intents not yet processed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Queue an intent without processing it.
    pub fn send(&mut self, intent: M::Intent) {
        self.pending.push_back(intent);
    }

    /// Process every queued intent in arrival order.
    ///
    /// Returns how many intents were processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Some(intent) = self.pending.pop_front() {
            self.process(intent);
            processed += 1;
        }
        processed
    }

    /// Queue `intent` and drain the queue.
    pub fn dispatch(&mut self, intent: M::Intent) {
        self.send(intent);
        self.process_pending();
    }

    /// Register a state observer.
    ///
    /// The callback receives the current state immediately, then every
    /// distinct state produced afterwards.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&M::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut subscriber = Subscriber {
            id,
            callback: Box::new(callback),
            last: None,
        };
        deliver(&mut subscriber, &self.state);
        self.subscribers.push(subscriber);
        id
    }

    /// Remove an observer. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    fn process(&mut self, intent: M::Intent) {
        tracing::debug!(?intent, "processing intent");
        let Some(mutation) = self.mutator.mutate(&self.state, intent) else {
            tracing::debug!("intent produced no mutation");
            return;
        };
        self.state = R::reduce(std::mem::take(&mut self.state), mutation);
        for subscriber in &mut self.subscribers {
            deliver(subscriber, &self.state);
        }
    }
}

fn deliver<S: Clone + PartialEq>(subscriber: &mut Subscriber<S>, state: &S) {
    if subscriber.last.as_ref() == Some(state) {
        return;
    }
    subscriber.last = Some(state.clone());
    (subscriber.callback)(state);
}
