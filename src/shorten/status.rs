use std::sync::Mutex;

/// UI-visible phase of a shortening attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShorteningState {
    Idle,
    Loading,
    Success,
    Error,
}

/// Full observable state of the shortening lifecycle.
///
/// `short_code`/`short_url` are `Some` iff the state is `Success`; `error` is
/// `Some` iff the state is `Error`; `original_url` reflects the most recent
/// attempt once the state has left `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorteningStatus {
    pub state: ShorteningState,
    pub original_url: String,
    pub short_code: Option<String>,
    pub short_url: Option<String>,
    pub error: Option<String>,
    pub error_reason: Option<String>,
}

impl Default for ShorteningStatus {
    fn default() -> Self {
        Self {
            state: ShorteningState::Idle,
            original_url: String::new(),
            short_code: None,
            short_url: None,
            error: None,
            error_reason: None,
        }
    }
}

/// Handle returned by [`ShorteningStore::subscribe`], used to detach again.
pub type SubscriberId = u64;

type Observer = Box<dyn FnMut(&ShorteningStatus) + Send>;

struct Inner {
    status: ShorteningStatus,
    observers: Vec<(SubscriberId, Observer)>,
    next_id: SubscriberId,
}

/// Observable state container coordinating the idle → loading → success|error
/// lifecycle around a shortening attempt.
///
/// No transition is rejected based on the current state; the store drives a
/// view, it is not a strict state machine. Overlapping attempts are allowed
/// and the last transition to arrive wins; callers that want a single
/// in-flight attempt must serialize themselves.
///
/// Observers receive every snapshot in transition order, starting with the
/// current one at subscription time. Callbacks run on the transitioning
/// thread while the store is locked and must not call back into the store.
pub struct ShorteningStore {
    inner: Mutex<Inner>,
}

impl ShorteningStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                status: ShorteningStatus::default(),
                observers: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> ShorteningStatus {
        self.inner.lock().unwrap().status.clone()
    }

    /// Attach an observer. It is invoked immediately with the current
    /// snapshot, then once per transition until unsubscribed.
    pub fn subscribe<F>(&self, mut observer: F) -> SubscriberId
    where
        F: FnMut(&ShorteningStatus) + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        observer(&inner.status);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Box::new(observer)));
        id
    }

    /// Detach an observer. Returns false if the id was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.observers.len();
        inner.observers.retain(|(observer_id, _)| *observer_id != id);
        inner.observers.len() != before
    }

    /// Force the store back to `Idle` with all fields cleared.
    pub fn reset(&self) {
        self.transition(|status| {
            *status = ShorteningStatus::default();
        });
    }

    /// Begin an attempt: `Loading`, remember the URL, drop any previous
    /// outcome. Valid from any prior state.
    pub fn start_shortening(&self, url: &str) {
        self.transition(|status| {
            status.state = ShorteningState::Loading;
            status.original_url = url.to_string();
            status.short_code = None;
            status.short_url = None;
            status.error = None;
            status.error_reason = None;
        });
    }

    /// Record a successful attempt. Keeps `original_url`.
    pub fn set_success(&self, short_code: &str, short_url: &str) {
        self.transition(|status| {
            status.state = ShorteningState::Success;
            status.short_code = Some(short_code.to_string());
            status.short_url = Some(short_url.to_string());
            status.error = None;
            status.error_reason = None;
        });
    }

    /// Record a failed attempt.
    pub fn set_error(&self, error: &str, reason: Option<&str>) {
        self.transition(|status| {
            status.state = ShorteningState::Error;
            status.error = Some(error.to_string());
            status.error_reason = reason.map(str::to_string);
            status.short_code = None;
            status.short_url = None;
        });
    }

    fn transition<F>(&self, apply: F)
    where
        F: FnOnce(&mut ShorteningStatus),
    {
        let mut inner = self.inner.lock().unwrap();
        apply(&mut inner.status);
        // Notify under the lock so observers see snapshots in transition order.
        let Inner {
            status, observers, ..
        } = &mut *inner;
        for (_, observer) in observers.iter_mut() {
            observer(status);
        }
    }
}

impl Default for ShorteningStore {
    fn default() -> Self {
        Self::new()
    }
}
