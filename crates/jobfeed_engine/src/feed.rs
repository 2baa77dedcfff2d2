use std::sync::{Arc, Mutex};

use engine_logging::{engine_debug, engine_warn};
use jobfeed_core::{update, FetchState, Generation, Msg, SearchParams, Session};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::fetch::{FeedError, FetchSettings, ListingSource, ReqwestListingSource};

#[derive(Clone)]
pub struct JobFeed {
    inner: Arc<FeedInner>,
}

struct FeedInner {
    source: Arc<dyn ListingSource>,
    state: watch::Sender<FetchState>,
    session: Mutex<ActiveGeneration>,
}

struct ActiveGeneration {
    session: Session,
    cancel: CancellationToken,
}

#[derive(Clone, Copy)]
enum LookupKind {
    Primary,
    Probe,
}

impl JobFeed {
    pub fn new(settings: FetchSettings) -> Result<Self, FeedError> {
        Ok(Self::with_source(Arc::new(ReqwestListingSource::new(
            settings,
        )?)))
    }

    pub fn with_source(source: Arc<dyn ListingSource>) -> Self {
        let (state, _) = watch::channel(FetchState::new());
        let inner = Arc::new(FeedInner {
            source,
            state,
            session: Mutex::new(ActiveGeneration {
                session: Session::new(),
                cancel: CancellationToken::new(),
            }),
        });

        let plan = {
            let guard = inner.session.lock().expect("lock feed session");
            LookupPlan::for_current(&guard)
        };
        plan.spawn(&inner);

        Self { inner }
    }

    pub fn set_filter(&self, name: &str, value: &str) {
        self.inner
            .retrigger(|session| session.apply_filter_change(name, value));
    }

    pub fn set_page(&self, page: u32) {
        self.inner
            .retrigger(|session| session.apply_page_change(page));
    }

    pub fn state(&self) -> FetchState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.inner.state.subscribe()
    }

    pub fn params(&self) -> SearchParams {
        self.inner
            .session
            .lock()
            .expect("lock feed session")
            .session
            .params()
            .clone()
    }

    pub fn page(&self) -> u32 {
        self.inner
            .session
            .lock()
            .expect("lock feed session")
            .session
            .page()
    }
}

struct LookupPlan {
    generation: Generation,
    cancel: CancellationToken,
    params: SearchParams,
    page: u32,
    probe_page: u32,
}

impl LookupPlan {
    fn for_current(active: &ActiveGeneration) -> Self {
        Self {
            generation: active.session.generation(),
            cancel: active.cancel.clone(),
            params: active.session.params().clone(),
            page: active.session.page(),
            probe_page: active.session.probe_page(),
        }
    }

    fn spawn(self, inner: &Arc<FeedInner>) {
        engine_debug!(
            "generation {} looking up page {} with {} filter(s)",
            self.generation,
            self.page,
            self.params.len()
        );
        spawn_lookup(
            inner,
            LookupKind::Primary,
            self.params.clone(),
            self.page,
            self.generation,
            self.cancel.clone(),
        );
        spawn_lookup(
            inner,
            LookupKind::Probe,
            self.params,
            self.probe_page,
            self.generation,
            self.cancel,
        );
    }
}

impl FeedInner {
    fn retrigger(self: &Arc<Self>, change: impl FnOnce(&mut Session) -> Option<Generation>) {
        let plan = {
            let mut guard = self.session.lock().expect("lock feed session");
            if change(&mut guard.session).is_none() {
                return;
            }
            guard.cancel.cancel();
            guard.cancel = CancellationToken::new();
            // The loading reset must land before any lookup of the new
            // generation can complete, so it goes out under the same lock.
            self.state.send_modify(|state| {
                *state = update(std::mem::take(state), Msg::RequestStarted);
            });
            LookupPlan::for_current(&guard)
        };
        plan.spawn(self);
    }

    fn apply(&self, generation: Generation, msg: Msg) {
        let guard = self.session.lock().expect("lock feed session");
        if guard.session.generation() != generation {
            engine_debug!("dropping completion from superseded generation {generation}");
            return;
        }
        self.state.send_modify(|state| {
            *state = update(std::mem::take(state), msg);
        });
    }
}

impl Drop for FeedInner {
    fn drop(&mut self) {
        if let Ok(active) = self.session.get_mut() {
            active.cancel.cancel();
        }
    }
}

fn spawn_lookup(
    inner: &Arc<FeedInner>,
    kind: LookupKind,
    params: SearchParams,
    page: u32,
    generation: Generation,
    cancel: CancellationToken,
) {
    let source = Arc::clone(&inner.source);
    // Lookup tasks hold the feed weakly; only handles keep it alive.
    let inner = Arc::downgrade(inner);
    tokio::spawn(async move {
        let outcome = tokio::select! {
            _ = cancel.cancelled() => return,
            outcome = source.fetch_page(&params, page) => outcome,
        };
        let msg = match (kind, outcome) {
            (LookupKind::Primary, Ok(jobs)) => Msg::DataReceived { jobs },
            (LookupKind::Primary, Err(error)) => Msg::ErrorReceived { error },
            (LookupKind::Probe, Ok(jobs)) => Msg::NextPageProbeResolved {
                has_next_page: !jobs.is_empty(),
            },
            (LookupKind::Probe, Err(error)) => {
                engine_warn!("next-page probe for page {page} failed: {error}");
                Msg::NextPageProbeResolved {
                    has_next_page: false,
                }
            }
        };
        if let Some(inner) = inner.upgrade() {
            inner.apply(generation, msg);
        }
    });
}
