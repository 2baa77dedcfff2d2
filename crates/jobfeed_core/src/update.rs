use crate::{FetchState, Msg};

/// Pure transition function: applies one event to the fetch state.
///
/// `DataReceived` clears any prior error so that `error` can only ever be
/// observed together with empty `jobs`, regardless of how the two lookups
/// of a generation interleave.
pub fn update(state: FetchState, msg: Msg) -> FetchState {
    match msg {
        Msg::RequestStarted => FetchState::new(),
        Msg::DataReceived { jobs } => FetchState {
            jobs,
            loading: false,
            error: None,
            ..state
        },
        Msg::ErrorReceived { error } => FetchState {
            jobs: Vec::new(),
            loading: false,
            error: Some(error),
            ..state
        },
        Msg::NextPageProbeResolved { has_next_page } => FetchState {
            has_next_page,
            ..state
        },
    }
}
