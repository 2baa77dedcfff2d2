use crate::{FetchError, JobListing};

/// The closed set of events the reducer folds into
/// [`FetchState`](crate::FetchState).
///
/// Only non-canceled lookups ever produce a `Msg`; a superseded lookup is
/// dropped by the engine before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A new (params, page) generation began; prior results are discarded.
    RequestStarted,
    /// The primary lookup resolved with the listings for the current page.
    DataReceived { jobs: Vec<JobListing> },
    /// The primary lookup failed.
    ErrorReceived { error: FetchError },
    /// The lookahead probe resolved; true when page+1 holds at least one
    /// listing.
    NextPageProbeResolved { has_next_page: bool },
}
