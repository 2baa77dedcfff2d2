use crate::{FetchError, JobListing};

/// The live answer for the current (params, page) generation.
///
/// Invariants, preserved by [`update`](crate::update) for any event order:
/// `loading` implies `jobs` empty and `error` absent; `error` present
/// implies `jobs` empty. `has_next_page` is updated independently of the
/// loading/success/failure transition and never blocks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchState {
    pub jobs: Vec<JobListing>,
    pub loading: bool,
    pub error: Option<FetchError>,
    pub has_next_page: bool,
}

impl FetchState {
    /// The state every generation starts from: loading, nothing known.
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            error: None,
            has_next_page: false,
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}
