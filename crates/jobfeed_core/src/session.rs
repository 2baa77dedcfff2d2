use crate::SearchParams;

/// Identifies one (params, page) pair and its pair of in-flight lookups.
/// Strictly monotonic; a lookup whose generation is no longer current must
/// not transition state.
pub type Generation = u64;

/// Pure bookkeeping of the feed's inputs.
///
/// A change operation returns `Some(generation)` only when an input
/// actually changed by value; re-submitting identical inputs is a complete
/// no-op so unrelated re-triggers never cancel-and-restart lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    params: SearchParams,
    page: u32,
    generation: Generation,
}

impl Session {
    /// A fresh session: no filters, page 1, generation 1 considered in
    /// flight from the start.
    pub fn new() -> Self {
        Self {
            params: SearchParams::new(),
            page: 1,
            generation: 1,
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Merges one filter entry and resets the page to 1.
    ///
    /// Returns the new generation, or `None` when the merged params equal
    /// the current ones and the page is already 1.
    pub fn apply_filter_change(&mut self, name: &str, value: &str) -> Option<Generation> {
        let mut merged = self.params.clone();
        merged.set(name, value);
        if merged == self.params && self.page == 1 {
            return None;
        }
        self.params = merged;
        self.page = 1;
        self.generation += 1;
        Some(self.generation)
    }

    /// Moves to another page. Pages below 1 clamp to 1.
    ///
    /// Returns the new generation, or `None` when the clamped page equals
    /// the current one.
    pub fn apply_page_change(&mut self, page: u32) -> Option<Generation> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        self.generation += 1;
        Some(self.generation)
    }

    /// The page the lookahead probe asks for.
    pub fn probe_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
