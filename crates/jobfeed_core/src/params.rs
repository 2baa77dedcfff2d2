use std::collections::BTreeMap;

/// Filter parameters for a search: a name -> value map merged one entry at
/// a time as the user edits form fields.
///
/// An absent name means "no constraint"; values (including the empty
/// string) are forwarded to the remote API verbatim. The map is ordered so
/// rendered queries are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    filters: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow-merges one filter entry, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(name.into(), value.into());
    }

    /// Builder form of [`SearchParams::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Renders the outbound query for one page: `markdown=true`, `page=N`,
    /// then every filter pair in map order.
    pub fn query_pairs(&self, page: u32) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 2);
        pairs.push(("markdown".to_string(), "true".to_string()));
        pairs.push(("page".to_string(), page.to_string()));
        for (name, value) in &self.filters {
            pairs.push((name.clone(), value.clone()));
        }
        pairs
    }
}
