use serde::{Deserialize, Serialize};

/// One remote job-listing record, passed through to the presentation layer
/// without validation or transformation beyond JSON decoding.
///
/// The optional fields mirror what the upstream positions API actually
/// serves; unknown fields in the body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Markdown-flavored listing text (the feed always requests
    /// `markdown=true`).
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub how_to_apply: Option<String>,
    #[serde(default, rename = "type")]
    pub employment_type: Option<String>,
}
