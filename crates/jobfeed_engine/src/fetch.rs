use std::time::Duration;

use jobfeed_core::{FailureKind, FetchError, JobListing, SearchParams};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl FetchSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_page(
        &self,
        params: &SearchParams,
        page: u32,
    ) -> Result<Vec<JobListing>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestListingSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestListingSource {
    pub fn new(settings: FetchSettings) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint,
        })
    }
}

#[async_trait::async_trait]
impl ListingSource for ReqwestListingSource {
    async fn fetch_page(
        &self,
        params: &SearchParams,
        page: u32,
    ) -> Result<Vec<JobListing>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&params.query_pairs(page))
            .send()
            .await
            .map_err(|err| map_reqwest_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(|err| map_reqwest_error(err))?;
        serde_json::from_str::<Vec<JobListing>>(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
