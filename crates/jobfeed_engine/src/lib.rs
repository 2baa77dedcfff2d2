//! Jobfeed engine: remote listing lookups and the live feed handle.
mod feed;
mod fetch;

pub use feed::JobFeed;
pub use fetch::{FeedError, FetchSettings, ListingSource, ReqwestListingSource};
