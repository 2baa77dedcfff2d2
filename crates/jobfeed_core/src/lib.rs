//! Jobfeed core: pure fetch state machine and search input bookkeeping.
mod error;
mod listing;
mod msg;
mod params;
mod session;
mod state;
mod update;

pub use error::{FailureKind, FetchError};
pub use listing::JobListing;
pub use msg::Msg;
pub use params::SearchParams;
pub use session::{Generation, Session};
pub use state::FetchState;
pub use update::update;
