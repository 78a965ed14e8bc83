pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{DEFAULT_USER_AGENT, Fetcher, FetcherConfig};
pub use errors::{FetchError, FetchReason};
pub use types::{Charset, PageResponse};
