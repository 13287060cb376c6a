//! Candidate Discovery & Normalization Pipeline
//!
//! Turns a slow, schema-inconsistent people-search upstream into a small
//! set of stable, deduplicated, ranked candidate records suitable for
//! display and for feeding a downstream reasoning agent.
//!
//! The upstream does not answer synchronously: a search is initiated,
//! scraped out-of-band, and polled until done. Around that, this crate
//! provides:
//!
//! - [`SearchPoller`] — the initiate → poll → fetch state machine
//! - identity resolution that always yields a stable key, even for
//!   severely incomplete records
//! - canonical-link resolution with search-engine fallback
//! - tenure calculation over overlapping employment intervals
//! - normalization that strips empty fields so token-budgeted consumers
//!   never pay for them
//! - heuristic presentation ranking when no authoritative score exists
//!
//! # Usage
//!
//! ```rust,ignore
//! use peoplesearch_client::PeopleSearchClient;
//! use sourcing::{rank, Discovery, SearchRequest};
//!
//! let client = PeopleSearchClient::from_env()?;
//! let discovery = Discovery::new(client);
//!
//! let request = SearchRequest::new("staff engineer rust")
//!     .with_regions(vec!["us".into()]);
//! let candidates = discovery.discover(&request).await?;
//! let ordered = rank(candidates, narrative.as_deref());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - the [`Upstream`] seam over the three-call protocol
//! - [`types`] - search parameters and candidate records
//! - [`poller`] - the bounded fixed-cadence poll loop
//! - [`pipeline`] - per-profile transforms and the [`Discovery`] facade
//! - [`testing`] - a scripted [`MockUpstream`](testing::MockUpstream)

pub mod client;
pub mod error;
pub mod pipeline;
pub mod poller;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{DiscoveryError, Result};
pub use pipeline::{normalize, rank, Discovery};
pub use poller::{SearchPoller, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL};
pub use traits::Upstream;
pub use types::{
    NormalizedCandidate, RawEducation, RawEmployment, RawProfile, SearchHandle, SearchRequest,
    SearchResults, SearchState, SearchStatus, DEFAULT_RESULT_LIMIT,
};
