//! Domain types for the discovery pipeline.
//!
//! Wire types for the upstream's native shapes ([`RawProfile`] and friends)
//! live in `peoplesearch-client` and are re-exported here for convenience.

pub mod candidate;
pub mod request;

pub use candidate::NormalizedCandidate;
pub use request::{SearchHandle, SearchRequest, DEFAULT_RESULT_LIMIT};

pub use peoplesearch_client::{
    RawEducation, RawEmployment, RawProfile, SearchResults, SearchState, SearchStatus,
};
