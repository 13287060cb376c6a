//! Trait seams for pluggable collaborators.

pub mod upstream;

pub use upstream::Upstream;
