//! **trek-core**: shared types for discrete state-space search.
//!
//! This crate provides the pieces every search engine in the *trek*
//! workspace agrees on: the domain adapter traits, the search result and
//! its termination reasons, the input error taxonomy, engine configuration,
//! and small grid-geometry helpers used by board-shaped domains.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Domain`] | breadth-first search, exhaustive enumeration |
//! | [`HeuristicDomain`] : [`Domain`] | best-first (A* / greedy), hill climbing |

mod config;
mod distance;
mod error;
pub mod geom;
mod result;
mod traits;

pub use config::SearchConfig;
pub use distance::manhattan;
pub use error::InputError;
pub use geom::{Cell, Dims};
pub use result::{SearchResult, Termination};
pub use traits::{Domain, HeuristicDomain};

/// Step and path cost. All domains in this workspace use non-negative
/// integer costs so that priorities compare exactly.
pub type Cost = u64;
