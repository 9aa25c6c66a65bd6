//! Track views: the facet panels and the free-text search.
//!
//! Both produce an ordered list of library indices that the track table shows
//! verbatim. They never read each other's output.

mod engine;
mod search;
pub mod sort;

pub use engine::{ALL_GENRES, Facet, FilterEngine, Selection};
pub use search::{SearchField, search};
