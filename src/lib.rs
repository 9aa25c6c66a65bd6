//! quaver: a music-library browser.
//!
//! The library crate holds everything that does not touch the terminal: the
//! scanned library, the facet panels and search, table sorting, the cover-flow
//! carousel and the bar visualizer, all bundled in [`app::App`].

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod filter;
pub mod library;
pub mod logging;
pub mod visualizer;
