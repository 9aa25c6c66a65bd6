//! Application module: the browser state driven by the runtime.
//!
//! The `App` model lives in `app::model`. It owns the library, both views,
//! the carousel and the visualizer, and decides which view the track table
//! shows.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
