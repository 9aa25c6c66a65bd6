//! Track records, the loaded library and the loaders that fill it.
//!
//! `scan` walks a music folder and reads tags with lofty; `covers` finds the
//! album art handed to the carousel; `display` turns tracks into table cells.

pub mod covers;
pub mod display;
mod model;
mod scan;

pub use covers::{CoverImage, CoverSource, LoftyCovers, album_covers};
pub use display::{Column, format_duration, row_cells};
pub use model::{Library, Track};
pub use scan::scan;
