//! Application model types: `App`, `ViewSource` and `Focus`.
//!
//! Panel selections and the text search each produce a view; whichever the
//! user touched last is the one the table shows.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::carousel::{Carousel, SlotTransform};
use crate::config::{DisplaySetting, Settings};
use crate::error::Result;
use crate::filter::{self, Facet, FilterEngine, SearchField};
use crate::library::{self, Column, CoverImage, CoverSource, Library, Track};
use crate::visualizer::BarVisualizer;

/// Which view currently drives the track table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewSource {
    #[default]
    Panels,
    Search,
}

/// Which list keyboard navigation applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    Genres,
    Artists,
    Albums,
    #[default]
    Tracks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Genres => Focus::Artists,
            Focus::Artists => Focus::Albums,
            Focus::Albums => Focus::Tracks,
            Focus::Tracks => Focus::Genres,
        }
    }

    pub fn facet(self) -> Option<Facet> {
        match self {
            Focus::Genres => Some(Facet::Genre),
            Focus::Artists => Some(Facet::Artist),
            Focus::Albums => Some(Facet::Album),
            Focus::Tracks => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Focus::Genres => 0,
            Focus::Artists => 1,
            Focus::Albums => 2,
            Focus::Tracks => 3,
        }
    }
}

/// The last table sort applied to the visible rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableSort {
    pub column: Column,
    pub ascending: bool,
}

/// The main application model.
pub struct App {
    settings: Settings,
    root: Option<PathBuf>,
    library: Library,
    engine: FilterEngine,
    search_field: SearchField,
    search_query: String,
    source: ViewSource,
    visible: Vec<usize>,
    /// Flips on every sort request regardless of column.
    ascend_sorted: bool,
    sort: Option<TableSort>,
    carousel: Carousel,
    /// Album names in carousel image order.
    cover_albums: Vec<String>,
    visualizer: BarVisualizer,
    placeholder: CoverImage,

    pub focus: Focus,
    cursors: [usize; 4],
    pub search_mode: bool,
    /// Folder path being typed for a new library root.
    pub path_input: Option<String>,
    pub display: DisplaySetting,
    pub status: Option<String>,
}

impl App {
    /// Create an `App` with an empty library.
    pub fn new(settings: Settings) -> Self {
        let library = Library::default();
        let engine = FilterEngine::new(&library);
        let placeholder = settings
            .library
            .placeholder_cover
            .as_deref()
            .map(CoverImage::from_file)
            .unwrap_or_default();

        Self {
            root: None,
            visible: engine.view_indices().to_vec(),
            library,
            engine,
            search_field: SearchField::None,
            search_query: String::new(),
            source: ViewSource::Panels,
            ascend_sorted: false,
            sort: None,
            carousel: Carousel::new(&settings.carousel),
            cover_albums: Vec::new(),
            visualizer: BarVisualizer::new(&settings.visualizer),
            placeholder,
            focus: Focus::default(),
            cursors: [0; 4],
            search_mode: false,
            path_input: None,
            display: settings.ui.start_display,
            status: None,
            settings,
        }
    }

    /// Scan `root` and rebuild everything from it.
    ///
    /// On error the previously loaded library stays in place.
    pub fn reload<S: CoverSource + ?Sized>(&mut self, root: &Path, covers: &S) -> Result<()> {
        let tracks = match library::scan(root, &self.settings.library) {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "reload failed");
                self.status = Some(e.to_string());
                return Err(e);
            }
        };

        self.load_tracks(tracks, covers);
        self.root = Some(root.to_path_buf());
        tracing::info!(
            root = %root.display(),
            tracks = self.library.len(),
            albums = self.engine.albums().len(),
            "library loaded"
        );
        Ok(())
    }

    /// Replace the library with `tracks` and rebuild the panels, the table
    /// and the carousel covers from it.
    pub fn load_tracks<S: CoverSource + ?Sized>(&mut self, tracks: Vec<Track>, covers: &S) {
        self.library = Library::new(tracks);
        self.engine.reset(&self.library);
        self.source = ViewSource::Panels;
        self.search_query.clear();
        self.search_mode = false;
        self.refresh_visible();

        let images =
            library::album_covers(&self.library, self.engine.albums(), covers, &self.placeholder);
        self.carousel.load_images(images);
        self.cover_albums = self.engine.albums().to_vec();

        self.cursors = [0; 4];
        self.status = Some(format!("{} tracks", self.library.len()));
    }

    /// Reload the current root. Without one there is nothing to rescan and
    /// the library is left alone.
    pub fn rescan<S: CoverSource + ?Sized>(&mut self, covers: &S) -> Result<()> {
        let Some(root) = self.root.clone() else {
            self.status = Some("no library folder loaded".to_string());
            return Ok(());
        };
        self.reload(&root, covers)
    }

    pub fn select_genre(&mut self, genre: &str) {
        self.engine.select_genre(&self.library, genre);
        self.use_panels();
    }

    pub fn select_artist(&mut self, artist: &str) {
        self.engine.select_artist(&self.library, artist);
        self.use_panels();
    }

    pub fn select_album(&mut self, album: &str) {
        self.engine.select_album(&self.library, album);
        self.use_panels();
    }

    fn use_panels(&mut self) {
        self.source = ViewSource::Panels;
        self.refresh_visible();
    }

    /// Replace the table with the search result for `query` on `field`.
    pub fn search(&mut self, field: SearchField, query: &str) {
        self.search_field = field;
        self.search_query = query.to_string();
        self.source = ViewSource::Search;
        self.refresh_visible();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.search_query);
        query.push(c);
        self.search(self.search_field, &query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = std::mem::take(&mut self.search_query);
        query.pop();
        self.search(self.search_field, &query);
    }

    pub fn cycle_search_field(&mut self) {
        let query = std::mem::take(&mut self.search_query);
        self.search(self.search_field.cycle(), &query);
    }

    /// Drop the search and go back to whatever the panels were showing.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_mode = false;
        self.use_panels();
    }

    fn refresh_visible(&mut self) {
        self.visible = match self.source {
            ViewSource::Panels => self.engine.view_indices().to_vec(),
            ViewSource::Search => {
                filter::search(&self.library, self.search_field, &self.search_query)
            }
        };
        self.sort = None;
        self.cursors[Focus::Tracks.slot()] = 0;
    }

    /// Library indices of the rows the table shows, in row order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_tracks(&self) -> Vec<&Track> {
        self.library.resolve(&self.visible).collect()
    }

    /// Sort the visible rows by `column`. Ascending and descending alternate
    /// on every call; returns whether this sort was ascending.
    pub fn sort_visible(&mut self, column: Column) -> bool {
        self.ascend_sorted = !self.ascend_sorted;
        let ascending = self.ascend_sorted;

        let tracks = self.library.tracks();
        self.visible.retain(|&i| i < tracks.len());
        self.visible.sort_by(|&a, &b| {
            let ord = compare_rows(column, &tracks[a], &tracks[b]);
            if ascending { ord } else { ord.reverse() }
        });

        self.sort = Some(TableSort { column, ascending });
        tracing::debug!(?column, ascending, "table sorted");
        ascending
    }

    pub fn start_animate(&mut self, left: bool) {
        self.carousel.start_animate(left);
    }

    pub fn tick_carousel(&mut self) -> Option<Vec<SlotTransform>> {
        self.carousel.tick()
    }

    /// Select the panel item under the cursor, or nothing when the table has focus.
    pub fn activate(&mut self) {
        let Some(facet) = self.focus.facet() else {
            return;
        };
        let cursor = self.cursor(self.focus);
        let Some(value) = self.engine.facet_list(facet).get(cursor).cloned() else {
            return;
        };
        self.engine.select(&self.library, facet, &value);
        self.use_panels();

        // Cascaded lists were rebuilt; start them from the top.
        for other in [Focus::Artists, Focus::Albums] {
            if other.slot() > self.focus.slot() {
                self.cursors[other.slot()] = 0;
            }
        }
    }

    fn list_len(&self, focus: Focus) -> usize {
        match focus.facet() {
            Some(facet) => self.engine.facet_list(facet).len(),
            None => self.visible.len(),
        }
    }

    pub fn cursor(&self, focus: Focus) -> usize {
        let len = self.list_len(focus);
        self.cursors[focus.slot()].min(len.saturating_sub(1))
    }

    /// Move the focused list's cursor by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.list_len(self.focus);
        if len == 0 {
            return;
        }
        let cur = self.cursor(self.focus) as isize;
        let next = (cur + delta).rem_euclid(len as isize) as usize;
        self.cursors[self.focus.slot()] = next;
    }

    pub fn toggle_display(&mut self) {
        self.display = match self.display {
            DisplaySetting::CoverFlow => DisplaySetting::Visualizer,
            DisplaySetting::Visualizer => DisplaySetting::CoverFlow,
        };
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn view_source(&self) -> ViewSource {
        self.source
    }

    pub fn search_field(&self) -> SearchField {
        self.search_field
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn table_sort(&self) -> Option<TableSort> {
        self.sort
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Album shown by carousel image `index`.
    pub fn cover_album(&self, index: usize) -> Option<&str> {
        self.cover_albums.get(index).map(String::as_str)
    }

    pub fn visualizer(&self) -> &BarVisualizer {
        &self.visualizer
    }

    pub fn visualizer_mut(&mut self) -> &mut BarVisualizer {
        &mut self.visualizer
    }
}

/// Row order for a table column. Text compares case-insensitively; missing
/// numbers and durations sort first.
fn compare_rows(column: Column, a: &Track, b: &Track) -> Ordering {
    match column {
        Column::Track => a.track.cmp(&b.track),
        Column::Time => a.duration.cmp(&b.duration),
        text => text
            .cell(a)
            .to_lowercase()
            .cmp(&text.cell(b).to_lowercase()),
    }
}
