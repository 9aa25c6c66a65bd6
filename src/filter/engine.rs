//! Cascading genre / artist / album panels.
//!
//! Selecting a value in one panel replaces the track view and refreshes the
//! panels below it. Every selection scans the whole library: picking an
//! artist after a genre does not intersect the two.

use crate::library::{Library, Track};

use super::sort::distinct_sorted;

/// Sentinel entry at the top of the genre panel that clears every selection.
pub const ALL_GENRES: &str = "ALL";

/// One of the three browsing dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Facet {
    Genre,
    Artist,
    Album,
}

impl Facet {
    /// The track field this facet groups by.
    pub fn value(self, track: &Track) -> &str {
        match self {
            Facet::Genre => &track.genre,
            Facet::Artist => &track.artist,
            Facet::Album => &track.album,
        }
    }

    /// Panels rebuilt from the new view when a value of this facet is picked.
    fn cascades_to(self) -> &'static [Facet] {
        match self {
            Facet::Genre => &[Facet::Artist, Facet::Album],
            Facet::Artist => &[Facet::Album],
            Facet::Album => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Facet::Genre => "Genre",
            Facet::Artist => "Artist",
            Facet::Album => "Album",
        }
    }
}

/// The selection currently driving the panel view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Genre(String),
    Artist(String),
    Album(String),
}

impl Selection {
    fn of(facet: Facet, value: &str) -> Self {
        match facet {
            Facet::Genre => Selection::Genre(value.to_string()),
            Facet::Artist => Selection::Artist(value.to_string()),
            Facet::Album => Selection::Album(value.to_string()),
        }
    }
}

/// Facet panels plus the view they produce.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    genres: Vec<String>,
    artists: Vec<String>,
    albums: Vec<String>,
    selection: Selection,
    view: Vec<usize>,
}

impl FilterEngine {
    /// Engine in its post-load state for `library`.
    pub fn new(library: &Library) -> Self {
        let mut engine = Self::default();
        engine.reset(library);
        engine
    }

    /// Clear the selection and rebuild every panel from the full library.
    pub fn reset(&mut self, library: &Library) {
        let mut genres = vec![ALL_GENRES.to_string()];
        genres.extend(
            distinct_sorted(library.tracks().iter().map(|t| t.genre.as_str()))
                .into_iter()
                .filter(|g| g != ALL_GENRES),
        );
        self.genres = genres;
        self.rebuild(library, Facet::Artist, &library.all_indices());
        self.rebuild(library, Facet::Album, &library.all_indices());
        self.selection = Selection::None;
        self.view = library.all_indices();
    }

    /// Pick `value` in the `facet` panel.
    ///
    /// The view becomes every library track whose field equals `value`
    /// (exact match, library order) and the panels below `facet` are rebuilt
    /// from that view. Unknown values simply yield an empty view.
    pub fn select(&mut self, library: &Library, facet: Facet, value: &str) {
        if facet == Facet::Genre && value == ALL_GENRES {
            tracing::debug!("genre selection cleared");
            self.reset(library);
            return;
        }

        let view = library.indices_where(|t| facet.value(t) == value);
        for &below in facet.cascades_to() {
            self.rebuild(library, below, &view);
        }
        tracing::debug!(facet = facet.label(), value, matches = view.len(), "facet selected");

        self.selection = Selection::of(facet, value);
        self.view = view;
    }

    pub fn select_genre(&mut self, library: &Library, genre: &str) {
        self.select(library, Facet::Genre, genre);
    }

    pub fn select_artist(&mut self, library: &Library, artist: &str) {
        self.select(library, Facet::Artist, artist);
    }

    pub fn select_album(&mut self, library: &Library, album: &str) {
        self.select(library, Facet::Album, album);
    }

    fn rebuild(&mut self, library: &Library, facet: Facet, scope: &[usize]) {
        let list = distinct_sorted(library.resolve(scope).map(|t| facet.value(t)));
        match facet {
            Facet::Genre => self.genres = list,
            Facet::Artist => self.artists = list,
            Facet::Album => self.albums = list,
        }
    }

    /// Entries currently listed in the `facet` panel.
    pub fn facet_list(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Genre => &self.genres,
            Facet::Artist => &self.artists,
            Facet::Album => &self.albums,
        }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn albums(&self) -> &[String] {
        &self.albums
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The panel view as library indices.
    pub fn view_indices(&self) -> &[usize] {
        &self.view
    }

    /// The panel view as tracks, in order.
    pub fn current_view<'a>(&'a self, library: &'a Library) -> Vec<&'a Track> {
        library.resolve(&self.view).collect()
    }
}
