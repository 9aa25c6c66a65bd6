use crate::library::{Library, Track};

/// Which field a text search looks at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchField {
    /// No field chosen: the search shows the whole library.
    #[default]
    None,
    Title,
    Artist,
    Album,
}

impl SearchField {
    fn value(self, track: &Track) -> Option<&str> {
        match self {
            SearchField::None => None,
            SearchField::Title => Some(&track.title),
            SearchField::Artist => Some(&track.artist),
            SearchField::Album => Some(&track.album),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::None => "Search",
            SearchField::Title => "Song Title",
            SearchField::Artist => "Artist",
            SearchField::Album => "Album",
        }
    }

    /// Next selector, wrapping back to `None`.
    pub fn cycle(self) -> Self {
        match self {
            SearchField::None => SearchField::Title,
            SearchField::Title => SearchField::Artist,
            SearchField::Artist => SearchField::Album,
            SearchField::Album => SearchField::None,
        }
    }
}

/// Case-insensitive substring search over the full library.
///
/// Returns library indices in library order. An empty query matches every
/// track of the chosen field.
pub fn search(library: &Library, field: SearchField, query: &str) -> Vec<usize> {
    if field == SearchField::None {
        return library.all_indices();
    }

    let needle = query.to_lowercase();
    library.indices_where(|t| {
        field
            .value(t)
            .map(|v| v.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}
