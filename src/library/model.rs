use std::path::PathBuf;
use std::time::Duration;

/// One audio file and the tag fields the browser cares about.
///
/// Missing text tags are empty strings rather than `None` so that they sort
/// and compare like any other (low) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub track: Option<u32>,
    pub duration: Option<Duration>,
    pub artist: String,
    pub album: String,
    pub genre: String,
}

/// The loaded collection, in traversal order.
///
/// Indices into a `Library` double as playback order and as the reference
/// for every derived view, so the collection is only ever replaced whole.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Track>,
}

impl Library {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every index in library order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.tracks.len()).collect()
    }

    /// Indices of the tracks for which `keep` holds, in library order.
    pub fn indices_where<F>(&self, mut keep: F) -> Vec<usize>
    where
        F: FnMut(&Track) -> bool,
    {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| keep(t))
            .map(|(i, _)| i)
            .collect()
    }

    /// Resolve a view (list of indices) to track references, skipping stale indices.
    pub fn resolve<'a>(&'a self, view: &'a [usize]) -> impl Iterator<Item = &'a Track> + 'a {
        view.iter().filter_map(|&i| self.tracks.get(i))
    }
}
