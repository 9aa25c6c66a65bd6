use std::cmp::Ordering;
use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Files before subdirectories, then by name ignoring case (raw name breaks
/// ties), so the walk visits every file of a directory before descending into
/// its children.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let folded = |e: &DirEntry| e.file_name().to_string_lossy().to_lowercase();
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Read the tag fields of one file. Unreadable files still produce a track,
/// with every text field left empty.
fn read_track(path: &Path) -> Track {
    let mut track = Track {
        path: path.to_path_buf(),
        ..Track::default()
    };

    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable tags");
            return track;
        }
    };

    track.duration = Some(tagged.properties().duration());

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        if let Some(v) = tag.title() {
            track.title = v.to_string();
        }
        if let Some(v) = tag.artist() {
            track.artist = v.to_string();
        }
        if let Some(v) = tag.album() {
            track.album = v.to_string();
        }
        if let Some(v) = tag.genre() {
            track.genre = v.to_string();
        }
        track.track = Some(tag.track().unwrap_or(0));
    }

    track
}

/// Walk `dir` depth-first and collect one [`Track`] per audio file.
///
/// The result keeps traversal order (no global sort): within each directory
/// files come first, then each subdirectory in turn.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>> {
    if !dir.is_dir() {
        return Err(Error::LibraryRoot {
            path: dir.to_path_buf(),
        });
    }

    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by(files_first);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if entry.file_type().is_file() && is_audio_file(path, settings) {
            tracks.push(read_track(path));
        }
    }

    tracing::info!(root = %dir.display(), count = tracks.len(), "library scanned");
    Ok(tracks)
}
