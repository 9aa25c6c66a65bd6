use std::time::Duration;

use super::model::Track;

/// Table columns, in display order. Every track field except the path.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Track,
    Time,
    Artist,
    Album,
    Genre,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Track,
        Column::Time,
        Column::Artist,
        Column::Album,
        Column::Genre,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Track => "Track",
            Column::Time => "Time",
            Column::Artist => "Artist",
            Column::Album => "Album",
            Column::Genre => "Genre",
        }
    }

    /// Rendered text of this column for `track`.
    pub fn cell(self, track: &Track) -> String {
        match self {
            Column::Name => track.title.clone(),
            Column::Track => track.track.map(|n| n.to_string()).unwrap_or_default(),
            Column::Time => track.duration.map(format_duration).unwrap_or_default(),
            Column::Artist => track.artist.clone(),
            Column::Album => track.album.clone(),
            Column::Genre => track.genre.clone(),
        }
    }
}

/// Format a duration as `minutes:seconds` with zero-padded seconds (`3:07`).
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// One table row for `track`, in [`Column::ALL`] order.
pub fn row_cells(track: &Track) -> [String; 6] {
    Column::ALL.map(|c| c.cell(track))
}
