use super::*;
use crate::config::Settings;
use crate::filter::{SearchField, Selection};
use crate::library::{Column, CoverImage, CoverSource, Track};
use std::time::Duration;

/// Cover source that encodes the album name as the image bytes.
struct AlbumNameCovers;

impl CoverSource for AlbumNameCovers {
    fn cover_for(&self, track: &Track) -> Option<CoverImage> {
        if track.album.is_empty() {
            None
        } else {
            Some(CoverImage::new(track.album.as_bytes().to_vec()))
        }
    }
}

fn t(title: &str, artist: &str, album: &str, genre: &str) -> Track {
    Track {
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        genre: genre.into(),
        ..Track::default()
    }
}

fn numbered(title: &str, track: Option<u32>, secs: Option<u64>) -> Track {
    Track {
        title: title.into(),
        track,
        duration: secs.map(Duration::from_secs),
        ..Track::default()
    }
}

fn loaded(tracks: Vec<Track>) -> App {
    let mut app = App::new(Settings::default());
    app.load_tracks(tracks, &AlbumNameCovers);
    app
}

fn sample() -> App {
    loaded(vec![
        t("Paranoid", "Black Sabbath", "Paranoid", "Rock"),
        t("So What", "Miles Davis", "Kind of Blue", "Jazz"),
        t("Iron Man", "Black Sabbath", "Paranoid", "Rock"),
        t("Blue in Green", "Miles Davis", "Kind of Blue", "Jazz"),
        t("Untitled", "", "", ""),
    ])
}

fn titles(app: &App) -> Vec<String> {
    app.visible_tracks().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn new_app_is_empty() {
    let app = App::new(Settings::default());
    assert!(app.library().is_empty());
    assert!(app.visible().is_empty());
    assert_eq!(app.engine().genres(), ["ALL".to_string()].as_slice());
    assert_eq!(app.view_source(), ViewSource::Panels);
    assert!(app.carousel().images().is_empty());
    assert!(!app.visualizer().is_active());
}

#[test]
fn loading_shows_whole_library_in_order() {
    let app = sample();
    assert_eq!(app.visible(), &[0, 1, 2, 3, 4]);
    assert_eq!(app.status.as_deref(), Some("5 tracks"));
}

#[test]
fn covers_follow_album_order_with_placeholder_fallback() {
    let app = sample();
    // Albums: "", "Kind of Blue", "Paranoid".
    let covers: Vec<Vec<u8>> = app
        .carousel()
        .images()
        .iter()
        .map(|c| c.bytes().to_vec())
        .collect();
    assert_eq!(
        covers,
        vec![Vec::new(), b"Kind of Blue".to_vec(), b"Paranoid".to_vec()]
    );
    assert_eq!(app.carousel().current_index(), 0);
    assert_eq!(app.cover_album(1), Some("Kind of Blue"));
    assert_eq!(app.cover_album(3), None);
}

#[test]
fn panel_selection_drives_the_table() {
    let mut app = sample();
    app.select_genre("Rock");
    assert_eq!(app.visible(), &[0, 2]);
    assert_eq!(app.view_source(), ViewSource::Panels);

    app.select_album("Kind of Blue");
    assert_eq!(titles(&app), vec!["So What", "Blue in Green"]);
}

#[test]
fn search_takes_over_and_panels_take_back() {
    let mut app = sample();
    app.select_genre("Rock");

    app.search(SearchField::Title, "blue");
    assert_eq!(app.view_source(), ViewSource::Search);
    assert_eq!(app.visible(), &[3]);
    // The panels keep their own state underneath.
    assert_eq!(app.engine().selection(), &Selection::Genre("Rock".into()));

    app.select_artist("Miles Davis");
    assert_eq!(app.view_source(), ViewSource::Panels);
    assert_eq!(app.visible(), &[1, 3]);
}

#[test]
fn search_ignores_panel_scope() {
    let mut app = sample();
    app.select_genre("Jazz");
    app.search(SearchField::Artist, "sabbath");
    assert_eq!(app.visible(), &[0, 2]);
}

#[test]
fn typing_updates_search_incrementally() {
    let mut app = sample();
    app.cycle_search_field();
    assert_eq!(app.search_field(), SearchField::Title);
    app.push_search_char('i');
    app.push_search_char('r');
    assert_eq!(app.search_query(), "ir");
    assert_eq!(titles(&app), vec!["Iron Man"]);
    app.pop_search_char();
    assert_eq!(app.search_query(), "i");
    assert_eq!(titles(&app), vec!["Paranoid", "Iron Man", "Blue in Green", "Untitled"]);
}

#[test]
fn clearing_search_restores_panel_view() {
    let mut app = sample();
    app.select_genre("Jazz");
    app.search(SearchField::Title, "iron");
    app.clear_search();
    assert_eq!(app.view_source(), ViewSource::Panels);
    assert_eq!(app.visible(), &[1, 3]);
    assert_eq!(app.search_query(), "");
}

#[test]
fn sort_alternates_direction_on_every_call() {
    let mut app = sample();
    assert!(app.sort_visible(Column::Name));
    assert_eq!(
        titles(&app),
        vec!["Blue in Green", "Iron Man", "Paranoid", "So What", "Untitled"]
    );
    assert!(!app.sort_visible(Column::Name));
    assert_eq!(
        titles(&app),
        vec!["Untitled", "So What", "Paranoid", "Iron Man", "Blue in Green"]
    );
    // The toggle is shared across columns.
    assert!(app.sort_visible(Column::Artist));
    assert_eq!(
        app.table_sort(),
        Some(TableSort {
            column: Column::Artist,
            ascending: true
        })
    );
}

#[test]
fn sort_is_stable_and_case_insensitive() {
    let mut app = sample();
    app.sort_visible(Column::Artist);
    assert_eq!(
        titles(&app),
        vec!["Untitled", "Paranoid", "Iron Man", "So What", "Blue in Green"]
    );
    app.sort_visible(Column::Artist);
    assert_eq!(
        titles(&app),
        vec!["So What", "Blue in Green", "Paranoid", "Iron Man", "Untitled"]
    );
}

#[test]
fn numeric_columns_sort_by_value_with_missing_first() {
    let mut app = loaded(vec![
        numbered("ten", Some(10), Some(600)),
        numbered("two", Some(2), Some(65)),
        numbered("none", None, None),
        numbered("one", Some(1), Some(400)),
    ]);
    app.sort_visible(Column::Track);
    assert_eq!(titles(&app), vec!["none", "one", "two", "ten"]);

    app.sort_visible(Column::Time);
    assert_eq!(titles(&app), vec!["ten", "one", "two", "none"]);
}

#[test]
fn new_view_discards_table_sort() {
    let mut app = sample();
    app.sort_visible(Column::Name);
    app.select_genre("ALL");
    assert_eq!(app.table_sort(), None);
    assert_eq!(app.visible(), &[0, 1, 2, 3, 4]);
}

#[test]
fn reload_rejects_missing_root_and_keeps_library() {
    let mut app = sample();
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");

    let err = app.reload(&missing, &AlbumNameCovers).unwrap_err();
    assert!(matches!(err, crate::error::Error::LibraryRoot { .. }));
    assert_eq!(app.library().len(), 5);
    assert_eq!(app.visible(), &[0, 1, 2, 3, 4]);
    assert!(app.status.is_some());
    assert!(app.root().is_none());
}

#[test]
fn rescan_without_a_root_keeps_library() {
    let mut app = sample();
    assert!(app.rescan(&AlbumNameCovers).is_ok());
    assert_eq!(app.library().len(), 5);
    assert_eq!(app.status.as_deref(), Some("no library folder loaded"));
}

#[test]
fn rescan_reloads_the_current_root() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("a.mp3"), b"not audio").unwrap();

    let mut app = App::new(Settings::default());
    app.reload(tmp.path(), &AlbumNameCovers).unwrap();
    std::fs::write(tmp.path().join("b.mp3"), b"not audio").unwrap();

    app.rescan(&AlbumNameCovers).unwrap();
    assert_eq!(app.library().len(), 2);
    assert_eq!(app.root(), Some(tmp.path()));
}

#[test]
fn reload_scans_directory_and_resets_state() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("a.mp3"), b"not audio").unwrap();
    std::fs::write(tmp.path().join("b.mp3"), b"not audio").unwrap();
    std::fs::write(tmp.path().join("notes.txt"), b"skip").unwrap();

    let mut app = sample();
    app.search(SearchField::Title, "iron");
    app.start_animate(true);

    app.reload(tmp.path(), &AlbumNameCovers).unwrap();
    assert_eq!(app.library().len(), 2);
    assert_eq!(app.view_source(), ViewSource::Panels);
    assert_eq!(app.visible(), &[0, 1]);
    assert_eq!(app.root(), Some(tmp.path()));
    // Both untagged tracks share the empty album: one placeholder cover.
    assert_eq!(app.carousel().images().len(), 1);
    assert!(app.carousel().images()[0].is_blank());
    assert!(!app.carousel().is_running());
}

#[test]
fn carousel_events_are_forwarded() {
    let mut app = sample();
    assert!(app.tick_carousel().is_none());
    app.start_animate(true);
    let mut frames = 0;
    while app.tick_carousel().is_some() {
        frames += 1;
        assert!(frames < 1_000);
    }
    assert_eq!(app.carousel().current_index(), 1);
}

#[test]
fn activating_a_panel_selects_its_item() {
    let mut app = sample();
    app.focus = Focus::Genres;
    // Genres: ALL, "", Jazz, Rock.
    app.move_cursor(2);
    app.activate();
    assert_eq!(app.engine().selection(), &Selection::Genre("Jazz".into()));
    assert_eq!(app.visible(), &[1, 3]);

    app.focus = app.focus.next();
    assert_eq!(app.focus, Focus::Artists);
    assert_eq!(app.cursor(Focus::Artists), 0);
    app.activate();
    assert_eq!(
        app.engine().selection(),
        &Selection::Artist("Miles Davis".into())
    );
}

#[test]
fn cursor_wraps_around_lists() {
    let mut app = sample();
    app.focus = Focus::Tracks;
    app.move_cursor(-1);
    assert_eq!(app.cursor(Focus::Tracks), 4);
    app.move_cursor(1);
    assert_eq!(app.cursor(Focus::Tracks), 0);
}

#[test]
fn display_toggles_between_carousel_and_visualizer() {
    let mut app = sample();
    assert_eq!(app.display, crate::config::DisplaySetting::CoverFlow);
    app.toggle_display();
    assert_eq!(app.display, crate::config::DisplaySetting::Visualizer);
    app.toggle_display();
    assert_eq!(app.display, crate::config::DisplaySetting::CoverFlow);
}
