//! Album cover lookup for the carousel.
//!
//! The carousel wants exactly one image per distinct album, in album-facet
//! order. Decoding and texture upload are the renderer's business; this
//! module only hands over encoded bytes.

use std::path::Path;
use std::sync::Arc;

use lofty::file::TaggedFileExt;
use lofty::picture::PictureType;

use super::model::{Library, Track};

/// Encoded image bytes (PNG, JPEG, ...). Empty bytes mean "draw a blank card".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverImage {
    bytes: Arc<[u8]>,
}

impl CoverImage {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_blank(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read an image file to use as placeholder. Unreadable files give a blank cover.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => Self::new(bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "placeholder cover unreadable");
                Self::blank()
            }
        }
    }
}

/// Something that can find the cover art for a track.
pub trait CoverSource {
    /// `None` when the track carries no usable cover.
    fn cover_for(&self, track: &Track) -> Option<CoverImage>;
}

/// Reads embedded pictures from the audio file's tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyCovers;

impl CoverSource for LoftyCovers {
    fn cover_for(&self, track: &Track) -> Option<CoverImage> {
        let tagged = lofty::read_from_path(&track.path).ok()?;

        let mut fallback: Option<CoverImage> = None;
        for tag in tagged.tags() {
            for picture in tag.pictures() {
                if picture.data().is_empty() {
                    continue;
                }
                if picture.pic_type() == PictureType::CoverFront {
                    return Some(CoverImage::new(picture.data()));
                }
                if fallback.is_none() {
                    fallback = Some(CoverImage::new(picture.data()));
                }
            }
        }
        fallback
    }
}

/// Build the carousel's slot images: one per entry of `albums`, taken from the
/// first library track that belongs to that album.
pub fn album_covers<S: CoverSource + ?Sized>(
    library: &Library,
    albums: &[String],
    source: &S,
    placeholder: &CoverImage,
) -> Vec<CoverImage> {
    albums
        .iter()
        .map(|album| {
            library
                .tracks()
                .iter()
                .find(|t| &t.album == album)
                .and_then(|t| source.cover_for(t))
                .unwrap_or_else(|| placeholder.clone())
        })
        .collect()
}
