//! Cover-flow carousel: a circular strip of album covers that flips one card
//! at a time.
//!
//! The carousel owns no timer. Whoever drives it calls [`Carousel::tick`]
//! every [`Carousel::period`] while [`Carousel::is_running`] holds and draws
//! the transforms it returns.

mod schedule;

use std::time::Duration;

use crate::config::CarouselSettings;
use crate::library::CoverImage;

pub use schedule::SlotTransform;
use schedule::{Pose, schedule};

/// Progress at which a transition is complete.
const FULL_TRANSITION: f64 = 2.0;

/// Which way the strip is moving.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Covers slide left; the index counts up.
    Left,
    /// Covers slide right; the index counts down.
    Right,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Direction::Left => 1,
            Direction::Right => -1,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// Normalise `raw` into the index range of a list of `len` covers.
///
/// Negative remainders map to `len - |remainder|`. An empty list always
/// yields 0.
pub fn wrap_index(raw: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    let r = raw % len;
    let wrapped = if r < 0 { len - r.abs() } else { r };
    wrapped as usize
}

#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<CoverImage>,
    slot_count: usize,
    step: f64,
    card_width: f32,
    period: Duration,
    current: usize,
    direction: Direction,
    progress: f64,
    running: bool,
}

impl Carousel {
    pub fn new(settings: &CarouselSettings) -> Self {
        // The schedule needs two hinge slots plus at least one card per side.
        let slot_count = settings.slot_count.max(4);
        let slot_count = slot_count + slot_count % 2;
        Self {
            images: Vec::new(),
            slot_count,
            step: settings.step,
            card_width: settings.card_width,
            period: Duration::from_millis(settings.tick_ms.max(1)),
            current: 0,
            direction: Direction::Left,
            progress: 0.0,
            running: false,
        }
    }

    /// Replace the covers (one per album, album order) and reset to the start.
    pub fn load_images(&mut self, images: Vec<CoverImage>) {
        tracing::debug!(count = images.len(), "carousel covers loaded");
        self.images = images;
        self.current = 0;
        self.direction = Direction::Left;
        self.progress = 0.0;
        self.running = false;
    }

    /// Begin (or re-arm) a one-card transition.
    ///
    /// Reversing direction first shifts the index by two so the strip keeps
    /// showing the same covers when it is re-anchored from the other end.
    pub fn start_animate(&mut self, left: bool) {
        let direction = if left {
            Direction::Left
        } else {
            Direction::Right
        };

        if direction != self.direction {
            let shifted = self.current as i64 + 2 * direction.sign();
            self.current = wrap_index(shifted, self.images.len());
            self.direction = direction;
        }

        if self.running {
            tracing::trace!(?direction, "carousel animation re-armed");
        }
        self.running = true;
    }

    /// Advance one animation step.
    ///
    /// Returns the frame to draw, or `None` when the carousel is idle. When the
    /// transition completes the index moves one card and the carousel stops.
    pub fn tick(&mut self) -> Option<Vec<SlotTransform>> {
        if !self.running {
            return None;
        }

        self.progress += self.step;
        let frame = self.transforms();

        if self.progress >= FULL_TRANSITION {
            self.progress = 0.0;
            let next = self.current as i64 + self.direction.sign();
            self.current = wrap_index(next, self.images.len());
            self.running = false;
            tracing::debug!(current = self.current, "carousel transition finished");
        }

        Some(frame)
    }

    /// Transforms for the current state, without advancing it.
    pub fn transforms(&self) -> Vec<SlotTransform> {
        schedule(&Pose {
            slot_count: self.slot_count,
            direction: self.direction.sign(),
            progress: self.progress,
            current: self.current,
            len: self.images.len(),
            card_width: self.card_width,
        })
    }

    pub fn images(&self) -> &[CoverImage] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Animating
        } else {
            Phase::Idle
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }
}
