//! Per-frame placement of the carousel's cards.
//!
//! The strip has `slot_count` cards. The two in the middle are hinges that
//! flip as the animation progresses; the rest sit turned edge-on to either
//! side. Offsets are in scene units with the camera looking down +z, so a
//! negative depth is nearer to the viewer.

/// Depth of a hinge card's pivot, in front of the side cards.
const HINGE_DEPTH: f32 = -1.0;

/// Where and how to draw one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransform {
    pub slot: usize,
    /// Index into the carousel's images, `None` for a blank card.
    pub album: Option<usize>,
    /// Rotation about the vertical axis, in degrees.
    pub rotation_deg: f32,
    pub lateral: f32,
    pub depth: f32,
    /// Hinge cards have their texture mirrored.
    pub flipped: bool,
}

/// Inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct Pose {
    pub slot_count: usize,
    /// +1 or -1.
    pub direction: i64,
    pub progress: f64,
    pub current: usize,
    pub len: usize,
    pub card_width: f32,
}

impl Pose {
    fn sign(&self) -> f32 {
        self.direction as f32
    }

    /// Resting x of slot `k` before any hinge offsets.
    fn base_x(&self, k: usize) -> f32 {
        let d = self.sign();
        let n = self.slot_count as f32;
        let c = self.progress as f32;
        let w = self.card_width;
        -d * (n + c) * w / 2.0 + d * w * (k as f32 + 1.0)
    }

    /// Album shown in slot `k`. The reversed strip is anchored at its far end.
    fn album(&self, k: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let anchor = if self.direction < 0 {
            self.current as i64 + self.slot_count as i64
        } else {
            self.current as i64
        };
        let idx = super::wrap_index(anchor + self.direction * k as i64, self.len);
        (idx < self.len).then_some(idx)
    }

    fn side(&self, k: usize, rotation_deg: f32) -> SlotTransform {
        SlotTransform {
            slot: k,
            album: self.album(k),
            rotation_deg,
            lateral: self.base_x(k),
            depth: 0.0,
            flipped: false,
        }
    }

    /// A hinge card: shift by `pre` towards the viewer, turn by `rotation_deg`
    /// around the pivot, then shift by `post` along the turned card.
    fn hinge(&self, k: usize, rotation_deg: f32, pre: f32, post: f32) -> SlotTransform {
        let theta = rotation_deg.to_radians();
        SlotTransform {
            slot: k,
            album: self.album(k),
            rotation_deg,
            lateral: self.base_x(k) + pre + post * theta.cos(),
            depth: HINGE_DEPTH - post * theta.sin(),
            flipped: true,
        }
    }
}

/// Transforms for every slot, in paint order: near-side cards, the departing
/// hinge, the arriving hinge, then the far-side cards back to front.
pub(super) fn schedule(pose: &Pose) -> Vec<SlotTransform> {
    let n = pose.slot_count;
    let half = n / 2;
    let d = pose.sign();
    let half_turn = pose.progress as f32 / 2.0;
    let w = pose.card_width;

    let mut out = Vec::with_capacity(n);

    for k in 0..half.saturating_sub(1) {
        out.push(pose.side(k, d * 90.0));
    }

    out.push(pose.hinge(
        half - 1,
        -d * 90.0 * half_turn,
        -d * (1.0 - half_turn) * w / 2.0,
        d * w / 2.0,
    ));
    out.push(pose.hinge(
        half,
        d * 90.0 * (1.0 - half_turn),
        d * half_turn * w / 2.0,
        -d * w / 2.0,
    ));

    for k in (half + 1..n).rev() {
        out.push(pose.side(k, -d * 90.0));
    }

    out
}
