//! Decorative bar display.
//!
//! Bars jump to random heights while the visualizer is active and fall back
//! towards the floor on every decay step. Nothing here listens to audio.

use rand::Rng;

use crate::config::VisualizerSettings;

pub const MIN_HEIGHT: f32 = 0.01;
pub const DROP_RATE: f32 = 0.03;

/// Colour scheme for the bars. Each has three stops from base to top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VisualizerColor {
    #[default]
    Green,
    Red,
    Blue,
    Purple,
    Yellow,
    Orange,
    Cyan,
}

impl VisualizerColor {
    pub fn next(self) -> Self {
        match self {
            VisualizerColor::Green => VisualizerColor::Red,
            VisualizerColor::Red => VisualizerColor::Blue,
            VisualizerColor::Blue => VisualizerColor::Purple,
            VisualizerColor::Purple => VisualizerColor::Yellow,
            VisualizerColor::Yellow => VisualizerColor::Orange,
            VisualizerColor::Orange => VisualizerColor::Cyan,
            VisualizerColor::Cyan => VisualizerColor::Green,
        }
    }

    /// Base, mid and top colours as RGB in `0.0..=1.0`.
    pub fn stops(self) -> [[f32; 3]; 3] {
        match self {
            VisualizerColor::Green => [[0.0, 0.6, 0.0], [0.0, 0.8, 0.0], [0.0, 1.0, 0.0]],
            VisualizerColor::Red => [[0.6, 0.0, 0.0], [0.8, 0.0, 0.0], [1.0, 0.0, 0.0]],
            VisualizerColor::Blue => [[0.0, 0.0, 0.6], [0.0, 0.0, 0.8], [0.0, 0.0, 1.0]],
            VisualizerColor::Purple => [[0.6, 0.0, 0.6], [0.8, 0.0, 0.8], [1.0, 0.0, 1.0]],
            VisualizerColor::Yellow => [[0.6, 0.6, 0.0], [0.8, 0.8, 0.0], [1.0, 1.0, 0.0]],
            VisualizerColor::Orange => [[0.6, 0.39, 0.0], [0.8, 0.52, 0.0], [1.0, 0.65, 0.0]],
            VisualizerColor::Cyan => [[0.0, 0.6, 0.6], [0.0, 0.8, 0.8], [0.0, 1.0, 1.0]],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisualizerColor::Green => "green",
            VisualizerColor::Red => "red",
            VisualizerColor::Blue => "blue",
            VisualizerColor::Purple => "purple",
            VisualizerColor::Yellow => "yellow",
            VisualizerColor::Orange => "orange",
            VisualizerColor::Cyan => "cyan",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BarVisualizer {
    heights: Vec<f32>,
    active: bool,
    color: VisualizerColor,
}

impl BarVisualizer {
    pub fn new(settings: &VisualizerSettings) -> Self {
        Self {
            heights: vec![MIN_HEIGHT; settings.bar_count.max(1)],
            active: settings.start_active,
            color: VisualizerColor::default(),
        }
    }

    /// Drop every bar by one step, never below the floor.
    pub fn decay(&mut self) {
        for h in &mut self.heights {
            *h = (*h - DROP_RATE).max(MIN_HEIGHT);
        }
    }

    /// Kick every bar to a random height in `[0.5, 1.5)`. Bars only ever go up
    /// here. Does nothing while inactive.
    pub fn jump<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.active {
            return;
        }
        for h in &mut self.heights {
            let target = rng.random_range(50..150) as f32 / 100.0;
            *h = h.max(target);
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            tracing::debug!(active, "visualizer toggled");
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cycle_color(&mut self) -> VisualizerColor {
        self.color = self.color.next();
        self.color
    }

    pub fn color(&self) -> VisualizerColor {
        self.color
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn visualizer(active: bool) -> BarVisualizer {
        BarVisualizer::new(&VisualizerSettings {
            bar_count: 8,
            start_active: active,
            ..VisualizerSettings::default()
        })
    }

    #[test]
    fn bars_start_at_the_floor() {
        let v = BarVisualizer::new(&VisualizerSettings::default());
        assert_eq!(v.heights().len(), 100);
        assert!(v.heights().iter().all(|&h| h == MIN_HEIGHT));
        assert!(!v.is_active());
    }

    #[test]
    fn decay_never_drops_below_floor() {
        let mut v = visualizer(false);
        for _ in 0..5 {
            v.decay();
        }
        assert!(v.heights().iter().all(|&h| h == MIN_HEIGHT));
    }

    #[test]
    fn jump_is_ignored_while_inactive() {
        let mut v = visualizer(false);
        let mut rng = StdRng::seed_from_u64(7);
        v.jump(&mut rng);
        assert!(v.heights().iter().all(|&h| h == MIN_HEIGHT));
    }

    #[test]
    fn jump_lands_in_range_and_decay_brings_it_down() {
        let mut v = visualizer(true);
        let mut rng = StdRng::seed_from_u64(7);
        v.jump(&mut rng);
        assert!(v.heights().iter().all(|&h| (0.5..1.5).contains(&h)));

        let before = v.heights().to_vec();
        v.decay();
        for (old, new) in before.iter().zip(v.heights()) {
            assert!((old - DROP_RATE - new).abs() < 1e-6);
        }

        for _ in 0..100 {
            v.decay();
        }
        assert!(v.heights().iter().all(|&h| h == MIN_HEIGHT));
    }

    #[test]
    fn jump_never_lowers_a_bar() {
        let mut v = visualizer(true);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let before = v.heights().to_vec();
            v.jump(&mut rng);
            assert!(before.iter().zip(v.heights()).all(|(b, a)| a >= b));
        }
    }

    #[test]
    fn activation_is_idempotent() {
        let mut v = visualizer(false);
        v.set_active(true);
        v.set_active(true);
        assert!(v.is_active());
        v.set_active(false);
        assert!(!v.is_active());
    }

    #[test]
    fn colors_cycle_in_order_and_wrap() {
        let mut v = visualizer(false);
        assert_eq!(v.color(), VisualizerColor::Green);
        let seen: Vec<VisualizerColor> = (0..7).map(|_| v.cycle_color()).collect();
        assert_eq!(
            seen,
            vec![
                VisualizerColor::Red,
                VisualizerColor::Blue,
                VisualizerColor::Purple,
                VisualizerColor::Yellow,
                VisualizerColor::Orange,
                VisualizerColor::Cyan,
                VisualizerColor::Green,
            ]
        );
    }

    #[test]
    fn palette_stops_brighten_towards_the_top() {
        let [base, mid, top] = VisualizerColor::Orange.stops();
        assert!(base.iter().sum::<f32>() < mid.iter().sum::<f32>());
        assert!(mid.iter().sum::<f32>() < top.iter().sum::<f32>());
        assert_eq!(top, [1.0, 0.65, 0.0]);
    }
}
