use super::spring::{Spring, SpringParams};

/// Spring-smoothed reading progress.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    spring: Spring,
}

impl ProgressIndicator {
    pub fn new(params: SpringParams) -> Self {
        ProgressIndicator {
            spring: Spring::new(params),
        }
    }

    /// Feed the latest raw ratio. Missing or non-finite values count as 0.
    pub fn set_target(&mut self, ratio: f32) {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.spring.set_target(ratio);
    }

    pub fn tick(&mut self, dt: f32) -> f32 {
        self.spring.tick(dt)
    }

    /// Smoothed value; may briefly overshoot the target.
    pub fn value(&self) -> f32 {
        self.spring.position()
    }

    /// Smoothed value clamped for drawing.
    pub fn display_value(&self) -> f32 {
        self.value().clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_target_is_treated_as_zero() {
        let mut progress = ProgressIndicator::new(SpringParams::default());
        progress.set_target(0.4);
        progress.set_target(f32::NAN);
        assert_eq!(progress.target(), 0.0);
    }

    #[test]
    fn smoothing_lags_behind_a_jump() {
        let mut progress = ProgressIndicator::new(SpringParams::default());
        progress.set_target(1.0);
        let first = progress.tick(1.0 / 60.0);
        assert!(first > 0.0 && first < 0.5, "first frame should not snap: {first}");
        for _ in 0..600 {
            progress.tick(1.0 / 60.0);
        }
        assert!((progress.display_value() - 1.0).abs() < 1e-3);
        assert!(progress.is_settled());
    }

    #[test]
    fn out_of_range_targets_are_clamped() {
        let mut progress = ProgressIndicator::new(SpringParams::default());
        progress.set_target(3.0);
        assert_eq!(progress.target(), 1.0);
        progress.set_target(-1.0);
        assert_eq!(progress.target(), 0.0);
    }
}
