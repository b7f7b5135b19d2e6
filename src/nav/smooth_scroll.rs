use std::time::{Duration, Instant};

/// Ease-out tween between two absolute scroll offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        ScrollAnimation {
            from,
            to,
            started_at,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    pub fn origin(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Restart toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, now: Instant, to: f32, duration: Duration) {
        let current = self.sample(now);
        *self = ScrollAnimation::new(current, to, now, duration);
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
