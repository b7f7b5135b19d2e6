//! Damped spring used to smooth the reading-progress bar.
//!
//! Integration is semi-implicit Euler in fixed sub-steps so a long frame does
//! not blow the simulation up. The spring snaps onto its target once both the
//! displacement and the speed drop under the rest thresholds.

/// Largest integration step.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;
/// Frames longer than this are treated as this long.
const MAX_FRAME_SECS: f32 = 1.0 / 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Displacement under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringParams {
    /// Stiffness 100 with damping 30 puts the damping ratio at 1.5, somewhat
    /// past critical: the bar eases in without overshooting. Set `damping` to
    /// `critical_damping()` (20 here) for the fastest response that still
    /// does not oscillate.
    fn default() -> Self {
        SpringParams {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

impl SpringParams {
    fn sanitized(self) -> Self {
        let defaults = SpringParams::default();
        let positive = |v: f32, fallback: f32| {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                fallback
            }
        };
        SpringParams {
            stiffness: positive(self.stiffness, defaults.stiffness),
            damping: positive(self.damping, defaults.damping),
            mass: positive(self.mass, defaults.mass),
            rest_delta: positive(self.rest_delta, defaults.rest_delta),
            rest_speed: positive(self.rest_speed, defaults.rest_speed),
        }
    }

    /// Damping coefficient that makes this spring critically damped.
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    position: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    pub fn new(params: SpringParams) -> Self {
        Spring {
            params: params.sanitized(),
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            settled: true,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            self.target = target;
            self.settled = false;
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.settled {
            return self.position;
        }
        let SpringParams {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.params;

        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }

        if (self.position - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.snap_to_target();
        }
        self.position
    }
}
