use super::projection::Point3;

/// Slow bobbing used to make a mesh look like it is drifting in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
    /// Seconds added to the clock so that siblings do not bob in lockstep.
    pub phase: f64,
}

impl FloatMotion {
    pub const fn new(speed: f64, rotation_intensity: f64, float_intensity: f64) -> Self {
        Self {
            speed,
            rotation_intensity,
            float_intensity,
            phase: 0.0,
        }
    }

    pub fn with_phase(self, phase: f64) -> Self {
        Self { phase, ..self }
    }

    fn angle(&self, elapsed: f64) -> f64 {
        (elapsed + self.phase) / 4.0 * self.speed
    }

    pub fn rotation(&self, elapsed: f64) -> Point3 {
        let angle = self.angle(elapsed);
        [
            angle.cos() / 8.0 * self.rotation_intensity,
            angle.sin() / 8.0 * self.rotation_intensity,
            angle.sin() / 20.0 * self.rotation_intensity,
        ]
    }

    /// Vertical displacement, bounded by `0.1 * float_intensity`.
    pub fn lift(&self, elapsed: f64) -> f64 {
        self.angle(elapsed).sin() / 10.0 * self.float_intensity
    }
}
