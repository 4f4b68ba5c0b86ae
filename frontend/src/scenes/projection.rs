/// A point in scene space, right-handed, y up.
pub type Point3 = [f64; 3];

/// Anything closer to the camera than this is not drawn.
pub const NEAR_PLANE: f64 = 0.1;

pub fn rotate_x(p: Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    [p[0], p[1] * cos - p[2] * sin, p[1] * sin + p[2] * cos]
}

pub fn rotate_y(p: Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    [p[0] * cos + p[2] * sin, p[1], -p[0] * sin + p[2] * cos]
}

pub fn rotate_z(p: Point3, angle: f64) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    [p[0] * cos - p[1] * sin, p[0] * sin + p[1] * cos, p[2]]
}

/// Euler rotation in X, Y, Z order: z is applied first, x last.
pub fn rotate_xyz(p: Point3, rotation: Point3) -> Point3 {
    rotate_x(rotate_y(rotate_z(p, rotation[2]), rotation[1]), rotation[0])
}

pub fn translate(p: Point3, by: Point3) -> Point3 {
    [p[0] + by[0], p[1] + by[1], p[2] + by[2]]
}

pub fn lerp(from: Point3, to: Point3, progress: f64) -> Point3 {
    [
        from[0] + (to[0] - from[0]) * progress,
        from[1] + (to[1] - from[1]) * progress,
        from[2] + (to[2] - from[2]) * progress,
    ]
}

/// A point after projection onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
    /// Distance from the camera along its view axis.
    pub depth: f64,
}

/// Perspective camera sitting on the +z axis and looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub distance: f64,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl Camera {
    pub const fn new(distance: f64, fov: f64) -> Self {
        Self { distance, fov }
    }

    fn focal_length(&self, height: f64) -> f64 {
        (height / 2.0) / (self.fov.to_radians() / 2.0).tan()
    }

    pub fn project(&self, p: Point3, width: f64, height: f64) -> Option<Projected> {
        if self.distance - p[2] < NEAR_PLANE {
            return None;
        }
        Some(self.project_unchecked(p, width, height))
    }

    fn project_unchecked(&self, p: Point3, width: f64, height: f64) -> Projected {
        let depth = self.distance - p[2];
        let scale = self.focal_length(height) / depth;
        Projected {
            x: width / 2.0 + p[0] * scale,
            y: height / 2.0 - p[1] * scale,
            scale,
            depth,
        }
    }

    /// Projects a segment, trimming whatever part of it lies behind the near plane.
    pub fn project_segment(
        &self,
        from: Point3,
        to: Point3,
        width: f64,
        height: f64,
    ) -> Option<(Projected, Projected)> {
        let limit = self.distance - NEAR_PLANE;
        let (from, to) = match (from[2] <= limit, to[2] <= limit) {
            (true, true) => (from, to),
            (false, false) => return None,
            (true, false) => (from, lerp(from, to, (limit - from[2]) / (to[2] - from[2]))),
            (false, true) => (lerp(to, from, (limit - to[2]) / (from[2] - to[2])), to),
        };
        Some((
            self.project_unchecked(from, width, height),
            self.project_unchecked(to, width, height),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn origin_lands_on_canvas_centre() {
        let camera = Camera::new(5.0, 60.0);
        let p = camera.project([0.0, 0.0, 0.0], 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < EPS);
        assert!((p.y - 300.0).abs() < EPS);
        assert!((p.depth - 5.0).abs() < EPS);
    }

    #[test]
    fn up_in_the_scene_is_up_on_screen() {
        let camera = Camera::new(5.0, 60.0);
        let p = camera.project([1.0, 1.0, 0.0], 800.0, 600.0).unwrap();
        assert!(p.x > 400.0);
        assert!(p.y < 300.0);
    }

    #[test]
    fn closer_points_are_larger() {
        let camera = Camera::new(5.0, 45.0);
        let far = camera.project([0.0, 0.0, -3.0], 400.0, 400.0).unwrap();
        let near = camera.project([0.0, 0.0, 3.0], 400.0, 400.0).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn points_behind_the_near_plane_are_dropped() {
        let camera = Camera::new(5.0, 45.0);
        assert!(camera.project([0.0, 0.0, 5.0], 400.0, 400.0).is_none());
        assert!(camera.project([0.0, 0.0, 7.0], 400.0, 400.0).is_none());
    }

    #[test]
    fn segment_crossing_the_near_plane_is_trimmed() {
        let camera = Camera::new(5.0, 45.0);
        let (a, b) = camera
            .project_segment([0.5, 0.0, 4.5], [0.5, 0.0, 5.5], 400.0, 400.0)
            .unwrap();
        assert!((a.depth - 0.5).abs() < EPS);
        assert!((b.depth - NEAR_PLANE).abs() < 1e-6);
    }

    #[test]
    fn segment_fully_behind_camera_is_dropped() {
        let camera = Camera::new(5.0, 45.0);
        assert!(camera
            .project_segment([0.0, 0.0, 6.0], [0.0, 0.0, 7.0], 400.0, 400.0)
            .is_none());
    }

    #[test]
    fn quarter_turn_about_y_sends_x_to_minus_z() {
        let p = rotate_y([1.0, 0.0, 0.0], std::f64::consts::FRAC_PI_2);
        assert!(p[0].abs() < EPS);
        assert!((p[2] + 1.0).abs() < EPS);
    }

    #[test]
    fn quarter_turn_about_x_sends_y_to_z() {
        let p = rotate_x([0.0, 1.0, 0.0], std::f64::consts::FRAC_PI_2);
        assert!(p[1].abs() < EPS);
        assert!((p[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn lerp_hits_both_ends() {
        let a = [-3.0, 1.0, 0.0];
        let b = [-1.0, -0.5, 1.0];
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}
