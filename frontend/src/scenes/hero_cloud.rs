use std::f64::consts::{PI, TAU};

use rand::Rng;
use yew::prelude::*;

use super::canvas::{use_scene_loop, Primitive, Scene, SceneProps, Tint, EMERALD};
use super::motion::FloatMotion;
use super::projection::{rotate_x, rotate_xyz, rotate_y, translate, Camera, Point3};
use crate::rng::seeded_or_entropy;

pub const PARTICLE_COUNT: usize = 2_000;
/// Edge length of the cube the particles are scattered in.
pub const CLOUD_EXTENT: f64 = 10.0;

const PARTICLE_SIZE: f64 = 0.05;
const PARTICLE_TINT: Tint = Tint::new(EMERALD, 0.4);

const SPHERE_RADIUS: f64 = 1.0;
const SPHERE_TINT: Tint = Tint::new((240, 253, 244), 0.1);
const LATITUDE_RINGS: usize = 8;
const LONGITUDE_RINGS: usize = 12;
const RING_SEGMENTS: usize = 48;

const CAMERA: Camera = Camera::new(5.0, 60.0);

/// Attenuated point size: `PARTICLE_SIZE * (height / 2) / depth` is the
/// dot's diameter in pixels.
fn particle_radius(height: f64, depth: f64) -> f64 {
    PARTICLE_SIZE * (height / 2.0) / depth / 2.0
}

/// Slowly turning particle cloud with a wireframe globe drifting in its middle.
pub struct HeroCloud {
    particles: Vec<Point3>,
    sphere: FloatMotion,
}

impl HeroCloud {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let half = CLOUD_EXTENT / 2.0;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                [
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ]
            })
            .collect();

        Self {
            particles,
            sphere: FloatMotion::new(2.0, 0.5, 1.0).with_phase(rng.gen_range(0.0..10_000.0)),
        }
    }

    #[cfg(test)]
    fn particles(&self) -> &[Point3] {
        &self.particles
    }

    /// Rotation of the whole cloud (about x, about y) at `elapsed` seconds.
    pub fn cloud_rotation(elapsed: f64) -> (f64, f64) {
        ((elapsed * 0.1).sin() * 0.1, elapsed * 0.05)
    }

    fn sphere_rings(&self, elapsed: f64) -> Vec<Vec<Point3>> {
        let rotation = self.sphere.rotation(elapsed);
        let lift = [0.0, self.sphere.lift(elapsed), 0.0];
        let place = |p: Point3| translate(rotate_xyz(p, rotation), lift);

        let mut rings = Vec::with_capacity(LATITUDE_RINGS + LONGITUDE_RINGS);
        for lat in 1..=LATITUDE_RINGS {
            let polar = PI * lat as f64 / (LATITUDE_RINGS + 1) as f64;
            let (y, r) = (SPHERE_RADIUS * polar.cos(), SPHERE_RADIUS * polar.sin());
            rings.push(
                (0..=RING_SEGMENTS)
                    .map(|s| {
                        let a = TAU * s as f64 / RING_SEGMENTS as f64;
                        place([r * a.cos(), y, r * a.sin()])
                    })
                    .collect(),
            );
        }
        for lon in 0..LONGITUDE_RINGS {
            let azimuth = PI * lon as f64 / LONGITUDE_RINGS as f64;
            rings.push(
                (0..=RING_SEGMENTS)
                    .map(|s| {
                        let a = TAU * s as f64 / RING_SEGMENTS as f64;
                        let (x, y) = (SPHERE_RADIUS * a.sin(), SPHERE_RADIUS * a.cos());
                        place([x * azimuth.cos(), y, x * azimuth.sin()])
                    })
                    .collect(),
            );
        }
        rings
    }
}

impl Scene for HeroCloud {
    fn name(&self) -> &'static str {
        "hero-cloud"
    }

    fn frame(&self, width: f64, height: f64, elapsed: f64) -> Vec<Primitive> {
        let (tilt, spin) = Self::cloud_rotation(elapsed);
        let mut out = Vec::with_capacity(self.particles.len() + LATITUDE_RINGS + LONGITUDE_RINGS);

        for &p in &self.particles {
            let p = rotate_x(rotate_y(p, spin), tilt);
            if let Some(s) = CAMERA.project(p, width, height) {
                out.push(Primitive::Dot {
                    at: (s.x, s.y),
                    radius: particle_radius(height, s.depth),
                    tint: PARTICLE_TINT,
                });
            }
        }

        for ring in self.sphere_rings(elapsed) {
            let points: Vec<(f64, f64)> = ring
                .into_iter()
                .filter_map(|p| CAMERA.project(p, width, height))
                .map(|s| (s.x, s.y))
                .collect();
            if points.len() > 1 {
                out.push(Primitive::Stroke {
                    points,
                    width: 1,
                    tint: SPHERE_TINT,
                });
            }
        }

        out
    }
}

#[function_component(HeroDataCloud)]
pub fn hero_data_cloud(props: &SceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_memo(|seed| HeroCloud::new(&mut seeded_or_entropy(*seed)), props.seed);
    use_scene_loop(canvas_ref.clone(), scene);

    html! {
        <div class="hero-cloud">
            <canvas ref={canvas_ref} class="scene-canvas" />
        </div>
    }
}
