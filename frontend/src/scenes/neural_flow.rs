use rand::Rng;
use yew::prelude::*;

use super::canvas::{use_scene_loop, Primitive, Scene, SceneProps, Tint, EMERALD};
use super::projection::Camera;
use crate::rng::seeded_or_entropy;

pub const STREAK_COUNT: usize = 15;

/// Streaks travel from z = -5 towards the camera, then start over.
const TRAVEL: f64 = 10.0;
const STREAK_LENGTH: f64 = 1.0;
const STREAK_THICKNESS: f64 = 0.02;
const STREAK_TINT: Tint = Tint::new(EMERALD, 0.5);

const CAMERA: Camera = Camera::new(5.0, 45.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Streak {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl Streak {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(-2.5..2.5),
            y: rng.gen_range(-2.5..2.5),
            speed: rng.gen_range(0.01..0.03),
        }
    }

    /// Depth of the streak's centre, always in `[-5, 5)`.
    pub fn depth_at(&self, elapsed: f64) -> f64 {
        (elapsed * self.speed * 20.0).rem_euclid(TRAVEL) - TRAVEL / 2.0
    }
}

/// Thin light streaks sliding along the view axis behind the contact form.
pub struct NeuralFlow {
    streaks: Vec<Streak>,
}

impl NeuralFlow {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            streaks: (0..STREAK_COUNT).map(|_| Streak::random(rng)).collect(),
        }
    }

    #[cfg(test)]
    fn streaks(&self) -> &[Streak] {
        &self.streaks
    }
}

impl Scene for NeuralFlow {
    fn name(&self) -> &'static str {
        "neural-flow"
    }

    fn frame(&self, width: f64, height: f64, elapsed: f64) -> Vec<Primitive> {
        self.streaks
            .iter()
            .filter_map(|streak| {
                let z = streak.depth_at(elapsed);
                let tail = [streak.x, streak.y, z - STREAK_LENGTH / 2.0];
                let head = [streak.x, streak.y, z + STREAK_LENGTH / 2.0];
                let (a, b) = CAMERA.project_segment(tail, head, width, height)?;
                let width = (STREAK_THICKNESS * a.scale.max(b.scale)).round().max(1.0) as u32;
                Some(Primitive::Stroke {
                    points: vec![(a.x, a.y), (b.x, b.y)],
                    width,
                    tint: STREAK_TINT,
                })
            })
            .collect()
    }
}

#[function_component(NeuralFlowScene)]
pub fn neural_flow_scene(props: &SceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_memo(|seed| NeuralFlow::new(&mut seeded_or_entropy(*seed)), props.seed);
    use_scene_loop(canvas_ref.clone(), scene);

    html! {
        <div class="neural-flow">
            <canvas ref={canvas_ref} class="scene-canvas" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn flow(seed: u64) -> NeuralFlow {
        NeuralFlow::new(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn streaks_are_placed_in_bounds() {
        let flow = flow(9);
        assert_eq!(flow.streaks().len(), STREAK_COUNT);
        for s in flow.streaks() {
            assert!((-2.5..2.5).contains(&s.x));
            assert!((-2.5..2.5).contains(&s.y));
            assert!((0.01..0.03).contains(&s.speed));
        }
    }

    #[test]
    fn depth_loops_within_range() {
        let flow = flow(11);
        for s in flow.streaks() {
            for step in 0..5_000 {
                let z = s.depth_at(step as f64 * 0.37);
                assert!((-5.0..5.0).contains(&z), "depth {} out of range", z);
            }
        }
    }

    #[test]
    fn depth_starts_at_the_back_and_wraps() {
        let s = Streak {
            x: 0.0,
            y: 0.0,
            speed: 0.025,
        };
        assert_eq!(s.depth_at(0.0), -5.0);
        // One full lap takes TRAVEL / (speed * 20) seconds.
        assert!((s.depth_at(10.0) - 0.0).abs() < 1e-9);
        assert!((s.depth_at(24.0) - s.depth_at(4.0)).abs() < 1e-9);
    }

    #[test]
    fn every_frame_has_at_most_one_stroke_per_streak() {
        let flow = flow(5);
        for t in [0.0, 3.3, 47.0, 199.9] {
            let frame = flow.frame(640.0, 480.0, t);
            assert!(frame.len() <= STREAK_COUNT);
            assert!(frame
                .iter()
                .all(|p| matches!(p, Primitive::Stroke { points, .. } if points.len() == 2)));
        }
    }
}
