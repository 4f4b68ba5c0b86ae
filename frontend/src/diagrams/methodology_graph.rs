use std::f64::consts::FRAC_PI_8;

use yew::prelude::*;

use crate::scenes::canvas::{use_scene_loop, Primitive, Scene, Tint, EMERALD};
use crate::scenes::motion::FloatMotion;
use crate::scenes::projection::{lerp, rotate_y, Camera, Point3};

pub const NODE_POSITIONS: [Point3; 4] = [
    [-3.0, 1.0, 0.0],
    [-1.0, -0.5, 1.0],
    [1.0, 0.5, -1.0],
    [3.0, -1.0, 0.0],
];

pub const NODE_LABELS: [&str; 4] = ["Diagnóstico", "Arquitectura", "Implementación", "Optimización"];

const GROUP_YAW: f64 = -FRAC_PI_8;
const CAMERA: Camera = Camera::new(5.0, 50.0);

const MARKER_SPEED: f64 = 0.5;
const MARKER_STAGGER: f64 = 0.2;

const NODE_RADIUS: f64 = 0.2;
const MARKER_RADIUS: f64 = 0.04;
const LABEL_DROP: f64 = 0.4;
const LABEL_SIZE: f64 = 0.15;

const EDGE_TINT: Tint = Tint::new(EMERALD, 0.2);
const MARKER_TINT: Tint = Tint::new(EMERALD, 1.0);
const ACTIVE_TINT: Tint = Tint::new(EMERALD, 1.0);
const GLOW_TINT: Tint = Tint::new(EMERALD, 0.25);
const IDLE_TINT: Tint = Tint::new((209, 213, 219), 1.0);
const LABEL_TINT: Tint = Tint::new((28, 28, 28), 1.0);

/// Open path through the four methodology stages with a pulse running along
/// each edge.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodologyPath {
    nodes: Vec<Point3>,
    active: Vec<bool>,
    bob: FloatMotion,
}

impl MethodologyPath {
    /// `active` is matched to nodes by index; missing entries count as active.
    pub fn new(nodes: Vec<Point3>, active: &[bool]) -> Self {
        let active = (0..nodes.len())
            .map(|i| active.get(i).copied().unwrap_or(true))
            .collect();
        Self {
            nodes,
            active,
            bob: FloatMotion::new(2.0, 0.5, 0.5),
        }
    }

    pub fn is_active(&self, node: usize) -> bool {
        self.active.get(node).copied().unwrap_or(false)
    }

    /// Consecutive node pairs; the last node has no outgoing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    #[cfg(test)]
    fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Fraction of its edge that marker `index` has covered at `elapsed`.
    pub fn marker_progress(index: usize, elapsed: f64) -> f64 {
        (elapsed * MARKER_SPEED + index as f64 * MARKER_STAGGER).rem_euclid(1.0)
    }

    /// One marker per edge, in edge order.
    pub fn markers(&self, elapsed: f64) -> Vec<Point3> {
        self.edges()
            .enumerate()
            .map(|(i, (from, to))| lerp(from, to, Self::marker_progress(i, elapsed)))
            .collect()
    }
}

impl Scene for MethodologyPath {
    fn name(&self) -> &'static str {
        "methodology-graph"
    }

    fn frame(&self, width: f64, height: f64, elapsed: f64) -> Vec<Primitive> {
        let project = |p: Point3| CAMERA.project(rotate_y(p, GROUP_YAW), width, height);
        let mut out = Vec::new();

        for (from, to) in self.edges() {
            if let (Some(a), Some(b)) = (project(from), project(to)) {
                out.push(Primitive::Stroke {
                    points: vec![(a.x, a.y), (b.x, b.y)],
                    width: 1,
                    tint: EDGE_TINT,
                });
            }
        }

        for marker in self.markers(elapsed) {
            if let Some(s) = project(marker) {
                out.push(Primitive::Dot {
                    at: (s.x, s.y),
                    radius: MARKER_RADIUS * s.scale,
                    tint: MARKER_TINT,
                });
            }
        }

        // Each node bobs on its own phase so the graph never moves as a block.
        for (i, &node) in self.nodes.iter().enumerate() {
            let bob = self.bob.with_phase(i as f64 * 1.7);
            let centre = [node[0], node[1] + bob.lift(elapsed), node[2]];
            let Some(s) = project(centre) else { continue };

            if self.is_active(i) {
                out.push(Primitive::Dot {
                    at: (s.x, s.y),
                    radius: NODE_RADIUS * s.scale * 1.8,
                    tint: GLOW_TINT,
                });
            }
            out.push(Primitive::Dot {
                at: (s.x, s.y),
                radius: NODE_RADIUS * s.scale,
                tint: if self.is_active(i) { ACTIVE_TINT } else { IDLE_TINT },
            });
            if let Some(label) = NODE_LABELS.get(i) {
                out.push(Primitive::Label {
                    at: (s.x, s.y + LABEL_DROP * s.scale),
                    text: *label,
                    size: LABEL_SIZE * s.scale,
                    tint: LABEL_TINT,
                });
            }
        }

        out
    }
}

fn all_active() -> Vec<bool> {
    vec![true; NODE_POSITIONS.len()]
}

#[derive(Properties, PartialEq)]
pub struct MethodologyGraphProps {
    /// Highlight per stage, in `NODE_LABELS` order.
    #[prop_or_else(all_active)]
    pub active: Vec<bool>,
}

#[function_component(MethodologyGraph)]
pub fn methodology_graph(props: &MethodologyGraphProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_memo(
        |active| MethodologyPath::new(NODE_POSITIONS.to_vec(), active),
        props.active.clone(),
    );
    use_scene_loop(canvas_ref.clone(), scene);

    html! {
        <div class="methodology-graph">
            <style>
                {r#"
                    .methodology-graph {
                        position: relative;
                        width: 100%;
                        height: 500px;
                        background: rgba(236, 253, 245, 0.3);
                        border: 1px solid #d1fae5;
                        border-radius: 24px;
                        overflow: hidden;
                    }
                    .methodology-graph .scene-canvas {
                        width: 100%;
                        height: 100%;
                        display: block;
                    }
                    .graph-caption {
                        position: absolute;
                        z-index: 1;
                        pointer-events: none;
                    }
                    .graph-caption.top {
                        top: 24px;
                        left: 24px;
                        font-size: 10px;
                        font-weight: 900;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: #059669;
                        background: rgba(255, 255, 255, 0.8);
                        padding: 4px 12px;
                        border-radius: 999px;
                        border: 1px solid #a7f3d0;
                    }
                    .graph-caption.bottom {
                        bottom: 24px;
                        right: 24px;
                        font-size: 12px;
                        font-style: italic;
                        color: #a8a29e;
                    }
                "#}
            </style>
            <span class="graph-caption top">{"Visualizador de Flujo de Trabajo"}</span>
            <canvas ref={canvas_ref} class="scene-canvas" />
            <p class="graph-caption bottom">{"Interacción de Red de Datos Activa"}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::scenes::canvas::SceneSlot;

    fn path() -> MethodologyPath {
        MethodologyPath::new(NODE_POSITIONS.to_vec(), &all_active())
    }

    #[test]
    fn four_nodes_make_three_edges() {
        let path = path();
        assert_eq!(path.edge_count(), 3);
        let edges: Vec<_> = path.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], (NODE_POSITIONS[0], NODE_POSITIONS[1]));
        assert_eq!(edges[2], (NODE_POSITIONS[2], NODE_POSITIONS[3]));
    }

    #[test]
    fn path_does_not_close_back_to_the_start() {
        assert!(path()
            .edges()
            .all(|(_, to)| to != NODE_POSITIONS[0]));
    }

    #[test]
    fn one_marker_per_edge() {
        let path = path();
        for t in [0.0, 0.4, 1.9, 123.25] {
            assert_eq!(path.markers(t).len(), 3);
        }
    }

    #[test]
    fn markers_stay_on_their_edges() {
        let path = path();
        for step in 0..200 {
            let t = step as f64 * 0.13;
            for (i, marker) in path.markers(t).into_iter().enumerate() {
                let (from, to) = (NODE_POSITIONS[i], NODE_POSITIONS[i + 1]);
                for axis in 0..3 {
                    let (lo, hi) = if from[axis] <= to[axis] {
                        (from[axis], to[axis])
                    } else {
                        (to[axis], from[axis])
                    };
                    assert!(marker[axis] >= lo - 1e-9 && marker[axis] <= hi + 1e-9);
                }
            }
        }
    }

    #[test]
    fn markers_are_staggered_and_periodic() {
        assert_eq!(MethodologyPath::marker_progress(0, 0.0), 0.0);
        assert!((MethodologyPath::marker_progress(1, 0.0) - 0.2).abs() < 1e-12);
        assert!((MethodologyPath::marker_progress(2, 0.0) - 0.4).abs() < 1e-12);
        let a = MethodologyPath::marker_progress(1, 0.7);
        let b = MethodologyPath::marker_progress(1, 2.7);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn frame_draws_three_connections_and_three_pulses() {
        let path = path();
        let frame = path.frame(900.0, 500.0, 1.25);
        let strokes = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Stroke { .. }))
            .count();
        let markers = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Dot { tint, .. } if *tint == MARKER_TINT))
            .count();
        let labels = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Label { .. }))
            .count();
        assert_eq!(strokes, 3);
        // Active nodes share the marker tint, so count them out.
        assert_eq!(markers, 3 + NODE_POSITIONS.len());
        assert_eq!(labels, 4);
    }

    #[test]
    fn inactive_nodes_lose_their_glow() {
        let path = MethodologyPath::new(NODE_POSITIONS.to_vec(), &[true, false, true, false]);
        assert!(path.is_active(0));
        assert!(!path.is_active(1));
        let frame = path.frame(900.0, 500.0, 0.0);
        let glows = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Dot { tint, .. } if *tint == GLOW_TINT))
            .count();
        let idle = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Dot { tint, .. } if *tint == IDLE_TINT))
            .count();
        assert_eq!(glows, 2);
        assert_eq!(idle, 2);
    }

    fn tinted(frame: &[Primitive], wanted: Tint) -> usize {
        frame
            .iter()
            .filter(|p| matches!(p, Primitive::Dot { tint, .. } if *tint == wanted))
            .count()
    }

    #[test]
    fn running_loop_picks_up_new_active_flags() {
        let slot = SceneSlot::new(Rc::new(path()));
        let before = slot.frame(900.0, 500.0, 0.5);
        assert_eq!(tinted(&before, GLOW_TINT), 4);
        assert_eq!(tinted(&before, IDLE_TINT), 0);

        let dimmed = MethodologyPath::new(NODE_POSITIONS.to_vec(), &[true, false, true, true]);
        assert!(slot.swap(Rc::new(dimmed)));
        let after = slot.frame(900.0, 500.0, 0.5);
        assert_eq!(tinted(&after, GLOW_TINT), 3);
        assert_eq!(tinted(&after, IDLE_TINT), 1);
    }

    #[test]
    fn short_active_list_defaults_to_active() {
        let path = MethodologyPath::new(NODE_POSITIONS.to_vec(), &[false]);
        assert!(!path.is_active(0));
        assert!(path.is_active(3));
    }
}
