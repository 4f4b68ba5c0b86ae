use std::cell::{Cell, RefCell};
use std::error::Error;
use std::rc::Rc;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

pub type DrawResult = Result<(), Box<dyn Error>>;

pub const EMERALD: (u8, u8, u8) = (16, 185, 129);

/// Colour plus opacity, converted to a plotters colour at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
}

impl Tint {
    pub const fn new(rgb: (u8, u8, u8), alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    fn color(&self) -> RGBAColor {
        RGBColor(self.rgb.0, self.rgb.1, self.rgb.2).mix(self.alpha)
    }
}

/// Screen-space drawing instruction, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Dot {
        at: (f64, f64),
        radius: f64,
        tint: Tint,
    },
    Stroke {
        points: Vec<(f64, f64)>,
        width: u32,
        tint: Tint,
    },
    Label {
        at: (f64, f64),
        text: &'static str,
        size: f64,
        tint: Tint,
    },
}

/// An ambient animation: given the canvas size and seconds since mount,
/// produce what to draw.
pub trait Scene {
    fn name(&self) -> &'static str;

    fn frame(&self, width: f64, height: f64, elapsed: f64) -> Vec<Primitive>;
}

#[derive(Properties, PartialEq)]
pub struct SceneProps {
    /// Fixes the random layout so frames are reproducible.
    #[prop_or_default]
    pub seed: Option<u64>,
}

fn pixel(at: (f64, f64)) -> (i32, i32) {
    (at.0.round() as i32, at.1.round() as i32)
}

pub fn paint(canvas: &HtmlCanvasElement, primitives: &[Primitive]) -> DrawResult {
    let backend =
        CanvasBackend::with_canvas_object(canvas.clone()).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();

    for primitive in primitives {
        match primitive {
            Primitive::Dot { at, radius, tint } => {
                let radius = radius.round().max(1.0) as u32;
                root.draw(&Circle::new(pixel(*at), radius, tint.color().filled()))?;
            }
            Primitive::Stroke {
                points,
                width,
                tint,
            } => {
                let points: Vec<(i32, i32)> = points.iter().copied().map(pixel).collect();
                root.draw(&PathElement::new(points, tint.color().stroke_width(*width)))?;
            }
            Primitive::Label {
                at,
                text,
                size,
                tint,
            } => {
                let style = ("serif", *size)
                    .into_font()
                    .color(&tint.color())
                    .pos(Pos::new(HPos::Center, VPos::Top));
                root.draw(&Text::new(text.to_string(), pixel(*at), style))?;
            }
        }
    }

    root.present()?;
    Ok(())
}

/// Backing-store size for a CSS box at the given device pixel ratio.
fn backing_size(css_width: i32, css_height: i32, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let scale = |css: i32| (css.max(0) as f64 * ratio).round() as u32;
    (scale(css_width), scale(css_height))
}

// The drawing buffer follows the element's CSS box so the scene never stretches.
fn fit_to_css_box(canvas: &HtmlCanvasElement) {
    let ratio = web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0);
    let (width, height) = backing_size(canvas.client_width(), canvas.client_height(), ratio);
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
}

fn render_frame<S: Scene + ?Sized>(canvas: &HtmlCanvasElement, scene: &S, elapsed: f64) -> DrawResult {
    fit_to_css_box(canvas);
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 {
        return Ok(());
    }

    let context = canvas
        .get_context("2d")
        .map_err(|err| format!("get_context failed: {:?}", err))?
        .ok_or("canvas has no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2d context has an unexpected type")?;
    context.clear_rect(0.0, 0.0, width as f64, height as f64);

    paint(canvas, &scene.frame(width as f64, height as f64, elapsed))
}

/// The scene a running loop draws. Swapped in place when the component's
/// inputs produce a new scene, so the loop itself never restarts.
pub struct SceneSlot<S: ?Sized> {
    current: RefCell<Rc<S>>,
}

impl<S: Scene + ?Sized> SceneSlot<S> {
    pub fn new(scene: Rc<S>) -> Self {
        Self {
            current: RefCell::new(scene),
        }
    }

    /// Returns whether the slot now holds a different scene.
    pub fn swap(&self, scene: Rc<S>) -> bool {
        if Rc::ptr_eq(&self.current.borrow(), &scene) {
            return false;
        }
        *self.current.borrow_mut() = scene;
        true
    }

    fn current(&self) -> Rc<S> {
        self.current.borrow().clone()
    }
}

impl<S: Scene + ?Sized> Scene for SceneSlot<S> {
    fn name(&self) -> &'static str {
        self.current().name()
    }

    fn frame(&self, width: f64, height: f64, elapsed: f64) -> Vec<Primitive> {
        self.current().frame(width, height, elapsed)
    }
}

/// Drives `scene` on `requestAnimationFrame` for as long as the calling
/// component is mounted. A new `scene` passed on a later render replaces the
/// one being drawn from the next frame on.
#[hook]
pub fn use_scene_loop<S>(canvas_ref: NodeRef, scene: Rc<S>)
where
    S: Scene + 'static,
{
    let slot = use_memo(
        {
            let scene = scene.clone();
            move |_| SceneSlot::new(scene)
        },
        (),
    );
    if slot.swap(scene) {
        log::debug!("Scene {} inputs changed", slot.name());
    }

    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let name = slot.name();
                log::debug!("Starting scene loop: {}", name);

                let pending = Rc::new(Cell::new(None::<i32>));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                {
                    let window = window.clone();
                    let pending = pending.clone();
                    let next = tick.clone();
                    let mut started_at = None::<f64>;
                    let mut failing = false;

                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let start = *started_at.get_or_insert(now);
                        if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                            match render_frame(&canvas, slot.as_ref(), (now - start) / 1000.0) {
                                Ok(()) => failing = false,
                                Err(err) => {
                                    if !failing {
                                        log::warn!("Scene {} failed to draw: {}", name, err);
                                    }
                                    failing = true;
                                }
                            }
                        }
                        if let Some(callback) = next.borrow().as_ref() {
                            pending.set(
                                window
                                    .request_animation_frame(callback.as_ref().unchecked_ref())
                                    .ok(),
                            );
                        }
                    }) as Box<dyn FnMut(f64)>));
                }

                if let Some(callback) = tick.borrow().as_ref() {
                    pending.set(
                        window
                            .request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }

                Box::new(move || {
                    if let Some(handle) = pending.take() {
                        let _ = window.cancel_animation_frame(handle);
                    }
                    // Breaks the closure's reference to itself.
                    tick.borrow_mut().take();
                    log::debug!("Stopped scene loop: {}", name);
                })
            } else {
                Box::new(|| ())
            };

            move || destructor()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_round_to_nearest() {
        assert_eq!(pixel((10.4, 10.6)), (10, 11));
        assert_eq!(pixel((-0.6, 0.0)), (-1, 0));
    }

    #[test]
    fn tint_keeps_its_opacity() {
        let color = Tint::new(EMERALD, 0.4).color();
        assert_eq!((color.0, color.1, color.2), EMERALD);
        assert!((color.3 - 0.4).abs() < f64::EPSILON);
    }

    struct Fixed(f64);

    impl Scene for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn frame(&self, _width: f64, _height: f64, _elapsed: f64) -> Vec<Primitive> {
            vec![Primitive::Dot {
                at: (self.0, self.0),
                radius: 1.0,
                tint: Tint::new(EMERALD, 1.0),
            }]
        }
    }

    #[test]
    fn slot_draws_the_latest_scene() {
        let first = Rc::new(Fixed(1.0));
        let slot = SceneSlot::new(first.clone());
        assert_eq!(slot.frame(10.0, 10.0, 0.0), first.frame(10.0, 10.0, 0.0));

        assert!(!slot.swap(first.clone()));
        let second = Rc::new(Fixed(7.0));
        assert!(slot.swap(second.clone()));
        assert_eq!(slot.frame(10.0, 10.0, 0.0), second.frame(10.0, 10.0, 0.0));
        assert_eq!(slot.name(), "fixed");
    }

    #[test]
    fn backing_store_follows_pixel_ratio() {
        assert_eq!(backing_size(300, 150, 1.0), (300, 150));
        assert_eq!(backing_size(300, 150, 2.0), (600, 300));
        assert_eq!(backing_size(301, 151, 1.5), (452, 227));
    }

    #[test]
    fn odd_pixel_ratios_fall_back_to_one() {
        for ratio in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(backing_size(640, 480, ratio), (640, 480));
        }
        assert_eq!(backing_size(-5, 20, 2.0), (0, 40));
    }
}
