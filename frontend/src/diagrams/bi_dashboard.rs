use std::ops::RangeInclusive;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::Rng;
use yew::prelude::*;

use crate::config;
use crate::icons::{Glyph, Icon};
use crate::rng::seeded_or_entropy;

pub const RETENTION_START: f64 = 65.0;
pub const RETENTION_BOUNDS: RangeInclusive<f64> = 30.0..=95.0;
/// Largest step, in percentage points, between two consecutive readings.
pub const MAX_JITTER: f64 = 5.0;

const GROWTH_BARS: [u32; 7] = [2, 5, 3, 8, 4, 10, 6];

/// The "live" retention figure. It only ever wanders, it never measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retention {
    value: f64,
}

impl Default for Retention {
    fn default() -> Self {
        Self {
            value: RETENTION_START,
        }
    }
}

impl Retention {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn nudged(self, delta: f64) -> Self {
        Self {
            value: (self.value + delta).clamp(*RETENTION_BOUNDS.start(), *RETENTION_BOUNDS.end()),
        }
    }

    pub fn display(&self) -> String {
        format!("{:.1}%", self.value)
    }
}

/// One random step, uniform in `[-MAX_JITTER, MAX_JITTER)`.
pub fn jitter<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-MAX_JITTER..MAX_JITTER)
}

pub enum RetentionAction {
    Nudge(f64),
}

impl Reducible for Retention {
    type Action = RetentionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RetentionAction::Nudge(delta) => Rc::new(self.nudged(delta)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BiDashboardProps {
    /// Makes the sequence of readings reproducible.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(BiDashboardDiagram)]
pub fn bi_dashboard_diagram(props: &BiDashboardProps) -> Html {
    let retention = use_reducer(Retention::default);
    let rng = use_mut_ref({
        let seed = props.seed;
        move || seeded_or_entropy(seed)
    });

    {
        let dispatcher = retention.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::METRIC_TICK_MS, move || {
                    let delta = jitter(&mut *rng.borrow_mut());
                    dispatcher.dispatch(RetentionAction::Nudge(delta));
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="bi-dashboard">
            <style>
                {r#"
                    .bi-dashboard {
                        padding: 32px;
                        background: #f5f5f5;
                        border: 1px solid #e7e5e4;
                        border-radius: 24px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        overflow: hidden;
                    }
                    .bi-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 32px;
                    }
                    .bi-header h3 { font-weight: 700; color: #1c1917; }
                    .bi-header p { font-size: 12px; color: #78716c; }
                    .bi-lights { display: flex; gap: 4px; }
                    .bi-lights span { width: 8px; height: 8px; border-radius: 50%; }
                    .bi-cards {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 16px;
                        margin-bottom: 32px;
                    }
                    .bi-card {
                        padding: 16px;
                        background: #fff;
                        border-radius: 16px;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .bi-card-title {
                        font-size: 10px;
                        font-weight: 700;
                        color: #a8a29e;
                        text-transform: uppercase;
                    }
                    .bi-card-value {
                        font-family: Georgia, serif;
                        font-size: 24px;
                        color: #1c1917;
                        margin-top: 4px;
                    }
                    .bi-track {
                        width: 100%;
                        height: 4px;
                        margin-top: 8px;
                        background: #f5f5f4;
                        border-radius: 999px;
                        overflow: hidden;
                    }
                    .bi-track-fill {
                        height: 100%;
                        background: #10b981;
                        transition: width 0.6s ease;
                    }
                    .bi-bars {
                        display: flex;
                        align-items: flex-end;
                        gap: 4px;
                        height: 20px;
                        margin-top: 8px;
                    }
                    .bi-bar {
                        flex: 1;
                        background: #a7f3d0;
                        border-radius: 2px 2px 0 0;
                        animation: bi-grow 0.8s ease-out;
                    }
                    @keyframes bi-grow {
                        from { transform: scaleY(0); transform-origin: bottom; }
                        to { transform: scaleY(1); transform-origin: bottom; }
                    }
                    .bi-engine {
                        position: relative;
                        height: 128px;
                        padding: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                        background: #1c1917;
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .bi-engine::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background: radial-gradient(circle at center, rgba(16, 185, 129, 0.5) 0%, transparent 70%);
                    }
                    .bi-engine .glyph {
                        font-size: 32px;
                        animation: bi-pulse 2s ease-in-out infinite;
                    }
                    @keyframes bi-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .bi-engine-label {
                        position: relative;
                        color: #fff;
                        font-family: monospace;
                        font-size: 14px;
                        letter-spacing: -0.05em;
                    }
                "#}
            </style>
            <div class="bi-header">
                <div>
                    <h3>{"Pulso Operativo"}</h3>
                    <p>{"Entorno de Síntesis en Vivo"}</p>
                </div>
                <div class="bi-lights">
                    <span style="background: #f87171;"></span>
                    <span style="background: #fbbf24;"></span>
                    <span style="background: #34d399;"></span>
                </div>
            </div>

            <div class="bi-cards">
                <div class="bi-card">
                    <span class="bi-card-title">{"Retención"}</span>
                    <div class="bi-card-value">{retention.display()}</div>
                    <div class="bi-track">
                        <div class="bi-track-fill" style={format!("width: {}%;", retention.value())}></div>
                    </div>
                </div>
                <div class="bi-card">
                    <span class="bi-card-title">{"Crecimiento"}</span>
                    <div class="bi-card-value">{"12.4x"}</div>
                    <div class="bi-bars">
                        { for GROWTH_BARS.iter().map(|h| html! {
                            <div class="bi-bar" style={format!("height: {}px;", h * 2)}></div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="bi-engine">
                <Icon glyph={Glyph::Activity} />
                <div class="bi-engine-label">{"MOTOR PREDICTIVO ACTIVO"}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn starts_at_sixty_five() {
        assert_eq!(Retention::default().value(), 65.0);
        assert_eq!(Retention::default().display(), "65.0%");
    }

    #[test]
    fn never_leaves_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut retention = Retention::default();
            for _ in 0..2_000 {
                let before = retention.value();
                retention = retention.nudged(jitter(&mut rng));
                assert!(RETENTION_BOUNDS.contains(&retention.value()));
                assert!((retention.value() - before).abs() <= MAX_JITTER);
            }
        }
    }

    #[test]
    fn clamps_at_both_ends() {
        let floor = (0..20).fold(Retention::default(), |r, _| r.nudged(-5.0));
        assert_eq!(floor.value(), 30.0);
        let ceiling = (0..20).fold(Retention::default(), |r, _| r.nudged(5.0));
        assert_eq!(ceiling.value(), 95.0);
    }

    #[test]
    fn reducer_applies_the_nudge() {
        let state = Rc::new(Retention::default());
        let next = state.reduce(RetentionAction::Nudge(-2.5));
        assert_eq!(next.value(), 62.5);
        assert_eq!(next.display(), "62.5%");
    }

    #[test]
    fn same_seed_same_readings() {
        let walk = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .scan(Retention::default(), |r, _| {
                    *r = r.nudged(jitter(&mut rng));
                    Some(r.value())
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(walk(99), walk(99));
    }
}
