use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::icons::{Glyph, Icon};

pub struct Stage {
    pub name: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
}

pub static STAGES: [Stage; 4] = [
    Stage {
        name: "Extracción",
        label: "ERP / APIs / Logs",
        glyph: Glyph::Database,
    },
    Stage {
        name: "Transformación",
        label: "Limpieza y Formateo",
        glyph: Glyph::Settings,
    },
    Stage {
        name: "Carga",
        label: "Data Warehouse",
        glyph: Glyph::Cloud,
    },
    Stage {
        name: "Análisis",
        label: "BI & Modelos de IA",
        glyph: Glyph::Activity,
    },
];

/// Which pipeline stage is lit. Moves forward one stage per tick and wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EtlCycle {
    active: usize,
}

pub enum EtlAction {
    Tick,
}

impl EtlCycle {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn advanced(self) -> Self {
        Self {
            active: (self.active + 1) % STAGES.len(),
        }
    }

    /// The connector under `stage` fills only while that stage is lit.
    pub fn connector_filled(&self, stage: usize) -> bool {
        stage + 1 < STAGES.len() && stage == self.active
    }
}

impl Reducible for EtlCycle {
    type Action = EtlAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EtlAction::Tick => Rc::new(self.advanced()),
        }
    }
}

#[function_component(EtlPipelineDiagram)]
pub fn etl_pipeline_diagram() -> Html {
    let cycle = use_reducer(EtlCycle::default);

    {
        let dispatcher = cycle.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::ETL_STEP_INTERVAL_MS, move || {
                    dispatcher.dispatch(EtlAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="etl-diagram">
            <style>
                {r#"
                    .etl-diagram {
                        padding: 40px;
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 24px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .etl-diagram h3 {
                        color: #34d399;
                        font-size: 12px;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        text-align: center;
                        margin-bottom: 40px;
                    }
                    .etl-steps {
                        display: flex;
                        flex-direction: column;
                        gap: 48px;
                    }
                    .etl-step {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 32px;
                    }
                    .etl-tile {
                        width: 64px;
                        height: 64px;
                        border-radius: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 28px;
                        background: #292524;
                        opacity: 0.4;
                        transition: all 0.7s ease;
                    }
                    .etl-step.active .etl-tile {
                        background: #10b981;
                        opacity: 1;
                        transform: scale(1.1);
                        box-shadow: 0 0 30px rgba(16, 185, 129, 0.4);
                    }
                    .etl-step h4 {
                        font-weight: 700;
                        color: #57534e;
                        transition: color 0.5s ease;
                    }
                    .etl-step p {
                        font-size: 14px;
                        color: #44403c;
                        transition: color 0.5s ease;
                    }
                    .etl-step.active h4 { color: #fff; }
                    .etl-step.active p { color: rgba(52, 211, 153, 0.8); }
                    .etl-connector {
                        position: absolute;
                        left: 32px;
                        top: 64px;
                        width: 1px;
                        height: 48px;
                        background: #292524;
                        overflow: hidden;
                    }
                    .etl-connector-fill {
                        width: 100%;
                        height: 0;
                        background: #10b981;
                        transition: height 1s ease;
                    }
                    .etl-connector-fill.filled { height: 100%; }
                "#}
            </style>
            <h3>{"Ciclo de Vida de los Datos"}</h3>
            <div class="etl-steps">
                { for STAGES.iter().enumerate().map(|(idx, stage)| {
                    let is_active = cycle.active() == idx;
                    html! {
                        <div key={stage.name} class={classes!("etl-step", is_active.then_some("active"))}>
                            <div class="etl-tile">
                                <Icon glyph={stage.glyph} />
                            </div>
                            <div>
                                <h4>{stage.name}</h4>
                                <p>{stage.label}</p>
                            </div>
                            {
                                if idx + 1 < STAGES.len() {
                                    html! {
                                        <div class="etl-connector">
                                            <div class={classes!(
                                                "etl-connector-fill",
                                                cycle.connector_filled(idx).then_some("filled")
                                            )} />
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_four_stages_in_order() {
        let mut cycle = EtlCycle::default();
        let mut seen = vec![cycle.active()];
        for _ in 0..9 {
            cycle = cycle.advanced();
            seen.push(cycle.active());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn reducer_tick_matches_advance() {
        let state = Rc::new(EtlCycle::default());
        let next = state.reduce(EtlAction::Tick);
        assert_eq!(next.active(), 1);
        let wrapped = (0..3).fold(next, |s, _| s.reduce(EtlAction::Tick));
        assert_eq!(wrapped.active(), 0);
    }

    #[test]
    fn only_the_active_stage_fills_its_connector() {
        let mut cycle = EtlCycle::default();
        for _ in 0..STAGES.len() {
            for stage in 0..STAGES.len() {
                let expected = stage == cycle.active() && stage < STAGES.len() - 1;
                assert_eq!(cycle.connector_filled(stage), expected);
            }
            cycle = cycle.advanced();
        }
    }

    #[test]
    fn last_stage_has_no_connector_to_fill() {
        let last = (0..3).fold(EtlCycle::default(), |c, _| c.advanced());
        assert_eq!(last.active(), 3);
        assert!((0..STAGES.len()).all(|s| !last.connector_filled(s)));
    }
}
