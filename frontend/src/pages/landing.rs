use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::service_card::ServiceCard;
use crate::diagrams::bi_dashboard::BiDashboardDiagram;
use crate::diagrams::etl_pipeline::EtlPipelineDiagram;
use crate::diagrams::methodology_graph::MethodologyGraph;
use crate::icons::{Glyph, Icon};
use crate::scenes::hero_cloud::HeroDataCloud;
use crate::scenes::neural_flow::NeuralFlowScene;
use crate::shell::{
    follow, navigation, use_scroll_tracking, Anchor, BrowserViewport, Nav, ShellAction,
    ShellState, Viewport,
};

const SOLUTION_POINTS: [&str; 4] = [
    "Gobierno de Datos Automatizado",
    "Streaming en Tiempo Real (Kafka/Flink)",
    "Capa de Ingesta Sin Pérdida",
    "Optimización de Snowflake/BigQuery",
];

const METHOD_STEPS: [(&str, &str); 4] = [
    ("Diagnóstico", "Auditoría de silos y deuda técnica."),
    ("Arquitectura", "Diseño de la estructura cloud óptima."),
    ("Implementación", "Desarrollo ágil de pipelines y modelos."),
    ("Optimización", "Mejora continua basada en KPIs."),
];

const FOOTER_COLUMNS: [(&str, &[&str]); 3] = [
    ("Expertise", &["Pipelines ETL", "Data Lakes", "MLOps"]),
    ("Empresa", &["Nosotros", "Carreras", "Contacto"]),
    ("Social", &["LinkedIn", "Twitter"]),
];

const PAGE_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #f9f9f9;
        color: #292524;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page ::selection { background: #10b981; color: #fff; }
    .container { max-width: 1280px; margin: 0 auto; padding: 0 24px; }
    .serif { font-family: Georgia, "Playfair Display", serif; }
    .accent { color: #059669; font-style: italic; }
    .pill {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        padding: 4px 12px;
        border-radius: 999px;
        font-size: 12px;
        font-weight: 700;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin-bottom: 24px;
    }
    .pill.light { background: #ecfdf5; border: 1px solid #d1fae5; color: #047857; }
    .pill.dark { background: rgba(16, 185, 129, 0.1); border: 1px solid rgba(16, 185, 129, 0.2); color: #34d399; }

    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: #fff;
    }
    .hero-cloud { position: absolute; inset: 0; z-index: 0; opacity: 0.4; }
    .scene-canvas { width: 100%; height: 100%; display: block; }
    .hero-fade {
        position: absolute;
        inset: 0;
        z-index: 0;
        background: linear-gradient(to bottom, transparent, rgba(255, 255, 255, 0.4), #fff);
    }
    .hero-content { position: relative; z-index: 1; max-width: 1024px; text-align: center; }
    .hero-content .pill .glyph { animation: pulse 2s ease-in-out infinite; }
    .hero h1 { font-size: clamp(3rem, 7vw, 6rem); font-weight: 500; line-height: 1.1; margin-bottom: 32px; color: #1c1917; }
    .hero-subtitle { max-width: 768px; margin: 0 auto 48px; font-size: 1.4rem; font-weight: 300; line-height: 1.6; color: #57534e; }
    .hero-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; }
    .button-primary, .button-secondary {
        padding: 16px 32px;
        border-radius: 999px;
        font-weight: 700;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .button-primary { background: #059669; color: #fff; border: none; box-shadow: 0 10px 15px #a7f3d0; }
    .button-primary:hover { background: #047857; }
    .button-secondary { background: #fff; color: #1c1917; border: 1px solid #e7e5e4; }
    .button-secondary:hover { border-color: #10b981; }

    .section { padding: 128px 0; }
    .section.white { background: #fff; }
    .section.dark { background: #1c1917; color: #fff; position: relative; overflow: hidden; }
    .section.soft { background: #f9f9f9; }
    .section h2 { font-size: clamp(2.25rem, 4vw, 3.75rem); line-height: 1.15; margin-bottom: 32px; }
    .lede { font-size: 1.25rem; line-height: 1.7; color: #57534e; }
    .section.dark .lede { color: #a8a29e; }
    .rule { width: 80px; height: 4px; background: #10b981; margin-bottom: 32px; }
    .split { display: grid; grid-template-columns: 1fr 1fr; gap: 80px; align-items: center; }
    .split.wide-right { grid-template-columns: 5fr 7fr; gap: 64px; }
    .services-intro { max-width: 640px; margin-bottom: 80px; }
    .services-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 32px; }

    .service-card {
        padding: 32px;
        background: #fff;
        border: 1px solid #e7e5e4;
        border-radius: 16px;
        transition: all 0.5s ease;
        animation: fade-in-up 0.8s ease-out both;
    }
    .service-card:hover { border-color: rgba(16, 185, 129, 0.5); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
    .service-icon {
        width: 48px;
        height: 48px;
        margin-bottom: 24px;
        border-radius: 12px;
        background: #ecfdf5;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 24px;
        transition: transform 0.3s ease;
    }
    .service-card:hover .service-icon { transform: scale(1.1); }
    .service-card h3 { font-family: Georgia, serif; font-size: 1.5rem; color: #1c1917; margin-bottom: 16px; }
    .service-card p { color: #57534e; line-height: 1.6; margin-bottom: 24px; }
    .service-more { display: flex; align-items: center; gap: 8px; color: #059669; font-weight: 600; font-size: 14px; cursor: pointer; transition: gap 0.2s ease; }
    .service-card:hover .service-more { gap: 16px; }

    .checklist { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 16px; }
    .checklist li { display: flex; align-items: center; gap: 12px; color: #e7e5e4; }
    .checklist .glyph { color: #10b981; }
    .muted { color: #a8a29e; }

    .method-steps { display: flex; flex-direction: column; gap: 24px; }
    .method-step { display: flex; gap: 16px; align-items: flex-start; }
    .method-number {
        width: 32px;
        height: 32px;
        flex-shrink: 0;
        border-radius: 50%;
        background: #fff;
        border: 1px solid #a7f3d0;
        color: #059669;
        font-size: 12px;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: all 0.2s ease;
    }
    .method-step:hover .method-number { background: #059669; color: #fff; }
    .method-step h4 { font-weight: 700; color: #1c1917; }
    .method-step p { font-size: 14px; color: #78716c; }

    .stats { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
    .stat { padding: 24px; background: #ecfdf5; border-radius: 12px; }
    .stat-value { font-size: 1.9rem; font-weight: 700; color: #059669; margin-bottom: 4px; }
    .stat-label { font-size: 12px; font-weight: 700; color: #78716c; text-transform: uppercase; }

    .contact-scene { position: absolute; top: 0; right: 0; width: 50%; height: 100%; opacity: 0.2; pointer-events: none; }
    .neural-flow { width: 100%; height: 100%; }
    .contact-inner { position: relative; z-index: 1; max-width: 672px; }
    .contact-form { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .contact-field {
        padding: 16px;
        border-radius: 12px;
        border: none;
        outline: none;
        background: #292524;
        color: #fff;
        font: inherit;
    }
    .contact-field:focus { box-shadow: 0 0 0 2px #10b981; }
    .contact-field.invalid { box-shadow: 0 0 0 2px #f87171; }
    .contact-field.wide { grid-column: span 2; height: 128px; resize: vertical; }
    .contact-submit {
        grid-column: span 2;
        padding: 16px 0;
        border: none;
        border-radius: 12px;
        background: #059669;
        color: #fff;
        font-weight: 700;
        cursor: pointer;
        box-shadow: 0 20px 25px rgba(16, 185, 129, 0.2);
        transition: background 0.2s ease;
    }
    .contact-submit:hover { background: #047857; }
    .contact-notice { grid-column: span 2; margin: 0; font-size: 14px; }
    .contact-notice.error { color: #fca5a5; padding-left: 20px; }
    .contact-notice.ok { color: #6ee7b7; }

    .footer { background: #fff; padding: 80px 0 0; border-top: 1px solid #f5f5f4; }
    .footer-top { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 48px; }
    .footer-brand { display: flex; align-items: center; gap: 12px; margin-bottom: 24px; }
    .footer-brand .logo-mark { width: 32px; height: 32px; font-size: 16px; box-shadow: none; }
    .footer-tagline { max-width: 320px; font-size: 14px; line-height: 1.6; color: #78716c; }
    .footer-columns { display: grid; grid-template-columns: repeat(3, auto); gap: 48px; font-size: 14px; }
    .footer-column { display: flex; flex-direction: column; gap: 16px; }
    .footer-column span { font-size: 12px; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: #1c1917; }
    .footer-column a { color: #78716c; text-decoration: none; }
    .footer-column a:hover { color: #059669; }
    .footer-legal { margin-top: 80px; padding: 32px 0; border-top: 1px solid #fafaf9; text-align: center; font-size: 12px; color: #a8a29e; }

    @keyframes fade-in-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    @media (max-width: 1024px) {
        .split, .split.wide-right, .services-grid { grid-template-columns: 1fr; }
        .impact .split > :first-child { order: 2; }
    }
    @media (max-width: 768px) {
        .contact-form { grid-template-columns: 1fr; }
        .contact-field.wide, .contact-submit, .contact-notice { grid-column: span 1; }
        .footer-columns { grid-template-columns: repeat(2, auto); }
    }
"#;

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<Anchor>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <HeroDataCloud />
            <div class="hero-fade"></div>
            <div class="hero-content container">
                <div class="pill light">
                    <Icon glyph={Glyph::Zap} />
                    {"Ingeniería de Datos para Decisiones Críticas"}
                </div>
                <h1 class="serif">
                    {"Transformamos Datos"}<br/>
                    <span class="accent">{"en Decisiones."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Diseñamos pipelines ETL escalables, dashboards ejecutivos y soluciones de inteligencia artificial que resuelven problemas reales de negocio."}
                </p>
                <div class="hero-actions">
                    <button class="button-primary" onclick={follow(&props.on_navigate, Anchor::Contact)}>
                        {"Solicitar Diagnóstico"}
                    </button>
                    <button class="button-secondary">{"Ver Casos de Éxito"}</button>
                </div>
            </div>
        </header>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={Anchor::Services.id()} class="section white">
            <div class="container">
                <div class="services-intro">
                    <h2 class="serif">{"Capacidades Core de Datos"}</h2>
                    <div class="rule"></div>
                    <p class="lede">
                        {"No solo entregamos código; construimos la infraestructura que asegura precisión, los modelos que otorgan predictibilidad y las estrategias que generan rentabilidad."}
                    </p>
                </div>
                <div class="services-grid">
                    <ServiceCard
                        glyph={Glyph::Database}
                        title="Ingeniería de Datos & ETL"
                        description="Diseño de pipelines batch y streaming, arquitecturas Lakehouse y optimización de costos en la nube (AWS/GCP/Azure)."
                        delay="0.1s"
                    />
                    <ServiceCard
                        glyph={Glyph::BarChart}
                        title="Data Analytics & BI"
                        description="Dashboards ejecutivos con KPIs en tiempo real, analítica descriptiva y sistemas de reporting automatizado."
                        delay="0.2s"
                    />
                    <ServiceCard
                        glyph={Glyph::Brain}
                        title="IA & Machine Learning"
                        description="Modelos predictivos, implementación de LLMs y automatización analítica integrada en procesos de producción (MLOps)."
                        delay="0.3s"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(Solutions)]
fn solutions() -> Html {
    html! {
        <section id={Anchor::Solutions.id()} class="section dark">
            <div class="container split">
                <div>
                    <div class="pill dark">{"ARQUITECTURA ROBUSTA"}</div>
                    <h2 class="serif">
                        {"Infraestructura"}<br/>
                        <span class="muted">{"de Datos Escalable"}</span>
                    </h2>
                    <p class="lede">
                        {"La calidad del dato es el cimiento de la IA. Construimos tuberías auto-recuperables que ingieren datos de ERPs, CRMs y APIs, garantizando disponibilidad del 99.9%."}
                    </p>
                    <ul class="checklist">
                        { for SOLUTION_POINTS.iter().map(|item| html! {
                            <li key={*item}>
                                <Icon glyph={Glyph::CheckCircle} />
                                {*item}
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <EtlPipelineDiagram />
                </div>
            </div>
        </section>
    }
}

#[function_component(Methodology)]
fn methodology() -> Html {
    html! {
        <section id={Anchor::Methodology.id()} class="section soft">
            <div class="container split wide-right">
                <div>
                    <div class="pill light">{"NUESTRO PROCESO"}</div>
                    <h2 class="serif">
                        {"Metodología"}<br/>
                        <span class="accent">{"Conectada"}</span>
                    </h2>
                    <p class="lede">
                        {"Utilizamos un enfoque de red donde cada fase alimenta a la siguiente mediante retroalimentación constante. Nuestro grafo metodológico asegura que el valor del negocio se mantenga en el centro de cada nodo de decisión."}
                    </p>
                    <div class="method-steps">
                        { for METHOD_STEPS.iter().enumerate().map(|(i, (title, detail))| html! {
                            <div key={*title} class="method-step">
                                <div class="method-number">{format!("{:02}", i + 1)}</div>
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*detail}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div>
                    <MethodologyGraph />
                </div>
            </div>
        </section>
    }
}

#[function_component(Impact)]
fn impact() -> Html {
    html! {
        <section class="section white impact">
            <div class="container split">
                <div>
                    <BiDashboardDiagram />
                </div>
                <div>
                    <h2 class="serif">
                        {"Decisiones Guiadas por "}
                        <span class="accent">{"Evidencia"}</span>
                    </h2>
                    <p class="lede">
                        {"Elimine la incertidumbre. Nuestras soluciones de BI ofrecen una \"Versión Única de la Verdad\" en toda su organización, desde la dirección hasta la operación."}
                    </p>
                    <div class="stats">
                        <div class="stat">
                            <div class="stat-value">{"45%"}</div>
                            <div class="stat-label">{"Reporting más Veloz"}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{"30%"}</div>
                            <div class="stat-label">{"Aumento en Eficiencia"}</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={Anchor::Contact.id()} class="section dark">
            <div class="contact-scene">
                <NeuralFlowScene />
            </div>
            <div class="container">
                <div class="contact-inner">
                    <h2 class="serif">{"¿Listo para unificar sus datos?"}</h2>
                    <p class="lede">
                        {"Cuéntanos tu problema de datos, nosotros te ayudamos a resolverlo mediante ingeniería y estrategia avanzada."}
                    </p>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer-top">
                <div>
                    <div class="footer-brand">
                        <div class="logo-mark">{"S"}</div>
                        <span class="serif"><b>{"SYNTHETIX"}</b></span>
                    </div>
                    <p class="footer-tagline">
                        {"Líderes en Ingeniería de Datos, Orquestación ETL y Soluciones de IA Empresarial."}
                    </p>
                </div>
                <div class="footer-columns">
                    { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div key={*heading} class="footer-column">
                            <span>{*heading}</span>
                            { for links.iter().map(|link| html! { <a href="#">{*link}</a> }) }
                        </div>
                    }) }
                </div>
            </div>
            <div class="container footer-legal">
                {format!(
                    "© {} Synthetix AI Engineering. Todos los derechos reservados. Impulsado por Gemini 2.0.",
                    year
                )}
            </div>
        </footer>
    }
}

/// The whole site: nav, hero, content sections and footer, in that order.
#[function_component(Landing)]
pub fn landing() -> Html {
    let shell = use_reducer(ShellState::default);
    use_scroll_tracking(shell.dispatcher());

    let on_navigate = {
        let dispatcher = shell.dispatcher();
        navigation(
            Callback::from(move |action: ShellAction| dispatcher.dispatch(action)),
            BrowserViewport::current,
        )
    };
    let on_toggle_menu = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ShellAction::ToggleMenu))
    };
    let on_home = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(ShellAction::Navigated);
            if let Some(viewport) = BrowserViewport::current() {
                viewport.smooth_scroll_to(0.0);
            }
        })
    };

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <Nav state={*shell} on_navigate={on_navigate.clone()} {on_toggle_menu} {on_home} />
            <Hero {on_navigate} />
            <main>
                <Services />
                <Solutions />
                <Methodology />
                <Impact />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
