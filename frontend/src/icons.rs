use yew::prelude::*;

/// Named glyphs used across the page, drawn as text so no icon font is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Activity,
    ArrowRight,
    BarChart,
    Brain,
    CheckCircle,
    Close,
    Cloud,
    Database,
    Menu,
    Settings,
    Zap,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Activity => "📈",
            Glyph::ArrowRight => "→",
            Glyph::BarChart => "📊",
            Glyph::Brain => "🧠",
            Glyph::CheckCircle => "✔",
            Glyph::Close => "✕",
            Glyph::Cloud => "☁",
            Glyph::Database => "🗄",
            Glyph::Menu => "☰",
            Glyph::Settings => "⚙",
            Glyph::Zap => "⚡",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("glyph", props.class.clone())} aria-hidden="true">
            {props.glyph.symbol()}
        </span>
    }
}
