use yew::prelude::*;

use crate::icons::{Glyph, Icon};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub glyph: Glyph,
    pub title: AttrValue,
    pub description: AttrValue,
    /// CSS time, staggers the cards' entrance.
    pub delay: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card" style={format!("animation-delay: {};", props.delay)}>
            <div class="service-icon">
                <Icon glyph={props.glyph} />
            </div>
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
            <div class="service-more">
                {"EXPLORAR CAPACIDADES"}
                <Icon glyph={Glyph::ArrowRight} />
            </div>
        </div>
    }
}
