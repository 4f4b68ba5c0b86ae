use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config::{HEADER_OFFSET_PX, SCROLL_THRESHOLD_PX};
use crate::icons::{Glyph, Icon};

/// In-page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Services,
    Solutions,
    Methodology,
    Contact,
}

impl Anchor {
    pub const NAV: [Anchor; 4] = [
        Anchor::Services,
        Anchor::Solutions,
        Anchor::Methodology,
        Anchor::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Services => "services",
            Anchor::Solutions => "solutions",
            Anchor::Methodology => "methodology",
            Anchor::Contact => "contact",
        }
    }

    /// Fallback href shown on the link itself.
    pub fn href(self) -> &'static str {
        match self {
            Anchor::Services => "#servicios",
            Anchor::Solutions => "#soluciones",
            Anchor::Methodology => "#metodologia",
            Anchor::Contact => "#contacto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Services => "Servicios",
            Anchor::Solutions => "Soluciones",
            Anchor::Methodology => "Metodología",
            Anchor::Contact => "Hablar con un Experto",
        }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum ShellAction {
    Scrolled(f64),
    ToggleMenu,
    Navigated,
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ShellAction::Scrolled(y) => ShellState {
                scrolled: is_scrolled(y),
                ..*self
            },
            ShellAction::ToggleMenu => ShellState {
                menu_open: !self.menu_open,
                ..*self
            },
            ShellAction::Navigated => ShellState {
                menu_open: false,
                ..*self
            },
        };
        // Same Rc means no re-render; scroll events fire constantly.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// The bits of the browser window that in-page navigation needs.
pub trait Viewport {
    /// Current vertical scroll of the page.
    fn scroll_offset(&self) -> f64;

    /// Top edge of the element with `id`, relative to the viewport.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        (**self).anchor_top(id)
    }

    fn smooth_scroll_to(&self, top: f64) {
        (**self).smooth_scroll_to(top)
    }
}

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn anchor_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls so the section sits just under the fixed header.
/// Returns the target offset, or `None` when the section is not on the page.
pub fn scroll_to_anchor(viewport: &impl Viewport, anchor: Anchor) -> Option<f64> {
    let top = viewport.anchor_top(anchor.id())?;
    let target = top + viewport.scroll_offset() - HEADER_OFFSET_PX;
    viewport.smooth_scroll_to(target);
    Some(target)
}

/// Closes the mobile menu, then scrolls to the section if it exists.
/// `viewport` is asked for the window on every navigation.
pub fn navigation<V, F>(shell: Callback<ShellAction>, viewport: F) -> Callback<Anchor>
where
    V: Viewport,
    F: Fn() -> Option<V> + 'static,
{
    Callback::from(move |anchor: Anchor| {
        shell.emit(ShellAction::Navigated);
        match viewport() {
            Some(viewport) => {
                if scroll_to_anchor(&viewport, anchor).is_none() {
                    log::debug!("No #{} section on the page, staying put", anchor.id());
                }
            }
            None => log::warn!("No window to scroll"),
        }
    })
}

/// Turns a click into navigation, suppressing the browser's own anchor jump.
pub fn follow(on_navigate: &Callback<Anchor>, anchor: Anchor) -> Callback<MouseEvent> {
    on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        anchor
    })
}

/// Keeps `ShellState::scrolled` in step with the window for as long as the
/// caller is mounted.
#[hook]
pub fn use_scroll_tracking(dispatcher: UseReducerDispatcher<ShellState>) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    let dispatcher = dispatcher.clone();
                    move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            dispatcher.dispatch(ShellAction::Scrolled(scroll_y));
                        }
                    }
                });
                if window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not listen for scroll events");
                }
                // Initial check
                if let Ok(scroll_y) = window.scroll_y() {
                    dispatcher.dispatch(ShellAction::Scrolled(scroll_y));
                }
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: ShellState,
    pub on_navigate: Callback<Anchor>,
    pub on_toggle_menu: Callback<()>,
    pub on_home: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        state,
        on_navigate,
        on_toggle_menu,
        on_home,
    } = props;

    let toggle_menu = on_toggle_menu.reform(|e: MouseEvent| {
        e.prevent_default();
    });
    let go_home = on_home.reform(|_: MouseEvent| ());

    let link = |anchor: Anchor, class: &'static str| {
        html! {
            <a href={anchor.href()} class={class} onclick={follow(on_navigate, anchor)}>
                {anchor.label()}
            </a>
        }
    };

    html! {
        <nav class={classes!("top-nav", state.scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 24px 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 16px 0;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        cursor: pointer;
                    }
                    .logo-mark {
                        width: 40px;
                        height: 40px;
                        border-radius: 8px;
                        background: #059669;
                        color: #fff;
                        font-weight: 700;
                        font-size: 20px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 15px #a7f3d0;
                    }
                    .logo-name {
                        font-family: Georgia, serif;
                        font-weight: 700;
                        font-size: 20px;
                        color: #1c1917;
                    }
                    .logo-name small {
                        margin-left: 4px;
                        font-family: sans-serif;
                        font-size: 12px;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        color: #059669;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 32px;
                        font-size: 14px;
                        font-weight: 600;
                        color: #57534e;
                    }
                    .nav-link {
                        text-transform: uppercase;
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover { color: #059669; }
                    .nav-cta {
                        padding: 10px 24px;
                        border-radius: 999px;
                        background: #1c1917;
                        color: #fff;
                        text-decoration: none;
                        transition: background 0.2s ease;
                    }
                    .nav-cta:hover { background: #059669; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 24px;
                        padding: 8px;
                        color: #1c1917;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: block; }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                            padding: 24px;
                            background: rgba(255, 255, 255, 0.97);
                            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo" onclick={go_home}>
                    <div class="logo-mark">{"S"}</div>
                    <span class="logo-name">
                        {"SYNTHETIX"}<small>{"AI"}</small>
                    </span>
                </div>

                <div class="nav-links">
                    { link(Anchor::Services, "nav-link") }
                    { link(Anchor::Solutions, "nav-link") }
                    { link(Anchor::Methodology, "nav-link") }
                    { link(Anchor::Contact, "nav-cta") }
                </div>

                <button class="burger-menu" aria-label="Menú" onclick={toggle_menu}>
                    <Icon glyph={if state.menu_open { Glyph::Close } else { Glyph::Menu }} />
                </button>
            </div>
            <div class={classes!("mobile-menu", state.menu_open.then_some("open"))}>
                { for Anchor::NAV.iter().map(|&anchor| link(anchor, "nav-link")) }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeViewport {
        offset: Cell<f64>,
        sections: Vec<(&'static str, f64)>,
    }

    impl FakeViewport {
        fn new(offset: f64, sections: Vec<(&'static str, f64)>) -> Self {
            Self {
                offset: Cell::new(offset),
                sections,
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn anchor_top(&self, id: &str) -> Option<f64> {
            self.sections
                .iter()
                .find(|(section, _)| *section == id)
                .map(|(_, top)| top - self.offset.get())
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.offset.set(top);
        }
    }

    fn reduce(state: ShellState, action: ShellAction) -> ShellState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn scrolled_from_the_threshold_up() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(is_scrolled(50.0));
        assert!(is_scrolled(4_000.0));
    }

    #[test]
    fn scroll_events_drive_the_flag() {
        let state = reduce(ShellState::default(), ShellAction::Scrolled(120.0));
        assert!(state.scrolled);
        let state = reduce(state, ShellAction::Scrolled(10.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(ShellState {
            scrolled: true,
            menu_open: false,
        });
        let next = state.clone().reduce(ShellAction::Scrolled(300.0));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn toggle_flips_the_menu() {
        let open = reduce(ShellState::default(), ShellAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!reduce(open, ShellAction::ToggleMenu).menu_open);
    }

    #[test]
    fn navigation_always_closes_the_menu() {
        for menu_open in [false, true] {
            for scrolled in [false, true] {
                let state = reduce(
                    ShellState {
                        scrolled,
                        menu_open,
                    },
                    ShellAction::Navigated,
                );
                assert!(!state.menu_open);
                assert_eq!(state.scrolled, scrolled);
            }
        }
    }

    #[test]
    fn scrolls_to_section_minus_header() {
        let viewport = FakeViewport::new(200.0, vec![("contact", 3_000.0)]);
        let target = scroll_to_anchor(&viewport, Anchor::Contact);
        assert_eq!(target, Some(2_900.0));
        assert_eq!(viewport.scroll_offset(), 2_900.0);
    }

    #[test]
    fn missing_section_leaves_scroll_alone() {
        let viewport = FakeViewport::new(640.0, vec![("services", 900.0)]);
        assert_eq!(scroll_to_anchor(&viewport, Anchor::Methodology), None);
        assert_eq!(viewport.scroll_offset(), 640.0);
    }

    /// Wires `navigation` to a live reducer state and a shared fake window.
    fn navigate_from(
        start: ShellState,
        viewport: &Rc<FakeViewport>,
    ) -> (Callback<Anchor>, Rc<Cell<ShellState>>) {
        let state = Rc::new(Cell::new(start));
        let shell = {
            let state = state.clone();
            Callback::from(move |action: ShellAction| state.set(reduce(state.get(), action)))
        };
        let viewport = viewport.clone();
        (navigation(shell, move || Some(viewport.clone())), state)
    }

    #[test]
    fn clicking_a_link_closes_the_menu_and_scrolls() {
        let viewport = Rc::new(FakeViewport::new(0.0, vec![("solutions", 1_500.0)]));
        let open = ShellState {
            scrolled: false,
            menu_open: true,
        };
        let (on_navigate, state) = navigate_from(open, &viewport);

        on_navigate.emit(Anchor::Solutions);

        assert!(!state.get().menu_open);
        assert_eq!(viewport.scroll_offset(), 1_400.0);
    }

    #[test]
    fn clicking_a_link_to_a_missing_section_only_closes_the_menu() {
        let viewport = Rc::new(FakeViewport::new(320.0, vec![("services", 900.0)]));
        let open = ShellState {
            scrolled: true,
            menu_open: true,
        };
        let (on_navigate, state) = navigate_from(open, &viewport);

        on_navigate.emit(Anchor::Contact);

        assert_eq!(
            state.get(),
            ShellState {
                scrolled: true,
                menu_open: false,
            }
        );
        assert_eq!(viewport.scroll_offset(), 320.0);
    }

    #[test]
    fn navigation_without_a_window_still_closes_the_menu() {
        let state = Rc::new(Cell::new(ShellState {
            scrolled: false,
            menu_open: true,
        }));
        let shell = {
            let state = state.clone();
            Callback::from(move |action: ShellAction| state.set(reduce(state.get(), action)))
        };
        navigation(shell, || None::<FakeViewport>).emit(Anchor::Methodology);
        assert!(!state.get().menu_open);
    }

    #[test]
    fn anchors_keep_ids_and_spanish_hrefs() {
        let ids: Vec<_> = Anchor::NAV.iter().map(|a| a.id()).collect();
        assert_eq!(ids, ["services", "solutions", "methodology", "contact"]);
        assert_eq!(Anchor::Services.href(), "#servicios");
        assert_eq!(Anchor::Contact.href(), "#contacto");
    }
}
