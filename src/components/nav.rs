use log::debug;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::Locale;
use crate::controller::use_controller;
use crate::scroll_spy::{link_matches, ACTIVE_CLASS};
use crate::Route;

/// Whether `href` names an element on this page. A bare `#` does not.
pub fn is_fragment_target(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Smooth-scrolls to the element named by an in-page `#fragment`.
/// A bare `#` or a missing target does nothing.
pub fn scroll_to_anchor(href: &str) {
    if !is_fragment_target(href) {
        return;
    }
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(href).ok().flatten())
    else {
        debug!("no element for anchor {}", href);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(href);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    #[prop_or_default]
    pub active_section: Option<String>,
    #[prop_or(true)]
    pub show_sections: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let locale = controller.locale();
    let menu_open = use_state_eq(|| false);
    let dropdown_ref = use_node_ref();

    {
        let menu_open = menu_open.clone();
        use_click_away(dropdown_ref.clone(), move |_: Event| menu_open.set(false));
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_links = || -> Html {
        if !props.show_sections {
            return html! {};
        }
        messages
            .nav
            .iter()
            .map(|item| {
                let active = props
                    .active_section
                    .as_deref()
                    .is_some_and(|id| link_matches(item.anchor, id));
                html! {
                    <li>
                        <a
                            href={item.anchor}
                            class={classes!("nav-link", active.then_some(ACTIVE_CLASS))}
                            onclick={anchor_click(item.anchor)}
                        >
                            { item.label }
                        </a>
                    </li>
                }
            })
            .collect::<Html>()
    };

    let other_locale = match locale {
        Locale::Ar => Locale::En,
        Locale::En => Locale::Ar,
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::home(locale)} classes="nav-logo">
                    { messages.site_name }
                </Link<Route>>
                <ul class="nav-links">
                    { section_links() }
                </ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <Link<Route> to={Route::home(other_locale)} classes="nav-lang">
                        { messages.other_language }
                    </Link<Route>>
                    <Link<Route> to={Route::sign_in(locale)} classes="nav-login-button">
                        { messages.sign_in }
                    </Link<Route>>
                    <div class="dropdown" ref={dropdown_ref}>
                        <button
                            class="dropbtn"
                            type="button"
                            aria-label={messages.menu}
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            <i class="fas fa-bars"></i>
                        </button>
                        <ul class={classes!("dropdown-content", (*menu_open).then_some("show"))}>
                            { section_links() }
                        </ul>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_not_a_target() {
        assert!(!is_fragment_target("#"));
        assert!(!is_fragment_target(""));
    }

    #[test]
    fn only_in_page_fragments_scroll() {
        assert!(is_fragment_target("#services"));
        assert!(!is_fragment_target("/signin"));
        assert!(!is_fragment_target("https://example.com/#top"));
    }
}
