//! Nav highlighting for the section currently in view.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::ScrollSpyConfig;
use crate::observer::{ObserveOptions, Subscription};

pub const ACTIVE_CLASS: &str = "active";
const SECTION_SELECTOR: &str = "section[id]";

/// Picks the section to highlight from one batch of observer entries.
///
/// Entries arrive as `(section id, is intersecting)` in callback order. When
/// several intersect in the same batch the last one wins. A batch with no
/// intersecting entry leaves the highlight unchanged (`None`).
pub fn resolve_active<'a, I>(entries: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    entries
        .into_iter()
        .filter(|(_, intersecting)| *intersecting)
        .map(|(id, _)| id)
        .last()
}

pub fn link_matches(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Id of the section currently in view, tracked for as long as the page is mounted.
#[hook]
pub fn use_scroll_spy(config: ScrollSpyConfig) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |config| {
                let subscription = if config.enabled {
                    attach(*config, active)
                } else {
                    None
                };
                move || drop(subscription)
            },
            config,
        );
    }

    (*active).clone()
}

fn attach(config: ScrollSpyConfig, active: UseStateHandle<Option<String>>) -> Option<Subscription> {
    let document = window()?.document()?;
    let nodes = document.query_selector_all(SECTION_SELECTOR).ok()?;
    let sections: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    Subscription::persistent(
        &sections,
        ObserveOptions::threshold(0.0).with_root_margin(config.root_margin),
        move |entries| {
            let batch: Vec<(String, bool)> = entries
                .iter()
                .map(|entry| (entry.target().id(), entry.is_intersecting()))
                .collect();
            if let Some(id) = resolve_active(batch.iter().map(|(id, hit)| (id.as_str(), *hit))) {
                active.set(Some(id.to_string()));
            }
        },
    )
    .map_err(|err| warn!("scroll spy disabled: {}", err))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_intersecting_entry_wins() {
        let batch = [("services", true), ("stats", false), ("booking", true)];
        assert_eq!(resolve_active(batch), Some("booking"));
    }

    #[test]
    fn no_intersecting_entries_keeps_current() {
        let batch = [("services", false), ("booking", false)];
        assert_eq!(resolve_active(batch), None);
        assert_eq!(resolve_active(std::iter::empty()), None);
    }

    #[test]
    fn links_match_by_fragment() {
        assert!(link_matches("#booking", "booking"));
        assert!(!link_matches("booking", "booking"));
        assert!(!link_matches("#book", "booking"));
        assert!(!link_matches("#", "booking"));
    }
}
