//! One-time entrance animation for content blocks as they scroll into view.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::observer::{ObserveOptions, Subscription};

pub const REVEAL_SELECTOR: &str =
    ".service-card, .feature, .referral, .booking-form, .map-header, .section-title, .section-subtitle";
pub const REVEAL_CLASS: &str = "reveal";
pub const REVEALED_CLASS: &str = "show";

/// Stagger bucket 1..=4 by position in the observed set.
pub fn delay_class(index: usize) -> String {
    format!("reveal-delay-{}", (index % 4) + 1)
}

/// Tracks which observed elements have already been revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Returns true when this crossing reveals the element for the first time.
    pub fn mark(&mut self, index: usize, intersecting: bool) -> bool {
        if index >= self.revealed.len() {
            self.revealed.resize(index + 1, false);
        }
        if !intersecting || self.revealed[index] {
            return false;
        }
        self.revealed[index] = true;
        true
    }
}

const INDEX_ATTR: &str = "data-reveal-index";

/// Marks every reveal target on the page and watches it until it has shown once.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let subscription = attach();
            move || drop(subscription)
        },
        (),
    );
}

fn attach() -> Option<Subscription> {
    let document = window()?.document()?;
    let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;

    let targets: Vec<Element> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    for (index, target) in targets.iter().enumerate() {
        if let Err(err) = target.class_list().add_2(REVEAL_CLASS, &delay_class(index)) {
            warn!("Failed to tag reveal target {}: {:?}", index, err);
        }
        if let Err(err) = target.set_attribute(INDEX_ATTR, &index.to_string()) {
            warn!("Failed to index reveal target {}: {:?}", index, err);
        }
    }

    let mut tracker = RevealTracker::new(targets.len());
    Subscription::one_shot_each(
        &targets,
        ObserveOptions::threshold(REVEAL_THRESHOLD),
        move |entry| {
            let target = entry.target();
            let Some(index) = target
                .get_attribute(INDEX_ATTR)
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                return;
            };
            if tracker.mark(index, entry.is_intersecting()) {
                if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                    warn!("Failed to reveal target {}: {:?}", index, err);
                }
            }
        },
    )
    .map_err(|err| warn!("reveal animations disabled: {}", err))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_buckets_cycle_through_four() {
        let buckets: Vec<String> = (0..6).map(delay_class).collect();
        assert_eq!(
            buckets,
            [
                "reveal-delay-1",
                "reveal-delay-2",
                "reveal-delay-3",
                "reveal-delay-4",
                "reveal-delay-1",
                "reveal-delay-2",
            ]
        );
    }

    #[test]
    fn reveal_happens_once_and_sticks() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.mark(0, false));
        assert!(tracker.mark(0, true));
        // leave and re-enter
        assert!(!tracker.mark(0, false));
        assert!(!tracker.mark(0, true));
        // the neighbour is untouched
        assert!(tracker.mark(1, true));
    }

    #[test]
    fn grows_for_late_indices() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.mark(5, true));
        assert!(!tracker.mark(5, true));
        assert!(tracker.mark(4, true));
    }
}
