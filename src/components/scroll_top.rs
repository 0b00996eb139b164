use gloo_timers::callback::Timeout;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{SCROLL_TOP_SHOW_DELAY_MS, SCROLL_TOP_THRESHOLD_PX};
use crate::controller::use_controller;

/// The button appears only once the page is strictly past the threshold.
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let messages = use_controller().messages;
    let (_, scroll_y) = use_window_scroll();
    let past_threshold = scroll_top_visible(scroll_y);
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |past_threshold| {
                let mut pending = None;
                if *past_threshold {
                    // Lets `display: flex` land before the transition class.
                    pending = Some(Timeout::new(SCROLL_TOP_SHOW_DELAY_MS, move || shown.set(true)));
                } else {
                    shown.set(false);
                }
                move || drop(pending)
            },
            past_threshold,
        );
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let display = if past_threshold { "display: flex;" } else { "display: none;" };

    html! {
        <button
            id="scrollTopBtn"
            class={classes!("scroll-top", (past_threshold && *shown).then_some("show"))}
            style={display}
            type="button"
            aria-label={messages.scroll_top}
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_up_to_and_at_threshold() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(299.5));
        assert!(!scroll_top_visible(300.0));
    }

    #[test]
    fn shown_past_threshold() {
        assert!(scroll_top_visible(300.5));
        assert!(scroll_top_visible(2000.0));
    }
}
