use yew::prelude::*;

use crate::controller::use_controller;
use crate::theme::{apply_to_body, LocalStorage, ThemeSwitch};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let messages = use_controller().messages;
    let switch = use_mut_ref(|| ThemeSwitch::load(LocalStorage));
    let theme = use_state(|| switch.borrow().current());

    use_effect_with_deps(
        move |theme| {
            apply_to_body(*theme);
            || ()
        },
        *theme,
    );

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = switch.borrow_mut().toggle();
            theme.set(next);
        })
    };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-pressed={theme.is_dark().to_string()}
            aria-label={theme.aria_label(messages)}
            {onclick}
        >
            <i class={theme.icon_class()}></i>
        </button>
    }
}
