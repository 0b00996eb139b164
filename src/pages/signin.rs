use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loader::Loader;
use crate::components::nav::Nav;
use crate::config::AUTH_REDIRECT_DELAY_MS;
use crate::controller::use_controller;
use crate::Route;

/// Provider buttons that only pretend to sign the visitor in.
#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let locale = controller.locale();
    let navigator = use_navigator();

    let providers = messages
        .auth_providers
        .iter()
        .map(|provider| {
            let provider: &'static str = *provider;
            let onclick = {
                let toast = controller.toast.clone();
                let navigator = navigator.clone();
                Callback::from(move |_: MouseEvent| {
                    info!("simulated sign-in with {}", provider);
                    toast.show((messages.auth_success)(provider));
                    let navigator = navigator.clone();
                    let handle = Timeout::new(AUTH_REDIRECT_DELAY_MS, move || {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::home(locale));
                        }
                    });
                    handle.forget();
                })
            };
            html! {
                <button class="auth-provider" type="button" {onclick}>
                    { format!("{} {}", messages.auth_continue_with, provider) }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <Loader />
            <Nav show_sections={false} />
            <main class="auth-page">
                <section id="signin" class="auth-card">
                    <h1>{ messages.auth_title }</h1>
                    <div class="auth-providers">{ providers }</div>
                </section>
            </main>
        </>
    }
}
