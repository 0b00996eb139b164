use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod booking;
mod catalog;
mod clipboard;
mod config;
mod controller;
mod i18n;
mod observer;
mod reveal;
mod scroll_spy;
mod theme;

mod components {
    pub mod booking_form;
    pub mod confirm_modal;
    pub mod loader;
    pub mod nav;
    pub mod referral;
    pub mod scroll_top;
    pub mod services;
    pub mod stats;
    pub mod theme_toggle;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod signin;
}

use components::toast::{Toast, ToastHandle, ToastState};
use config::Locale;
use controller::PageController;
use pages::{home::Home, signin::SignIn};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/en")]
    HomeEn,
    #[at("/signin")]
    SignIn,
    #[at("/en/signin")]
    SignInEn,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn home(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Route::Home,
            Locale::En => Route::HomeEn,
        }
    }

    pub fn sign_in(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Route::SignIn,
            Locale::En => Route::SignInEn,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteProps {
    pub locale: Locale,
    pub children: Children,
}

/// Builds the page controller for one locale and renders the shared toast.
#[function_component(Site)]
pub fn site(props: &SiteProps) -> Html {
    let toast_state = use_reducer(ToastState::default);
    let dispatcher = toast_state.dispatcher();
    // One handle for the lifetime of the site so a locale switch keeps the
    // pending hide timer and generation counter.
    let toast = use_memo(
        move |_| ToastHandle::from_dispatcher(dispatcher, config::TOAST_HIDE_DELAY_MS),
        (),
    );
    let controller = use_memo(
        move |locale| PageController::new(*locale, (*toast).clone()),
        props.locale,
    );

    use_effect_with_deps(
        move |locale| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                for (name, value) in [("lang", locale.lang()), ("dir", locale.dir())] {
                    if let Err(err) = root.set_attribute(name, value) {
                        warn!("Failed to set document {}: {:?}", name, err);
                    }
                }
            }
            || ()
        },
        props.locale,
    );

    html! {
        <ContextProvider<PageController> context={(*controller).clone()}>
            { for props.children.iter() }
            <Toast message={toast_state.message.clone()} visible={toast_state.visible} />
        </ContextProvider<PageController>>
    }
}

fn switch(route: Route) -> Html {
    let locale = match route {
        Route::HomeEn | Route::SignInEn => Locale::En,
        _ => Locale::Ar,
    };
    match route {
        Route::Home | Route::HomeEn => {
            info!("Rendering home page ({})", locale.lang());
            html! { <Site locale={locale}><Home /></Site> }
        }
        Route::SignIn | Route::SignInEn => {
            info!("Rendering sign-in page ({})", locale.lang());
            html! { <Site locale={locale}><SignIn /></Site> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
