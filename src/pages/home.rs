use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::booking::{BookingDraft, BookingSummary, CloseTrigger, DraftField, ModalState};
use crate::components::booking_form::{BookingForm, DraftAction};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loader::Loader;
use crate::components::nav::{anchor_click, scroll_to_anchor, Nav};
use crate::components::referral::Referral;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::services::Services;
use crate::components::stats::Stats;
use crate::config::HIGHLIGHT_PULSE_MS;
use crate::controller::use_controller;
use crate::reveal::use_reveal_on_scroll;
use crate::scroll_spy::use_scroll_spy;

#[function_component(Home)]
pub fn home() -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let draft = use_reducer(BookingDraft::default);
    let modal = use_state(ModalState::default);
    let highlight = use_state_eq(|| false);
    let highlight_timer = use_mut_ref(|| None::<Timeout>);

    use_reveal_on_scroll();
    let active_section = use_scroll_spy(controller.config.scroll_spy);

    let on_edit = {
        let draft = draft.clone();
        Callback::from(move |(field, value): (DraftField, String)| {
            draft.dispatch(DraftAction::Set(field, value));
        })
    };

    let on_book = {
        let draft = draft.clone();
        let highlight = highlight.clone();
        Callback::from(move |service: &'static str| {
            draft.dispatch(DraftAction::Set(DraftField::Service, service.to_string()));

            highlight.set(true);
            let highlight = highlight.clone();
            // Replacing the handle cancels an earlier pulse still in flight.
            highlight_timer
                .borrow_mut()
                .replace(Timeout::new(HIGHLIGHT_PULSE_MS, move || highlight.set(false)));

            scroll_to_anchor("#booking");
        })
    };

    let on_submit = {
        let modal = modal.clone();
        Callback::from(move |summary: BookingSummary| {
            info!("booking summary ready");
            modal.set(ModalState::open(summary));
        })
    };

    let on_close = {
        let modal = modal.clone();
        let draft = draft.clone();
        Callback::from(move |trigger: CloseTrigger| {
            if let Some(closed) = modal.close(trigger) {
                info!("confirm modal closed via {:?}", trigger);
                modal.set(closed);
                draft.dispatch(DraftAction::Reset);
            }
        })
    };

    let features = messages
        .features
        .iter()
        .map(|feature| html! { <div class="feature"><i class="fas fa-check"></i>{ " " }{ *feature }</div> })
        .collect::<Html>();

    html! {
        <>
            <Loader />
            <Nav active_section={active_section} />
            <main>
                <section id="home" class="hero">
                    <h1>{ messages.hero_title }</h1>
                    <p>{ messages.hero_subtitle }</p>
                    <a href="#booking" class="hero-cta" onclick={anchor_click("#booking")}>
                        { messages.hero_cta }
                    </a>
                </section>
                <Services on_book={on_book} />
                <section id="features" class="features">
                    <h2 class="section-title">{ messages.features_title }</h2>
                    <div class="features-grid">{ features }</div>
                </section>
                <Stats />
                <BookingForm
                    draft={(*draft).clone()}
                    highlight={*highlight}
                    on_edit={on_edit}
                    on_submit={on_submit}
                />
                <Referral />
                <section id="map" class="map">
                    <div class="map-header">
                        <h2>{ messages.map_title }</h2>
                    </div>
                    <div class="map-frame"></div>
                </section>
            </main>
            <footer class="footer">
                <p>{ format!("© {}", messages.site_name) }</p>
            </footer>
            <ConfirmModal state={(*modal).clone()} on_close={on_close} />
            <ScrollTopButton />
        </>
    }
}
