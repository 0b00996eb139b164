use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::{BookingDraft, BookingSummary, DraftField};
use crate::controller::use_controller;

pub enum DraftAction {
    Set(DraftField, String),
    Reset,
}

impl Reducible for BookingDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Set(field, value) => {
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            DraftAction::Reset => Rc::new(BookingDraft::default()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub draft: BookingDraft,
    #[prop_or_default]
    pub highlight: bool,
    pub on_edit: Callback<(DraftField, String)>,
    pub on_submit: Callback<BookingSummary>,
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let draft = &props.draft;
    let service_ref = use_node_ref();
    let time_ref = use_node_ref();
    let today = use_memo(|_| chrono::Local::now().format("%Y-%m-%d").to_string(), ());

    // Keeps the selects in step with programmatic changes such as "book now" or a reset.
    {
        let service_ref = service_ref.clone();
        let time_ref = time_ref.clone();
        use_effect_with_deps(
            move |(service, time)| {
                if let Some(select) = service_ref.cast::<HtmlSelectElement>() {
                    select.set_value(service);
                }
                if let Some(select) = time_ref.cast::<HtmlSelectElement>() {
                    select.set_value(time);
                }
                || ()
            },
            (draft.service.clone(), draft.time.clone()),
        );
    }

    let on_input = |field: DraftField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };
    let on_select = |field: DraftField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((field, select.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let draft = draft.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(BookingSummary::compose(&draft, &controller.catalog, controller.messages));
        })
    };

    let service_options = controller
        .catalog
        .services()
        .map(|entry| {
            html! {
                <option value={entry.key} selected={draft.service == entry.key}>
                    { messages.service_label(entry.key).unwrap_or(entry.key) }
                </option>
            }
        })
        .collect::<Html>();

    let time_options = messages
        .time_slots
        .iter()
        .map(|slot| {
            html! {
                <option value={slot.value} selected={draft.time == slot.value}>{ slot.label }</option>
            }
        })
        .collect::<Html>();

    html! {
        <section id="booking" class="booking">
            <h2 class="section-title">{ messages.booking_title }</h2>
            <p class="section-subtitle">{ messages.booking_subtitle }</p>
            <div class="booking-form">
                <form {onsubmit}>
                    <input id="name" name="name" type="text"
                        placeholder={messages.placeholder_name}
                        value={draft.name.clone()}
                        oninput={on_input(DraftField::Name)} />
                    <input id="phone" name="phone" type="tel"
                        placeholder={messages.placeholder_phone}
                        value={draft.phone.clone()}
                        oninput={on_input(DraftField::Phone)} />
                    <select id="service" name="service" ref={service_ref}
                        class={classes!(props.highlight.then_some("highlight"))}
                        onchange={on_select(DraftField::Service)}>
                        <option value="" selected={draft.service.is_empty()}>{ messages.choose_service }</option>
                        { service_options }
                    </select>
                    <div class="price-line">
                        <span>{ messages.price_caption }</span>
                        <strong id="servicePrice">{ controller.catalog.price_display(&draft.service) }</strong>
                    </div>
                    <input id="date" name="date" type="date"
                        min={(*today).clone()}
                        value={draft.date.clone()}
                        oninput={on_input(DraftField::Date)} />
                    <select id="time" name="time" ref={time_ref}
                        onchange={on_select(DraftField::Time)}>
                        <option value="" selected={draft.time.is_empty()}>{ messages.choose_time }</option>
                        { time_options }
                    </select>
                    <input id="address" name="address" type="text"
                        placeholder={messages.placeholder_address}
                        value={draft.address.clone()}
                        oninput={on_input(DraftField::Address)} />
                    <button type="submit" class="submit-btn">{ messages.submit }</button>
                </form>
            </div>
        </section>
    }
}
