use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::booking::{CloseTrigger, ModalState};
use crate::controller::use_controller;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub state: ModalState,
    pub on_close: Callback<CloseTrigger>,
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        warn!("Failed to update body scroll lock: {:?}", err);
    }
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let messages = use_controller().messages;
    let is_open = props.state.is_open();

    use_effect_with_deps(
        move |is_open| {
            debug!("confirm modal {}", if *is_open { "opened" } else { "closed" });
            lock_body_scroll(*is_open);
            || ()
        },
        is_open,
    );

    use_effect_with_deps(
        move |(is_open, on_close)| {
            let mut listener = None;
            if *is_open {
                if let Some(window) = window() {
                    let on_close = on_close.clone();
                    let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(CloseTrigger::Escape);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    let added = window
                        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                    match added {
                        Ok(()) => listener = Some((window, on_key)),
                        Err(err) => warn!("Escape key will not close the modal: {:?}", err),
                    }
                }
            }
            move || {
                if let Some((window, on_key)) = listener {
                    if let Err(err) = window
                        .remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
                    {
                        warn!("Failed to remove modal keydown listener: {:?}", err);
                    }
                }
            }
        },
        (is_open, props.on_close.clone()),
    );

    // Only clicks on the overlay itself count, not on the dialog inside it.
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().map(JsValue::from);
            if target.is_some() && target == e.current_target().map(JsValue::from) {
                on_close.emit(CloseTrigger::Backdrop);
            }
        })
    };

    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(CloseTrigger::Button))
    };

    let summary = match &props.state {
        ModalState::Open(summary) => summary
            .lines
            .iter()
            .map(|line| {
                let value = if line.emphasized {
                    html! { <span class="summary-price">{ line.value.clone() }</span> }
                } else {
                    html! { { line.value.clone() } }
                };
                html! {
                    <div class="summary-item"><b>{ line.label }</b>{ " " }{ value }</div>
                }
            })
            .collect::<Html>(),
        ModalState::Closed => html! {},
    };

    html! {
        <div
            id="confirmModal"
            class={classes!("modal", is_open.then_some("show"))}
            aria-hidden={(!is_open).to_string()}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop}
        >
            <div class="modal-box">
                <h3 class="modal-title">{ messages.modal_title }</h3>
                <div id="modalSummary" class="modal-summary">
                    { summary }
                    if is_open {
                        <p class="modal-hint">{ messages.modal_hint }</p>
                    }
                </div>
                <button id="modalCloseBtn" class="modal-close" type="button" onclick={on_button}>
                    { messages.modal_close }
                </button>
            </div>
        </div>
    }
}
