use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::LOADER_HIDE_DELAY_MS;
use crate::controller::use_controller;

/// Full-page overlay, hidden shortly after the window finishes loading.
#[function_component(Loader)]
pub fn loader() -> Html {
    let messages = use_controller().messages;
    let hidden = use_state_eq(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with_deps(
            move |_| {
                let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let schedule = {
                    let timer = timer.clone();
                    move || {
                        let hidden = hidden.clone();
                        *timer.borrow_mut() = Some(Timeout::new(LOADER_HIDE_DELAY_MS, move || {
                            debug!("hiding page loader");
                            hidden.set(true);
                        }));
                    }
                };

                let window = web_sys::window();
                let loaded = window
                    .as_ref()
                    .and_then(|w| w.document())
                    .map(|d| d.ready_state() == "complete")
                    .unwrap_or(true);

                let mut listener = None;
                if loaded {
                    schedule();
                } else if let Some(window) = window {
                    let on_load = Closure::wrap(Box::new(schedule) as Box<dyn FnMut()>);
                    if let Err(err) = window
                        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
                    {
                        warn!("Failed to wait for window load: {:?}", err);
                    }
                    listener = Some((window, on_load));
                }

                move || {
                    if let Some((window, on_load)) = listener {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "load",
                            on_load.as_ref().unchecked_ref(),
                        ) {
                            warn!("Failed to remove load listener: {:?}", err);
                        }
                    }
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div id="page-loader" class={classes!("page-loader", (*hidden).then_some("hide"))}>
            <div class="spinner"></div>
            <span class="loader-text">{ messages.loading }</span>
        </div>
    }
}
