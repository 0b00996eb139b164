use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::clipboard::{copy_with_fallback, BrowserClipboard};
use crate::controller::use_controller;

/// The link as shown, without the layout whitespace around it.
pub fn referral_text(raw: &str) -> String {
    raw.trim().to_string()
}

#[function_component(Referral)]
pub fn referral() -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let code_ref = use_node_ref();

    let onclick = {
        let code_ref = code_ref.clone();
        let toast = controller.toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(code) = code_ref.cast::<HtmlElement>() else {
                return;
            };
            let link = referral_text(&code.inner_text());
            let toast = toast.clone();
            spawn_local(async move {
                match copy_with_fallback(&BrowserClipboard, &link).await {
                    Ok(path) => {
                        info!("referral link copied via {:?}", path);
                        toast.show(messages.copy_success);
                    }
                    Err(err) => {
                        warn!("referral link not copied: {}", err);
                        toast.show(messages.copy_failure);
                    }
                }
            });
        })
    };

    html! {
        <section id="referral" class="referral-section">
            <div class="referral">
                <h2 class="section-title">{ messages.referral_title }</h2>
                <p>{ messages.referral_body }</p>
                <div class="referral-box">
                    <span class="referral-code" ref={code_ref}>{ messages.referral_link }</span>
                    <button class="send-btn" type="button" {onclick}>
                        <i class="fas fa-copy"></i>{ " " }{ messages.referral_send }
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_whitespace_is_dropped() {
        assert_eq!(
            referral_text("\n   https://tidy.home/ref/ABC123  \t"),
            "https://tidy.home/ref/ABC123"
        );
    }

    #[test]
    fn inner_text_is_kept() {
        assert_eq!(referral_text("a b"), "a b");
        assert_eq!(referral_text("   "), "");
    }
}
