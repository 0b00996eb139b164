use yew::prelude::*;

use crate::controller::use_controller;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_book: Callback<&'static str>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let controller = use_controller();
    let messages = controller.messages;

    let cards = controller
        .catalog
        .services()
        .map(|entry| {
            let key = entry.key;
            let label = messages.service_label(key).unwrap_or(key);
            let blurb = messages
                .services
                .iter()
                .find(|s| s.key == key)
                .map(|s| s.blurb)
                .unwrap_or_default();
            let onclick = {
                let on_book = props.on_book.clone();
                Callback::from(move |_: MouseEvent| on_book.emit(key))
            };
            html! {
                <div class="service-card" data-service={key}>
                    <h3>{ label }</h3>
                    <p>{ blurb }</p>
                    <div class="service-price">
                        { format!("{} {}", entry.price, messages.currency) }
                    </div>
                    <button class="book-btn" type="button" {onclick}>{ messages.book_now }</button>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="services" class="services">
            <h2 class="section-title">{ messages.services_title }</h2>
            <p class="section-subtitle">{ messages.services_subtitle }</p>
            <div class="services-grid">
                { cards }
            </div>
        </section>
    }
}
