use log::{debug, info, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::{format_grouped, now_ms, run_frames, Frame, Tween};
use crate::config::STATS_THRESHOLD;
use crate::controller::use_controller;
use crate::observer::{ObserveOptions, Subscription};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u64,
    pub running: bool,
    pub duration_ms: f64,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state_eq(|| 0u64);

    {
        let value = value.clone();
        let target = props.target;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |running| {
                if *running {
                    let tween = Tween::new(now_ms(), duration_ms, target);
                    run_frames(move |now| {
                        value.set(tween.value_at(now));
                        if tween.is_finished(now) {
                            debug!("counter reached {}", target);
                            Frame::Stop
                        } else {
                            Frame::Continue
                        }
                    });
                }
                || ()
            },
            props.running,
        );
    }

    html! {
        <span class="stat-number" data-target={props.target.to_string()}>
            <span class="stat-value">{ format_grouped(*value) }</span>
        </span>
    }
}

/// Counters start together the first time half of the section is visible.
#[function_component(Stats)]
pub fn stats() -> Html {
    let controller = use_controller();
    let messages = controller.messages;
    let section_ref = use_node_ref();
    let running = use_state_eq(|| controller.counters_started.has_fired());

    {
        let section_ref = section_ref.clone();
        let running = running.clone();
        let latch = controller.counters_started.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match section_ref.cast::<Element>() {
                    Some(section) if !latch.has_fired() => Subscription::one_shot(
                        &section,
                        ObserveOptions::threshold(STATS_THRESHOLD),
                        move |_| {
                            if latch.try_fire() {
                                info!("starting stat counters");
                                running.set(true);
                            }
                        },
                    )
                    .map_err(|err| warn!("stat counters disabled: {}", err))
                    .ok(),
                    _ => None,
                };
                move || drop(subscription)
            },
            (),
        );
    }

    let counters = messages
        .stats
        .iter()
        .map(|stat| {
            html! {
                <div class="stat">
                    <StatCounter
                        target={stat.target}
                        running={*running}
                        duration_ms={controller.config.counter_duration_ms}
                    />
                    <p class="stat-label">{ stat.label }</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="stats" class="stats" ref={section_ref}>
            { counters }
        </section>
    }
}
