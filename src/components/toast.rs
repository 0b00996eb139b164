use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// The single on-screen notification. A newer message replaces the
/// current one; there is no queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    pub generation: u64,
}

pub enum ToastAction {
    Show { message: String, generation: u64 },
    Hide { generation: u64 },
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { message, generation } => Rc::new(Self {
                message,
                visible: true,
                generation,
            }),
            // A hide scheduled for an older message must not hide a newer one.
            ToastAction::Hide { generation } if generation == self.generation => Rc::new(Self {
                visible: false,
                ..(*self).clone()
            }),
            ToastAction::Hide { .. } => self,
        }
    }
}

/// Shows toasts and owns the one pending hide timer.
#[derive(Clone)]
pub struct ToastHandle {
    dispatch: Callback<ToastAction>,
    generation: Rc<Cell<u64>>,
    hide_timer: Rc<RefCell<Option<Timeout>>>,
    hide_after_ms: u32,
}

impl ToastHandle {
    pub fn new(dispatch: Callback<ToastAction>, hide_after_ms: u32) -> Self {
        Self {
            dispatch,
            generation: Rc::new(Cell::new(0)),
            hide_timer: Rc::new(RefCell::new(None)),
            hide_after_ms,
        }
    }

    /// Forwards reducer actions from a `use_reducer` handle.
    pub fn from_dispatcher(dispatcher: UseReducerDispatcher<ToastState>, hide_after_ms: u32) -> Self {
        Self::new(Callback::from(move |action| dispatcher.dispatch(action)), hide_after_ms)
    }

    fn post(&self, message: String) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.dispatch.emit(ToastAction::Show { message, generation });
        generation
    }

    pub fn show(&self, message: impl Into<String>) {
        let generation = self.post(message.into());

        let dispatch = self.dispatch.clone();
        let timer = Timeout::new(self.hide_after_ms, move || {
            dispatch.emit(ToastAction::Hide { generation });
        });
        // Dropping the previous timeout cancels it.
        self.hide_timer.borrow_mut().replace(timer);
    }
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.generation, &other.generation)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub visible: bool,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div
            id="toast"
            class={classes!("toast", props.visible.then_some("show"))}
            role="status"
            aria-live="polite"
        >
            { props.message.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: Rc<ToastState>, message: &str, generation: u64) -> Rc<ToastState> {
        state.reduce(ToastAction::Show {
            message: message.to_string(),
            generation,
        })
    }

    #[test]
    fn newer_message_replaces_older() {
        let state = Rc::new(ToastState::default());
        let state = show(state, "first", 1);
        let state = show(state, "second", 2);
        assert_eq!(state.message, "second");
        assert!(state.visible);
    }

    #[test]
    fn stale_hide_does_not_hide_newer_toast() {
        let state = show(Rc::new(ToastState::default()), "first", 1);
        let state = show(state, "second", 2);
        let state = state.reduce(ToastAction::Hide { generation: 1 });
        assert!(state.visible);
        let state = state.reduce(ToastAction::Hide { generation: 2 });
        assert!(!state.visible);
        assert_eq!(state.message, "second");
    }

    fn recording_handle() -> (ToastHandle, Rc<RefCell<Rc<ToastState>>>) {
        let state = Rc::new(RefCell::new(Rc::new(ToastState::default())));
        let sink = state.clone();
        let dispatch = Callback::from(move |action| {
            let next = sink.borrow().clone().reduce(action);
            *sink.borrow_mut() = next;
        });
        (ToastHandle::new(dispatch, 2500), state)
    }

    #[test]
    fn clones_share_generation_so_late_hides_stay_stale() {
        let (handle, state) = recording_handle();
        let other = handle.clone();
        let first = handle.post("first".into());
        let second = other.post("second".into());
        assert!(second > first);
        assert!(handle == other);

        handle.dispatch.emit(ToastAction::Hide { generation: first });
        assert!(state.borrow().visible);
        other.dispatch.emit(ToastAction::Hide { generation: second });
        assert!(!state.borrow().visible);
    }

    #[test]
    fn separately_built_handles_are_distinct() {
        let (a, _) = recording_handle();
        let (b, _) = recording_handle();
        assert!(a != b);
    }
}
