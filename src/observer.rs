//! Intersection subscriptions. A persistent subscription reports every
//! crossing until dropped; the one-shot kinds stop observing on their own
//! after the first intersecting entry.

use std::cell::Cell;

use log::debug;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("failed to create IntersectionObserver: {0}")]
    Create(String),
}

/// Fire-once guard.
#[derive(Debug, Default)]
pub struct OneShotLatch {
    fired: Cell<bool>,
}

impl OneShotLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only on the first call.
    pub fn try_fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl ObserveOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }

    fn to_init(self) -> IntersectionObserverInit {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        if let Some(margin) = self.root_margin {
            init.set_root_margin(margin);
        }
        init
    }
}

/// Owns an observer and its callback. Dropping it disconnects.
pub struct Subscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription {
    /// Delivers every batch of entries for as long as the subscription lives.
    pub fn persistent<F>(
        targets: &[Element],
        options: ObserveOptions,
        mut on_batch: F,
    ) -> Result<Self, ObserverError>
    where
        F: FnMut(&[IntersectionObserverEntry]) + 'static,
    {
        Self::attach(targets, options, move |entries, _| on_batch(&entries))
    }

    /// Reports each target's first intersecting entry, then unobserves that target.
    pub fn one_shot_each<F>(
        targets: &[Element],
        options: ObserveOptions,
        mut on_entry: F,
    ) -> Result<Self, ObserverError>
    where
        F: FnMut(&IntersectionObserverEntry) + 'static,
    {
        Self::attach(targets, options, move |entries, observer| {
            for entry in entries.iter().filter(|e| e.is_intersecting()) {
                on_entry(entry);
                observer.unobserve(&entry.target());
            }
        })
    }

    /// Reports the first intersecting entry, then disconnects for good.
    pub fn one_shot<F>(
        target: &Element,
        options: ObserveOptions,
        mut on_entry: F,
    ) -> Result<Self, ObserverError>
    where
        F: FnMut(&IntersectionObserverEntry) + 'static,
    {
        Self::attach(std::slice::from_ref(target), options, move |entries, observer| {
            if let Some(entry) = entries.iter().find(|e| e.is_intersecting()) {
                on_entry(entry);
                observer.disconnect();
            }
        })
    }

    fn attach<F>(targets: &[Element], options: ObserveOptions, mut handle: F) -> Result<Self, ObserverError>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            handle(entries, &observer);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options.to_init(),
        )
        .map_err(|err| ObserverError::Create(format!("{:?}", err)))?;

        for target in targets {
            observer.observe(target);
        }
        debug!("observing {} element(s)", targets.len());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let latch = OneShotLatch::new();
        assert!(!latch.has_fired());
        assert!(latch.try_fire());
        assert!(!latch.try_fire());
        assert!(!latch.try_fire());
        assert!(latch.has_fired());
    }
}
