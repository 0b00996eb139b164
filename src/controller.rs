use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::catalog::ServiceCatalog;
use crate::components::toast::ToastHandle;
use crate::config::{self, Locale, SiteConfig};
use crate::i18n::Messages;
use crate::observer::OneShotLatch;

/// Page-wide state, built once per page and handed to every feature
/// through a context.
#[derive(Clone)]
pub struct PageController {
    pub config: SiteConfig,
    pub messages: &'static Messages,
    pub catalog: Rc<ServiceCatalog>,
    pub toast: ToastHandle,
    pub counters_started: Rc<OneShotLatch>,
}

impl PageController {
    pub fn new(locale: Locale, toast: ToastHandle) -> Self {
        Self {
            config: SiteConfig::for_locale(locale),
            messages: locale.messages(),
            catalog: Rc::new(ServiceCatalog::standard()),
            toast,
            counters_started: Rc::new(OneShotLatch::new()),
        }
    }

    /// A controller for components rendered outside `Site`. Its toasts go
    /// nowhere.
    pub fn detached() -> Self {
        Self::new(
            Locale::default(),
            ToastHandle::new(Callback::noop(), config::TOAST_HIDE_DELAY_MS),
        )
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}

impl PartialEq for PageController {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.counters_started, &other.counters_started)
            && self.toast == other.toast
    }
}

#[hook]
pub fn use_controller() -> PageController {
    let detached = use_memo(|_| PageController::detached(), ());
    use_context::<PageController>().unwrap_or_else(|| {
        warn!("PageController context missing, using a detached controller");
        (*detached).clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controllers_for_both_locales_share_one_toast_handle() {
        let toast = ToastHandle::new(Callback::noop(), 2500);
        let ar = PageController::new(Locale::Ar, toast.clone());
        let en = PageController::new(Locale::En, toast.clone());
        assert!(ar.toast == en.toast);
        assert!(ar.toast == toast);
        assert_ne!(ar.locale(), en.locale());
    }

    #[test]
    fn detached_controller_uses_default_locale() {
        let detached = PageController::detached();
        assert_eq!(detached.locale(), Locale::Ar);
        assert!(!detached.counters_started.has_fired());
        assert!(detached != PageController::detached());
    }
}
