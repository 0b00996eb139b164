use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use crate::config::THEME_STORAGE_KEY;
use crate::i18n::Messages;

pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact value `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Sun while dark (click to go light), moon while light.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }

    pub fn aria_label(self, messages: &Messages) -> &'static str {
        match self {
            Theme::Dark => messages.theme_to_light,
            Theme::Light => messages.theme_to_dark,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage` for the site origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }
}

/// Current theme plus where it is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeSwitch<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        debug!("loaded theme preference: {}", current.as_str());
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists the new value. The in-memory theme
    /// changes even if persisting fails.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, self.current.as_str()) {
            warn!("theme preference not saved: {}", err);
        }
        self.current
    }
}

/// Toggles the dark-mode marker on `<body>`.
pub fn apply_to_body(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
        .is_err()
    {
        warn!("could not apply {} theme", theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{ARABIC, ENGLISH};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some("dark".to_string())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn only_exact_dark_is_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggling_twice_round_trips_and_persists_last_value() {
        let store = MemoryStore::default();
        let mut switch = ThemeSwitch::load(store.clone());
        assert_eq!(switch.current(), Theme::Light);

        assert_eq!(switch.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(switch.toggle(), Theme::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn loads_saved_dark_preference() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(ThemeSwitch::load(store).current(), Theme::Dark);
    }

    #[test]
    fn failed_persist_still_flips_theme() {
        let mut switch = ThemeSwitch::load(ReadOnlyStore);
        assert_eq!(switch.current(), Theme::Dark);
        assert_eq!(switch.toggle(), Theme::Light);
    }

    #[test]
    fn icon_and_label_describe_the_other_mode() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Dark.aria_label(&ENGLISH), "Light mode");
        assert_eq!(Theme::Light.aria_label(&ENGLISH), "Dark mode");
        assert_eq!(Theme::Light.aria_label(&ARABIC), "الوضع الداكن");
    }
}
