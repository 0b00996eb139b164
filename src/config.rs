use crate::i18n::{Messages, ARABIC, ENGLISH};

pub const THEME_STORAGE_KEY: &str = "theme";

pub const LOADER_HIDE_DELAY_MS: u32 = 600;
pub const TOAST_HIDE_DELAY_MS: u32 = 2500;
pub const HIGHLIGHT_PULSE_MS: u32 = 1500;
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1200;

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const STATS_THRESHOLD: f64 = 0.5;

pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const SCROLL_TOP_SHOW_DELAY_MS: u32 = 10;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ar => &ARABIC,
            Locale::En => &ENGLISH,
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }

    pub fn lang(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn scroll_spy(self) -> ScrollSpyConfig {
        match self {
            Locale::Ar => ScrollSpyConfig {
                enabled: true,
                root_margin: "-40% 0px -50% 0px",
            },
            Locale::En => ScrollSpyConfig {
                enabled: true,
                root_margin: "-10% 0px -70% 0px",
            },
        }
    }
}

/// Whether nav highlighting runs for a locale, and the inset viewport window it watches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpyConfig {
    pub enabled: bool,
    pub root_margin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub locale: Locale,
    pub scroll_spy: ScrollSpyConfig,
    pub counter_duration_ms: f64,
}

impl SiteConfig {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            scroll_spy: locale.scroll_spy(),
            counter_duration_ms: COUNTER_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_run_scroll_spy_with_their_own_window() {
        let ar = SiteConfig::for_locale(Locale::Ar);
        let en = SiteConfig::for_locale(Locale::En);
        assert!(ar.scroll_spy.enabled);
        assert!(en.scroll_spy.enabled);
        assert_eq!(ar.scroll_spy.root_margin, "-40% 0px -50% 0px");
        assert_eq!(en.scroll_spy.root_margin, "-10% 0px -70% 0px");
    }

    #[test]
    fn default_locale_is_arabic_rtl() {
        assert_eq!(Locale::default(), Locale::Ar);
        assert_eq!(Locale::default().dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
    }
}
