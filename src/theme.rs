/// Light/dark preference, persisted under the `theme` key.
use std::fmt;

use tracing::{info, warn};

use crate::store::KeyValueStore;
use crate::types::THEME_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the stored theme, defaulting to light when absent or unknown.
pub fn read_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    match store.get(THEME_KEY) {
        Ok(value) => value.as_deref().and_then(Theme::parse).unwrap_or_default(),
        Err(err) => {
            warn!("failed to read {THEME_KEY}: {err:#}");
            Theme::default()
        }
    }
}

/// Holds the current theme and pushes every change to the store and to
/// the injected `apply` hook.
pub struct ThemeStore<S> {
    store: S,
    current: Theme,
    apply: Box<dyn FnMut(Theme)>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn load(store: S, apply: impl FnMut(Theme) + 'static) -> Self {
        let current = read_theme(&store);
        let mut theme_store = Self {
            store,
            current,
            apply: Box::new(apply),
        };
        theme_store.set(current);
        theme_store
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!("failed to persist {THEME_KEY}: {err:#}");
        }
        (self.apply)(theme);
    }

    pub fn toggle(&mut self) {
        let next = self.current.toggled();
        info!(theme = %next, "theme toggled");
        self.set(next);
    }
}
