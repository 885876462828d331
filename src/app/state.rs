use std::{cell::Cell, rc::Rc};

use crossterm::event::KeyCode;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::store::KeyValueStore;
use crate::theme::{Theme, ThemeStore};
use crate::timer::TimerSession;
use crate::types::Phase;

use super::AppEvent;

pub type SharedStore = Rc<dyn KeyValueStore>;

/// The top-level application state.
pub struct App<C = SystemClock> {
    pub running: bool,
    pub session: TimerSession<SharedStore, C>,
    pub themes: ThemeStore<SharedStore>,
    /// The theme the renderer draws with; only the theme store writes it.
    pub applied_theme: Rc<Cell<Theme>>,
    /// Phrase for the current completion screen.
    pub phrase: Option<String>,
}

impl App<SystemClock> {
    pub fn new(store: SharedStore) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(store: SharedStore, clock: C) -> Self {
        let applied_theme = Rc::new(Cell::new(Theme::default()));
        let root = Rc::clone(&applied_theme);
        let themes = ThemeStore::load(Rc::clone(&store), move |theme| root.set(theme));
        let session = TimerSession::load(store, clock);
        info!(
            theme = %themes.get(),
            completed = session.completed_count(),
            "app loaded"
        );
        Self {
            running: true,
            session,
            themes,
            applied_theme,
            phrase: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.applied_theme.get()
    }

    /// Central update function - process an event and mutate state.
    /// Every event first catches the countdown up with the clock, so a
    /// steady stream of key presses can't stall it.
    pub fn update(&mut self, event: AppEvent) {
        self.session.poll();
        if let AppEvent::KeyPress(key) = event {
            self.handle_key(key);
        }
        self.refresh_phrase();
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.running = false,
            KeyCode::F(2) => self.themes.toggle(),
            KeyCode::F(5) => self.session.reset(),
            _ => match self.session.phase() {
                Phase::Idle => self.handle_idle_key(key),
                Phase::Running => {}
                Phase::Completed => {
                    if key == KeyCode::Enter {
                        self.session.try_again();
                    }
                }
            },
        }
    }

    fn handle_idle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.session.start(),
            KeyCode::Up | KeyCode::Left => self.session.cycle_duration(false),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => self.session.cycle_duration(true),
            KeyCode::Backspace | KeyCode::Delete => self.session.pop_name_char(),
            KeyCode::Char(ch) => self.session.push_name_char(ch),
            _ => {}
        }
    }

    /// One phrase per completion screen, so redraws don't reshuffle it.
    fn refresh_phrase(&mut self) {
        if !self.session.is_completed() {
            self.phrase = None;
        } else if self.phrase.is_none() {
            self.phrase = Some(self.session.celebration_phrase());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clock::ManualClock;
    use crate::store::MemoryStore;
    use crate::types::{COMPLETED_COUNT_KEY, CountdownLength, SAVED_NAME_KEY, THEME_KEY};

    fn app() -> (App<ManualClock>, Rc<MemoryStore>, ManualClock) {
        let store = Rc::new(MemoryStore::new());
        let clock = ManualClock::new();
        let shared: SharedStore = store.clone();
        (App::with_clock(shared, clock.clone()), store, clock)
    }

    fn type_name(app: &mut App<ManualClock>, name: &str) {
        for ch in name.chars() {
            app.update(AppEvent::KeyPress(KeyCode::Char(ch)));
        }
    }

    fn run_out(app: &mut App<ManualClock>, clock: &ManualClock) {
        for _ in 0..(app.session.length().secs() * 4) {
            clock.advance(Duration::from_millis(250));
            app.update(AppEvent::Tick);
        }
    }

    #[test]
    fn typing_edits_the_name() {
        let (mut app, _, _) = app();
        type_name(&mut app, "Anna");
        app.update(AppEvent::KeyPress(KeyCode::Backspace));
        assert_eq!(app.session.name(), "Ann");
    }

    #[test]
    fn enter_without_name_does_nothing() {
        let (mut app, _, _) = app();
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.session.phase(), Phase::Idle);
    }

    #[test]
    fn arrows_cycle_the_duration() {
        let (mut app, _, _) = app();
        app.update(AppEvent::KeyPress(KeyCode::Down));
        assert_eq!(app.session.length(), CountdownLength::Twenty);
        assert_eq!(app.session.remaining(), 20);
        app.update(AppEvent::KeyPress(KeyCode::Up));
        app.update(AppEvent::KeyPress(KeyCode::Up));
        assert_eq!(app.session.length(), CountdownLength::Thirty);
    }

    #[test]
    fn keys_are_ignored_while_running() {
        let (mut app, _, _) = app();
        type_name(&mut app, "Ana");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.session.phase(), Phase::Running);
        type_name(&mut app, "xyz");
        app.update(AppEvent::KeyPress(KeyCode::Down));
        assert_eq!(app.session.name(), "Ana");
        assert_eq!(app.session.length(), CountdownLength::Ten);
    }

    #[test]
    fn full_run_shows_a_stable_phrase_then_try_again() {
        let (mut app, store, clock) = app();
        type_name(&mut app, "Ana");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        run_out(&mut app, &clock);
        assert_eq!(app.session.phase(), Phase::Completed);
        let phrase = app.phrase.clone().unwrap();
        assert!(phrase.contains("Ana"));
        for _ in 0..10 {
            app.update(AppEvent::Tick);
            assert_eq!(app.phrase.as_deref(), Some(phrase.as_str()));
        }
        assert_eq!(store.get(SAVED_NAME_KEY).unwrap().as_deref(), Some("Ana"));

        app.update(AppEvent::KeyPress(KeyCode::Enter));
        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.phrase, None);
        assert_eq!(app.session.remaining(), 10);
    }

    #[test]
    fn f5_resets_from_any_phase() {
        let (mut app, store, clock) = app();
        type_name(&mut app, "Ana");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        run_out(&mut app, &clock);
        app.update(AppEvent::KeyPress(KeyCode::F(5)));
        assert_eq!(app.session.phase(), Phase::Idle);
        assert_eq!(app.session.completed_count(), 0);
        assert_eq!(app.session.name(), "");
        assert!(!store.contains(COMPLETED_COUNT_KEY));
        assert!(!store.contains(SAVED_NAME_KEY));
    }

    #[test]
    fn f2_toggles_the_applied_theme() {
        let (mut app, store, _) = app();
        assert_eq!(app.theme(), Theme::Light);
        app.update(AppEvent::KeyPress(KeyCode::F(2)));
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn held_key_does_not_stall_the_countdown() {
        let (mut app, store, clock) = app();
        type_name(&mut app, "Ana");
        app.update(AppEvent::KeyPress(KeyCode::Enter));
        // ~12s of key repeat at 30 Hz, never a quiet poll
        for _ in 0..360 {
            clock.advance(Duration::from_millis(33));
            app.update(AppEvent::KeyPress(KeyCode::Down));
        }
        assert_eq!(app.session.phase(), Phase::Completed);
        assert_eq!(app.session.completed_count(), 1);
        assert_eq!(app.session.length(), CountdownLength::Ten);
        assert_eq!(store.get(COMPLETED_COUNT_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn esc_quits() {
        let (mut app, _, _) = app();
        app.update(AppEvent::KeyPress(KeyCode::Esc));
        assert!(!app.running);
    }
}
