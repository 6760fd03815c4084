//! Theme service — persist, resolve and apply the color theme.

use siteui_domain::theme::{
    STORAGE_KEY, Theme, ThemePreference, ToggleVisuals, resolve_effective_theme,
};

use crate::ports::{MediaSignal, PreferenceStore, ThemeSurface};

/// Application service for the light/dark theme.
///
/// `S` persists the preference, `M` is the OS "prefers dark" signal and `T`
/// is the root element plus toggle control.
pub struct ThemeService<S, M, T> {
    store: S,
    prefers_dark: M,
    surface: T,
    key: String,
}

impl<S, M, T> ThemeService<S, M, T>
where
    S: PreferenceStore,
    M: MediaSignal,
    T: ThemeSurface,
{
    /// Create a service persisting under the default `theme` key.
    pub fn new(store: S, prefers_dark: M, surface: T) -> Self {
        Self::with_key(store, prefers_dark, surface, STORAGE_KEY)
    }

    pub fn with_key(store: S, prefers_dark: M, surface: T, key: impl Into<String>) -> Self {
        Self {
            store,
            prefers_dark,
            surface,
            key: key.into(),
        }
    }

    /// Apply whatever preference is stored (or auto) on page load.
    pub fn init(&self) -> ThemePreference {
        let preference = self.stored_preference();
        self.apply(preference);
        preference
    }

    /// Read the persisted preference.
    ///
    /// An unreachable store and malformed values both read as
    /// [`ThemePreference::Unset`].
    pub fn stored_preference(&self) -> ThemePreference {
        match self.store.get(&self.key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::debug!(key = %self.key, error = ?err, "theme preference unreadable");
                ThemePreference::Unset
            }
        }
    }

    /// Theme rendered right now, derived from the applied root attribute.
    pub fn current_theme(&self) -> Theme {
        resolve_effective_theme(
            self.surface.applied_preference(),
            self.prefers_dark.matches(),
        )
    }

    /// Set the root attribute and refresh the toggle control.
    pub fn apply(&self, preference: ThemePreference) {
        self.surface.set_preference(preference);
        let current = resolve_effective_theme(preference, self.prefers_dark.matches());
        self.surface.render_toggle(&ToggleVisuals::for_current(current));
        tracing::debug!(%preference, %current, "applied theme");
    }

    /// Switch to the opposite of the current theme and remember the choice.
    pub fn toggle(&self) -> Theme {
        let next = self.current_theme().opposite();
        if let Err(err) = self.store.set(&self.key, next.as_str()) {
            tracing::debug!(key = %self.key, error = ?err, "theme preference not persisted");
        }
        self.apply(next.into());
        tracing::info!(theme = %next, "theme toggled");
        next
    }

    /// Re-apply the stored preference after another tab changed `key`.
    ///
    /// Changes to other keys are ignored. A cleared store reads as auto.
    pub fn on_store_changed(&self, key: Option<&str>) -> Option<ThemePreference> {
        // A `None` key means the whole store was cleared.
        if key.is_some_and(|changed| changed != self.key) {
            return None;
        }
        let preference = self.stored_preference();
        self.apply(preference);
        Some(preference)
    }

    /// React to the OS dark-mode signal changing.
    ///
    /// Only re-applies auto mode when the user has no stored preference.
    /// An unreadable store defers to the preference already on the page, so a
    /// choice made this session survives. Returns whether anything was
    /// re-applied.
    pub fn on_color_scheme_changed(&self) -> bool {
        let preference = match self.store.get(&self.key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                tracing::debug!(key = %self.key, error = ?err, "theme preference unreadable");
                self.surface.applied_preference()
            }
        };
        if preference.is_set() {
            return false;
        }
        self.apply(ThemePreference::Unset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteui_domain::error::{SiteUiError, StorageError};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct InMemoryStore {
        values: RefCell<HashMap<String, String>>,
        broken: bool,
    }

    impl InMemoryStore {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl PreferenceStore for InMemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, SiteUiError> {
            if self.broken {
                return Err(StorageError::Unavailable.into());
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SiteUiError> {
            if self.broken {
                return Err(StorageError::Write {
                    key: key.to_string(),
                }
                .into());
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeSignal(Cell<bool>);

    impl MediaSignal for FakeSignal {
        fn matches(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct FakeRoot {
        attribute: Cell<ThemePreference>,
        toggle: RefCell<Option<ToggleVisuals>>,
    }

    impl ThemeSurface for FakeRoot {
        fn applied_preference(&self) -> ThemePreference {
            self.attribute.get()
        }

        fn set_preference(&self, preference: ThemePreference) {
            self.attribute.set(preference);
        }

        fn render_toggle(&self, visuals: &ToggleVisuals) {
            *self.toggle.borrow_mut() = Some(visuals.clone());
        }
    }

    type Service = ThemeService<Rc<InMemoryStore>, Rc<FakeSignal>, Rc<FakeRoot>>;

    struct Fixture {
        store: Rc<InMemoryStore>,
        os: Rc<FakeSignal>,
        root: Rc<FakeRoot>,
        service: Service,
    }

    fn fixture(store: InMemoryStore, os_dark: bool) -> Fixture {
        let store = Rc::new(store);
        let os = Rc::new(FakeSignal(Cell::new(os_dark)));
        let root = Rc::new(FakeRoot::default());
        let service = ThemeService::new(store.clone(), os.clone(), root.clone());
        Fixture {
            store,
            os,
            root,
            service,
        }
    }

    #[test]
    fn should_apply_stored_preference_on_init() {
        let f = fixture(InMemoryStore::with("theme", "dark"), false);
        assert_eq!(f.service.init(), ThemePreference::Dark);
        assert_eq!(f.root.attribute.get(), ThemePreference::Dark);
        let visuals = f.root.toggle.borrow().clone().unwrap();
        assert_eq!(visuals.aria_label, "Switch to light mode");
        assert!(visuals.aria_pressed);
    }

    #[test]
    fn should_apply_auto_on_init_when_stored_value_is_malformed() {
        let f = fixture(InMemoryStore::with("theme", "sepia"), true);
        assert_eq!(f.service.init(), ThemePreference::Unset);
        assert_eq!(f.root.attribute.get(), ThemePreference::Unset);
        assert_eq!(f.service.current_theme(), Theme::Dark);
    }

    #[test]
    fn should_produce_identical_state_when_applied_twice() {
        let f = fixture(InMemoryStore::default(), true);
        f.service.apply(ThemePreference::Light);
        let once = (f.root.attribute.get(), f.root.toggle.borrow().clone());
        f.service.apply(ThemePreference::Light);
        let twice = (f.root.attribute.get(), f.root.toggle.borrow().clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn should_persist_and_apply_opposite_theme_on_toggle() {
        let f = fixture(InMemoryStore::default(), false);
        f.service.init();
        assert_eq!(f.service.toggle(), Theme::Dark);
        assert_eq!(
            f.store.values.borrow().get("theme").map(String::as_str),
            Some("dark")
        );
        assert_eq!(f.root.attribute.get(), ThemePreference::Dark);
        assert_eq!(f.service.toggle(), Theme::Light);
    }

    #[test]
    fn should_resolve_to_persisted_theme_regardless_of_os_signal() {
        let f = fixture(InMemoryStore::default(), true);
        f.service.init();
        let next = f.service.toggle();
        for os in [true, false] {
            f.os.0.set(os);
            assert_eq!(
                resolve_effective_theme(f.service.stored_preference(), os),
                next
            );
        }
    }

    #[test]
    fn should_keep_toggling_when_storage_is_unavailable() {
        let f = fixture(InMemoryStore::broken(), false);
        assert_eq!(f.service.init(), ThemePreference::Unset);
        assert_eq!(f.service.toggle(), Theme::Dark);
        assert_eq!(f.root.attribute.get(), ThemePreference::Dark);
        assert_eq!(f.service.toggle(), Theme::Light);
    }

    #[test]
    fn should_follow_os_change_when_no_preference_stored() {
        let f = fixture(InMemoryStore::default(), false);
        f.service.init();
        f.os.0.set(true);
        assert!(f.service.on_color_scheme_changed());
        let visuals = f.root.toggle.borrow().clone().unwrap();
        assert_eq!(visuals.text, "Light");
        assert!(visuals.aria_pressed);
    }

    #[test]
    fn should_ignore_os_change_when_preference_stored() {
        let f = fixture(InMemoryStore::with("theme", "light"), false);
        f.service.init();
        f.os.0.set(true);
        assert!(!f.service.on_color_scheme_changed());
        assert_eq!(f.service.current_theme(), Theme::Light);
    }

    #[test]
    fn should_keep_session_choice_on_os_change_when_storage_is_unavailable() {
        let f = fixture(InMemoryStore::broken(), false);
        f.service.init();
        assert_eq!(f.service.toggle(), Theme::Dark);
        f.os.0.set(false);
        assert!(!f.service.on_color_scheme_changed());
        assert_eq!(f.root.attribute.get(), ThemePreference::Dark);
        assert_eq!(f.service.current_theme(), Theme::Dark);
    }

    #[test]
    fn should_follow_os_change_when_storage_is_unavailable_and_nothing_chosen() {
        let f = fixture(InMemoryStore::broken(), false);
        f.service.init();
        f.os.0.set(true);
        assert!(f.service.on_color_scheme_changed());
        assert_eq!(f.root.attribute.get(), ThemePreference::Unset);
        assert_eq!(f.service.current_theme(), Theme::Dark);
    }

    #[test]
    fn should_follow_other_tab_when_theme_key_changes() {
        let f = fixture(InMemoryStore::default(), false);
        f.service.init();
        f.store
            .values
            .borrow_mut()
            .insert("theme".to_string(), "dark".to_string());
        assert_eq!(f.service.on_store_changed(Some("unrelated")), None);
        assert_eq!(f.root.attribute.get(), ThemePreference::Unset);
        assert_eq!(
            f.service.on_store_changed(Some("theme")),
            Some(ThemePreference::Dark)
        );
        assert_eq!(f.root.attribute.get(), ThemePreference::Dark);
    }

    #[test]
    fn should_fall_back_to_auto_when_store_cleared() {
        let f = fixture(InMemoryStore::with("theme", "light"), true);
        f.service.init();
        f.store.values.borrow_mut().clear();
        assert_eq!(f.service.on_store_changed(None), Some(ThemePreference::Unset));
        assert_eq!(f.service.current_theme(), Theme::Dark);
    }

    #[test]
    fn should_use_custom_storage_key() {
        let store = Rc::new(InMemoryStore::with("site-theme", "dark"));
        let service = ThemeService::with_key(
            store,
            false,
            Rc::new(FakeRoot::default()),
            "site-theme",
        );
        assert_eq!(service.init(), ThemePreference::Dark);
    }
}
