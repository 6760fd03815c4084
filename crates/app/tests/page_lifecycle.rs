//! Drives every use-case against one in-memory page, the way the browser
//! composition root wires them after `DOMContentLoaded`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use siteui_app::ports::{
    AccordionList, CardGrid, MediaSignal, NavLinks, NavSurface, PreferenceStore, ThemeSurface,
};
use siteui_app::services::accordion::AccordionController;
use siteui_app::services::active_link::ActiveLinkHighlighter;
use siteui_app::services::card_equalizer::CardEqualizer;
use siteui_app::services::nav_controller::NavController;
use siteui_app::services::theme_service::ThemeService;
use siteui_domain::card::CardWidth;
use siteui_domain::error::SiteUiError;
use siteui_domain::nav::{ClickTarget, Key, NavEvent, NavState, NavView};
use siteui_domain::theme::{Theme, ThemePreference, ToggleVisuals};

#[derive(Default)]
struct Storage(RefCell<HashMap<String, String>>);

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteUiError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteUiError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

struct Media(Cell<bool>);

impl MediaSignal for Media {
    fn matches(&self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
struct Page {
    data_theme: Cell<ThemePreference>,
    toggle_label: RefCell<String>,
    nav_open: Cell<bool>,
    body_locked: Cell<bool>,
    hrefs: Vec<String>,
    active: RefCell<Vec<usize>>,
    cards: Vec<f64>,
    card_width: Cell<Option<CardWidth>>,
    details: RefCell<Vec<bool>>,
}

impl ThemeSurface for Page {
    fn applied_preference(&self) -> ThemePreference {
        self.data_theme.get()
    }

    fn set_preference(&self, preference: ThemePreference) {
        self.data_theme.set(preference);
    }

    fn render_toggle(&self, visuals: &ToggleVisuals) {
        *self.toggle_label.borrow_mut() = visuals.aria_label.clone();
    }
}

impl NavSurface for Page {
    fn is_open(&self) -> bool {
        self.nav_open.get()
    }

    fn render(&self, view: &NavView) {
        self.nav_open.set(view.panel_open);
        self.body_locked.set(view.scroll_locked);
    }
}

impl NavLinks for Page {
    fn hrefs(&self) -> Vec<String> {
        self.hrefs.clone()
    }

    fn mark_active(&self, index: usize) {
        self.active.borrow_mut().push(index);
    }
}

impl CardGrid for Page {
    fn card_count(&self) -> usize {
        self.cards.len()
    }

    fn clear_widths(&self) {
        self.card_width.set(None);
    }

    fn natural_widths(&self) -> Vec<f64> {
        self.cards.clone()
    }

    fn force_width(&self, width: CardWidth) {
        self.card_width.set(Some(width));
    }
}

impl AccordionList for Page {
    fn open_flags(&self) -> Vec<bool> {
        self.details.borrow().clone()
    }

    fn close(&self, index: usize) {
        self.details.borrow_mut()[index] = false;
    }
}

fn page() -> Rc<Page> {
    Rc::new(Page {
        hrefs: vec!["./index.html".into(), "about.html".into()],
        cards: vec![120.0, 180.0, 150.0],
        details: RefCell::new(vec![false, false, false]),
        ..Page::default()
    })
}

#[test]
fn should_boot_and_react_like_a_browser_page() {
    let page = page();
    let storage = Rc::new(Storage::default());
    let prefers_dark = Rc::new(Media(Cell::new(true)));
    let wide = Rc::new(Media(Cell::new(false)));

    let theme = ThemeService::new(storage.clone(), prefers_dark.clone(), page.clone());
    let nav = NavController::new(page.clone(), wide.clone());
    let cards = CardEqualizer::new(wide.clone());

    // DOMContentLoaded
    assert_eq!(theme.init(), ThemePreference::Unset);
    assert_eq!(*page.toggle_label.borrow(), "Switch to light mode");
    assert_eq!(nav.load(), None);
    assert_eq!(
        ActiveLinkHighlighter::new("/blog/index.html?x=1#y").highlight(page.as_ref()),
        1
    );
    assert_eq!(cards.equalize(page.as_ref()), None);

    // User opens the menu, then presses Escape.
    nav.handle(NavEvent::Click(ClickTarget::Toggle));
    assert!(page.body_locked.get());
    nav.handle(NavEvent::Key(Key::Escape));
    assert!(!page.body_locked.get());

    // User flips the theme: auto-dark becomes explicit light.
    assert_eq!(theme.toggle(), Theme::Light);
    assert_eq!(
        storage.0.borrow().get("theme").map(String::as_str),
        Some("light")
    );

    // OS switches to light; stored preference wins, nothing re-applied.
    prefers_dark.0.set(false);
    assert!(!theme.on_color_scheme_changed());

    // Menu open while the window widens past the breakpoint.
    nav.handle(NavEvent::Click(ClickTarget::Toggle));
    wide.0.set(true);
    assert_eq!(nav.viewport_changed(), Some(NavState::Closed));
    assert!(!page.body_locked.get());
    assert_eq!(cards.equalize(page.as_ref()).map(CardWidth::px), Some(180));

    // Accordion: open A, then B.
    page.details.borrow_mut()[0] = true;
    AccordionController.on_toggled(page.as_ref(), 0);
    page.details.borrow_mut()[1] = true;
    AccordionController.on_toggled(page.as_ref(), 1);
    assert_eq!(*page.details.borrow(), vec![false, true, false]);
}
